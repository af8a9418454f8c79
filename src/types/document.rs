//! Document and chunk types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A document that has been loaded into a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID
    pub id: Uuid,
    /// Original filename as supplied by the caller
    pub filename: String,
    /// Content hash of the extracted text (sha256 hex)
    pub content_hash: String,
    /// Total number of pages, if the PDF reported them
    pub total_pages: Option<u32>,
    /// Number of chunks created from this document
    pub total_chunks: u32,
    /// Load timestamp
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Document {
    /// Create a new document record
    pub fn new(filename: String, content_hash: String, total_pages: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            content_hash,
            total_pages,
            total_chunks: 0,
            loaded_at: chrono::Utc::now(),
        }
    }
}

/// A contiguous span of extracted document text
///
/// `text` is always the exact `[char_start, char_end)` byte slice of the
/// extracted text, so chunk spans can reconstruct the document without loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique chunk ID
    pub id: Uuid,
    /// Parent document ID
    pub document_id: Uuid,
    /// Text content
    pub text: String,
    /// Byte offset of the chunk start in the extracted text
    pub char_start: usize,
    /// Byte offset one past the chunk end
    pub char_end: usize,
    /// Position of this chunk in document order (0-based)
    pub ordinal: u32,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(
        document_id: Uuid,
        text: String,
        char_start: usize,
        char_end: usize,
        ordinal: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id,
            text,
            char_start,
            char_end,
            ordinal,
        }
    }
}
