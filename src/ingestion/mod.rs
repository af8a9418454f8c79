//! Document ingestion: PDF parsing and chunking

mod chunker;
mod parser;

pub use chunker::TextChunker;
pub use parser::{ParsedDocument, PdfParser};

#[cfg(test)]
pub(crate) use parser::test_pdf;

use crate::config::ChunkingConfig;
use crate::error::Result;
use crate::types::{Chunk, Document};

/// Loads a PDF byte stream into a document and its chunks
pub struct DocumentLoader {
    chunking: ChunkingConfig,
}

impl DocumentLoader {
    /// Create a loader with the given chunking configuration
    pub fn new(chunking: ChunkingConfig) -> Self {
        Self { chunking }
    }

    /// Extract text from the PDF and split it into overlapping chunks
    ///
    /// Fails with [`crate::Error::UnreadableDocument`] when the bytes are
    /// not a parseable PDF or contain no extractable text.
    pub fn load(&self, filename: &str, data: &[u8]) -> Result<(Document, Vec<Chunk>)> {
        let parsed = PdfParser::parse(data)?;

        let mut document = Document::new(
            filename.to_string(),
            parsed.content_hash,
            parsed.total_pages,
        );

        let chunker = TextChunker::new(self.chunking.chunk_size, self.chunking.chunk_overlap);
        let chunks = chunker.chunk_text(document.id, &parsed.content);
        document.total_chunks = chunks.len() as u32;

        tracing::info!(
            filename,
            pages = ?document.total_pages,
            chunks = chunks.len(),
            "document loaded"
        );

        Ok((document, chunks))
    }
}
