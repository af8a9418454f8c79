//! Overlapping text chunking

use uuid::Uuid;

use crate::types::Chunk;

/// Text chunker with fixed size and overlap
///
/// Chunks are exact contiguous substrings of the input whose spans cover the
/// whole text: every byte of input appears in at least one chunk. Break
/// points prefer whitespace inside the window so words are not split.
pub struct TextChunker {
    /// Target chunk size in characters
    chunk_size: usize,
    /// Overlap between consecutive chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker
    ///
    /// The overlap is clamped below the chunk size so the walk always
    /// advances.
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            overlap: overlap.min(chunk_size / 2),
        }
    }

    /// Split text into overlapping chunks for the given document
    pub fn chunk_text(&self, document_id: Uuid, text: &str) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        if text.is_empty() {
            return chunks;
        }

        let mut start = 0usize;
        let mut ordinal = 0u32;

        loop {
            let hard_end = floor_char_boundary(text, start + self.chunk_size);

            let end = if hard_end >= text.len() {
                text.len()
            } else if hard_end <= start {
                // chunk_size is smaller than the next character; take that
                // character whole so the walk always advances
                next_char_boundary(text, start)
            } else {
                self.break_point(text, start, hard_end)
            };

            chunks.push(Chunk::new(
                document_id,
                text[start..end].to_string(),
                start,
                end,
                ordinal,
            ));
            ordinal += 1;

            if end >= text.len() {
                break;
            }

            // Step the next window back by the overlap; always make progress
            // even when a short chunk leaves no room for it.
            let next = floor_char_boundary(text, end.saturating_sub(self.overlap));
            start = if next > start { next } else { end };
        }

        chunks
    }

    /// Prefer ending the chunk just after the last whitespace in the window,
    /// unless that would leave the chunk under half-full.
    fn break_point(&self, text: &str, start: usize, hard_end: usize) -> usize {
        let window = &text[start..hard_end];
        match window.rfind(char::is_whitespace) {
            Some(pos) if pos > window.len() / 2 => {
                let ws_len = window[pos..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                start + pos + ws_len
            }
            _ => hard_end,
        }
    }
}

/// Snap a byte index down to the nearest UTF-8 character boundary
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// First character boundary strictly after the given index
fn next_char_boundary(text: &str, index: usize) -> usize {
    let mut i = index + 1;
    while i < text.len() && !text.is_char_boundary(i) {
        i += 1;
    }
    i.min(text.len())
}
