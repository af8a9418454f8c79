//! PDF text extraction

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Extracted document text with metadata
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Extracted and normalized text content
    pub content: String,
    /// Content hash for deduplication (sha256 hex)
    pub content_hash: String,
    /// Total page count, if the PDF structure was readable
    pub total_pages: Option<u32>,
}

/// PDF parser over raw byte streams
pub struct PdfParser;

impl PdfParser {
    /// Extract text from a PDF byte stream
    ///
    /// Fails with [`Error::UnreadableDocument`] when the bytes are not a
    /// parseable PDF or yield no extractable text.
    pub fn parse(data: &[u8]) -> Result<ParsedDocument> {
        let raw = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| Error::unreadable(format!("not a parseable PDF: {e}")))?;

        let content = normalize_text(&raw);
        if content.is_empty() {
            return Err(Error::unreadable("no extractable text in PDF"));
        }

        // Page count is best-effort; extraction already succeeded above.
        let total_pages = match lopdf::Document::load_mem(data) {
            Ok(doc) => Some(doc.get_pages().len() as u32),
            Err(e) => {
                tracing::warn!("could not count pages: {e}");
                None
            }
        };

        Ok(ParsedDocument {
            content_hash: hash_content(&content),
            content,
            total_pages,
        })
    }
}

/// Replace typographic characters and ligatures that PDF fonts commonly
/// emit, drop null bytes, and collapse blank lines.
fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '\0' => {}
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' => out.push('-'),
            '\u{2014}' | '\u{2015}' => out.push_str("--"),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2022}' => out.push('*'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
            '\u{FB00}' => out.push_str("ff"),
            '\u{FB01}' => out.push_str("fi"),
            '\u{FB02}' => out.push_str("fl"),
            '\u{FB03}' => out.push_str("ffi"),
            '\u{FB04}' => out.push_str("ffl"),
            _ => out.push(ch),
        }
    }

    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
