//! Core data types for documents, retrieval results, and score reports

pub mod answer;
pub mod document;

pub use answer::{Answer, RetrievalResult, RougeScore, ScoreReport, ScoredChunk};
pub use document::{Chunk, Document};
