//! pdf-rag: retrieval-augmented question answering over a single PDF
//!
//! This crate implements the core of a "upload a PDF, ask a question"
//! pipeline as a standalone library: PDF text extraction, overlapping
//! chunking, an in-memory embedding index, top-k retrieval, LLM answer
//! generation, and ROUGE quality scoring of the generated answer against
//! the retrieved context.
//!
//! The embedding and generation models are opaque network services behind
//! the [`providers::EmbeddingProvider`] and [`providers::LlmProvider`]
//! traits; [`providers::OllamaClient`] is the bundled implementation. No UI,
//! upload handling, or persistence lives here.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod providers;
pub mod retrieval;
pub mod scoring;
pub mod session;
pub mod types;

pub use config::RagConfig;
pub use error::{Error, Result};
pub use session::{Session, SessionState};
pub use types::{
    answer::{Answer, RetrievalResult, RougeScore, ScoreReport, ScoredChunk},
    document::{Chunk, Document},
};
