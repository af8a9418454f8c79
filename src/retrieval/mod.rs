//! Embedding index and top-k retrieval

mod index;
mod retriever;

pub use index::{cosine_similarity, EmbeddingIndex, IndexEntry};
pub use retriever::Retriever;
