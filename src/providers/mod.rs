//! Provider boundary: embedding and generation as opaque network services

pub mod embedding;
pub mod llm;
pub mod ollama;

#[cfg(test)]
pub(crate) mod testing;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use ollama::OllamaClient;
