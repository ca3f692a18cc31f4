//! # adtarget-text-embedding
//!
//! Embeds page text, records one event per page, and keeps only the most
//! recent events.

pub mod embedder;
pub mod hashing;
pub mod model;

pub use embedder::WordVectorEmbedder;
pub use hashing::hash_text;
pub use model::TextEmbeddingModel;
