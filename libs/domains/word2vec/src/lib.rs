//! Word2Vec Domain Library
//!
//! Loads a pre-trained word2vec model and answers two kinds of lookups: the
//! vector stored for a word, and the vocabulary words nearest to a vector.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  LookupService  │  ← Per-request semantics, LookupOutcome
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐     ┌─────────────────┐
//! │ ModelReadiness  │────▶│ EmbeddingModel  │
//! │ (Loading→Ready) │     │    (trait)      │
//! └─────────────────┘     └────────┬────────┘
//!                                  │
//!                         ┌────────▼────────┐
//!                         │   FlatIndex     │
//!                         │   VpTreeIndex   │
//!                         └─────────────────┘
//!
//! ┌─────────────────┐
//! │ Word2VecClient  │  ← Streams requests, collects answers under a timeout
//! └─────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_word2vec::{LookupService, LookupStrategy, ModelReadiness, ModelSource};
//!
//! # async fn example() {
//! let readiness = ModelReadiness::new();
//! let handle = readiness.start(ModelSource::new("GoogleNews-vectors.bin", LookupStrategy::Indexed));
//!
//! let service = LookupService::new(readiness.clone());
//! // Lookups made now are answered with LookupOutcome::NotReady.
//!
//! handle.wait().await;
//! let fire = service.lookup_word("fire");
//! # }
//! ```

pub mod client;
pub mod conversions;
pub mod embedding;
pub mod error;
pub mod models;
pub mod readiness;
pub mod service;

// Re-export commonly used types
pub use client::{CollectOutcome, Collected, Word2VecClient};
pub use embedding::{
    EmbeddingModel, FlatIndex, VpTreeIndex, WordVectors, build_model, load_model, read_vectors,
};
pub use error::{Word2VecError, Word2VecResult};
pub use models::{
    LookupOutcome, LookupRequest, LookupResult, LookupStrategy, ModelFormat, NearestQuery,
    VectorWordList, WordVector,
};
pub use readiness::{LoadHandle, LoadOutcome, LoadPhase, ModelReadiness, ModelSource, ReadinessState};
pub use service::LookupService;
