//! Word2Vec gRPC Service
//!
//! Serves a pre-trained word2vec model over bidirectional gRPC streams.
//!
//! ## Architecture
//!
//! ```text
//! Client (Word2VecClient)
//!   ↓ (gRPC bidi streams, Zstd compression)
//! Word2VecServiceImpl (service.rs)
//!   ↓ (one task per stream, proto ↔ domain conversions)
//! LookupService (domain layer)
//!   ↓
//! ModelReadiness ── background load ──▶ FlatIndex | VpTreeIndex
//! ```
//!
//! The listener is up before the model has loaded. Until then `GetStatus`
//! reports `ready = false`, the health service reports `NOT_SERVING`, and
//! lookup requests are dropped without a reply.
//!
//! ## Modules
//!
//! - `config`: command line and environment settings
//! - `server`: server initialization and lifecycle
//! - `service`: gRPC service implementation (Word2VecServiceImpl)

pub mod config;
pub mod server;
pub mod service;

// Re-export for convenience
pub use config::{Cli, ServerSettings};
pub use server::{run, serve};
pub use service::Word2VecServiceImpl;
