//! Embedding storage and nearest-neighbour strategies.

pub mod index;
pub mod loader;
pub mod model;
pub mod store;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tracing::info;

pub use index::VpTreeIndex;
pub use loader::{parse_vectors, read_vectors};
pub use model::EmbeddingModel;
#[cfg(test)]
pub use model::MockEmbeddingModel;
pub use store::{FlatIndex, WordVectors};

use crate::error::Word2VecResult;
use crate::models::{LookupStrategy, ModelFormat};

/// Wrap loaded vectors in the requested strategy. `Indexed` builds the tree
/// here, so this is the one-time warm-up for that strategy.
pub fn build_model(vectors: WordVectors, strategy: LookupStrategy) -> Arc<dyn EmbeddingModel> {
    match strategy {
        LookupStrategy::Flat => Arc::new(FlatIndex::new(vectors)),
        LookupStrategy::Indexed => {
            let started = Instant::now();
            let index = VpTreeIndex::build(vectors);
            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Nearest-neighbour index built"
            );
            Arc::new(index)
        }
    }
}

/// Read a model file and build the requested strategy. Blocking.
pub fn load_model(
    path: &Path,
    format: ModelFormat,
    strategy: LookupStrategy,
) -> Word2VecResult<Arc<dyn EmbeddingModel>> {
    let started = Instant::now();
    let vectors = read_vectors(path, format)?;
    info!(
        vocab_size = vectors.len(),
        dimension = vectors.dimension(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Model loaded"
    );
    Ok(build_model(vectors, strategy))
}
