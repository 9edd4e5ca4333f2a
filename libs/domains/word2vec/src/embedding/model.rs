use crate::models::LookupStrategy;

/// Read-only access to a loaded embedding.
///
/// Implementations are immutable once built and shared across streams.
#[cfg_attr(test, mockall::automock)]
pub trait EmbeddingModel: Send + Sync {
    /// Vector stored for `word`, if the vocabulary contains it.
    fn vector_for(&self, word: &str) -> Option<Vec<f64>>;

    /// Up to `limit` vocabulary words closest to `vector` by cosine
    /// similarity, closest first.
    ///
    /// Returns an empty list when `vector` is empty, all zero, or does not
    /// match [`EmbeddingModel::dimension`].
    fn nearest(&self, vector: &[f64], limit: usize) -> Vec<String>;

    fn dimension(&self) -> usize;

    fn vocab_size(&self) -> usize;

    fn strategy(&self) -> LookupStrategy;
}
