//! Shared test utilities for word2vec testing
//!
//! This crate provides reusable test infrastructure for the domain and server crates:
//! - `TestModel`: a word2vec model file in a temporary directory, removed on drop
//! - `fixtures`: the small known vocabulary written by `TestModel`
//! - `TestDataBuilder`: deterministic generated vocabularies (seeded)
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestModel, fixtures};
//!
//! let model = TestModel::text(&fixtures::sample_words());
//! let path = model.path();
//!
//! let builder = TestDataBuilder::from_test_name("flat_matches_indexed");
//! let large = TestModel::binary(&builder.vocabulary(200, 16));
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A vocabulary entry: word and vector.
pub type Entry = (String, Vec<f32>);

/// Known vectors used across tests.
///
/// Every component is a multiple of 1/8, so text and binary encodings read
/// back to identical `f64` values.
pub mod fixtures {
    use super::Entry;

    pub const DIMENSION: usize = 4;

    pub fn sample_words() -> Vec<Entry> {
        [
            ("fire", [1.0, 0.5, -0.25, 0.0]),
            ("flame", [0.875, 0.625, -0.125, 0.0]),
            ("rocks", [-0.5, 1.0, 0.25, 0.125]),
            ("stone", [-0.375, 0.875, 0.375, 0.125]),
            ("water", [0.0, -0.5, 1.0, 0.25]),
            ("river", [0.125, -0.375, 0.875, 0.5]),
            ("earth", [-0.25, 0.25, 0.25, 1.0]),
        ]
        .into_iter()
        .map(|(word, vector)| (word.to_string(), vector.to_vec()))
        .collect()
    }

    /// Vector stored for `word` in [`sample_words`].
    pub fn vector_of(word: &str) -> Option<Vec<f32>> {
        sample_words()
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, v)| v)
    }
}

/// A model file on disk, deleted with the value.
pub struct TestModel {
    dir: TempDir,
    path: PathBuf,
}

impl TestModel {
    /// Write `entries` in the word2vec text format (with header).
    pub fn text(entries: &[Entry]) -> Self {
        Self::write("model.txt", encode_text(entries))
    }

    /// Write `entries` in the word2vec binary format.
    pub fn binary(entries: &[Entry]) -> Self {
        Self::write("model.bin", encode_binary(entries))
    }

    /// A binary model whose header promises more records than the file holds.
    pub fn corrupt() -> Self {
        let mut bytes = encode_binary(&fixtures::sample_words());
        bytes.truncate(bytes.len() / 2);
        Self::write("corrupt.bin", bytes)
    }

    /// Write arbitrary bytes as a model file.
    pub fn raw(name: &str, bytes: impl AsRef<[u8]>) -> Self {
        Self::write(name, bytes.as_ref().to_vec())
    }

    fn write(name: &str, bytes: Vec<u8>) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, bytes).expect("failed to write model file");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

pub fn encode_text(entries: &[Entry]) -> Vec<u8> {
    let dimension = entries.first().map_or(0, |(_, v)| v.len());
    let mut out = format!("{} {}\n", entries.len(), dimension);
    for (word, vector) in entries {
        out.push_str(word);
        for value in vector {
            out.push(' ');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }
    out.into_bytes()
}

pub fn encode_binary(entries: &[Entry]) -> Vec<u8> {
    let dimension = entries.first().map_or(0, |(_, v)| v.len());
    let mut out = format!("{} {}\n", entries.len(), dimension).into_bytes();
    for (word, vector) in entries {
        out.extend_from_slice(word.as_bytes());
        out.push(b' ');
        for value in vector {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out.push(b'\n');
    }
    out
}

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_nearest_words");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate `count` words of `dimension` components in [-1, 1].
    ///
    /// Components are multiples of 1/64 so they survive the `f32` binary
    /// encoding unchanged.
    pub fn vocabulary(&self, count: usize, dimension: usize) -> Vec<Entry> {
        // xorshift64 needs a non-zero state
        let mut state = self.seed | 1;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 129) as f32 / 64.0 - 1.0
        };

        (0..count)
            .map(|i| {
                let vector = (0..dimension).map(|_| next()).collect();
                (format!("word{}", i), vector)
            })
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a served `f64` vector equals the stored `f32` vector
    pub fn assert_vector_eq(actual: &[f64], expected: &[f32], context: &str) {
        let expected: Vec<f64> = expected.iter().map(|&v| f64::from(v)).collect();
        assert_eq!(
            actual, expected,
            "{}: expected vector {:?}, got {:?}",
            context, expected, actual
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_deterministic() {
        let a = TestDataBuilder::new(42).vocabulary(10, 3);
        let b = TestDataBuilder::new(42).vocabulary(10, 3);
        assert_eq!(a, b);
        assert!(a.iter().all(|(_, v)| v.iter().all(|x| (-1.0..=1.0).contains(x))));
    }

    #[test]
    fn test_different_names_give_different_data() {
        let a = TestDataBuilder::from_test_name("test1").vocabulary(5, 4);
        let b = TestDataBuilder::from_test_name("test2").vocabulary(5, 4);
        assert_ne!(a, b);
    }

    #[test]
    fn test_text_encoding() {
        let entries = vec![("fire".to_string(), vec![1.0, -0.5])];
        assert_eq!(encode_text(&entries), b"1 2\nfire 1 -0.5\n".to_vec());
    }

    #[test]
    fn test_binary_encoding_layout() {
        let entries = vec![("ab".to_string(), vec![1.0])];
        let bytes = encode_binary(&entries);
        assert!(bytes.starts_with(b"1 1\nab "));
        assert_eq!(bytes.len(), 4 + 3 + 4 + 1);
    }

    #[test]
    fn test_model_files_are_written() {
        let model = TestModel::text(&fixtures::sample_words());
        assert!(model.path().exists());
        assert!(model.path().starts_with(model.dir()));
        assert!(fixtures::vector_of("water").is_some());
        assert!(fixtures::vector_of("lava").is_none());
    }
}
