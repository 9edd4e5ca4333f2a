use std::fmt;
use std::str::FromStr;

use crate::error::Word2VecError;

/// Nearest-neighbour strategy chosen at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Linear scan over every vocabulary row.
    #[default]
    Flat,
    /// Vantage-point tree built once after the vectors are read.
    Indexed,
}

impl LookupStrategy {
    pub fn from_indexed_flag(indexed: bool) -> Self {
        if indexed {
            LookupStrategy::Indexed
        } else {
            LookupStrategy::Flat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStrategy::Flat => "flat",
            LookupStrategy::Indexed => "indexed",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk encoding of a word2vec model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFormat {
    /// Text if the file is valid UTF-8, binary otherwise.
    #[default]
    Auto,
    Text,
    Binary,
}

impl ModelFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::Auto => "auto",
            ModelFormat::Text => "text",
            ModelFormat::Binary => "binary",
        }
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFormat {
    type Err = Word2VecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ModelFormat::Auto),
            "text" | "txt" => Ok(ModelFormat::Text),
            "binary" | "bin" => Ok(ModelFormat::Binary),
            other => Err(Word2VecError::Config(format!(
                "Unknown model format '{}', expected auto, text or binary",
                other
            ))),
        }
    }
}

/// Query for the words closest to `vector`.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestQuery {
    pub vector: Vec<f64>,
    pub limit: i32,
}

impl NearestQuery {
    pub fn new(vector: Vec<f64>, limit: i32) -> Self {
        Self { vector, limit }
    }
}

/// A single inbound lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupRequest {
    Word(String),
    VectorQuery(NearestQuery),
}

/// Answer to a word lookup. `word` is `None` when the vocabulary has no entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WordVector {
    pub word: Option<String>,
    pub vector: Vec<f64>,
}

impl WordVector {
    pub fn found(word: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            word: Some(word.into()),
            vector,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_missing(&self) -> bool {
        self.word.is_none()
    }
}

/// Answer to a nearest-words query: the query vector echoed back plus the
/// matching words, closest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorWordList {
    pub vector: Vec<f64>,
    pub words: Vec<String>,
}

/// A lookup result, either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    WordVector(WordVector),
    VectorWordList(VectorWordList),
}

/// Outcome of processing one request.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    /// The word has no vector in the loaded vocabulary.
    NotFound(String),
    /// The model had not finished loading when the request was processed.
    NotReady,
}

impl<T> LookupOutcome<T> {
    pub fn is_not_ready(&self) -> bool {
        matches!(self, LookupOutcome::NotReady)
    }

    pub fn found(self) -> Option<T> {
        match self {
            LookupOutcome::Found(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_format_from_str() {
        assert_eq!("auto".parse::<ModelFormat>().unwrap(), ModelFormat::Auto);
        assert_eq!("TEXT".parse::<ModelFormat>().unwrap(), ModelFormat::Text);
        assert_eq!("bin".parse::<ModelFormat>().unwrap(), ModelFormat::Binary);
        assert!("yaml".parse::<ModelFormat>().is_err());
    }

    #[test]
    fn test_strategy_from_flag() {
        assert_eq!(LookupStrategy::from_indexed_flag(true), LookupStrategy::Indexed);
        assert_eq!(LookupStrategy::from_indexed_flag(false), LookupStrategy::Flat);
        assert_eq!(LookupStrategy::Indexed.to_string(), "indexed");
    }

    #[test]
    fn test_missing_word_vector() {
        let missing = WordVector::missing();
        assert!(missing.is_missing());
        assert!(missing.vector.is_empty());
        assert!(!WordVector::found("fire", vec![1.0]).is_missing());
    }

    #[test]
    fn test_outcome_found() {
        assert_eq!(LookupOutcome::Found(3).found(), Some(3));
        assert_eq!(LookupOutcome::<i32>::NotFound("x".into()).found(), None);
        assert!(LookupOutcome::<i32>::NotReady.is_not_ready());
    }
}
