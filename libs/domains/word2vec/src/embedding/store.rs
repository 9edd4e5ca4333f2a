use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::embedding::model::EmbeddingModel;
use crate::error::{Word2VecError, Word2VecResult};
use crate::models::LookupStrategy;

/// Immutable vocabulary with raw and unit-length row vectors.
#[derive(Debug, Clone)]
pub struct WordVectors {
    dimension: usize,
    words: Vec<String>,
    rows: HashMap<String, usize>,
    raw: Vec<f64>,
    unit: Vec<f64>,
}

impl WordVectors {
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            dimension,
            words: Vec::with_capacity(capacity),
            rows: HashMap::with_capacity(capacity),
            raw: Vec::with_capacity(capacity * dimension),
            unit: Vec::with_capacity(capacity * dimension),
        }
    }

    /// Append a row. A repeated word keeps its first vector and returns `false`.
    pub fn push(&mut self, word: impl Into<String>, vector: &[f64]) -> Word2VecResult<bool> {
        let word = word.into();
        if vector.len() != self.dimension {
            return Err(Word2VecError::Format(format!(
                "vector for '{}' has {} components, expected {}",
                word,
                vector.len(),
                self.dimension
            )));
        }
        if self.rows.contains_key(&word) {
            return Ok(false);
        }

        let row = self.words.len();
        self.raw.extend_from_slice(vector);
        match unit_vector(vector) {
            Some(unit) => self.unit.extend(unit),
            None => self.unit.extend(std::iter::repeat_n(0.0, self.dimension)),
        }
        self.rows.insert(word.clone(), row);
        self.words.push(word);
        Ok(true)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.rows.get(word).map(|&row| self.raw_row(row))
    }

    pub fn word(&self, row: usize) -> &str {
        &self.words[row]
    }

    pub(crate) fn raw_row(&self, row: usize) -> &[f64] {
        &self.raw[row * self.dimension..(row + 1) * self.dimension]
    }

    pub(crate) fn unit_row(&self, row: usize) -> &[f64] {
        &self.unit[row * self.dimension..(row + 1) * self.dimension]
    }

    /// Normalised query vector, or `None` when no word can match it.
    pub(crate) fn prepare_query(&self, vector: &[f64]) -> Option<Vec<f64>> {
        if vector.is_empty() || vector.len() != self.dimension {
            return None;
        }
        unit_vector(vector)
    }

    pub(crate) fn words_for(&self, candidates: Vec<Candidate>) -> Vec<String> {
        candidates
            .into_iter()
            .map(|c| self.words[c.row].clone())
            .collect()
    }
}

fn unit_vector(vector: &[f64]) -> Option<Vec<f64>> {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return None;
    }
    Some(vector.iter().map(|v| v / norm).collect())
}

/// Distance between two unit vectors, monotone in cosine similarity.
///
/// `sqrt(2 - 2cos)` is the euclidean distance between the normalised
/// vectors, so it satisfies the triangle inequality the vantage-point tree
/// prunes with.
pub(crate) fn distance(a: &[f64], b: &[f64]) -> f64 {
    let cos: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    (2.0 - 2.0 * cos).max(0.0).sqrt()
}

/// Scored vocabulary row. Orders by distance, then by row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub distance: f64,
    pub row: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.row.cmp(&other.row))
    }
}

/// Bounded max-heap keeping the `k` best candidates seen so far.
pub(crate) struct TopK {
    k: usize,
    heap: BinaryHeap<Candidate>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k + 1),
        }
    }

    pub fn offer(&mut self, candidate: Candidate) {
        if self.k == 0 {
            return;
        }
        if self.heap.len() < self.k {
            self.heap.push(candidate);
        } else if self.heap.peek().is_some_and(|worst| candidate < *worst) {
            self.heap.pop();
            self.heap.push(candidate);
        }
    }

    /// Search radius: the worst kept distance once full, infinity before.
    pub fn radius(&self) -> f64 {
        if self.heap.len() < self.k {
            f64::INFINITY
        } else {
            self.heap.peek().map_or(f64::INFINITY, |c| c.distance)
        }
    }

    pub fn into_sorted(self) -> Vec<Candidate> {
        self.heap.into_sorted_vec()
    }
}

/// Exhaustive nearest-neighbour search.
#[derive(Debug, Clone)]
pub struct FlatIndex {
    vectors: WordVectors,
}

impl FlatIndex {
    pub fn new(vectors: WordVectors) -> Self {
        Self { vectors }
    }
}

impl EmbeddingModel for FlatIndex {
    fn vector_for(&self, word: &str) -> Option<Vec<f64>> {
        self.vectors.get(word).map(<[f64]>::to_vec)
    }

    fn nearest(&self, vector: &[f64], limit: usize) -> Vec<String> {
        let Some(query) = self.vectors.prepare_query(vector) else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut top = TopK::new(limit);
        for row in 0..self.vectors.len() {
            top.offer(Candidate {
                distance: distance(&query, self.vectors.unit_row(row)),
                row,
            });
        }
        self.vectors.words_for(top.into_sorted())
    }

    fn dimension(&self) -> usize {
        self.vectors.dimension()
    }

    fn vocab_size(&self) -> usize {
        self.vectors.len()
    }

    fn strategy(&self) -> LookupStrategy {
        LookupStrategy::Flat
    }
}
