use std::time::Instant;

use tracing::debug;

use crate::embedding::model::EmbeddingModel;
use crate::embedding::store::{Candidate, TopK, WordVectors, distance};
use crate::models::LookupStrategy;

/// Slack applied to pruning bounds so floating-point error in the triangle
/// inequality never drops a true neighbour.
const PRUNE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
struct Node {
    row: usize,
    /// Points under `inside` are within `threshold` of `row`, points under
    /// `outside` are at least `threshold` away.
    threshold: f64,
    inside: Option<usize>,
    outside: Option<usize>,
}

/// Exact vantage-point tree over the unit vectors.
///
/// Answers are identical to [`FlatIndex`](super::FlatIndex): same distance,
/// same tie-break, pruning only discards subtrees that cannot hold a
/// candidate at least as good as the current worst.
#[derive(Debug, Clone)]
pub struct VpTreeIndex {
    vectors: WordVectors,
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl VpTreeIndex {
    pub fn build(vectors: WordVectors) -> Self {
        let started = Instant::now();
        let mut nodes = Vec::with_capacity(vectors.len());
        let mut items: Vec<(f64, usize)> = (0..vectors.len()).map(|row| (0.0, row)).collect();
        let root = build_node(&vectors, &mut nodes, &mut items);

        debug!(
            nodes = nodes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Vantage-point tree built"
        );

        Self {
            vectors,
            nodes,
            root,
        }
    }

    fn search(&self, node_id: usize, query: &[f64], top: &mut TopK) {
        let node = &self.nodes[node_id];
        let d = distance(query, self.vectors.unit_row(node.row));
        top.offer(Candidate {
            distance: d,
            row: node.row,
        });

        let order = if d <= node.threshold {
            [(node.inside, true), (node.outside, false)]
        } else {
            [(node.outside, false), (node.inside, true)]
        };

        for (child, inside) in order {
            let Some(child) = child else { continue };
            let radius = top.radius();
            let reachable = if inside {
                d - radius <= node.threshold + PRUNE_EPSILON
            } else {
                d + radius >= node.threshold - PRUNE_EPSILON
            };
            if reachable {
                self.search(child, query, top);
            }
        }
    }
}

fn build_node(vectors: &WordVectors, nodes: &mut Vec<Node>, items: &mut [(f64, usize)]) -> Option<usize> {
    let ((_, vantage), rest) = items.split_first_mut()?;
    let vantage = *vantage;
    let node_id = nodes.len();
    nodes.push(Node {
        row: vantage,
        threshold: 0.0,
        inside: None,
        outside: None,
    });
    if rest.is_empty() {
        return Some(node_id);
    }

    let origin = vectors.unit_row(vantage);
    for item in rest.iter_mut() {
        item.0 = distance(origin, vectors.unit_row(item.1));
    }

    let mid = rest.len() / 2;
    rest.select_nth_unstable_by(mid, |a, b| a.0.total_cmp(&b.0));
    let threshold = rest[mid].0;

    let (inner, outer) = rest.split_at_mut(mid + 1);
    let inside = build_node(vectors, nodes, inner);
    let outside = build_node(vectors, nodes, outer);

    let node = &mut nodes[node_id];
    node.threshold = threshold;
    node.inside = inside;
    node.outside = outside;
    Some(node_id)
}

impl EmbeddingModel for VpTreeIndex {
    fn vector_for(&self, word: &str) -> Option<Vec<f64>> {
        self.vectors.get(word).map(<[f64]>::to_vec)
    }

    fn nearest(&self, vector: &[f64], limit: usize) -> Vec<String> {
        let (Some(query), Some(root)) = (self.vectors.prepare_query(vector), self.root) else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut top = TopK::new(limit);
        self.search(root, &query, &mut top);
        self.vectors.words_for(top.into_sorted())
    }

    fn dimension(&self) -> usize {
        self.vectors.dimension()
    }

    fn vocab_size(&self) -> usize {
        self.vectors.len()
    }

    fn strategy(&self) -> LookupStrategy {
        LookupStrategy::Indexed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::FlatIndex;

    /// Deterministic pseudo-random vectors (xorshift).
    fn generated(count: usize, dimension: usize) -> WordVectors {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 2001) as f64 / 1000.0 - 1.0
        };

        let mut vectors = WordVectors::with_capacity(dimension, count);
        for i in 0..count {
            let v: Vec<f64> = (0..dimension).map(|_| next()).collect();
            vectors.push(format!("w{}", i), &v).unwrap();
        }
        vectors
    }

    #[test]
    fn test_empty_tree() {
        let index = VpTreeIndex::build(WordVectors::with_capacity(3, 0));
        assert!(index.nearest(&[1.0, 0.0, 0.0], 5).is_empty());
        assert_eq!(index.vocab_size(), 0);
    }

    #[test]
    fn test_single_word_tree() {
        let mut vectors = WordVectors::with_capacity(2, 1);
        vectors.push("only", &[0.3, 0.4]).unwrap();
        let index = VpTreeIndex::build(vectors);
        assert_eq!(index.nearest(&[-1.0, 0.0], 3), vec!["only"]);
    }

    #[test]
    fn test_matches_flat_scan() {
        let vectors = generated(500, 8);
        let flat = FlatIndex::new(vectors.clone());
        let tree = VpTreeIndex::build(vectors.clone());

        for row in (0..vectors.len()).step_by(37) {
            let query = vectors.raw_row(row).to_vec();
            for limit in [1, 5, 20] {
                assert_eq!(tree.nearest(&query, limit), flat.nearest(&query, limit));
            }
        }

        let off_vocab = vec![0.5, -0.25, 0.125, 1.0, -1.0, 0.0, 0.75, 0.3];
        assert_eq!(tree.nearest(&off_vocab, 10), flat.nearest(&off_vocab, 10));
    }

    #[test]
    fn test_matches_flat_with_duplicate_directions() {
        let mut vectors = WordVectors::with_capacity(2, 6);
        vectors.push("a", &[1.0, 0.0]).unwrap();
        vectors.push("b", &[2.0, 0.0]).unwrap();
        vectors.push("c", &[0.0, 1.0]).unwrap();
        vectors.push("d", &[3.0, 0.0]).unwrap();
        vectors.push("e", &[0.0, 0.0]).unwrap();
        vectors.push("f", &[0.0, 4.0]).unwrap();
        let flat = FlatIndex::new(vectors.clone());
        let tree = VpTreeIndex::build(vectors);

        for limit in 1..=6 {
            assert_eq!(tree.nearest(&[1.0, 0.0], limit), flat.nearest(&[1.0, 0.0], limit));
            assert_eq!(tree.nearest(&[0.0, 1.0], limit), flat.nearest(&[0.0, 1.0], limit));
        }
        assert_eq!(tree.nearest(&[5.0, 0.0], 3), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_reports_indexed_strategy() {
        let tree = VpTreeIndex::build(generated(3, 2));
        assert_eq!(tree.strategy(), LookupStrategy::Indexed);
        assert_eq!(tree.dimension(), 2);
    }
}
