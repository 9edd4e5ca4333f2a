use std::sync::Arc;

use crate::models::{
    LookupOutcome, LookupRequest, LookupResult, NearestQuery, VectorWordList, WordVector,
};
use crate::readiness::ModelReadiness;

/// Per-request lookup semantics on top of a [`ModelReadiness`].
///
/// Stateless between requests; cloning shares the same readiness holder.
#[derive(Debug, Clone)]
pub struct LookupService {
    readiness: Arc<ModelReadiness>,
}

impl LookupService {
    pub fn new(readiness: Arc<ModelReadiness>) -> Self {
        Self { readiness }
    }

    pub fn readiness(&self) -> &Arc<ModelReadiness> {
        &self.readiness
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    pub fn lookup_word(&self, word: &str) -> LookupOutcome<WordVector> {
        let Some(model) = self.readiness.model() else {
            return LookupOutcome::NotReady;
        };
        match model.vector_for(word) {
            Some(vector) => LookupOutcome::Found(WordVector::found(word, vector)),
            None => LookupOutcome::NotFound(word.to_string()),
        }
    }

    /// Nearest words to `query.vector`. A non-positive limit yields an empty
    /// word list; the query vector is always echoed back.
    pub fn nearest(&self, query: NearestQuery) -> LookupOutcome<VectorWordList> {
        let Some(model) = self.readiness.model() else {
            return LookupOutcome::NotReady;
        };
        let words = match usize::try_from(query.limit) {
            Ok(limit) if limit > 0 => model.nearest(&query.vector, limit),
            _ => Vec::new(),
        };
        LookupOutcome::Found(VectorWordList {
            vector: query.vector,
            words,
        })
    }

    pub fn handle(&self, request: LookupRequest) -> LookupOutcome<LookupResult> {
        match request {
            LookupRequest::Word(word) => match self.lookup_word(&word) {
                LookupOutcome::Found(found) => LookupOutcome::Found(LookupResult::WordVector(found)),
                LookupOutcome::NotFound(word) => LookupOutcome::NotFound(word),
                LookupOutcome::NotReady => LookupOutcome::NotReady,
            },
            LookupRequest::VectorQuery(query) => match self.nearest(query) {
                LookupOutcome::Found(list) => {
                    LookupOutcome::Found(LookupResult::VectorWordList(list))
                }
                LookupOutcome::NotFound(word) => LookupOutcome::NotFound(word),
                LookupOutcome::NotReady => LookupOutcome::NotReady,
            },
        }
    }
}
