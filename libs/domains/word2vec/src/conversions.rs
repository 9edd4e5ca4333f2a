use rpc::word2vec::{
    NearestToVector as ProtoNearestToVector, VectorWordList as ProtoVectorWordList,
    Word as ProtoWord, WordVector as ProtoWordVector,
};

use crate::models::{LookupOutcome, NearestQuery, VectorWordList, WordVector};

// ===== Word vectors =====

impl From<WordVector> for ProtoWordVector {
    fn from(value: WordVector) -> Self {
        Self {
            word: value.word.map(|word| ProtoWord { word }),
            vector: value.vector,
        }
    }
}

impl From<ProtoWordVector> for WordVector {
    fn from(proto: ProtoWordVector) -> Self {
        Self {
            word: proto.word.map(|w| w.word),
            vector: proto.vector,
        }
    }
}

/// Wire form of a word lookup: a miss is sent as an unset word with an empty
/// vector, a request processed before readiness is not sent at all.
pub fn word_outcome_to_proto(outcome: LookupOutcome<WordVector>) -> Option<ProtoWordVector> {
    match outcome {
        LookupOutcome::Found(found) => Some(found.into()),
        LookupOutcome::NotFound(_) => Some(WordVector::missing().into()),
        LookupOutcome::NotReady => None,
    }
}

// ===== Nearest words =====

impl From<ProtoNearestToVector> for NearestQuery {
    fn from(proto: ProtoNearestToVector) -> Self {
        Self {
            vector: proto.vector,
            limit: proto.limit,
        }
    }
}

impl From<NearestQuery> for ProtoNearestToVector {
    fn from(query: NearestQuery) -> Self {
        Self {
            vector: query.vector,
            limit: query.limit,
        }
    }
}

impl From<VectorWordList> for ProtoVectorWordList {
    fn from(value: VectorWordList) -> Self {
        Self {
            vector: value.vector,
            words: value
                .words
                .into_iter()
                .map(|word| ProtoWord { word })
                .collect(),
        }
    }
}

impl From<ProtoVectorWordList> for VectorWordList {
    fn from(proto: ProtoVectorWordList) -> Self {
        Self {
            vector: proto.vector,
            words: proto.words.into_iter().map(|w| w.word).collect(),
        }
    }
}

pub fn nearest_outcome_to_proto(
    outcome: LookupOutcome<VectorWordList>,
) -> Option<ProtoVectorWordList> {
    match outcome {
        LookupOutcome::Found(list) => Some(list.into()),
        LookupOutcome::NotFound(_) | LookupOutcome::NotReady => None,
    }
}
