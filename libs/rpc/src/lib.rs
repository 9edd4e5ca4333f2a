// @generated
// This file wires up buf-generated protobuf code
// Note: The prost files already include!() the tonic files automatically

pub mod word2vec {
    include!("generated/word2vec/v1/word2vec.v1.rs");
    // word2vec.v1.tonic.rs is auto-included by word2vec.v1.rs
}
