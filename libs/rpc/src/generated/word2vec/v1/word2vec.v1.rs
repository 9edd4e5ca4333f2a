// @generated
// This file is @generated by prost-build.
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct VoidMessage {
}
#[derive(Clone, Copy, PartialEq, Eq, Hash, ::prost::Message)]
pub struct ServiceStatus {
    #[prost(bool, tag="1")]
    pub ready: bool,
}
#[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
pub struct Word {
    #[prost(string, tag="1")]
    pub word: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WordVector {
    #[prost(message, optional, tag="1")]
    pub word: ::core::option::Option<Word>,
    #[prost(double, repeated, tag="2")]
    pub vector: ::prost::alloc::vec::Vec<f64>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NearestToVector {
    #[prost(double, repeated, tag="1")]
    pub vector: ::prost::alloc::vec::Vec<f64>,
    #[prost(int32, tag="2")]
    pub limit: i32,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VectorWordList {
    #[prost(double, repeated, tag="1")]
    pub vector: ::prost::alloc::vec::Vec<f64>,
    #[prost(message, repeated, tag="2")]
    pub words: ::prost::alloc::vec::Vec<Word>,
}
include!("word2vec.v1.tonic.rs");
// @@protoc_insertion_point(module)
