// @generated
/// Generated client implementations.
pub mod word2_vec_service_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    /** Word2Vec lookup service.

 Lookups are bidirectional streams: the caller sends any number of requests
 and half-closes, the service answers each processed request in order and
 closes. Requests received before the model has finished loading are dropped
 without a reply.
*/
    #[derive(Debug, Clone)]
    pub struct Word2VecServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl Word2VecServiceClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> Word2VecServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> Word2VecServiceClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            Word2VecServiceClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        /** Streams the vector for each requested word.

 A word missing from the vocabulary is answered with an unset `word` and an
 empty `vector`.
*/
        pub async fn get_vector_map(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::Word>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::WordVector>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/word2vec.v1.Word2VecService/GetVectorMap",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("word2vec.v1.Word2VecService", "GetVectorMap"));
            self.inner.streaming(req, path, codec).await
        }
        /// Streams the nearest vocabulary words for each requested vector.
        pub async fn get_nearest_words(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::NearestToVector>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::VectorWordList>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/word2vec.v1.Word2VecService/GetNearestWords",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(
                    GrpcMethod::new("word2vec.v1.Word2VecService", "GetNearestWords"),
                );
            self.inner.streaming(req, path, codec).await
        }
        /// Reports whether the model is loaded and lookups are being answered.
        pub async fn get_status(
            &mut self,
            request: impl tonic::IntoRequest<super::VoidMessage>,
        ) -> std::result::Result<tonic::Response<super::ServiceStatus>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/word2vec.v1.Word2VecService/GetStatus",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("word2vec.v1.Word2VecService", "GetStatus"));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod word2_vec_service_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with Word2VecServiceServer.
    #[async_trait]
    pub trait Word2VecService: std::marker::Send + std::marker::Sync + 'static {
        /// Server streaming response type for the GetVectorMap method.
        type GetVectorMapStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::WordVector, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        /** Streams the vector for each requested word.

 A word missing from the vocabulary is answered with an unset `word` and an
 empty `vector`.
*/
        async fn get_vector_map(
            &self,
            request: tonic::Request<tonic::Streaming<super::Word>>,
        ) -> std::result::Result<
            tonic::Response<Self::GetVectorMapStream>,
            tonic::Status,
        >;
        /// Server streaming response type for the GetNearestWords method.
        type GetNearestWordsStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::VectorWordList, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        /// Streams the nearest vocabulary words for each requested vector.
        async fn get_nearest_words(
            &self,
            request: tonic::Request<tonic::Streaming<super::NearestToVector>>,
        ) -> std::result::Result<
            tonic::Response<Self::GetNearestWordsStream>,
            tonic::Status,
        >;
        /// Reports whether the model is loaded and lookups are being answered.
        async fn get_status(
            &self,
            request: tonic::Request<super::VoidMessage>,
        ) -> std::result::Result<tonic::Response<super::ServiceStatus>, tonic::Status>;
    }
    /** Word2Vec lookup service.

 Lookups are bidirectional streams: the caller sends any number of requests
 and half-closes, the service answers each processed request in order and
 closes. Requests received before the model has finished loading are dropped
 without a reply.
*/
    #[derive(Debug)]
    pub struct Word2VecServiceServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> Word2VecServiceServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for Word2VecServiceServer<T>
    where
        T: Word2VecService,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/word2vec.v1.Word2VecService/GetVectorMap" => {
                    #[allow(non_camel_case_types)]
                    struct GetVectorMapSvc<T: Word2VecService>(pub Arc<T>);
                    impl<
                        T: Word2VecService,
                    > tonic::server::StreamingService<super::Word>
                    for GetVectorMapSvc<T> {
                        type Response = super::WordVector;
                        type ResponseStream = T::GetVectorMapStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::Word>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Word2VecService>::get_vector_map(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetVectorMapSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/word2vec.v1.Word2VecService/GetNearestWords" => {
                    #[allow(non_camel_case_types)]
                    struct GetNearestWordsSvc<T: Word2VecService>(pub Arc<T>);
                    impl<
                        T: Word2VecService,
                    > tonic::server::StreamingService<super::NearestToVector>
                    for GetNearestWordsSvc<T> {
                        type Response = super::VectorWordList;
                        type ResponseStream = T::GetNearestWordsStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<
                                tonic::Streaming<super::NearestToVector>,
                            >,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Word2VecService>::get_nearest_words(&inner, request)
                                    .await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetNearestWordsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/word2vec.v1.Word2VecService/GetStatus" => {
                    #[allow(non_camel_case_types)]
                    struct GetStatusSvc<T: Word2VecService>(pub Arc<T>);
                    impl<
                        T: Word2VecService,
                    > tonic::server::UnaryService<super::VoidMessage>
                    for GetStatusSvc<T> {
                        type Response = super::ServiceStatus;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::VoidMessage>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Word2VecService>::get_status(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetStatusSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for Word2VecServiceServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "word2vec.v1.Word2VecService";
    impl<T> tonic::server::NamedService for Word2VecServiceServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
