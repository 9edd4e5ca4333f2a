//! Word2Vec gRPC service implementation
//!
//! Each streaming call gets its own task. The task reads requests in order,
//! answers each one through the domain LookupService, and closes the
//! response stream once the caller half-closes. Requests processed before
//! the model is ready produce no reply.

use std::future::Future;
use std::sync::Arc;

use domain_word2vec::conversions::{nearest_outcome_to_proto, word_outcome_to_proto};
use domain_word2vec::{LookupService, ModelReadiness, NearestQuery};
use rpc::word2vec::word2_vec_service_server::Word2VecService as Word2VecServiceTrait;
use rpc::word2vec::{NearestToVector, ServiceStatus, VectorWordList, VoidMessage, Word, WordVector};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};
use tracing::{Instrument, debug, debug_span, error, warn};

/// Replies buffered per stream before the task waits on the caller.
const STREAM_BUFFER: usize = 64;

/// gRPC service implementation for word2vec lookups
///
/// Wraps the domain LookupService and handles proto ↔ domain conversions.
#[derive(Debug, Clone)]
pub struct Word2VecServiceImpl {
    service: LookupService,
}

impl Word2VecServiceImpl {
    pub fn new(readiness: Arc<ModelReadiness>) -> Self {
        Self {
            service: LookupService::new(readiness),
        }
    }
}

#[derive(Debug, Default)]
struct StreamStats {
    received: u64,
    emitted: u64,
    dropped: u64,
}

/// Answer `inbound` on a spawned task, one reply per handled request.
///
/// `handle` returns `None` for requests that get no reply. The task stops
/// when the caller half-closes, the inbound stream fails, or the caller
/// stops reading.
fn spawn_stream<In, Out, H, Fut>(
    operation: &'static str,
    mut inbound: Streaming<In>,
    mut handle: H,
) -> ReceiverStream<Result<Out, Status>>
where
    In: Send + 'static,
    Out: Send + 'static,
    H: FnMut(In) -> Fut + Send + 'static,
    Fut: Future<Output = Option<Out>> + Send + 'static,
{
    let (tx, rx) = mpsc::channel(STREAM_BUFFER);

    let task = async move {
        let mut stats = StreamStats::default();
        debug!("Stream opened");

        loop {
            let request = match inbound.message().await {
                Ok(Some(request)) => request,
                Ok(None) => break,
                Err(status) => {
                    warn!(
                        code = ?status.code(),
                        message = status.message(),
                        "Inbound stream failed, closing"
                    );
                    break;
                }
            };
            stats.received += 1;

            let Some(reply) = handle(request).await else {
                stats.dropped += 1;
                continue;
            };
            if tx.send(Ok(reply)).await.is_err() {
                warn!("Caller stopped reading, closing stream");
                break;
            }
            stats.emitted += 1;
        }

        debug!(
            received = stats.received,
            emitted = stats.emitted,
            dropped = stats.dropped,
            "Stream closed"
        );
    };

    tokio::spawn(task.instrument(debug_span!("stream", operation)));
    ReceiverStream::new(rx)
}

#[tonic::async_trait]
impl Word2VecServiceTrait for Word2VecServiceImpl {
    type GetVectorMapStream = ReceiverStream<Result<WordVector, Status>>;
    type GetNearestWordsStream = ReceiverStream<Result<VectorWordList, Status>>;

    async fn get_vector_map(
        &self,
        request: Request<Streaming<Word>>,
    ) -> Result<Response<Self::GetVectorMapStream>, Status> {
        let service = self.service.clone();
        let stream = spawn_stream("get_vector_map", request.into_inner(), move |word: Word| {
            let reply = word_outcome_to_proto(service.lookup_word(&word.word));
            std::future::ready(reply)
        });

        Ok(Response::new(stream))
    }

    async fn get_nearest_words(
        &self,
        request: Request<Streaming<NearestToVector>>,
    ) -> Result<Response<Self::GetNearestWordsStream>, Status> {
        let service = self.service.clone();
        let stream = spawn_stream(
            "get_nearest_words",
            request.into_inner(),
            move |request: NearestToVector| {
                let service = service.clone();
                async move {
                    let query = NearestQuery::from(request);
                    // Scans can be long; keep them off the async workers.
                    match tokio::task::spawn_blocking(move || service.nearest(query)).await {
                        Ok(outcome) => nearest_outcome_to_proto(outcome),
                        Err(e) => {
                            error!(error = %e, "Nearest-word search failed");
                            None
                        }
                    }
                }
            },
        );

        Ok(Response::new(stream))
    }

    async fn get_status(
        &self,
        _request: Request<VoidMessage>,
    ) -> Result<Response<ServiceStatus>, Status> {
        Ok(Response::new(ServiceStatus {
            ready: self.service.is_ready(),
        }))
    }
}
