//! Client for the word2vec lookup service.
//!
//! Every streaming call sends its full request list, half-closes, and
//! collects the answers under the client's timeout. Timeouts and transport
//! failures are logged and yield whatever arrived, never an error.

pub mod aggregator;

use std::time::Duration;

use grpc_client::{ChannelConfig, GrpcResult, create_channel_lazy_with_config, create_channel_with_config};
use rpc::word2vec::word2_vec_service_client::Word2VecServiceClient;
use rpc::word2vec::{NearestToVector, VoidMessage, Word};
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tracing::{debug, instrument, warn};

pub use aggregator::{CollectOutcome, Collected, collect};

use crate::models::{VectorWordList, WordVector};

#[derive(Debug, Clone)]
pub struct Word2VecClient {
    inner: Word2VecServiceClient<Channel>,
    timeout: Duration,
}

impl Word2VecClient {
    /// Connect eagerly; fails if the server cannot be reached.
    pub async fn connect(addr: impl Into<String>, timeout: Duration) -> GrpcResult<Self> {
        let channel = create_channel_with_config(addr, ChannelConfig::streaming()).await?;
        Ok(Self::from_channel(channel, timeout))
    }

    /// Build a client that connects on first use.
    pub fn connect_lazy(addr: impl Into<String>, timeout: Duration) -> GrpcResult<Self> {
        let channel = create_channel_lazy_with_config(addr, ChannelConfig::streaming())?;
        Ok(Self::from_channel(channel, timeout))
    }

    pub fn from_channel(channel: Channel, timeout: Duration) -> Self {
        let inner = Word2VecServiceClient::new(channel)
            .send_compressed(CompressionEncoding::Zstd)
            .accept_compressed(CompressionEncoding::Zstd);
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the service has finished loading its model. Unreachable
    /// services report `false`.
    pub async fn is_ready(&self) -> bool {
        let mut client = self.inner.clone();
        match tokio::time::timeout(self.timeout, client.get_status(VoidMessage {})).await {
            Ok(Ok(response)) => response.into_inner().ready,
            Ok(Err(status)) => {
                warn!(code = ?status.code(), message = status.message(), "Status check failed");
                false
            }
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Status check timed out");
                false
            }
        }
    }

    /// Poll [`Self::is_ready`] until it succeeds or `max_wait` elapses.
    #[instrument(skip(self))]
    pub async fn wait_until_ready(&self, max_wait: Duration, poll_interval: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + max_wait;
        loop {
            if self.is_ready().await {
                return true;
            }
            if tokio::time::Instant::now() + poll_interval > deadline {
                debug!("Service not ready before deadline");
                return false;
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Vectors for `words`, in the order the server answered.
    pub async fn get_vector_map<I, W>(&self, words: I) -> Vec<WordVector>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.collect_vector_map(words).await.into_items()
    }

    pub async fn collect_vector_map<I, W>(&self, words: I) -> Collected<WordVector>
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let requests: Vec<Word> = words
            .into_iter()
            .map(|word| Word { word: word.into() })
            .collect();
        debug!(requests = requests.len(), "Requesting word vectors");

        let mut client = self.inner.clone();
        collect(
            "get_vector_map",
            self.timeout,
            client.get_vector_map(tokio_stream::iter(requests)),
        )
        .await
        .map(WordVector::from)
    }

    /// Nearest words for each of `vectors`, up to `limit` words each.
    pub async fn get_nearest_words(&self, vectors: Vec<Vec<f64>>, limit: i32) -> Vec<VectorWordList> {
        self.collect_nearest_words(vectors, limit).await.into_items()
    }

    pub async fn collect_nearest_words(
        &self,
        vectors: Vec<Vec<f64>>,
        limit: i32,
    ) -> Collected<VectorWordList> {
        let requests: Vec<NearestToVector> = vectors
            .into_iter()
            .map(|vector| NearestToVector { vector, limit })
            .collect();
        debug!(requests = requests.len(), limit, "Requesting nearest words");

        let mut client = self.inner.clone();
        collect(
            "get_nearest_words",
            self.timeout,
            client.get_nearest_words(tokio_stream::iter(requests)),
        )
        .await
        .map(VectorWordList::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port.
    const DEAD_ADDR: &str = "http://127.0.0.1:9";

    #[tokio::test]
    async fn test_unreachable_server_is_not_ready() {
        let client = Word2VecClient::connect_lazy(DEAD_ADDR, Duration::from_millis(500)).unwrap();
        assert!(!client.is_ready().await);
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_empty_results() {
        let client = Word2VecClient::connect_lazy(DEAD_ADDR, Duration::from_millis(500)).unwrap();

        let collected = client.collect_vector_map(["fire", "water"]).await;
        assert!(collected.items.is_empty());
        assert_ne!(collected.outcome, CollectOutcome::Completed);

        assert!(client.get_nearest_words(vec![vec![1.0]], 3).await.is_empty());
    }

    #[tokio::test]
    async fn test_wait_until_ready_gives_up() {
        let client = Word2VecClient::connect_lazy(DEAD_ADDR, Duration::from_millis(100)).unwrap();
        let ready = client
            .wait_until_ready(Duration::from_millis(300), Duration::from_millis(50))
            .await;
        assert!(!ready);
    }

    #[test]
    fn test_invalid_address() {
        assert!(Word2VecClient::connect_lazy("not a uri", Duration::from_secs(1)).is_err());
    }
}
