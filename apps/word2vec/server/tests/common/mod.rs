#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use domain_word2vec::{ModelReadiness, Word2VecClient};
use grpc_client::server::ServerConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(5);

/// A server on an ephemeral localhost port, stopped on `shutdown` or drop.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<eyre::Result<()>>>,
}

impl TestServer {
    pub async fn start(readiness: Arc<ModelReadiness>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(addr.port());
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            word2vec_server::serve(readiness, &config, listener, async {
                let _ = rx.await;
            })
            .await
        });

        Self {
            addr,
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn client(&self) -> Word2VecClient {
        self.client_with_timeout(CLIENT_TIMEOUT).await
    }

    pub async fn client_with_timeout(&self, timeout: Duration) -> Word2VecClient {
        Word2VecClient::connect(self.url(), timeout).await.unwrap()
    }

    /// Stop accepting connections and wait for in-flight streams to drain.
    pub async fn shutdown(mut self) -> eyre::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        match self.handle.take() {
            Some(handle) => handle.await.unwrap(),
            None => Ok(()),
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Convert fixture vectors to the `f64` vectors the service speaks.
pub fn to_f64(vector: &[f32]) -> Vec<f64> {
    vector.iter().map(|&v| f64::from(v)).collect()
}
