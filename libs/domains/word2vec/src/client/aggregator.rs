//! Bounded collection of a streamed response.

use std::future::Future;
use std::time::Duration;

use tokio_stream::{Stream, StreamExt};
use tonic::{Response, Status};
use tracing::{trace, warn};

/// How a collection ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// The server closed the stream cleanly.
    Completed,
    /// The deadline passed first.
    TimedOut,
    /// Opening the call or reading the stream failed.
    Errored,
}

/// Results gathered in arrival order, plus how the stream ended.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected<T> {
    pub items: Vec<T>,
    pub outcome: CollectOutcome,
}

impl<T> Collected<T> {
    pub fn is_complete(&self) -> bool {
        self.outcome == CollectOutcome::Completed
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Collected<U> {
        Collected {
            items: self.items.into_iter().map(f).collect(),
            outcome: self.outcome,
        }
    }
}

/// Drive one streaming call to completion or until `timeout` elapses.
///
/// `call` opens the stream; the deadline covers opening it as well as
/// reading it. Whatever arrived before completion, a transport error or the
/// deadline is returned; no error reaches the caller.
pub async fn collect<T, S, F>(operation: &str, timeout: Duration, call: F) -> Collected<T>
where
    F: Future<Output = Result<Response<S>, Status>>,
    S: Stream<Item = Result<T, Status>>,
{
    let mut items = Vec::new();

    let drive = async {
        let stream = call.await?.into_inner();
        let mut stream = std::pin::pin!(stream);
        while let Some(item) = stream.next().await {
            items.push(item?);
            trace!(operation, received = items.len(), "Stream item received");
        }
        Ok::<(), Status>(())
    };

    let outcome = match tokio::time::timeout(timeout, drive).await {
        Ok(Ok(())) => CollectOutcome::Completed,
        Ok(Err(status)) => {
            warn!(
                operation,
                code = ?status.code(),
                message = status.message(),
                "Stream failed, returning partial results"
            );
            CollectOutcome::Errored
        }
        Err(_) => {
            warn!(
                operation,
                timeout_ms = timeout.as_millis() as u64,
                "Stream timed out, returning partial results"
            );
            CollectOutcome::TimedOut
        }
    };

    Collected { items, outcome }
}
