//! One-way model readiness.
//!
//! A [`ModelReadiness`] starts in `Loading`, runs the model load once on the
//! blocking pool, and publishes the model exactly once. A failed load leaves
//! it in `Loading` for good; there is no retry and no reload.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use tokio::sync::watch;
use tracing::{error, info, instrument, warn};

use crate::embedding::{EmbeddingModel, load_model};
use crate::error::{Word2VecError, Word2VecResult};
use crate::models::{LookupStrategy, ModelFormat};

/// Where and how to load the model from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSource {
    pub path: PathBuf,
    pub format: ModelFormat,
    pub strategy: LookupStrategy,
}

impl ModelSource {
    pub fn new(path: impl Into<PathBuf>, strategy: LookupStrategy) -> Self {
        Self {
            path: path.into(),
            format: ModelFormat::Auto,
            strategy,
        }
    }

    pub fn with_format(mut self, format: ModelFormat) -> Self {
        self.format = format;
        self
    }
}

/// Externally visible readiness. A failed load still reads as `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    Loading,
    Ready,
}

/// Internal load progress, observable through [`ModelReadiness::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed(String),
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadPhase::Loading)
    }
}

/// How a background load ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    Failed(String),
}

/// Resolves when the background load settles.
#[derive(Debug)]
pub struct LoadHandle {
    phase: watch::Receiver<LoadPhase>,
}

impl LoadHandle {
    pub async fn wait(mut self) -> LoadOutcome {
        match self.phase.wait_for(LoadPhase::is_settled).await {
            Ok(phase) => match &*phase {
                LoadPhase::Failed(message) => LoadOutcome::Failed(message.clone()),
                _ => LoadOutcome::Ready,
            },
            Err(_) => LoadOutcome::Failed("readiness holder dropped".to_string()),
        }
    }
}

/// Shared holder of the loaded model.
pub struct ModelReadiness {
    model: OnceLock<Arc<dyn EmbeddingModel>>,
    phase: watch::Sender<LoadPhase>,
    started: AtomicBool,
}

impl std::fmt::Debug for ModelReadiness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelReadiness")
            .field("state", &self.state())
            .field("phase", &*self.phase.borrow())
            .finish()
    }
}

impl Default for ModelReadiness {
    fn default() -> Self {
        Self {
            model: OnceLock::new(),
            phase: watch::Sender::new(LoadPhase::Loading),
            started: AtomicBool::new(false),
        }
    }
}

impl ModelReadiness {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Holder that is ready from the start.
    pub fn ready_with(model: Arc<dyn EmbeddingModel>) -> Arc<Self> {
        let readiness = Self::default();
        readiness.started.store(true, Ordering::Release);
        readiness.publish(model);
        Arc::new(readiness)
    }

    /// Load `source` in the background. Returns immediately.
    pub fn start(self: &Arc<Self>, source: ModelSource) -> LoadHandle {
        info!(
            path = %source.path.display(),
            strategy = %source.strategy,
            format = %source.format,
            "Model load started"
        );
        self.start_with(move || load_model(&source.path, source.format, source.strategy))
    }

    /// Run `load` on the blocking pool and publish its model.
    ///
    /// Only the first call loads; later calls return a handle to the same load.
    pub fn start_with<F>(self: &Arc<Self>, load: F) -> LoadHandle
    where
        F: FnOnce() -> Word2VecResult<Arc<dyn EmbeddingModel>> + Send + 'static,
    {
        let handle = LoadHandle {
            phase: self.phase.subscribe(),
        };
        if self.started.swap(true, Ordering::AcqRel) {
            warn!("Model load already started, ignoring second request");
            return handle;
        }

        let readiness = Arc::clone(self);
        tokio::spawn(async move { readiness.supervise(load).await });
        handle
    }

    #[instrument(skip_all)]
    async fn supervise<F>(&self, load: F)
    where
        F: FnOnce() -> Word2VecResult<Arc<dyn EmbeddingModel>> + Send + 'static,
    {
        let result = tokio::task::spawn_blocking(load)
            .await
            .map_err(Word2VecError::from)
            .and_then(|loaded| loaded);

        match result {
            Ok(model) => {
                info!(
                    vocab_size = model.vocab_size(),
                    dimension = model.dimension(),
                    strategy = %model.strategy(),
                    "Model ready"
                );
                self.publish(model);
            }
            Err(e) => {
                error!(error = %e, "Model load failed, lookups will not be answered");
                self.phase.send_replace(LoadPhase::Failed(e.to_string()));
            }
        }
    }

    fn publish(&self, model: Arc<dyn EmbeddingModel>) {
        if self.model.set(model).is_ok() {
            self.phase.send_replace(LoadPhase::Ready);
        }
    }

    /// Wait-free readiness check.
    pub fn is_ready(&self) -> bool {
        self.model.get().is_some()
    }

    pub fn state(&self) -> ReadinessState {
        if self.is_ready() {
            ReadinessState::Ready
        } else {
            ReadinessState::Loading
        }
    }

    /// The loaded model, once ready.
    pub fn model(&self) -> Option<&dyn EmbeddingModel> {
        self.model.get().map(Arc::as_ref)
    }

    /// Resolves once the model is ready. Never resolves after a failed load.
    pub async fn wait_ready(&self) {
        let mut phase = self.phase.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = phase.wait_for(LoadPhase::is_ready).await;
    }

    pub fn subscribe(&self) -> watch::Receiver<LoadPhase> {
        self.phase.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::embedding::MockEmbeddingModel;

    fn mock_model() -> Arc<dyn EmbeddingModel> {
        let mut model = MockEmbeddingModel::new();
        model.expect_vocab_size().return_const(3usize);
        model.expect_dimension().return_const(2usize);
        model
            .expect_strategy()
            .return_const(LookupStrategy::Flat);
        Arc::new(model)
    }

    #[tokio::test]
    async fn test_starts_loading() {
        let readiness = ModelReadiness::new();
        assert!(!readiness.is_ready());
        assert_eq!(readiness.state(), ReadinessState::Loading);
        assert!(readiness.model().is_none());
    }

    #[tokio::test]
    async fn test_ready_with_is_immediately_ready() {
        let readiness = ModelReadiness::ready_with(mock_model());
        assert!(readiness.is_ready());
        assert_eq!(*readiness.subscribe().borrow(), LoadPhase::Ready);
        readiness.wait_ready().await;
    }

    #[tokio::test]
    async fn test_successful_load_publishes_model() {
        let readiness = ModelReadiness::new();
        let handle = readiness.start_with(|| Ok(mock_model()));

        assert_eq!(handle.wait().await, LoadOutcome::Ready);
        assert!(readiness.is_ready());
        assert_eq!(readiness.model().map(|m| m.vocab_size()), Some(3));
    }

    #[tokio::test]
    async fn test_failed_load_stays_loading() {
        let readiness = ModelReadiness::new();
        let handle =
            readiness.start_with(|| Err(Word2VecError::Format("bad header".to_string())));

        match handle.wait().await {
            LoadOutcome::Failed(message) => assert!(message.contains("bad header")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(!readiness.is_ready());
        assert_eq!(readiness.state(), ReadinessState::Loading);

        let waited = tokio::time::timeout(Duration::from_millis(50), readiness.wait_ready()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn test_panicking_loader_is_reported_as_failure() {
        let readiness = ModelReadiness::new();
        let handle = readiness.start_with(|| panic!("loader exploded"));

        assert!(matches!(handle.wait().await, LoadOutcome::Failed(_)));
        assert!(!readiness.is_ready());
    }

    #[tokio::test]
    async fn test_second_start_shares_first_load() {
        let readiness = ModelReadiness::new();
        let (release, gate) = std::sync::mpsc::channel::<()>();
        let first = readiness.start_with(move || {
            let _ = gate.recv();
            Ok(mock_model())
        });
        let second = readiness.start_with(|| Err(Word2VecError::Internal("never runs".into())));

        assert!(!readiness.is_ready());
        release.send(()).unwrap();

        assert_eq!(first.wait().await, LoadOutcome::Ready);
        assert_eq!(second.wait().await, LoadOutcome::Ready);
        assert!(readiness.is_ready());
    }

    #[tokio::test]
    async fn test_start_with_missing_file_fails() {
        let readiness = ModelReadiness::new();
        let handle = readiness.start(ModelSource::new(
            "/nonexistent/w2v.bin",
            LookupStrategy::Indexed,
        ));

        assert!(matches!(handle.wait().await, LoadOutcome::Failed(_)));
        assert!(!readiness.is_ready());
    }

    #[tokio::test]
    async fn test_subscribers_see_transition() {
        let readiness = ModelReadiness::new();
        let mut phase = readiness.subscribe();
        assert_eq!(*phase.borrow(), LoadPhase::Loading);

        readiness.start_with(|| Ok(mock_model()));
        phase.wait_for(LoadPhase::is_ready).await.unwrap();
        assert!(readiness.is_ready());
    }
}
