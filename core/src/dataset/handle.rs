use crate::dataset::loader::{self, ParticleDataset};
use crate::prelude::{CoreError, CoreResult};
use crate::telemetry::LogManager;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Read-only, process-wide handle to the particle dataset.
///
/// A lazy handle loads on first use. Concurrent first callers share one
/// in-flight load and await its result. Only successful loads are cached: a
/// failed load is logged, that call sees an empty dataset, and the next call
/// tries again.
pub struct DatasetHandle {
    source: Option<PathBuf>,
    cell: OnceCell<Arc<ParticleDataset>>,
    load_attempts: AtomicUsize,
    logger: LogManager,
}

impl DatasetHandle {
    pub fn lazy<P: Into<PathBuf>>(source: P) -> Self {
        Self {
            source: Some(source.into()),
            cell: OnceCell::new(),
            load_attempts: AtomicUsize::new(0),
            logger: LogManager::new("dataset"),
        }
    }

    /// Loads `source` immediately. Any failure is returned to the caller,
    /// which treats it as a fatal startup error.
    pub fn eager<P: Into<PathBuf>>(source: P) -> CoreResult<Self> {
        let source = source.into();
        let dataset = loader::load(&source)?;
        Ok(Self {
            source: Some(source),
            cell: OnceCell::new_with(Some(Arc::new(dataset))),
            load_attempts: AtomicUsize::new(1),
            logger: LogManager::new("dataset"),
        })
    }

    pub fn preloaded(dataset: ParticleDataset) -> Self {
        Self {
            source: None,
            cell: OnceCell::new_with(Some(Arc::new(dataset))),
            load_attempts: AtomicUsize::new(0),
            logger: LogManager::new("dataset"),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of file loads this handle has started.
    pub fn load_attempts(&self) -> usize {
        self.load_attempts.load(Ordering::SeqCst)
    }

    /// The cached dataset, if a load has already succeeded.
    pub fn peek(&self) -> Option<Arc<ParticleDataset>> {
        self.cell.get().cloned()
    }

    pub async fn try_get(&self) -> CoreResult<Arc<ParticleDataset>> {
        self.cell
            .get_or_try_init(|| self.load_once())
            .await
            .cloned()
    }

    /// Returns the dataset, or an empty one when the source is unavailable.
    pub async fn get(&self) -> Arc<ParticleDataset> {
        match self.try_get().await {
            Ok(dataset) => dataset,
            Err(err) => {
                self.logger.warn(&err.to_string());
                Arc::new(ParticleDataset::empty())
            }
        }
    }

    async fn load_once(&self) -> CoreResult<Arc<ParticleDataset>> {
        let source = self
            .source
            .clone()
            .ok_or_else(|| CoreError::DataUnavailable("no dataset source configured".into()))?;
        self.load_attempts.fetch_add(1, Ordering::SeqCst);
        self.logger
            .record(&format!("loading particles from {}", source.display()));

        let dataset = tokio::task::spawn_blocking(move || loader::load(&source))
            .await
            .map_err(|err| CoreError::DataUnavailable(format!("loader task aborted: {}", err)))??;
        Ok(Arc::new(dataset))
    }
}
