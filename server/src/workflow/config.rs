use crate::generator::drift::DriftConfig;
use anyhow::Context;
use driftcore::validation::ValidationLimits;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Service configuration, read from YAML. Every field has a default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind: SocketAddr,
    pub dataset_path: PathBuf,
    pub models_dir: PathBuf,
    /// Load the dataset at startup and refuse to start when it is unreadable.
    pub eager_load: bool,
    /// Placeholder confidence echoed in prediction replies.
    pub confidence: f64,
    pub max_steps: usize,
    pub drift: DriftConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5001)),
            dataset_path: PathBuf::from("trajectory_prediction/particle_NS.dat"),
            models_dir: PathBuf::from("static/models"),
            eager_load: false,
            confidence: 0.85,
            max_steps: ValidationLimits::default().max_steps,
            drift: DriftConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading service config {}", path_ref.display()))?;
        let config: ServiceConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing service config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Command-line values take precedence over the file.
    pub fn with_overrides(
        mut self,
        dataset_path: Option<PathBuf>,
        models_dir: Option<PathBuf>,
        bind: Option<SocketAddr>,
        eager_load: bool,
    ) -> Self {
        if let Some(path) = dataset_path {
            self.dataset_path = path;
        }
        if let Some(dir) = models_dir {
            self.models_dir = dir;
        }
        if let Some(addr) = bind {
            self.bind = addr;
        }
        self.eager_load |= eager_load;
        self
    }

    pub fn validation_limits(&self) -> ValidationLimits {
        ValidationLimits {
            max_steps: self.max_steps,
        }
    }
}
