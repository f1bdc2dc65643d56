use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const METADATA_FILE: &str = "metadata.json";
const DEFAULT_VERSION: &str = "1.0";
const DEFAULT_TYPE: &str = "unknown";
const NO_DESCRIPTION: &str = "No description available";

/// Listing entry for one model directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ModelSummary {
    fn basic(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            version: DEFAULT_VERSION.to_string(),
            description: NO_DESCRIPTION.to_string(),
            kind: DEFAULT_TYPE.to_string(),
        }
    }

    fn from_metadata(id: &str, metadata: &Value) -> Self {
        let text = |key: &str, fallback: &str| {
            metadata
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            id: id.to_string(),
            name: text("name", id),
            version: text("version", DEFAULT_VERSION),
            description: text("description", ""),
            kind: text("type", DEFAULT_TYPE),
        }
    }
}

/// Read-only view over a directory of model folders, each optionally holding
/// a `metadata.json`.
pub struct ModelCatalog {
    root: PathBuf,
}

impl ModelCatalog {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every model directory, sorted by id. A missing root yields no models;
    /// entries with unreadable metadata are logged and left out.
    pub fn list(&self) -> Vec<ModelSummary> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                debug!("models directory {} unavailable: {}", self.root.display(), err);
                return Vec::new();
            }
        };

        let mut models: Vec<ModelSummary> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                let id = entry.file_name().to_string_lossy().into_owned();
                let metadata_path = entry.path().join(METADATA_FILE);
                if !metadata_path.exists() {
                    return Some(ModelSummary::basic(&id));
                }
                match read_metadata(&metadata_path) {
                    Ok(metadata) => Some(ModelSummary::from_metadata(&id, &metadata)),
                    Err(err) => {
                        warn!("skipping model {}: {}", id, err);
                        None
                    }
                }
            })
            .collect();

        models.sort_by(|lhs, rhs| lhs.id.cmp(&rhs.id));
        models
    }

    /// Raw metadata for `id`, basic info when the folder has none, or `None`
    /// when no such model folder exists.
    pub fn details(&self, id: &str) -> anyhow::Result<Option<Value>> {
        if !is_plain_id(id) {
            return Ok(None);
        }
        let model_path = self.root.join(id);
        if !model_path.is_dir() {
            return Ok(None);
        }
        let metadata_path = model_path.join(METADATA_FILE);
        if metadata_path.exists() {
            return read_metadata(&metadata_path).map(Some);
        }
        Ok(Some(serde_json::to_value(ModelSummary::basic(id))?))
    }
}

fn is_plain_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

fn read_metadata(path: &Path) -> anyhow::Result<Value> {
    let contents = fs::read_to_string(path)?;
    let metadata: Value = serde_json::from_str(&contents)?;
    anyhow::ensure!(metadata.is_object(), "metadata is not a JSON object");
    Ok(metadata)
}
