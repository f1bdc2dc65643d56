pub mod handle;
pub mod loader;

pub use handle::DatasetHandle;
pub use loader::{load, load_or_empty, parse, ParticleDataset};
