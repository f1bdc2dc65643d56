pub mod registry;

pub use registry::ModelCatalog;
