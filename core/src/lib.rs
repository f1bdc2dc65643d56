//! Core particle search and trajectory-prediction services for the maritime
//! drift platform.
//!
//! The modules cover the static particle dataset, the planar nearest-point
//! search over it, request validation, and the adapter that normalizes the
//! output of an external trajectory model.

pub mod dataset;
pub mod math;
pub mod prediction;
pub mod prelude;
pub mod records;
pub mod search;
pub mod telemetry;
pub mod validation;

pub use prelude::{CoreError, CoreResult};
