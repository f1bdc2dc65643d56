//! Request validation: every raw field is checked and converted here, before
//! any search or prediction work starts.

pub mod fields;
pub mod nearest;
pub mod trajectory;

pub use nearest::{validate_nearest, DEFAULT_NUM_POINTS};
pub use trajectory::{validate_trajectory, ValidationLimits};
