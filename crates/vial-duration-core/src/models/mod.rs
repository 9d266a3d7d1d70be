//! Domain models for the vial duration estimator.

mod estimate;
pub(crate) mod float_repr;
mod settings;

pub use estimate::*;
pub use settings::*;
