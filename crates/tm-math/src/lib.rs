//! Tumor marker triage math utilities.

pub mod math;

pub use math::bayes_factor;
pub use math::normal::*;
pub use math::posterior::*;
pub use math::stable::*;
