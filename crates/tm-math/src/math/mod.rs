//! Core math modules.

pub mod bayes_factor;
pub mod normal;
pub mod posterior;
pub mod stable;
