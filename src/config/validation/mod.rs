//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

mod market_validators;
mod trait_def;

pub use trait_def::Validate;
