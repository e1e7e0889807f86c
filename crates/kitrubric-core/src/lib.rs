//! Kitrubric Core Library
//!
//! Normalizes the weighted scoring rubric of an LLM-drafted interview kit:
//! whatever weights the model (or a user edit) supplies, the result is
//! non-negative, rounded to two decimal places and sums to 1.0.

pub mod config;
pub mod criterion;
pub mod error;
pub mod format;
pub mod kit;
pub mod logging;
pub mod normalize;
pub mod score;

pub use criterion::{Criterion, RawCriterion, RawWeight};
pub use normalize::{normalize, normalize_weights, normalize_with};
