//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait, implemented by [Prepare],
//! the dataset preparation pipeline.
pub mod pipeline;
mod prepare;

pub use pipeline::Pipeline;
pub use prepare::{Prepare, PrepareConfig};
