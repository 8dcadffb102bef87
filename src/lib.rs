pub mod error;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod resources;
pub mod segmentation;
pub mod transformers;
pub mod types;
