//! Application layer: visualization requests
//!
//! This layer orchestrates domain logic for one request at a time.

pub mod error;
pub mod visualize;

pub use error::{ApplicationError, ApplicationResult};
pub use visualize::{ViewKind, Visualization, Visualizer};
