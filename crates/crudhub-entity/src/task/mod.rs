//! Task domain entity.

pub mod fixtures;
pub mod model;

pub use model::Task;
