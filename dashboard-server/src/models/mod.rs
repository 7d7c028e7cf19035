//! Data models

pub mod incident;
pub mod dashboard;
pub mod summary;

pub use incident::*;
pub use dashboard::*;
pub use summary::*;
