//! Selection Module
//!
//! `Unselected | Selected(id)`, mutated only through [`Trigger`]s.
//!
//! ## Structure
//! - `types`: Selection, Origin, Trigger
//! - `machine`: the transition function

pub mod types;
pub mod machine;

#[cfg(test)]
mod tests;

pub use types::{Origin, Selection, Trigger};
pub use machine::next;
