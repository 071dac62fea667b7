//! Domain layer for the DVD shelf.
//!
//! Zero internal dependencies: the persistence, lookup, and HTTP crates all
//! build on the types and pure functions defined here.

pub mod catalog;
pub mod dvd;
pub mod error;
pub mod stats;
pub mod types;
pub mod validation;
