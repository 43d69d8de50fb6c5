//! Movie Catalog Shared Library
//!
//! This crate contains the wire types and input helpers shared between
//! the backend and its integration tests.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;
