//! Movie Catalog Backend Library
//!
//! The binary in `main.rs` is a thin shell; everything it wires up is
//! exported here so integration tests can build the same router.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
