//! Integration test utilities for the book catalog API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a live PostgreSQL and Redis behind it.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
