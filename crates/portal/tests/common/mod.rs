//! Common test utilities and helpers
//!
//! This module provides shared fixtures for the integration tests.

pub mod fixtures;

pub use fixtures::*;
