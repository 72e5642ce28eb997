//! Core utilities of the admin portal: JSON pointers, validation error
//! routing, app config files, and logging.

pub mod config;
pub mod jsonpointer;
pub mod logging;
pub mod prelude;
pub mod validation;

pub use jsonpointer::{JsonPointer, ParentMatcher, PointerPattern};

// vim: ts=4
