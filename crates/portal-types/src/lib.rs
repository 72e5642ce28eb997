//! Shared types for the identity platform admin portal.
//!
//! Holds the error type, the app configuration model, and the records the
//! portal subsystems exchange: attribute access control and collaborators.

pub mod access_control;
pub mod app_config;
pub mod clock;
pub mod collaborator;
pub mod error;
pub mod prelude;

// vim: ts=4
