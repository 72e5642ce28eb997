//! Admin portal logic of the identity platform.
//!
//! # Features
//!
//! - App config files (YAML or JSON) loaded and saved without losing
//!   sections the portal does not edit
//! - JSON pointer codec and matchers for addressing config fields
//! - Routing of validation errors to form fields
//! - Standard attribute access control with the tier cascade
//!     - `portal_ui` ⊇ `bearer` ⊇ `end_user`
//!     - forced changes are confirmed before being applied
//! - Collaborators and invitations
//! - Add-user form rules

// Re-export shared types
pub use portal_types::access_control;
pub use portal_types::app_config;
pub use portal_types::clock;
pub use portal_types::collaborator;
pub use portal_types::error;

// Feature crate re-exports
pub use portal_admin as admin;
pub use portal_core::config;
pub use portal_core::jsonpointer;
pub use portal_core::logging;
pub use portal_core::validation;
pub use portal_profile as profile;

// Local modules
pub mod prelude;
pub mod session;

pub use crate::session::AppConfigSession;

// vim: ts=4
