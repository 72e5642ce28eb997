//! Admin features of the portal: the collaborator list, invitation
//! handling, and the add-user form rules.

pub mod add_user;
pub mod collaborator;
pub mod prelude;
pub mod registry;

// vim: ts=4
