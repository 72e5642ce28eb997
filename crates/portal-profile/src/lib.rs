//! User profile attribute configuration: the access control cascade, the
//! attribute list editor, and the standard attributes form state.

pub mod access_control;
pub mod attributes_list;
pub mod prelude;
pub mod standard_attributes;

// vim: ts=4
