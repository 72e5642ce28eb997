//! Routing of API validation errors to form fields
//!
//! A `ValidationFailed` error carries a list of causes, each located by a
//! JSON pointer into the submitted document. Form fields are bound to a
//! parent matcher and a field name; a field claims every cause located at
//! `parent/field_name`, plus causes picked up by its explicit error rules.
//! Causes no field claims are reported as unclaimed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::jsonpointer::{ParentMatcher, join_parent_child, match_parent_child};
use crate::prelude::*;

pub const REASON_VALIDATION_FAILED: &str = "ValidationFailed";

/// Error returned by the backend API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
	pub reason: String,
	#[serde(default)]
	pub message: String,
	#[serde(default)]
	pub causes: Vec<ApiErrorCause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorCause {
	pub location: String,
	pub kind: String,
	#[serde(default)]
	pub details: Value,
}

/// Maps a matching cause to a message id
///
/// Unset criteria match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRule {
	pub reason: Option<String>,
	pub location: Option<String>,
	pub kind: Option<String>,
	pub message_id: String,
}

impl ErrorRule {
	pub fn new(message_id: impl Into<String>) -> Self {
		Self { message_id: message_id.into(), ..Default::default() }
	}

	pub fn reason(mut self, reason: impl Into<String>) -> Self {
		self.reason = Some(reason.into());
		self
	}

	pub fn location(mut self, location: impl Into<String>) -> Self {
		self.location = Some(location.into());
		self
	}

	pub fn kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	pub fn matches(&self, reason: &str, cause: &ApiErrorCause) -> bool {
		self.reason.as_deref().is_none_or(|r| r == reason)
			&& self.location.as_deref().is_none_or(|l| l == cause.location)
			&& self.kind.as_deref().is_none_or(|k| k == cause.kind)
	}
}

/// A form field bound to a location in the submitted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
	pub parent: ParentMatcher,
	pub field_name: String,
	pub rules: Vec<ErrorRule>,
}

impl FieldBinding {
	pub fn new(parent: impl Into<ParentMatcher>, field_name: impl Into<String>) -> Self {
		Self { parent: parent.into(), field_name: field_name.into(), rules: Vec::new() }
	}

	pub fn rule(mut self, rule: ErrorRule) -> Self {
		self.rules.push(rule);
		self
	}

	/// Matcher of the field itself, one level below its parent
	pub fn field_matcher(&self) -> PtResult<ParentMatcher> {
		join_parent_child(&self.parent, &self.field_name)
	}

	fn message_id(&self, reason: &str, cause: &ApiErrorCause) -> Option<&str> {
		self.rules.iter().find(|r| r.matches(reason, cause)).map(|r| r.message_id.as_str())
	}

	fn claims(&self, reason: &str, cause: &ApiErrorCause) -> bool {
		match_parent_child(&cause.location, &self.parent, &self.field_name)
			|| self.message_id(reason, cause).is_some()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoutedError {
	pub cause: ApiErrorCause,
	pub message_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutedErrors {
	/// Errors per field name
	pub fields: BTreeMap<String, Vec<RoutedError>>,
	pub unclaimed: Vec<ApiErrorCause>,
}

impl RoutedErrors {
	pub fn field(&self, field_name: &str) -> &[RoutedError] {
		self.fields.get(field_name).map_or(&[], Vec::as_slice)
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty() && self.unclaimed.is_empty()
	}
}

/// Assign each cause of `error` to the first binding claiming it
pub fn route_errors(error: &ApiError, bindings: &[FieldBinding]) -> RoutedErrors {
	let mut routed = RoutedErrors::default();
	for cause in &error.causes {
		match bindings.iter().find(|b| b.claims(&error.reason, cause)) {
			Some(binding) => {
				let message_id = binding.message_id(&error.reason, cause).map(String::from);
				routed
					.fields
					.entry(binding.field_name.clone())
					.or_default()
					.push(RoutedError { cause: cause.clone(), message_id });
			}
			None => {
				debug!(location = %cause.location, kind = %cause.kind, "Unclaimed validation error");
				routed.unclaimed.push(cause.clone());
			}
		}
	}
	routed
}


// vim: ts=4
