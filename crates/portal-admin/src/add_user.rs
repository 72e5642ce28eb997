//! Rules of the add-user form
//!
//! Which login ID types can be chosen and whether a password must be set
//! both depend on the authentication section of the app config.

use serde::{Deserialize, Serialize};
use std::fmt;

use portal_core::validation::{ErrorRule, FieldBinding, REASON_VALIDATION_FAILED};
use portal_types::app_config::PortalAppConfig;

use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginIdKeyType {
	Username,
	Email,
	Phone,
}

impl LoginIdKeyType {
	pub fn as_str(self) -> &'static str {
		match self {
			LoginIdKeyType::Username => "username",
			LoginIdKeyType::Email => "email",
			LoginIdKeyType::Phone => "phone",
		}
	}

	/// Message id of the type name
	pub fn name_message_id(self) -> &'static str {
		match self {
			LoginIdKeyType::Username => "login-id-key.username",
			LoginIdKeyType::Email => "login-id-key.email",
			LoginIdKeyType::Phone => "login-id-key.phone",
		}
	}

	fn from_config_type(typ: &str) -> Option<Self> {
		match typ {
			"username" => Some(LoginIdKeyType::Username),
			"email" => Some(LoginIdKeyType::Email),
			"phone" => Some(LoginIdKeyType::Phone),
			_ => None,
		}
	}
}

impl fmt::Display for LoginIdKeyType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Login ID types a new user can be created with
pub fn login_id_type_options(config: &PortalAppConfig) -> Vec<LoginIdKeyType> {
	if !config.identities().iter().any(|i| i == "login_id") {
		return Vec::new();
	}
	// username logins need the password authenticator
	let username_allowed = config.primary_authenticators().iter().any(|a| a == "password");

	let mut options = Vec::new();
	for key in config.login_id_keys() {
		let Some(typ) = LoginIdKeyType::from_config_type(&key.typ) else {
			continue;
		};
		if typ == LoginIdKeyType::Username && !username_allowed {
			continue;
		}
		if !options.contains(&typ) {
			options.push(typ);
		}
	}
	options
}

pub fn is_password_needed(config: &PortalAppConfig, selected: Option<LoginIdKeyType>) -> bool {
	let Some(selected) = selected else {
		return false;
	};
	match config.primary_authenticators() {
		[first, ..] if first == "password" => true,
		[first, second] if first == "oob_otp" && second == "password" => {
			selected == LoginIdKeyType::Username
		}
		_ => false,
	}
}

pub const INVALID_IDENTITY_MESSAGE_ID: &str = "AddUserScreen.error.invalid-identity";
pub const DUPLICATED_IDENTITY_MESSAGE_ID: &str = "AddUserScreen.error.duplicated-identity";
pub const REASON_INVARIANT_VIOLATED: &str = "InvariantViolated";

/// Error bindings of the login ID field of type `selected`
///
/// Only the selected field is shown, so it is the only one bound.
pub fn field_bindings(selected: LoginIdKeyType) -> Vec<FieldBinding> {
	vec![
		FieldBinding::new("", selected.as_str())
			.rule(
				ErrorRule::new(INVALID_IDENTITY_MESSAGE_ID)
					.reason(REASON_VALIDATION_FAILED)
					.location("")
					.kind("format"),
			)
			.rule(
				ErrorRule::new(DUPLICATED_IDENTITY_MESSAGE_ID)
					.reason(REASON_INVARIANT_VIOLATED)
					.kind("DuplicatedIdentity"),
			),
	]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddUserForm {
	pub selected_login_id_type: Option<LoginIdKeyType>,
	pub username: String,
	pub email: String,
	pub phone: String,
	pub password: String,
}

impl AddUserForm {
	/// Value of the field of the selected login ID type
	pub fn login_id(&self) -> Option<(LoginIdKeyType, &str)> {
		let typ = self.selected_login_id_type?;
		let value = match typ {
			LoginIdKeyType::Username => &self.username,
			LoginIdKeyType::Email => &self.email,
			LoginIdKeyType::Phone => &self.phone,
		};
		Some((typ, value.as_str()))
	}

	/// Check the form can be submitted
	pub fn validate(&self, config: &PortalAppConfig) -> PtResult<()> {
		let Some((typ, value)) = self.login_id() else {
			return Err(Error::ValidationError("login ID type is not selected".into()));
		};
		if !login_id_type_options(config).contains(&typ) {
			return Err(Error::ValidationError(format!("login ID type {} is not enabled", typ)));
		}
		if value.trim().is_empty() {
			return Err(Error::ValidationError(format!("{} is empty", typ)));
		}
		if is_password_needed(config, Some(typ)) && self.password.is_empty() {
			return Err(Error::ValidationError("password is required".into()));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use portal_core::validation::{ApiError, route_errors};
	use serde_json::json;

	fn config(identities: &[&str], authenticators: &[&str], keys: &[&str]) -> PortalAppConfig {
		let keys: Vec<_> = keys.iter().map(|k| json!({"key": k, "type": k})).collect();
		serde_json::from_value(json!({
			"authentication": {"identities": identities, "primary_authenticators": authenticators},
			"identity": {"login_id": {"keys": keys}},
		}))
		.unwrap()
	}

	#[test]
	fn test_login_id_type_options() {
		use crate::add_user::LoginIdKeyType::{Email, Phone, Username};
		let cfg = config(&["login_id"], &["password"], &["email", "username", "phone", "email"]);
		assert_eq!(login_id_type_options(&cfg), vec![Email, Username, Phone]);

		let cfg = config(&["login_id"], &["oob_otp"], &["email", "username"]);
		assert_eq!(login_id_type_options(&cfg), vec![Email]);

		let cfg = config(&["oauth"], &["password"], &["email"]);
		assert!(login_id_type_options(&cfg).is_empty());
	}

	#[test]
	fn test_is_password_needed() {
		use crate::add_user::LoginIdKeyType::{Email, Username};
		let cfg = config(&["login_id"], &["password", "oob_otp"], &["email"]);
		assert!(is_password_needed(&cfg, Some(Email)));
		assert!(!is_password_needed(&cfg, None));

		let cfg = config(&["login_id"], &["oob_otp", "password"], &["email"]);
		assert!(is_password_needed(&cfg, Some(Username)));
		assert!(!is_password_needed(&cfg, Some(Email)));

		let cfg = config(&["login_id"], &["oob_otp"], &["email"]);
		assert!(!is_password_needed(&cfg, Some(Username)));
	}

	#[test]
	fn test_validate() {
		let cfg = config(&["login_id"], &["password"], &["email"]);
		let mut form = AddUserForm::default();
		assert!(form.validate(&cfg).is_err());

		form.selected_login_id_type = Some(LoginIdKeyType::Email);
		form.email = "alice@example.com".into();
		assert!(matches!(form.validate(&cfg), Err(Error::ValidationError(ref m)) if m.contains("password")));

		form.password = "secret".into();
		assert!(form.validate(&cfg).is_ok());

		form.selected_login_id_type = Some(LoginIdKeyType::Phone);
		assert!(form.validate(&cfg).is_err());
	}

	fn api_error(reason: &str, location: &str, kind: &str) -> ApiError {
		serde_json::from_value(json!({
			"reason": reason,
			"message": "",
			"causes": [{"location": location, "kind": kind, "details": {}}],
		}))
		.unwrap()
	}

	#[test]
	fn test_format_error_routed_to_selected_field() {
		let error = api_error(REASON_VALIDATION_FAILED, "", "format");
		let routed = route_errors(&error, &field_bindings(LoginIdKeyType::Email));

		assert_eq!(routed.field("email").len(), 1);
		assert_eq!(routed.field("email")[0].message_id.as_deref(), Some(INVALID_IDENTITY_MESSAGE_ID));
		assert!(routed.field("username").is_empty());
		assert!(routed.field("phone").is_empty());
		assert!(routed.unclaimed.is_empty());
	}

	#[test]
	fn test_duplicated_identity_routed_to_selected_field() {
		let error = api_error(REASON_INVARIANT_VIOLATED, "", "DuplicatedIdentity");
		let routed = route_errors(&error, &field_bindings(LoginIdKeyType::Phone));

		assert_eq!(routed.field("phone").len(), 1);
		assert_eq!(
			routed.field("phone")[0].message_id.as_deref(),
			Some(DUPLICATED_IDENTITY_MESSAGE_ID)
		);
		assert!(routed.unclaimed.is_empty());
	}

	#[test]
	fn test_other_errors_stay_unclaimed() {
		let error = api_error(REASON_VALIDATION_FAILED, "/password", "required");
		let routed = route_errors(&error, &field_bindings(LoginIdKeyType::Username));
		assert_eq!(routed.unclaimed.len(), 1);
	}
}

// vim: ts=4
