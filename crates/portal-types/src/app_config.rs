//! App configuration model
//!
//! Only the sections edited by the portal are typed. Everything else is kept
//! in the flattened `extra` maps so that a load/save cycle preserves it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::access_control::StandardAttributesAccessControlConfig;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalAppConfig {
	pub authentication: Option<AuthenticationConfig>,
	pub identity: Option<IdentityConfig>,
	pub user_profile: Option<UserProfileConfig>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticationConfig {
	pub identities: Option<Vec<String>>,
	pub primary_authenticators: Option<Vec<String>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
	pub login_id: Option<LoginIdConfig>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginIdConfig {
	pub keys: Option<Vec<LoginIdKeyConfig>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginIdKeyConfig {
	pub key: String,
	#[serde(rename = "type")]
	pub typ: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfileConfig {
	pub standard_attributes: Option<StandardAttributesConfig>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardAttributesConfig {
	pub access_control: Option<Vec<StandardAttributesAccessControlConfig>>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl PortalAppConfig {
	/// Access control entries, empty when the section is absent
	pub fn standard_attributes_access_control(&self) -> &[StandardAttributesAccessControlConfig] {
		self.user_profile
			.as_ref()
			.and_then(|up| up.standard_attributes.as_ref())
			.and_then(|sa| sa.access_control.as_deref())
			.unwrap_or(&[])
	}

	/// Mutable access to `user_profile.standard_attributes`, creating both
	/// sections when missing
	pub fn standard_attributes_mut(&mut self) -> &mut StandardAttributesConfig {
		self.user_profile
			.get_or_insert_with(UserProfileConfig::default)
			.standard_attributes
			.get_or_insert_with(StandardAttributesConfig::default)
	}

	pub fn primary_authenticators(&self) -> &[String] {
		self.authentication
			.as_ref()
			.and_then(|a| a.primary_authenticators.as_deref())
			.unwrap_or(&[])
	}

	pub fn identities(&self) -> &[String] {
		self.authentication.as_ref().and_then(|a| a.identities.as_deref()).unwrap_or(&[])
	}

	pub fn login_id_keys(&self) -> &[LoginIdKeyConfig] {
		self.identity
			.as_ref()
			.and_then(|i| i.login_id.as_ref())
			.and_then(|l| l.keys.as_deref())
			.unwrap_or(&[])
	}
}


// vim: ts=4
