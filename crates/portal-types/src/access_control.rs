//! User profile attribute access control types
//!
//! Every standard attribute carries one visibility level per tier. The tiers
//! form a hierarchy: `portal_ui` ⊇ `bearer` ⊇ `end_user`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prelude::*;

/// Visibility level of an attribute for one tier
///
/// Ordered by rank: `Hidden` (1) < `Readonly` (2) < `Readwrite` (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessControlLevel {
	Hidden,
	Readonly,
	Readwrite,
}

impl AccessControlLevel {
	pub const ALL: [AccessControlLevel; 3] =
		[AccessControlLevel::Hidden, AccessControlLevel::Readonly, AccessControlLevel::Readwrite];

	pub fn rank(self) -> u8 {
		match self {
			AccessControlLevel::Hidden => 1,
			AccessControlLevel::Readonly => 2,
			AccessControlLevel::Readwrite => 3,
		}
	}

	pub fn from_rank(rank: u8) -> PtResult<Self> {
		match rank {
			1 => Ok(AccessControlLevel::Hidden),
			2 => Ok(AccessControlLevel::Readonly),
			3 => Ok(AccessControlLevel::Readwrite),
			other => Err(Error::InvalidRank(other)),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			AccessControlLevel::Hidden => "hidden",
			AccessControlLevel::Readonly => "readonly",
			AccessControlLevel::Readwrite => "readwrite",
		}
	}
}

impl FromStr for AccessControlLevel {
	type Err = Error;

	fn from_str(s: &str) -> PtResult<Self> {
		match s {
			"hidden" => Ok(AccessControlLevel::Hidden),
			"readonly" => Ok(AccessControlLevel::Readonly),
			"readwrite" => Ok(AccessControlLevel::Readwrite),
			other => Err(Error::InvalidAccessControlLevel(other.to_string())),
		}
	}
}

impl fmt::Display for AccessControlLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// Visibility tier, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessControlTier {
	/// Admin portal
	PortalUi,
	/// Bearer of an access token (resource servers)
	Bearer,
	/// The user themselves
	EndUser,
}

impl AccessControlTier {
	pub const ALL: [AccessControlTier; 3] =
		[AccessControlTier::PortalUi, AccessControlTier::Bearer, AccessControlTier::EndUser];

	pub fn as_str(self) -> &'static str {
		match self {
			AccessControlTier::PortalUi => "portal_ui",
			AccessControlTier::Bearer => "bearer",
			AccessControlTier::EndUser => "end_user",
		}
	}
}

impl FromStr for AccessControlTier {
	type Err = Error;

	fn from_str(s: &str) -> PtResult<Self> {
		match s {
			"portal_ui" => Ok(AccessControlTier::PortalUi),
			"bearer" => Ok(AccessControlTier::Bearer),
			"end_user" => Ok(AccessControlTier::EndUser),
			other => Err(Error::ValidationError(format!("unknown access control tier: {}", other))),
		}
	}
}

impl fmt::Display for AccessControlTier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.pad(self.as_str())
	}
}

/// Access control levels of one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileAttributesAccessControl {
	pub portal_ui: AccessControlLevel,
	pub bearer: AccessControlLevel,
	pub end_user: AccessControlLevel,
}

impl UserProfileAttributesAccessControl {
	pub fn new(
		portal_ui: AccessControlLevel,
		bearer: AccessControlLevel,
		end_user: AccessControlLevel,
	) -> Self {
		Self { portal_ui, bearer, end_user }
	}

	pub fn get(&self, tier: AccessControlTier) -> AccessControlLevel {
		match tier {
			AccessControlTier::PortalUi => self.portal_ui,
			AccessControlTier::Bearer => self.bearer,
			AccessControlTier::EndUser => self.end_user,
		}
	}

	/// Returns a copy with `tier` set to `level`
	pub fn with(mut self, tier: AccessControlTier, level: AccessControlLevel) -> Self {
		match tier {
			AccessControlTier::PortalUi => self.portal_ui = level,
			AccessControlTier::Bearer => self.bearer = level,
			AccessControlTier::EndUser => self.end_user = level,
		}
		self
	}

	/// Whether `portal_ui` ≥ `bearer` ≥ `end_user` holds
	pub fn is_monotonic(&self) -> bool {
		self.portal_ui >= self.bearer && self.bearer >= self.end_user
	}
}

/// One `user_profile.standard_attributes.access_control` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardAttributesAccessControlConfig {
	pub pointer: String,
	pub access_control: UserProfileAttributesAccessControl,
}

/// Items carrying a pointer and an access control record
pub trait AccessControlItem: Clone {
	fn pointer(&self) -> &str;

	fn access_control(&self) -> &UserProfileAttributesAccessControl;

	fn set_access_control(&mut self, access_control: UserProfileAttributesAccessControl);
}

impl AccessControlItem for StandardAttributesAccessControlConfig {
	fn pointer(&self) -> &str {
		&self.pointer
	}

	fn access_control(&self) -> &UserProfileAttributesAccessControl {
		&self.access_control
	}

	fn set_access_control(&mut self, access_control: UserProfileAttributesAccessControl) {
		self.access_control = access_control;
	}
}


// vim: ts=4
