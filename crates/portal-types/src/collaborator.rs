//! Collaborator and invitation records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user who accepted an invitation to administer an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaborator {
	pub id: String,
	pub app_id: String,
	pub user_id: String,
	/// Email of the user, when known
	pub email: Option<String>,
	pub created_at: DateTime<Utc>,
}

/// A pending invitation to become a collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorInvitation {
	pub id: String,
	pub app_id: String,
	pub invited_by: String,
	pub invitee_email: String,
	pub code: String,
	pub created_at: DateTime<Utc>,
	pub expire_at: DateTime<Utc>,
}

impl CollaboratorInvitation {
	pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
		self.expire_at <= now
	}
}

// vim: ts=4
