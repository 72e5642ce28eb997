//! Portal admin list: accepted collaborators and pending invitations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portal_types::collaborator::{Collaborator, CollaboratorInvitation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
	Accepted,
	Pending,
}

/// Action behind the remove button of a list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
	Collaborator(String),
	Invitation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PortalAdminListItem {
	#[serde(rename_all = "camelCase")]
	Collaborator { id: String, user_id: String, created_at: DateTime<Utc>, email: String },
	#[serde(rename_all = "camelCase")]
	CollaboratorInvitation {
		id: String,
		created_at: DateTime<Utc>,
		expire_at: DateTime<Utc>,
		email: String,
	},
}

impl PortalAdminListItem {
	pub fn id(&self) -> &str {
		match self {
			PortalAdminListItem::Collaborator { id, .. }
			| PortalAdminListItem::CollaboratorInvitation { id, .. } => id,
		}
	}

	pub fn email(&self) -> &str {
		match self {
			PortalAdminListItem::Collaborator { email, .. }
			| PortalAdminListItem::CollaboratorInvitation { email, .. } => email,
		}
	}

	pub fn created_at(&self) -> DateTime<Utc> {
		match self {
			PortalAdminListItem::Collaborator { created_at, .. }
			| PortalAdminListItem::CollaboratorInvitation { created_at, .. } => *created_at,
		}
	}

	pub fn status(&self) -> MemberStatus {
		match self {
			PortalAdminListItem::Collaborator { .. } => MemberStatus::Accepted,
			PortalAdminListItem::CollaboratorInvitation { .. } => MemberStatus::Pending,
		}
	}

	pub fn removal(&self) -> Removal {
		match self {
			PortalAdminListItem::Collaborator { id, .. } => Removal::Collaborator(id.clone()),
			PortalAdminListItem::CollaboratorInvitation { id, .. } => Removal::Invitation(id.clone()),
		}
	}
}

impl From<&Collaborator> for PortalAdminListItem {
	fn from(c: &Collaborator) -> Self {
		PortalAdminListItem::Collaborator {
			id: c.id.clone(),
			user_id: c.user_id.clone(),
			created_at: c.created_at,
			email: c.email.clone().unwrap_or_default(),
		}
	}
}

impl From<&CollaboratorInvitation> for PortalAdminListItem {
	fn from(i: &CollaboratorInvitation) -> Self {
		PortalAdminListItem::CollaboratorInvitation {
			id: i.id.clone(),
			created_at: i.created_at,
			expire_at: i.expire_at,
			email: i.invitee_email.clone(),
		}
	}
}

/// Collaborators first, then invitations, each in the given order
pub fn build_list_items(
	collaborators: &[Collaborator],
	invitations: &[CollaboratorInvitation],
) -> Vec<PortalAdminListItem> {
	collaborators
		.iter()
		.map(PortalAdminListItem::from)
		.chain(invitations.iter().map(PortalAdminListItem::from))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use serde_json::json;

	fn at(secs: i64) -> DateTime<Utc> {
		Utc.timestamp_opt(secs, 0).single().unwrap()
	}

	fn fixtures() -> (Vec<Collaborator>, Vec<CollaboratorInvitation>) {
		let collaborators = vec![Collaborator {
			id: "c1".into(),
			app_id: "app".into(),
			user_id: "u1".into(),
			email: None,
			created_at: at(100),
		}];
		let invitations = vec![CollaboratorInvitation {
			id: "i1".into(),
			app_id: "app".into(),
			invited_by: "u1".into(),
			invitee_email: "bob@example.com".into(),
			code: "CODE".into(),
			created_at: at(200),
			expire_at: at(300),
		}];
		(collaborators, invitations)
	}

	#[test]
	fn test_build_list_items() {
		let (collaborators, invitations) = fixtures();
		let items = build_list_items(&collaborators, &invitations);
		assert_eq!(items.len(), 2);
		assert_eq!(items[0].status(), MemberStatus::Accepted);
		assert_eq!(items[0].email(), "");
		assert_eq!(items[1].status(), MemberStatus::Pending);
		assert_eq!(items[1].email(), "bob@example.com");
		assert_eq!(items[1].created_at(), at(200));
		assert_eq!(items[0].removal(), Removal::Collaborator("c1".into()));
		assert_eq!(items[1].removal(), Removal::Invitation("i1".into()));
	}

	#[test]
	fn test_discriminant_serialization() {
		let (_, invitations) = fixtures();
		let item = PortalAdminListItem::from(&invitations[0]);
		let value = serde_json::to_value(&item).unwrap();
		assert_eq!(value["type"], json!("collaboratorInvitation"));
		assert_eq!(value["email"], json!("bob@example.com"));
		assert!(value.get("expireAt").is_some());
	}
}

// vim: ts=4
