//! In-memory collaborator and invitation registry

use chrono::Duration;
use rand::RngExt;

use portal_types::collaborator::{Collaborator, CollaboratorInvitation};

use crate::collaborator::Removal;
use crate::prelude::*;

/// Invitations expire this many days after they are sent
pub const INVITATION_TTL_DAYS: i64 = 3;
pub const INVITATION_CODE_LENGTH: usize = 32;
const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn generate_invitation_code() -> String {
	let mut rng = rand::rng();
	let mut code = String::with_capacity(INVITATION_CODE_LENGTH);
	for _ in 0..INVITATION_CODE_LENGTH {
		code.push(char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]));
	}
	code
}

fn new_id() -> String {
	uuid::Uuid::new_v4().to_string()
}

pub struct CollaboratorRegistry<C: Clock> {
	clock: C,
	collaborators: Vec<Collaborator>,
	invitations: Vec<CollaboratorInvitation>,
}

impl<C: Clock> CollaboratorRegistry<C> {
	pub fn new(clock: C) -> Self {
		Self { clock, collaborators: Vec::new(), invitations: Vec::new() }
	}

	pub fn list_collaborators(&self, app_id: &str) -> Vec<&Collaborator> {
		self.collaborators.iter().filter(|c| c.app_id == app_id).collect()
	}

	pub fn list_collaborators_by_user(&self, user_id: &str) -> Vec<&Collaborator> {
		self.collaborators.iter().filter(|c| c.user_id == user_id).collect()
	}

	pub fn get_collaborator(&self, id: &str) -> PtResult<&Collaborator> {
		self.collaborators.iter().find(|c| c.id == id).ok_or(Error::NotFound)
	}

	pub fn add_collaborator(
		&mut self,
		app_id: &str,
		user_id: &str,
		email: Option<String>,
	) -> &Collaborator {
		let collaborator = Collaborator {
			id: new_id(),
			app_id: app_id.to_string(),
			user_id: user_id.to_string(),
			email,
			created_at: self.clock.now_utc(),
		};
		info!(app_id, user_id, "Added collaborator");
		self.collaborators.push(collaborator);
		&self.collaborators[self.collaborators.len() - 1]
	}

	/// Remove a collaborator; the actor cannot remove themselves
	pub fn delete_collaborator(&mut self, id: &str, actor_id: &str) -> PtResult<Collaborator> {
		let pos = self.collaborators.iter().position(|c| c.id == id).ok_or(Error::NotFound)?;
		if self.collaborators[pos].user_id == actor_id {
			warn!(collaborator = %id, "Collaborator attempted to remove themselves");
			return Err(Error::CollaboratorSelfDeletion);
		}
		info!(collaborator = %id, "Removed collaborator");
		Ok(self.collaborators.remove(pos))
	}

	/// Unexpired invitations of the app
	pub fn list_invitations(&self, app_id: &str) -> Vec<&CollaboratorInvitation> {
		let now = self.clock.now_utc();
		self.invitations.iter().filter(|i| i.app_id == app_id && !i.is_expired(now)).collect()
	}

	/// Drop invitations that expired
	fn prune_expired(&mut self) {
		let now = self.clock.now_utc();
		let before = self.invitations.len();
		self.invitations.retain(|i| !i.is_expired(now));
		let pruned = before - self.invitations.len();
		if pruned > 0 {
			debug!(pruned, "Pruned expired collaborator invitations");
		}
	}

	pub fn get_invitation(&self, id: &str) -> PtResult<&CollaboratorInvitation> {
		self.invitations.iter().find(|i| i.id == id).ok_or(Error::NotFound)
	}

	pub fn send_invitation(
		&mut self,
		app_id: &str,
		invitee_email: &str,
		invited_by: &str,
	) -> PtResult<&CollaboratorInvitation> {
		self.prune_expired();
		if self.list_invitations(app_id).iter().any(|i| i.invitee_email == invitee_email) {
			return Err(Error::InvitationDuplicate);
		}

		let now = self.clock.now_utc();
		let invitation = CollaboratorInvitation {
			id: new_id(),
			app_id: app_id.to_string(),
			invited_by: invited_by.to_string(),
			invitee_email: invitee_email.to_string(),
			code: generate_invitation_code(),
			created_at: now,
			expire_at: now + Duration::days(INVITATION_TTL_DAYS),
		};
		info!(app_id, invitee = %invitee_email, "Sent collaborator invitation");
		self.invitations.push(invitation);
		Ok(&self.invitations[self.invitations.len() - 1])
	}

	pub fn delete_invitation(&mut self, id: &str) -> PtResult<CollaboratorInvitation> {
		let pos = self.invitations.iter().position(|i| i.id == id).ok_or(Error::NotFound)?;
		info!(invitation = %id, "Removed collaborator invitation");
		Ok(self.invitations.remove(pos))
	}

	/// Turn the invitation with `code` into a collaborator for `actor_id`
	pub fn accept_invitation(
		&mut self,
		code: &str,
		actor_id: &str,
		actor_email: Option<String>,
	) -> PtResult<&Collaborator> {
		self.prune_expired();
		let now = self.clock.now_utc();
		let matching: Vec<&CollaboratorInvitation> =
			self.invitations.iter().filter(|i| i.code == code && !i.is_expired(now)).collect();
		let invitation = match matching.as_slice() {
			[] => return Err(Error::InvitationInvalidCode),
			[single] => (*single).clone(),
			_ => return Err(Error::InvitationDuplicateCode),
		};

		self.delete_invitation(&invitation.id)?;
		Ok(self.add_collaborator(&invitation.app_id, actor_id, actor_email))
	}

	/// Carry out the removal behind a list row
	pub fn remove(&mut self, removal: &Removal, actor_id: &str) -> PtResult<()> {
		match removal {
			Removal::Collaborator(id) => self.delete_collaborator(id, actor_id).map(|_| ()),
			Removal::Invitation(id) => self.delete_invitation(id).map(|_| ()),
		}
	}
}


// vim: ts=4
