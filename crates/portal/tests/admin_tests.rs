//! Integration tests for the portal admin list and the add-user form

mod common;

use common::*;
use portal::admin::add_user::{AddUserForm, LoginIdKeyType, is_password_needed, login_id_type_options};
use portal::admin::collaborator::{MemberStatus, build_list_items};
use portal::admin::registry::CollaboratorRegistry;
use portal::clock::SystemClock;
use portal::config::load_app_config;
use portal::error::Error;

#[test]
fn test_admin_list_after_invitation_flow() {
	let mut registry = CollaboratorRegistry::new(SystemClock);
	registry.add_collaborator("myapp", "owner", Some("owner@example.com".into()));
	let code = registry.send_invitation("myapp", "carol@example.com", "owner").unwrap().code.clone();
	registry.send_invitation("myapp", "dave@example.com", "owner").unwrap();
	registry.accept_invitation(&code, "carol", Some("carol@example.com".into())).unwrap();

	let collaborators: Vec<_> = registry.list_collaborators("myapp").into_iter().cloned().collect();
	let invitations: Vec<_> = registry.list_invitations("myapp").into_iter().cloned().collect();
	let items = build_list_items(&collaborators, &invitations);

	let rows: Vec<(&str, MemberStatus)> = items.iter().map(|i| (i.email(), i.status())).collect();
	assert_eq!(
		rows,
		vec![
			("owner@example.com", MemberStatus::Accepted),
			("carol@example.com", MemberStatus::Accepted),
			("dave@example.com", MemberStatus::Pending),
		]
	);

	// the owner cannot remove themselves through their own row
	assert!(matches!(registry.remove(&items[0].removal(), "owner"), Err(Error::CollaboratorSelfDeletion)));
	registry.remove(&items[2].removal(), "owner").unwrap();
	assert!(registry.list_invitations("myapp").is_empty());
}

#[test]
fn test_add_user_form_from_app_config() {
	let (_dir, path) = sample_app_config();
	let config = load_app_config(&path).unwrap();

	assert_eq!(login_id_type_options(&config), vec![LoginIdKeyType::Email, LoginIdKeyType::Username]);
	assert!(is_password_needed(&config, Some(LoginIdKeyType::Email)));

	let form = AddUserForm {
		selected_login_id_type: Some(LoginIdKeyType::Username),
		username: "carol".into(),
		password: "correct horse".into(),
		..Default::default()
	};
	form.validate(&config).unwrap();
}

// vim: ts=4
