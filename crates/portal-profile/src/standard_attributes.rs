//! Standard attributes configuration form state

use portal_types::access_control::StandardAttributesAccessControlConfig;
use portal_types::app_config::PortalAppConfig;

use crate::attributes_list::AttributesListEditor;
use crate::prelude::*;

/// Display order of the standard attributes; others are not listed
pub const NATURAL_ORDER: [&str; 16] = [
	"/email",
	"/phone_number",
	"/preferred_username",
	"/name",
	"/given_name",
	"/family_name",
	"/middle_name",
	"/nickname",
	"/profile",
	"/picture",
	"/website",
	"/gender",
	"/birthdate",
	"/zoneinfo",
	"/locale",
	"/address",
];

fn natural_position(pointer: &str) -> Option<usize> {
	NATURAL_ORDER.iter().position(|p| *p == pointer)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
	pub standard_attributes_items: Vec<StandardAttributesAccessControlConfig>,
}

impl FormState {
	pub fn editor(&self) -> AttributesListEditor<StandardAttributesAccessControlConfig> {
		AttributesListEditor::new(self.standard_attributes_items.clone())
	}

	pub fn position(&self, pointer: &str) -> Option<usize> {
		self.standard_attributes_items.iter().position(|item| item.pointer == pointer)
	}
}

pub fn construct_form_state(config: &PortalAppConfig) -> FormState {
	let mut listed: Vec<(usize, StandardAttributesAccessControlConfig)> = config
		.standard_attributes_access_control()
		.iter()
		.filter_map(|item| natural_position(&item.pointer).map(|pos| (pos, item.clone())))
		.collect();
	listed.sort_by_key(|(pos, _)| *pos);

	FormState { standard_attributes_items: listed.into_iter().map(|(_, item)| item).collect() }
}

/// Write the edited records back into the raw config
///
/// Records are copied onto the matching entries of the effective config and
/// its whole access control list then replaces the one of the raw config.
pub fn construct_config(
	raw: &PortalAppConfig,
	current: &FormState,
	effective: &PortalAppConfig,
) -> PortalAppConfig {
	let mut access_control: Vec<StandardAttributesAccessControlConfig> =
		effective.standard_attributes_access_control().to_vec();
	for entry in &mut access_control {
		if let Some(item) =
			current.standard_attributes_items.iter().find(|item| item.pointer == entry.pointer)
		{
			entry.access_control = item.access_control;
		}
	}

	let mut config = raw.clone();
	debug!(entries = access_control.len(), "Writing standard attributes access control");
	config.standard_attributes_mut().access_control = Some(access_control);
	config
}


// vim: ts=4
