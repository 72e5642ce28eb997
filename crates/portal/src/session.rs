//! Editing session of one app config file
//!
//! The session keeps the config as loaded from disk next to the editor of
//! its standard attributes. Saving writes the edited access control back
//! into the loaded config, so sections the portal does not model survive.

use std::path::{Path, PathBuf};

use portal_core::config::{load_app_config, save_app_config};
use portal_profile::attributes_list::AttributesListEditor;
use portal_profile::standard_attributes::{FormState, construct_config, construct_form_state};
use portal_types::access_control::StandardAttributesAccessControlConfig;
use portal_types::app_config::PortalAppConfig;

use crate::prelude::*;

pub struct AppConfigSession {
	path: PathBuf,
	raw: PortalAppConfig,
	editor: AttributesListEditor<StandardAttributesAccessControlConfig>,
}

impl AppConfigSession {
	pub fn open(path: impl AsRef<Path>) -> PtResult<Self> {
		let path = path.as_ref().to_path_buf();
		let raw = load_app_config(&path)?;
		Ok(Self::from_config(path, raw))
	}

	pub fn from_config(path: PathBuf, raw: PortalAppConfig) -> Self {
		let editor = construct_form_state(&raw).editor();
		Self { path, raw, editor }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn raw(&self) -> &PortalAppConfig {
		&self.raw
	}

	pub fn editor(&self) -> &AttributesListEditor<StandardAttributesAccessControlConfig> {
		&self.editor
	}

	pub fn editor_mut(&mut self) -> &mut AttributesListEditor<StandardAttributesAccessControlConfig> {
		&mut self.editor
	}

	/// Index of the listed attribute at `pointer`
	pub fn position(&self, pointer: &str) -> PtResult<usize> {
		self.editor
			.items()
			.iter()
			.position(|item| item.pointer == pointer)
			.ok_or_else(|| Error::ValidationError(format!("attribute {} is not listed", pointer)))
	}

	pub fn form_state(&self) -> FormState {
		FormState { standard_attributes_items: self.editor.items().to_vec() }
	}

	/// The config that saving would write
	pub fn build_config(&self) -> PortalAppConfig {
		construct_config(&self.raw, &self.form_state(), &self.raw)
	}

	/// Write the edited config back to its file
	///
	/// A pending update is not part of the saved state.
	pub fn save(&mut self) -> PtResult<()> {
		if self.editor.pending().is_some() {
			warn!("Saving with an unconfirmed access control update");
		}
		let config = self.build_config();
		save_app_config(&self.path, &config)?;
		self.raw = config;
		Ok(())
	}
}

// vim: ts=4
