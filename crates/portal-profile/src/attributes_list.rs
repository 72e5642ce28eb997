//! Attribute list editing with confirmation of forced changes
//!
//! A tier change without side effects is applied at once. A change that
//! forces other tiers down is held as the pending update until it is
//! confirmed or dismissed. A new change while one is pending replaces it.

use serde::Serialize;

use crate::access_control::{PendingUpdate, PendingUpdatePrompt, apply_update, make_update};
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
	/// The change and nothing else was applied
	Applied,
	/// The change forces other tiers and awaits confirmation
	PendingConfirmation,
}

#[derive(Debug, Clone)]
pub struct AttributesListEditor<T> {
	items: Vec<T>,
	pending: Option<PendingUpdate>,
}

impl<T: AccessControlItem> AttributesListEditor<T> {
	pub fn new(items: Vec<T>) -> Self {
		Self { items, pending: None }
	}

	pub fn items(&self) -> &[T] {
		&self.items
	}

	pub fn into_items(self) -> Vec<T> {
		self.items
	}

	pub fn pending(&self) -> Option<&PendingUpdate> {
		self.pending.as_ref()
	}

	pub fn pending_prompt(&self) -> PtResult<Option<PendingUpdatePrompt>> {
		self.pending.as_ref().map(|p| p.prompt(&self.items)).transpose()
	}

	/// Set `tier` of item `index` to `level`
	pub fn change_level(
		&mut self,
		index: usize,
		tier: AccessControlTier,
		level: AccessControlLevel,
	) -> PtResult<ChangeOutcome> {
		let update = make_update(&self.items, index, tier, level)?;

		if let Some(prev) = self.pending.take() {
			debug!(index = prev.index, tier = %prev.key, "Replacing pending access control update");
		}

		if update.has_side_effects() {
			self.pending = Some(update);
			return Ok(ChangeOutcome::PendingConfirmation);
		}

		self.items = apply_update(&self.items, &update)?;
		Ok(ChangeOutcome::Applied)
	}

	/// Apply the pending update
	pub fn confirm(&mut self) -> PtResult<()> {
		let update = self.pending.take().ok_or(Error::NoPendingUpdate)?;
		self.items = apply_update(&self.items, &update)?;
		info!(
			index = update.index,
			tier = %update.key,
			forced = update.other_adjustments.len(),
			"Confirmed access control update"
		);
		Ok(())
	}

	/// Drop the pending update, returns whether there was one
	pub fn dismiss(&mut self) -> bool {
		self.pending.take().is_some()
	}

	pub fn selector(&self, index: usize, tier: AccessControlTier) -> PtResult<TierSelector> {
		let item = self.items.get(index).ok_or(Error::IndexOutOfRange(index))?;
		Ok(tier_selector(item.access_control(), tier))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelOption {
	pub level: AccessControlLevel,
	pub disabled: bool,
}

/// Level choices of one tier of one attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSelector {
	pub tier: AccessControlTier,
	pub options: Vec<LevelOption>,
	pub selected: AccessControlLevel,
	/// Set when at most one option is enabled
	pub disabled: bool,
}

impl TierSelector {
	pub fn enabled_levels(&self) -> impl Iterator<Item = AccessControlLevel> + '_ {
		self.options.iter().filter(|o| !o.disabled).map(|o| o.level)
	}

	pub fn is_enabled(&self, level: AccessControlLevel) -> bool {
		self.options.iter().any(|o| o.level == level && !o.disabled)
	}
}

/// Options of `tier` given the current levels of the outer tiers
///
/// `bearer` never offers `readwrite`.
pub fn tier_selector(
	access_control: &UserProfileAttributesAccessControl,
	tier: AccessControlTier,
) -> TierSelector {
	use portal_types::access_control::AccessControlLevel::{Hidden, Readonly, Readwrite};

	let levels: &[AccessControlLevel] = match tier {
		AccessControlTier::Bearer => &[Hidden, Readonly],
		AccessControlTier::PortalUi | AccessControlTier::EndUser => &[Hidden, Readonly, Readwrite],
	};

	let is_disabled = |level: AccessControlLevel| match tier {
		AccessControlTier::PortalUi => false,
		AccessControlTier::Bearer => {
			level == Readonly && access_control.portal_ui == Hidden
		}
		AccessControlTier::EndUser => {
			let outer_hidden =
				access_control.bearer == Hidden || access_control.portal_ui == Hidden;
			match level {
				Hidden => false,
				Readonly => outer_hidden,
				Readwrite => outer_hidden || access_control.portal_ui == Readonly,
			}
		}
	};

	let options: Vec<LevelOption> =
		levels.iter().map(|&level| LevelOption { level, disabled: is_disabled(level) }).collect();
	let enabled = options.iter().filter(|o| !o.disabled).count();

	TierSelector { tier, options, selected: access_control.get(tier), disabled: enabled <= 1 }
}

#[cfg(test)]
mod tests {
	use super::*;
	use portal_types::access_control::AccessControlLevel::{Hidden, Readonly, Readwrite};
	use portal_types::access_control::AccessControlTier::{Bearer, EndUser, PortalUi};
	use portal_types::access_control::StandardAttributesAccessControlConfig;

	fn editor() -> AttributesListEditor<StandardAttributesAccessControlConfig> {
		AttributesListEditor::new(vec![
			StandardAttributesAccessControlConfig {
				pointer: "/email".into(),
				access_control: UserProfileAttributesAccessControl::new(Readwrite, Readonly, Readwrite),
			},
			StandardAttributesAccessControlConfig {
				pointer: "/name".into(),
				access_control: UserProfileAttributesAccessControl::new(Readwrite, Hidden, Hidden),
			},
		])
	}

	#[test]
	fn test_change_without_side_effects_applies() -> PtResult<()> {
		let mut ed = editor();
		assert_eq!(ed.change_level(0, EndUser, Hidden)?, ChangeOutcome::Applied);
		assert!(ed.pending().is_none());
		assert_eq!(ed.items()[0].access_control.end_user, Hidden);
		Ok(())
	}

	#[test]
	fn test_confirm_applies_pending() -> PtResult<()> {
		let mut ed = editor();
		assert_eq!(ed.change_level(0, Bearer, Hidden)?, ChangeOutcome::PendingConfirmation);
		assert_eq!(ed.items()[0].access_control.bearer, Readonly);

		let prompt = ed.pending_prompt()?;
		assert_eq!(prompt.map(|p| p.affected).as_deref(), Some("end_user"));

		ed.confirm()?;
		assert!(ed.pending().is_none());
		assert_eq!(
			ed.items()[0].access_control,
			UserProfileAttributesAccessControl::new(Readwrite, Hidden, Hidden)
		);
		Ok(())
	}

	#[test]
	fn test_dismiss_discards_pending() -> PtResult<()> {
		let mut ed = editor();
		let before = ed.items().to_vec();
		ed.change_level(0, PortalUi, Hidden)?;
		assert!(ed.dismiss());
		assert!(!ed.dismiss());
		assert_eq!(ed.items(), before.as_slice());
		assert!(matches!(ed.confirm(), Err(Error::NoPendingUpdate)));
		Ok(())
	}

	#[test]
	fn test_new_change_replaces_pending() -> PtResult<()> {
		let mut ed = editor();
		ed.change_level(0, PortalUi, Hidden)?;
		ed.change_level(0, Bearer, Hidden)?;
		let pending = ed.pending().map(|p| p.key);
		assert_eq!(pending, Some(Bearer));

		// a change without side effects applies and clears the pending one
		assert_eq!(ed.change_level(1, EndUser, Hidden)?, ChangeOutcome::Applied);
		assert!(ed.pending().is_none());
		Ok(())
	}

	#[test]
	fn test_selector_end_user() {
		let ac = UserProfileAttributesAccessControl::new(Readonly, Readonly, Readonly);
		let sel = tier_selector(&ac, EndUser);
		assert_eq!(sel.enabled_levels().collect::<Vec<_>>(), vec![Hidden, Readonly]);
		assert!(!sel.disabled);

		let ac = UserProfileAttributesAccessControl::new(Readwrite, Hidden, Hidden);
		let sel = tier_selector(&ac, EndUser);
		assert_eq!(sel.enabled_levels().collect::<Vec<_>>(), vec![Hidden]);
		assert!(sel.disabled);
	}

	#[test]
	fn test_selector_end_user_hidden_portal() {
		let ac = UserProfileAttributesAccessControl::new(Hidden, Readonly, Readonly);
		let sel = tier_selector(&ac, EndUser);
		assert_eq!(sel.enabled_levels().collect::<Vec<_>>(), vec![Hidden]);
		assert!(!sel.is_enabled(Readonly));
		assert!(!sel.is_enabled(Readwrite));
		assert!(sel.disabled);
	}

	#[test]
	fn test_selector_bearer() {
		let ac = UserProfileAttributesAccessControl::new(Hidden, Hidden, Hidden);
		let sel = tier_selector(&ac, Bearer);
		assert_eq!(sel.options.len(), 2);
		assert!(!sel.is_enabled(Readonly));
		assert!(sel.disabled);

		let ac = UserProfileAttributesAccessControl::new(Readonly, Readonly, Hidden);
		let sel = tier_selector(&ac, Bearer);
		assert!(sel.is_enabled(Readonly));
		assert!(!sel.is_enabled(Readwrite));
		assert!(!sel.disabled);
	}

	#[test]
	fn test_selector_portal_ui_always_enabled() {
		let ac = UserProfileAttributesAccessControl::new(Hidden, Hidden, Hidden);
		let sel = tier_selector(&ac, PortalUi);
		assert_eq!(sel.enabled_levels().count(), 3);
		assert_eq!(sel.selected, Hidden);
	}
}

// vim: ts=4
