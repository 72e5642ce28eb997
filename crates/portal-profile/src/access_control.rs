//! Access control cascade
//!
//! Lowering the level of an outer tier may force inner tiers down with it:
//!
//! | changed tier | new level | forced                                   |
//! |--------------|-----------|------------------------------------------|
//! | `end_user`   | any       | nothing                                  |
//! | `bearer`     | `hidden`  | `end_user` down to `hidden`              |
//! | `portal_ui`  | any       | `bearer` and `end_user` down to the new level |
//!
//! Forced checks are evaluated against the record as it was before the
//! change. Checks that would not lower anything are dropped.

use serde::Serialize;

use portal_core::JsonPointer;

use crate::prelude::*;

/// Sets `tier` to `level`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessControlAdjustment {
	pub tier: AccessControlTier,
	pub level: AccessControlLevel,
}

impl AccessControlAdjustment {
	pub fn new(tier: AccessControlTier, level: AccessControlLevel) -> Self {
		Self { tier, level }
	}

	pub fn apply(
		&self,
		access_control: UserProfileAttributesAccessControl,
	) -> UserProfileAttributesAccessControl {
		access_control.with(self.tier, self.level)
	}
}

/// Lower `target` to `reference` if it is currently above it
pub fn adjust_access_control(
	access_control: &UserProfileAttributesAccessControl,
	target: AccessControlTier,
	reference: AccessControlLevel,
) -> Option<AccessControlAdjustment> {
	if access_control.get(target).rank() <= reference.rank() {
		return None;
	}
	Some(AccessControlAdjustment::new(target, reference))
}

/// A tier change together with the changes it forces on other tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingUpdate {
	pub index: usize,
	pub key: AccessControlTier,
	pub main_adjustment: AccessControlAdjustment,
	pub other_adjustments: Vec<AccessControlAdjustment>,
}

impl PendingUpdate {
	pub fn has_side_effects(&self) -> bool {
		!self.other_adjustments.is_empty()
	}

	/// Main adjustment first, then side effects in order
	pub fn adjustments(&self) -> impl Iterator<Item = &AccessControlAdjustment> {
		std::iter::once(&self.main_adjustment).chain(self.other_adjustments.iter())
	}

	/// Resulting record of applying this update to `access_control`
	pub fn apply_to(
		&self,
		access_control: UserProfileAttributesAccessControl,
	) -> UserProfileAttributesAccessControl {
		self.adjustments().fold(access_control, |ac, adjustment| adjustment.apply(ac))
	}

	/// Data of the confirmation prompt shown before side effects are applied
	pub fn prompt<T: AccessControlItem>(&self, items: &[T]) -> PtResult<PendingUpdatePrompt> {
		let item = items.get(self.index).ok_or(Error::IndexOutOfRange(self.index))?;
		let field_name = match item.pointer().parse::<JsonPointer>() {
			Ok(pointer) => pointer.first_segment().unwrap_or_default().to_string(),
			Err(err) => {
				warn!(pointer = %item.pointer(), "Attribute pointer is malformed: {}", err);
				item.pointer().to_string()
			}
		};
		let affected = match self.other_adjustments.as_slice() {
			[single] => single.tier.as_str().to_string(),
			_ => "other".to_string(),
		};
		Ok(PendingUpdatePrompt {
			field_name,
			party: self.main_adjustment.tier,
			affected,
			level: self.main_adjustment.level,
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingUpdatePrompt {
	pub field_name: String,
	/// Tier the user changed
	pub party: AccessControlTier,
	/// The single forced tier, or `"other"` when several are forced
	pub affected: String,
	pub level: AccessControlLevel,
}

/// Compute the update for setting `key` to `new_value` on item `index`
pub fn make_update<T: AccessControlItem>(
	items: &[T],
	index: usize,
	key: AccessControlTier,
	new_value: AccessControlLevel,
) -> PtResult<PendingUpdate> {
	let access_control = items.get(index).ok_or(Error::IndexOutOfRange(index))?.access_control();

	let forced: Vec<Option<AccessControlAdjustment>> = match key {
		AccessControlTier::EndUser => Vec::new(),
		AccessControlTier::Bearer => {
			if new_value == AccessControlLevel::Hidden {
				vec![adjust_access_control(access_control, AccessControlTier::EndUser, new_value)]
			} else {
				Vec::new()
			}
		}
		AccessControlTier::PortalUi => vec![
			adjust_access_control(access_control, AccessControlTier::Bearer, new_value),
			adjust_access_control(access_control, AccessControlTier::EndUser, new_value),
		],
	};
	let other_adjustments: Vec<_> = forced.into_iter().flatten().collect();

	debug!(index, tier = %key, level = %new_value, forced = other_adjustments.len(), "Computed access control update");

	Ok(PendingUpdate {
		index,
		key,
		main_adjustment: AccessControlAdjustment::new(key, new_value),
		other_adjustments,
	})
}

/// Apply `update` to a copy of `items`
pub fn apply_update<T: AccessControlItem>(items: &[T], update: &PendingUpdate) -> PtResult<Vec<T>> {
	let mut new_items = items.to_vec();
	let item = new_items.get_mut(update.index).ok_or(Error::IndexOutOfRange(update.index))?;
	let access_control = update.apply_to(*item.access_control());
	item.set_access_control(access_control);
	Ok(new_items)
}


// vim: ts=4
