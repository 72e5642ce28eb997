pub use portal_types::access_control::{
	AccessControlItem, AccessControlLevel, AccessControlTier, UserProfileAttributesAccessControl,
};
pub use portal_types::error::{Error, PtResult};

pub use tracing::{debug, info, warn};

// vim: ts=4
