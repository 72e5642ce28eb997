pub use portal_types::error::{Error, PtResult};

pub use tracing::{debug, info, warn};

// vim: ts=4
