pub use crate::error::{Error, PtResult};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
