//! Error type shared by all portal crates

pub type PtResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	// access control
	InvalidAccessControlLevel(String),
	InvalidRank(u8),
	IndexOutOfRange(usize),
	NoPendingUpdate,

	// json pointer
	InvalidPointer(String),
	InvalidPattern(String),

	// collaborators
	NotFound,
	CollaboratorSelfDeletion,
	InvitationDuplicate,
	InvitationInvalidCode,
	InvitationDuplicateCode,

	ConfigError(String),
	ValidationError(String),

	// externals
	Io(std::io::Error),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::InvalidAccessControlLevel(level) => {
				write!(f, "unknown access control level: {}", level)
			}
			Error::InvalidRank(rank) => write!(f, "unknown access control rank: {}", rank),
			Error::IndexOutOfRange(index) => write!(f, "attribute index out of range: {}", index),
			Error::NoPendingUpdate => write!(f, "no pending update"),
			Error::InvalidPointer(ptr) => write!(f, "invalid json pointer: {:?}", ptr),
			Error::InvalidPattern(msg) => write!(f, "invalid pointer pattern: {}", msg),
			Error::NotFound => write!(f, "not found"),
			Error::CollaboratorSelfDeletion => write!(f, "cannot remove self from collaborator"),
			Error::InvitationDuplicate => write!(f, "collaborator invitation duplicate"),
			Error::InvitationInvalidCode => write!(f, "collaborator invitation invalid code"),
			Error::InvitationDuplicateCode => {
				write!(f, "collaborator invitation duplicate code")
			}
			Error::ConfigError(msg) => write!(f, "config error: {}", msg),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ConfigError(err.to_string())
	}
}

impl From<serde_yaml::Error> for Error {
	fn from(err: serde_yaml::Error) -> Self {
		Self::ConfigError(err.to_string())
	}
}

impl From<regex::Error> for Error {
	fn from(err: regex::Error) -> Self {
		Self::InvalidPattern(err.to_string())
	}
}

// vim: ts=4
