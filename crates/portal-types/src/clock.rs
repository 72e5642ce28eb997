//! Time source abstraction

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
	fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_utc(&self) -> DateTime<Utc> {
		Utc::now()
	}
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
	fn now_utc(&self) -> DateTime<Utc> {
		self.0
	}
}

// vim: ts=4
