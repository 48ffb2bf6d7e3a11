//! Trailing debounce for the search prompt.
//!
//! Each keystroke schedules a commit [`SEARCH_QUIET_PERIOD`] in the future and
//! invalidates whatever was scheduled before it. The owner polls the
//! controller from its event loop; a commit is emitted only when the latest
//! scheduled deadline has passed and the value differs from the one already
//! committed. The value the controller starts with is treated as committed
//! and never emitted.

use std::time::{Duration, Instant};

/// How long the input has to stay unchanged before it is committed.
pub const SEARCH_QUIET_PERIOD: Duration = Duration::from_millis(500);

/// Identifies one scheduled commit. Rescheduling invalidates older tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone)]
struct Pending {
	token: DebounceToken,
	deadline: Instant,
}

/// Debounced view over a raw text input.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
	quiet_period: Duration,
	raw: String,
	committed: String,
	pending: Option<Pending>,
	next_token: u64,
}

impl SearchDebouncer {
	/// Controller whose initial committed value is `initial`.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		Self::with_quiet_period(initial, SEARCH_QUIET_PERIOD)
	}

	#[must_use]
	pub fn with_quiet_period(initial: impl Into<String>, quiet_period: Duration) -> Self {
		let initial = initial.into();
		Self {
			quiet_period,
			raw: initial.clone(),
			committed: initial,
			pending: None,
			next_token: 0,
		}
	}

	/// Latest raw input.
	#[must_use]
	pub fn raw(&self) -> &str {
		&self.raw
	}

	/// Latest committed value.
	#[must_use]
	pub fn committed(&self) -> &str {
		&self.committed
	}

	/// Whether a commit is scheduled but not yet due.
	#[must_use]
	pub const fn is_searching(&self) -> bool {
		self.pending.is_some()
	}

	/// Record a new raw value, rescheduling the commit.
	pub fn input(&mut self, value: impl Into<String>, now: Instant) -> DebounceToken {
		self.raw = value.into();
		self.next_token = self.next_token.wrapping_add(1);
		let token = DebounceToken(self.next_token);
		self.pending = Some(Pending {
			token,
			deadline: now + self.quiet_period,
		});
		token
	}

	/// Fire the commit scheduled under `token` if it is still current and due.
	///
	/// Returns the newly committed value when it differs from the previous one.
	pub fn fire(&mut self, token: DebounceToken, now: Instant) -> Option<String> {
		let pending = self.pending.as_ref()?;
		if pending.token != token || now < pending.deadline {
			return None;
		}
		self.pending = None;
		if self.raw == self.committed {
			return None;
		}
		self.committed = self.raw.clone();
		Some(self.committed.clone())
	}

	/// Fire whichever commit is current, if it is due.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		let token = self.pending.as_ref()?.token;
		self.fire(token, now)
	}
}
