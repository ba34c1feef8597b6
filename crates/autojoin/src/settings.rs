//! The global autojoin switch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

/// Source of the global autojoin setting.
///
/// Read once per [`join_insert`](crate::AutojoinLists::join_insert) or
/// [`join_delete`](crate::AutojoinLists::join_delete) call.
pub trait JoinSettings: Send + Sync {
	fn autojoin_enabled(&self) -> bool;
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

/// Shared on/off toggle for autojoining with change listeners.
pub struct AutojoinToggle {
	enabled: AtomicBool,
	listeners: Mutex<Vec<Listener>>,
}

impl AutojoinToggle {
	pub fn new(enabled: bool) -> Self {
		Self {
			enabled: AtomicBool::new(enabled),
			listeners: Mutex::new(Vec::new()),
		}
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::Acquire)
	}

	/// Sets the autojoin state.
	///
	/// Returns `true` and notifies listeners if the value changed.
	pub fn set(&self, enabled: bool) -> bool {
		if self.enabled.swap(enabled, Ordering::AcqRel) == enabled {
			return false;
		}
		tracing::debug!(enabled, "Autojoin toggled");
		let listeners = self.listeners.lock().clone();
		for listener in &listeners {
			listener(enabled);
		}
		true
	}

	/// Registers a listener called with the new state after every change.
	///
	/// Listeners run without the listener list locked, so they may register
	/// further listeners. Those see the next change, not the current one.
	pub fn on_change(&self, listener: impl Fn(bool) + Send + Sync + 'static) {
		self.listeners.lock().push(Arc::new(listener));
	}
}

impl Default for AutojoinToggle {
	fn default() -> Self {
		Self::new(true)
	}
}

impl std::fmt::Debug for AutojoinToggle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AutojoinToggle")
			.field("enabled", &self.is_enabled())
			.field("listeners", &self.listeners.lock().len())
			.finish()
	}
}

impl JoinSettings for AutojoinToggle {
	fn autojoin_enabled(&self) -> bool {
		self.is_enabled()
	}
}
