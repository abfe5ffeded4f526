//! Persistent key-value bridge for dashboard UI state.
//!
//! This crate owns the two pieces of state the dashboard persists across
//! page loads:
//! - the sidebar-collapsed preference (a single boolean under a fixed key)
//! - per-form autosave drafts (a JSON map of field name to value, keyed by
//!   the form's id)
//!
//! # Architecture
//!
//! Storage access goes through the [`backend::StoreBackend`] trait:
//! - [`backend::LocalStorageBackend`] talks to browser `localStorage` on
//!   wasm32 and degrades to a no-op elsewhere
//! - [`backend::MemoryBackend`] is a plain in-memory map, used in tests and
//!   available on every target
//!
//! All writes are best-effort: a missing or full storage area loses the
//! write silently rather than surfacing an error to the UI.
//!
//! # Usage
//!
//! ```rust
//! use dash_store::PrefStore;
//!
//! let store = PrefStore::in_memory();
//! store.set_collapsed(true);
//! assert!(store.collapsed());
//! // Collapsed state saved on desktop is not applied on a narrow viewport.
//! assert!(!store.collapsed_for_viewport(480));
//! ```

pub mod backend;
mod forms;

pub use forms::FALLBACK_FORM_ID;

use backend::{LocalStorageBackend, MemoryBackend, StoreBackend};

/// Storage key for the sidebar-collapsed preference.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Minimum viewport width (CSS pixels) at which the desktop layout applies.
///
/// The persisted collapsed state is only restored at or above this width so
/// a preference saved on desktop never squeezes the mobile layout.
pub const DESKTOP_BREAKPOINT: u32 = 992;

/// Preference store bound to a storage backend.
///
/// Cheaply cloneable; clones share the same backend, so every component
/// holding a clone observes the same persisted state.
#[derive(Clone)]
pub struct PrefStore<B> {
    backend: B,
}

/// Store bound to browser `localStorage` (no-op storage off wasm32).
pub type BrowserPrefStore = PrefStore<LocalStorageBackend>;

impl PrefStore<MemoryBackend> {
    /// Store backed by an in-memory map. Used in tests and on non-browser
    /// targets.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }
}

impl PrefStore<LocalStorageBackend> {
    /// Store backed by browser `localStorage`.
    pub fn local() -> Self {
        Self::new(LocalStorageBackend)
    }
}

impl<B: StoreBackend> PrefStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist the sidebar-collapsed flag as `"true"`/`"false"`.
    pub fn set_collapsed(&self, flag: bool) {
        self.backend
            .set(SIDEBAR_COLLAPSED_KEY, if flag { "true" } else { "false" });
    }

    /// Read the raw sidebar-collapsed flag.
    ///
    /// Only the literal string `"true"` counts as collapsed; anything else,
    /// including an absent key, reads as not collapsed.
    pub fn collapsed(&self) -> bool {
        self.backend
            .get(SIDEBAR_COLLAPSED_KEY)
            .is_some_and(|v| v == "true")
    }

    /// Collapsed flag gated by viewport width.
    ///
    /// Returns the stored flag only when `width` is at least
    /// [`DESKTOP_BREAKPOINT`]; narrower viewports always get `false`.
    pub fn collapsed_for_viewport(&self, width: u32) -> bool {
        width >= DESKTOP_BREAKPOINT && self.collapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_round_trips_both_values() {
        let store = PrefStore::in_memory();
        store.set_collapsed(true);
        assert!(store.collapsed(), "stored true should read back true");
        store.set_collapsed(false);
        assert!(!store.collapsed(), "stored false should read back false");
    }

    #[test]
    fn collapsed_defaults_to_false_when_absent() {
        let store = PrefStore::in_memory();
        assert!(!store.collapsed(), "missing key should read as not collapsed");
    }

    #[test]
    fn collapsed_ignores_non_true_strings() {
        let backend = MemoryBackend::new();
        let store = PrefStore::new(backend.clone());
        backend.set(SIDEBAR_COLLAPSED_KEY, "TRUE");
        assert!(!store.collapsed(), "only the literal \"true\" counts");
        backend.set(SIDEBAR_COLLAPSED_KEY, "1");
        assert!(!store.collapsed());
    }

    #[test]
    fn viewport_gate_blocks_narrow_widths() {
        let store = PrefStore::in_memory();
        store.set_collapsed(true);
        assert!(
            store.collapsed_for_viewport(DESKTOP_BREAKPOINT),
            "desktop width should apply the stored preference"
        );
        assert!(
            !store.collapsed_for_viewport(DESKTOP_BREAKPOINT - 1),
            "narrow viewport must not auto-collapse"
        );
    }

    #[test]
    fn clones_share_the_same_backend() {
        let store = PrefStore::in_memory();
        let other = store.clone();
        store.set_collapsed(true);
        assert!(other.collapsed(), "clone should see writes via shared map");
    }
}
