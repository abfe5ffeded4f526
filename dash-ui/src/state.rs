//! Application view state managed via Dioxus context.
//!
//! `UiState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<UiState>()`. Every mutable view flag lives here rather
//! than in ambient globals or scattered DOM classes.

use dioxus::prelude::*;

/// Shared view state for the dashboard shell.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Mobile overlay mode: sidebar slid over the content.
    pub sidebar_open: Signal<bool>,
    /// Desktop narrow mode: sidebar reduced to icons.
    pub sidebar_collapsed: Signal<bool>,
    /// Id of the currently open dropdown, if any. At most one is open.
    pub open_dropdown: Signal<Option<String>>,
    /// Number of in-flight requests; the busy overlay shows while > 0.
    pub busy: Signal<u32>,
    /// Entries in the notification menu, including the header row.
    pub notification_count: Signal<usize>,
    /// Whether the back-to-top control is shown.
    pub show_back_to_top: Signal<bool>,
}

impl UiState {
    /// Create a new UiState with default signal values.
    pub fn new() -> Self {
        Self {
            sidebar_open: Signal::new(false),
            sidebar_collapsed: Signal::new(false),
            open_dropdown: Signal::new(None),
            busy: Signal::new(0),
            notification_count: Signal::new(0),
            show_back_to_top: Signal::new(false),
        }
    }

    /// Open `id`, closing whichever dropdown was open before; close it if it
    /// was already the open one.
    pub fn toggle_dropdown(&mut self, id: &str) {
        let already_open = self
            .open_dropdown
            .read()
            .as_deref()
            .is_some_and(|open| open == id);
        self.open_dropdown
            .set(if already_open { None } else { Some(id.to_string()) });
    }

    pub fn close_dropdowns(&mut self) {
        if self.open_dropdown.read().is_some() {
            self.open_dropdown.set(None);
        }
    }

    pub fn is_dropdown_open(&self, id: &str) -> bool {
        self.open_dropdown
            .read()
            .as_deref()
            .is_some_and(|open| open == id)
    }

    /// Mark one request as in flight. The returned guard decrements the
    /// counter when dropped, so the overlay hides once the last request
    /// completes.
    pub fn begin_busy(&mut self) -> BusyGuard {
        let current = *self.busy.read();
        self.busy.set(current + 1);
        BusyGuard { busy: self.busy }
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.read() > 0
    }
}

/// RAII guard pairing every busy increment with exactly one decrement.
pub struct BusyGuard {
    busy: Signal<u32>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let current = *self.busy.read();
        self.busy.set(current.saturating_sub(1));
    }
}
