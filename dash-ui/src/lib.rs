//! Shared Dioxus components and Chart.js bridge for the admin dashboard.
//!
//! This crate provides:
//! - `state`: reactive [`state::UiState`] signal bundle owning all mutable
//!   view state (sidebar flags, dropdown exclusivity, busy counter, badge)
//! - `viewport`: layout constants and window/scroll glue
//! - `keyboard` / `badge`: pure view-logic helpers
//! - `charts`: the fixed sample chart configurations
//! - `js_bridge`: Rust wrappers that drive Chart.js and Bootstrap widgets
//!   via `js_sys::eval()`
//! - `components`: reusable RSX components (sidebar, dropdowns, alerts,
//!   autosave form, calendar, carousel, chart cards)

pub mod badge;
pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod keyboard;
pub mod state;
pub mod viewport;
