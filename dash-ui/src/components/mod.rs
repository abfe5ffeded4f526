//! Reusable Dioxus RSX components for the dashboard shell.

mod alert;
mod autosave_form;
mod back_to_top;
mod busy_overlay;
mod calendar;
mod carousel;
mod chart_card;
mod confirm_link;
mod dropdown;
mod progress_card;
mod sidebar;

pub use alert::Alert;
pub use autosave_form::{AutosaveForm, FieldSpec};
pub use back_to_top::BackToTop;
pub use busy_overlay::BusyOverlay;
pub use calendar::{month_grid, CalendarCard};
pub use carousel::{next_slide, Testimonial, TestimonialCarousel};
pub use chart_card::ChartCard;
pub use confirm_link::ConfirmLink;
pub use dropdown::{Dropdown, DropdownEntry};
pub use progress_card::{bar_revealed, bar_width, ProgressCard, ProgressEntry};
pub use sidebar::{NavLink, Sidebar};
