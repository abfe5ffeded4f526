//! Admin dashboard shell.
//!
//! Wires the shared `dash-ui` components into a single page: sidebar with a
//! persisted collapsed preference, topbar with search and notification
//! dropdowns, six sample charts, an inline calendar, a testimonial carousel
//! and a contact form with localStorage draft autosave.
//!
//! Startup order:
//! 1. Restore the sidebar preference (gated by viewport width) and form
//!    drafts synchronously, before any interaction is possible.
//! 2. Attach scroll/resize watchers and activate tooltip/popover markers.
//! 3. Schedule the notification badge refresh interval (cancellable, owned
//!    by the root component).

use std::collections::BTreeMap;
use std::rc::Rc;

use dash_store::BrowserPrefStore;
use dash_ui::components::{
    Alert, AutosaveForm, BackToTop, BusyOverlay, CalendarCard, ChartCard, ConfirmLink, Dropdown,
    DropdownEntry, FieldSpec, NavLink, ProgressCard, ProgressEntry, Sidebar, Testimonial,
    TestimonialCarousel,
};
use dash_ui::state::UiState;
use dash_ui::{badge, charts, js_bridge, viewport};
use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("admin-root"))
        .launch(App);
}

fn nav_links() -> Vec<NavLink> {
    [
        ("Dashboard", "#dashboard", "fa fa-tachometer-alt"),
        ("Charts", "#charts", "fa fa-chart-bar"),
        ("Widgets", "#widgets", "fa fa-th"),
        ("Forms", "#forms", "fa fa-keyboard"),
    ]
    .iter()
    .map(|(label, href, icon)| NavLink {
        label: label.to_string(),
        href: href.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

/// Notification menu entries. The first row is the header; the badge shows
/// the remaining count.
fn notification_entries() -> Vec<DropdownEntry> {
    [
        ("Notifications", "#"),
        ("Profile updated", "#"),
        ("New user added", "#"),
        ("Password changed", "#"),
    ]
    .iter()
    .map(|(label, href)| DropdownEntry {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
}

fn profile_entries() -> Vec<DropdownEntry> {
    [("My Profile", "#"), ("Settings", "#"), ("Log Out", "#")]
        .iter()
        .map(|(label, href)| DropdownEntry {
            label: label.to_string(),
            href: href.to_string(),
        })
        .collect()
}

fn testimonials() -> Vec<Testimonial> {
    [
        (
            "The dashboard gave us a clear view of our pipeline in days, not weeks.",
            "Maria Keller",
            "Operations Lead",
        ),
        (
            "Setup was painless and the team actually enjoys using it.",
            "Tom Akintola",
            "Founder",
        ),
        (
            "Exactly the overview our support staff was missing.",
            "Lena Fischer",
            "Support Manager",
        ),
    ]
    .iter()
    .map(|(quote, author, profession)| Testimonial {
        quote: quote.to_string(),
        author: author.to_string(),
        profession: profession.to_string(),
    })
    .collect()
}

fn sales_targets() -> Vec<ProgressEntry> {
    [("Online Sales", 85), ("In-Store Sales", 70), ("Returns", 35)]
        .iter()
        .map(|(label, value)| ProgressEntry {
            label: label.to_string(),
            value: *value,
        })
        .collect()
}

fn contact_fields() -> Vec<FieldSpec> {
    [
        ("name", "Your Name", "text"),
        ("email", "Your Email", "email"),
        ("subject", "Subject", "text"),
    ]
    .iter()
    .map(|(name, label, input_type)| FieldSpec {
        name: name.to_string(),
        label: label.to_string(),
        input_type: input_type.to_string(),
    })
    .collect()
}

#[component]
fn App() -> Element {
    let store = use_context_provider(BrowserPrefStore::local);
    let mut state = use_context_provider(UiState::new);

    let notifications = notification_entries();
    let notification_total = notifications.len();

    // ─── Restore persisted state synchronously, before first paint ───
    use_hook({
        let store = store.clone();
        move || {
            // Collapsed state saved on desktop is not applied on a narrow
            // viewport.
            state
                .sidebar_collapsed
                .set(store.collapsed_for_viewport(viewport::viewport_width()));
            state.notification_count.set(notification_total);
        }
    });

    // ─── Mount: attach watchers, activate declarative widgets ───
    use_effect(move || {
        viewport::on_window_event("scroll", move || {
            let mut state = state;
            let visible = viewport::back_to_top_visible(viewport::scroll_y());
            if *state.show_back_to_top.read() != visible {
                state.show_back_to_top.set(visible);
            }
        });

        viewport::on_window_event("resize", move || {
            let mut state = state;
            let width = viewport::viewport_width();
            if viewport::force_close_on_resize(width, *state.sidebar_open.read()) {
                state.sidebar_open.set(false);
                viewport::set_body_scroll_lock(false);
            }
        });

        js_bridge::init_tooltips();
        js_bridge::init_popovers();
    });

    // ─── Periodic badge refresh ───
    let _badge_refresh = use_hook(move || {
        Rc::new(Interval::new(viewport::BADGE_REFRESH_MS, move || {
            // A real deployment would fetch here; the sample recounts the
            // static menu.
            let mut state = state;
            state.notification_count.set(notification_total);
        }))
    });

    let collapsed = *state.sidebar_collapsed.read();
    let content_class = if collapsed { "content expanded" } else { "content" };

    rsx! {
        BusyOverlay {}
        Sidebar { brand: "DASHMIN".to_string(), links: nav_links() }
        div {
            class: "{content_class}",
            Topbar { notifications }
            div {
                id: "dashboard",
                class: "container-fluid pt-4",
                Alert {
                    kind: "success".to_string(),
                    message: "Welcome back! Your dashboard is up to date.".to_string(),
                }
                ChartsSection {}
                WidgetsSection {}
                FormsSection {}
            }
        }
        BackToTop {}
    }
}

#[component]
fn Topbar(notifications: Vec<DropdownEntry>) -> Element {
    let mut state = use_context::<UiState>();
    let store = use_context::<BrowserPrefStore>();
    let badge_value = badge::badge_count(*state.notification_count.read());

    let on_mobile_toggle = move |_| {
        let open = !*state.sidebar_open.read();
        state.sidebar_open.set(open);
        if !viewport::is_desktop(viewport::viewport_width()) {
            viewport::set_body_scroll_lock(open);
        }
    };

    let on_collapse_toggle = move |_| {
        let collapsed = !*state.sidebar_collapsed.read();
        state.sidebar_collapsed.set(collapsed);
        store.set_collapsed(collapsed);
    };

    let on_search = move |evt: Event<FormData>| {
        let query = evt.value();
        if query.len() > 2 {
            // Search is console-only; there is no backend to call.
            gloo_console::log!("Searching for:", query);
        }
    };

    let on_refresh = move |_| {
        let guard = state.begin_busy();
        spawn(async move {
            // Stand-in for a notifications fetch.
            TimeoutFuture::new(800).await;
            gloo_console::log!("notifications refreshed");
            drop(guard);
        });
    };

    rsx! {
        nav {
            class: "navbar sticky-top",
            button {
                class: "sidebar-toggler",
                onclick: on_mobile_toggle,
                i { class: "fa fa-bars" }
            }
            button {
                id: "sidebarToggle",
                "data-bs-toggle": "tooltip",
                title: "Collapse sidebar",
                onclick: on_collapse_toggle,
                i { class: "fa fa-angle-double-left" }
            }
            input {
                id: "globalSearch",
                class: "form-control",
                r#type: "search",
                placeholder: "Search",
                oninput: on_search,
            }
            button {
                class: "btn-refresh",
                "data-bs-toggle": "tooltip",
                title: "Refresh notifications",
                onclick: on_refresh,
                i { class: "fa fa-sync" }
            }
            Dropdown {
                id: "notifications".to_string(),
                trigger_label: "Notifications".to_string(),
                entries: notifications,
                badge: badge_value.unwrap_or(0),
            }
            Dropdown {
                id: "profile".to_string(),
                trigger_label: "Jane Doe".to_string(),
                entries: profile_entries(),
            }
        }
    }
}

#[component]
fn ChartsSection() -> Element {
    rsx! {
        div {
            id: "charts",
            class: "row g-4",
            for widget in charts::sample_charts() {
                div {
                    key: "{widget.canvas_id}",
                    class: "col-sm-12 col-xl-6",
                    ChartCard {
                        title: widget.title.to_string(),
                        canvas_id: widget.canvas_id.to_string(),
                        config_json: widget.config_json(),
                    }
                }
            }
        }
    }
}

#[component]
fn WidgetsSection() -> Element {
    rsx! {
        div {
            id: "widgets",
            class: "row g-4",
            div {
                class: "col-sm-12 col-xl-6",
                CalendarCard {}
            }
            div {
                class: "col-sm-12 col-xl-6",
                TestimonialCarousel { slides: testimonials() }
            }
            div {
                class: "col-sm-12 col-xl-6",
                ProgressCard {
                    id: "sales-targets".to_string(),
                    title: "Sales Targets".to_string(),
                    entries: sales_targets(),
                }
            }
        }
    }
}

#[component]
fn FormsSection() -> Element {
    let on_submit = move |fields: BTreeMap<String, String>| {
        log::info!("contact form submitted with {} fields", fields.len());
    };

    rsx! {
        div {
            id: "forms",
            class: "row g-4",
            div {
                class: "col-sm-12 col-xl-6",
                h6 { "Contact" }
                AutosaveForm {
                    form_id: "contact-form".to_string(),
                    fields: contact_fields(),
                    submit_label: "Send Message".to_string(),
                    on_submit,
                }
            }
            div {
                class: "col-sm-12 col-xl-6",
                h6 { "Danger Zone" }
                ConfirmLink {
                    href: "#account-deleted".to_string(),
                    message: "Are you sure you want to delete your account?".to_string(),
                    class: "btn btn-danger".to_string(),
                    "Delete Account"
                }
            }
        }
    }
}
