//! Form with localStorage draft autosave and a guarded submit control.

use std::collections::BTreeMap;

use dash_store::{BrowserPrefStore, FALLBACK_FORM_ID};
use dioxus::prelude::*;

/// One input field of an [`AutosaveForm`].
#[derive(Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub input_type: String,
}

/// Form whose field values are drafted to localStorage.
///
/// The draft is restored once, synchronously, when the form mounts (before
/// any interaction is possible), rewritten on every input and cleared when
/// a submission completes. Forms without an explicit id share the
/// [`FALLBACK_FORM_ID`] record.
///
/// While a submission is in flight, the submit control is disabled and its
/// label swapped for a processing indicator; it re-enables once the handler
/// finishes so a rejected submission can be retried. The handler runs in a
/// spawned task rather than inside the submit event, so the guarded state
/// is painted before the work starts and a second click cannot slip in.
#[component]
pub fn AutosaveForm(
    #[props(default)] form_id: Option<String>,
    fields: Vec<FieldSpec>,
    submit_label: String,
    on_submit: EventHandler<BTreeMap<String, String>>,
) -> Element {
    let store = use_context::<BrowserPrefStore>();
    let form_id = form_id.unwrap_or_else(|| FALLBACK_FORM_ID.to_string());

    // Restore the draft before first paint; at most one record per form id.
    let mut values: Signal<BTreeMap<String, String>> = use_signal({
        let store = store.clone();
        let form_id = form_id.clone();
        move || store.load_form(&form_id).unwrap_or_default()
    });
    let mut submitting = use_signal(|| false);

    let on_form_submit = {
        let store = store.clone();
        let form_id = form_id.clone();
        move |evt: Event<FormData>| {
            evt.prevent_default();
            if *submitting.read() {
                return;
            }
            submitting.set(true);
            let store = store.clone();
            let form_id = form_id.clone();
            spawn(async move {
                let mut submitting = submitting;
                on_submit.call(values.read().clone());
                store.clear_form(&form_id);
                submitting.set(false);
            });
        }
    };

    let button_text = submit_text(*submitting.read(), &submit_label);

    rsx! {
        form {
            id: "{form_id}",
            "data-autosave": "true",
            onsubmit: on_form_submit,
            for field in fields.iter() {
                div {
                    key: "{field.name}",
                    class: "mb-3",
                    label { r#for: "{field.name}", "{field.label}" }
                    input {
                        id: "{field.name}",
                        name: "{field.name}",
                        r#type: "{field.input_type}",
                        value: values.read().get(&field.name).cloned().unwrap_or_default(),
                        oninput: {
                            let name = field.name.clone();
                            let store = store.clone();
                            let form_id = form_id.clone();
                            move |evt: Event<FormData>| {
                                values.write().insert(name.clone(), evt.value());
                                let draft = values.read().clone();
                                store.save_form(&form_id, &draft);
                            }
                        },
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: *submitting.read(),
                if *submitting.read() {
                    i { class: "fas fa-spinner fa-spin me-2" }
                }
                "{button_text}"
            }
        }
    }
}

/// Label for the submit control: the caller's label at rest, a processing
/// indicator while a submission is in flight.
fn submit_text<'a>(submitting: bool, label: &'a str) -> &'a str {
    if submitting {
        "Processing..."
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_control_swaps_label_while_in_flight() {
        assert_eq!(submit_text(false, "Send Message"), "Send Message");
        assert_eq!(
            submit_text(true, "Send Message"),
            "Processing...",
            "an in-flight submission shows the processing indicator"
        );
    }
}
