//! Form autosave drafts.
//!
//! Each opted-in form keeps at most one draft record: a JSON-encoded map of
//! field name to value stored under the form's id. The draft is rewritten on
//! every input event, restored once when the form mounts, and cleared when a
//! submission completes.

use std::collections::BTreeMap;

use crate::backend::StoreBackend;
use crate::PrefStore;

/// Storage key used for forms without an explicit id.
pub const FALLBACK_FORM_ID: &str = "autosave-form";

impl<B: StoreBackend> PrefStore<B> {
    /// Overwrite the draft record for `form_id` with `fields`.
    pub fn save_form(&self, form_id: &str, fields: &BTreeMap<String, String>) {
        match serde_json::to_string(fields) {
            Ok(json) => self.backend.set(form_id, &json),
            Err(e) => log::warn!("failed to encode autosave draft for {form_id}: {e}"),
        }
    }

    /// Load the draft record for `form_id`.
    ///
    /// A record that no longer parses as a string map is treated as garbage:
    /// it is removed and `None` is returned, so a corrupt draft can never
    /// wedge a form at load time.
    pub fn load_form(&self, form_id: &str) -> Option<BTreeMap<String, String>> {
        let raw = self.backend.get(form_id)?;
        match serde_json::from_str(&raw) {
            Ok(fields) => Some(fields),
            Err(e) => {
                log::warn!("discarding malformed autosave draft for {form_id}: {e}");
                self.backend.remove(form_id);
                None
            }
        }
    }

    /// Drop the draft record for `form_id`.
    pub fn clear_form(&self, form_id: &str) {
        self.backend.remove(form_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = PrefStore::in_memory();
        let draft = fields(&[("name", "Ada"), ("email", "ada@example.com")]);
        store.save_form("contact-form", &draft);
        assert_eq!(store.load_form("contact-form"), Some(draft));
    }

    #[test]
    fn save_overwrites_prior_record() {
        let store = PrefStore::in_memory();
        store.save_form("f", &fields(&[("a", "1")]));
        store.save_form("f", &fields(&[("a", "2"), ("b", "3")]));
        assert_eq!(
            store.load_form("f"),
            Some(fields(&[("a", "2"), ("b", "3")])),
            "latest draft wins"
        );
    }

    #[test]
    fn clear_then_load_is_absent() {
        let store = PrefStore::in_memory();
        store.save_form(FALLBACK_FORM_ID, &fields(&[("q", "x")]));
        store.clear_form(FALLBACK_FORM_ID);
        assert_eq!(store.load_form(FALLBACK_FORM_ID), None);
    }

    #[test]
    fn load_of_unknown_form_is_absent() {
        let store = PrefStore::in_memory();
        assert_eq!(store.load_form("never-saved"), None);
    }

    #[test]
    fn malformed_record_is_discarded() {
        let backend = MemoryBackend::new();
        let store = PrefStore::new(backend.clone());
        backend.set("f", "{not json");
        assert_eq!(store.load_form("f"), None, "garbage should not parse");
        assert_eq!(backend.get("f"), None, "garbage record should be removed");
    }

    #[test]
    fn empty_draft_round_trips() {
        let store = PrefStore::in_memory();
        store.save_form("f", &BTreeMap::new());
        assert_eq!(store.load_form("f"), Some(BTreeMap::new()));
    }

    #[test]
    fn drafts_are_independent_per_form_id() {
        let store = PrefStore::in_memory();
        store.save_form("a", &fields(&[("x", "1")]));
        store.save_form("b", &fields(&[("x", "2")]));
        store.clear_form("a");
        assert_eq!(store.load_form("a"), None);
        assert_eq!(store.load_form("b"), Some(fields(&[("x", "2")])));
    }
}
