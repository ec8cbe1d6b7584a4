// src/core/profile.rs
use std::sync::Arc;

use crate::hosts::FormFiller;
use crate::models::ProfileRecord;
use crate::notify::{Notifier, ToastKind};
use crate::storage::{self, StorageArea, AUTOFILL_KEY};

/// Owns the single autofill record: load at view start, field-by-field edits
/// in memory, whole-record save, clear. Every operation completes
/// synchronously; there are no partial states.
pub struct ProfileStore {
    record: ProfileRecord,
    storage: Arc<StorageArea>,
    notifier: Arc<dyn Notifier>,
}

impl ProfileStore {
    /// Initializes from the persisted record, falling back to the all-default
    /// record when nothing is stored or the stored value fails to
    /// deserialize. The fallback is silent by design.
    pub fn load(storage: Arc<StorageArea>, notifier: Arc<dyn Notifier>) -> Self {
        let record = storage.get(AUTOFILL_KEY).unwrap_or_default();
        Self {
            record,
            storage,
            notifier,
        }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    /// In-memory update of one named field; no validation. Unknown field
    /// names are ignored.
    pub fn set_field(&mut self, name: &str, value: &str) {
        if !self.record.set(name, value) {
            log::warn!("Ignoring unknown autofill field '{}'", name);
        }
    }

    /// Persists the entire current record as one unit.
    pub fn save(&self) -> storage::Result<()> {
        self.storage.set(AUTOFILL_KEY, &self.record)?;
        self.notifier
            .notify(ToastKind::Success, "Autofill data saved successfully!", None);
        Ok(())
    }

    /// Resets the in-memory record to the default and removes the persisted
    /// key entirely.
    pub fn clear(&mut self) -> storage::Result<()> {
        self.record = ProfileRecord::default();
        self.storage.remove(AUTOFILL_KEY)?;
        self.notifier
            .notify(ToastKind::Success, "Autofill data cleared!", None);
        Ok(())
    }

    /// Describes what the external form-filling host would do with the
    /// current record. No actual page is touched.
    pub fn simulate_fill(&self, filler: &dyn FormFiller) {
        filler.fill(&self.record);
        self.notifier.notify(
            ToastKind::Success,
            "Simulated form fill",
            Some(&format!(
                "Would fill {} field(s) on the target page",
                self.record.filled_fields()
            )),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    fn open(dir: &std::path::Path) -> (ProfileStore, Arc<RecordingNotifier>) {
        let storage = Arc::new(StorageArea::open(dir).unwrap());
        let notifier = Arc::new(RecordingNotifier::default());
        (ProfileStore::load(storage, notifier.clone()), notifier)
    }

    #[test]
    fn save_then_fresh_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();

        let (mut store, _) = open(dir.path());
        store.set_field("name", "Asha Rao");
        store.set_field("pincode", "560001");
        store.save().unwrap();
        let saved = store.record().clone();
        drop(store);

        // Simulated process restart.
        let (reloaded, _) = open(dir.path());
        assert_eq!(reloaded.record(), &saved);
    }

    #[test]
    fn clear_resets_memory_and_removes_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(StorageArea::open(dir.path()).unwrap());
        let notifier = Arc::new(RecordingNotifier::default());

        let mut store = ProfileStore::load(storage.clone(), notifier);
        store.set_field("email", "a@b.c");
        store.save().unwrap();
        store.clear().unwrap();

        assert_eq!(store.record(), &ProfileRecord::default());
        assert!(!storage.contains(AUTOFILL_KEY));

        let (reloaded, _) = open(dir.path());
        assert_eq!(reloaded.record(), &ProfileRecord::default());
    }

    #[test]
    fn load_falls_back_on_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("autofillData.json"), "][").unwrap();
        let (store, _) = open(dir.path());
        assert_eq!(store.record(), &ProfileRecord::default());
        assert_eq!(store.record().nationality, "Indian");
    }

    #[test]
    fn unknown_field_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, _) = open(dir.path());
        let before = store.record().clone();
        store.set_field("favourite_color", "teal");
        assert_eq!(store.record(), &before);
    }

    #[test]
    fn simulate_fill_reports_filled_field_count() {
        let dir = tempfile::tempdir().unwrap();
        let (mut store, notifier) = open(dir.path());
        store.set_field("name", "Ravi");
        store.set_field("city", "Delhi");

        store.simulate_fill(&crate::hosts::StubFormFiller);

        let toast = notifier.toasts().pop().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        // name + city + the defaulted nationality.
        assert_eq!(
            toast.description.as_deref(),
            Some("Would fill 3 field(s) on the target page")
        );
    }
}
