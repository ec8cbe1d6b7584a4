// src/core/schedule.rs
use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use thiserror::Error;
use url::Url;

use crate::core::clock::{minute_stamp, Clock};
use crate::hosts::TabHost;
use crate::models::ScheduleEntry;
use crate::notify::{Notifier, ToastKind};
use crate::storage::{StorageArea, SCHEDULES_KEY};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("'{0}' is not a valid 24-hour HH:MM time")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Owns the ordered list of schedule entries: creation, toggling, deletion,
/// and the once-a-minute match evaluation.
///
/// The original interface keeps this list in memory only, so a restart loses
/// every schedule. That stays the default here; `with_storage` opts into
/// persisting the list under the `scheduledSites` key instead.
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
    storage: Option<Arc<StorageArea>>,
    notifier: Arc<dyn Notifier>,
}

impl ScheduleStore {
    /// In-memory store, faithful to the original behavior.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            entries: Vec::new(),
            storage: None,
            notifier,
        }
    }

    /// Storage-backed store: loads any persisted list and writes it back
    /// after every mutation.
    pub fn with_storage(storage: Arc<StorageArea>, notifier: Arc<dyn Notifier>) -> Self {
        let entries = storage
            .get::<Vec<ScheduleEntry>>(SCHEDULES_KEY)
            .unwrap_or_default();
        Self {
            entries,
            storage: Some(storage),
            notifier,
        }
    }

    /// Creates a schedule from raw user input and appends it to the list
    /// (append order is display order). The URL gets `https://` prepended
    /// when no scheme was typed; the site name falls back to the hostname.
    pub fn add(&mut self, url_input: &str, time: &str, site_name: &str) -> Result<ScheduleEntry> {
        if url_input.trim().is_empty() || time.trim().is_empty() {
            self.notifier
                .notify(ToastKind::Error, "Please fill in all fields", None);
            return Err(ScheduleError::MissingFields);
        }

        // The original relied on a time-picker widget; terminal input is free
        // text, so the HH:MM shape is enforced here to keep matching exact.
        if time.len() != 5 || NaiveTime::parse_from_str(time, "%H:%M").is_err() {
            self.notifier.notify(
                ToastKind::Error,
                &format!("'{}' is not a valid time", time),
                Some("Use 24-hour HH:MM, e.g. 09:30"),
            );
            return Err(ScheduleError::InvalidTime(time.to_string()));
        }

        let url = normalize_url(url_input);
        let site_name = if site_name.trim().is_empty() {
            hostname_of(&url).unwrap_or_else(|| url.clone())
        } else {
            site_name.trim().to_string()
        };

        let entry = ScheduleEntry {
            id: self.next_id(),
            url,
            time: time.to_string(),
            enabled: true,
            site_name,
        };

        log::debug!("Scheduled {} ({}) at {}", entry.site_name, entry.url, entry.time);
        self.entries.push(entry.clone());
        self.persist();
        self.notifier
            .notify(ToastKind::Success, "Website scheduled successfully!", None);
        Ok(entry)
    }

    // Millisecond creation timestamp, bumped past any collision so ids stay
    // unique even for several adds inside the same millisecond.
    fn next_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        while self.entries.iter().any(|e| e.id == stamp.to_string()) {
            stamp += 1;
        }
        stamp.to_string()
    }

    /// Flips `enabled` for the matching entry; no-op when absent.
    pub fn toggle(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.enabled = !entry.enabled;
            log::debug!("Toggled {} to enabled = {}", entry.id, entry.enabled);
            self.persist();
        }
    }

    /// Removes the matching entry; no-op when absent.
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() != before {
            self.persist();
            self.notifier
                .notify(ToastKind::Success, "Schedule removed", None);
        }
    }

    /// Read-only snapshot, insertion order.
    pub fn list(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One evaluation pass: every enabled entry whose `time` equals the
    /// current wall clock formatted `HH:MM` (exact string equality, no
    /// tolerance window) fires a toast and asks the tab host to open it.
    /// Returns how many entries fired.
    ///
    /// An entry whose minute falls between two passes never fires that day;
    /// there is no catch-up, and no guard against a minute being sampled
    /// twice. Both limits are inherited from the original.
    pub fn check_due(&self, clock: &dyn Clock, tabs: &dyn TabHost) -> usize {
        let now = minute_stamp(clock);
        let mut fired = 0;

        for entry in self.entries.iter().filter(|e| e.enabled && e.time == now) {
            self.notifier.notify(
                ToastKind::Success,
                &format!("Opening {}", entry.display_label()),
                Some(&format!("Scheduled for {}", entry.time)),
            );
            log::info!("Would open: {} at {}", entry.url, entry.time);
            tabs.open_tab(&entry.url);
            fired += 1;
        }

        fired
    }

    fn persist(&self) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set(SCHEDULES_KEY, &self.entries) {
                log::warn!("Failed to persist schedule list: {}", e);
            }
        }
    }
}

fn normalize_url(input: &str) -> String {
    let input = input.trim();
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

fn hostname_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::hosts::RecordingTabHost;
    use crate::notify::RecordingNotifier;

    fn store() -> (ScheduleStore, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        (ScheduleStore::new(notifier.clone()), notifier)
    }

    #[test]
    fn add_prepends_scheme_and_defaults_site_name() {
        let (mut store, _) = store();
        let entry = store.add("irctc.co.in", "09:30", "").unwrap();
        assert_eq!(entry.url, "https://irctc.co.in");
        assert_eq!(entry.site_name, "irctc.co.in");
        assert!(entry.enabled);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn add_keeps_explicit_scheme_and_name() {
        let (mut store, _) = store();
        let entry = store.add("https://gmail.com", "08:00", "Gmail").unwrap();
        assert_eq!(entry.url, "https://gmail.com");
        assert_eq!(entry.site_name, "Gmail");
    }

    #[test]
    fn add_appends_in_submission_order() {
        let (mut store, _) = store();
        store.add("a.com", "08:00", "").unwrap();
        store.add("b.com", "09:00", "").unwrap();
        let names: Vec<_> = store.list().iter().map(|e| e.site_name.as_str()).collect();
        assert_eq!(names, vec!["a.com", "b.com"]);
    }

    #[test]
    fn add_rejects_missing_fields() {
        let (mut store, notifier) = store();
        assert_eq!(store.add("", "08:00", ""), Err(ScheduleError::MissingFields));
        assert_eq!(store.add("site.com", "", ""), Err(ScheduleError::MissingFields));
        assert!(store.is_empty());
        assert_eq!(notifier.toasts().len(), 2);
        assert!(notifier
            .toasts()
            .iter()
            .all(|t| t.kind == ToastKind::Error));
    }

    #[test]
    fn add_rejects_malformed_time() {
        let (mut store, _) = store();
        assert!(matches!(
            store.add("site.com", "9:30", ""),
            Err(ScheduleError::InvalidTime(_))
        ));
        assert!(matches!(
            store.add("site.com", "25:00", ""),
            Err(ScheduleError::InvalidTime(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn ids_are_unique_across_rapid_adds() {
        let (mut store, _) = store();
        for _ in 0..50 {
            store.add("site.com", "10:00", "").unwrap();
        }
        let mut ids: Vec<_> = store.list().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn toggle_flips_only_the_matching_entry() {
        let (mut store, _) = store();
        let a = store.add("a.com", "08:00", "").unwrap();
        let b = store.add("b.com", "09:00", "").unwrap();

        store.toggle(&a.id);
        assert!(!store.list()[0].enabled);
        assert!(store.list()[1].enabled);

        store.toggle(&a.id);
        assert!(store.list()[0].enabled);

        // Absent id is a no-op.
        store.toggle("does-not-exist");
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[1].id, b.id);
    }

    #[test]
    fn remove_is_idempotent() {
        let (mut store, _) = store();
        let entry = store.add("a.com", "08:00", "").unwrap();
        store.remove(&entry.id);
        assert!(store.is_empty());
        store.remove(&entry.id);
        assert!(store.is_empty());
    }

    #[test]
    fn check_due_fires_on_the_exact_minute_only() {
        let (mut store, notifier) = store();
        store.add("site.com", "14:05", "My Site").unwrap();
        let toasts_after_add = notifier.toasts().len();
        let tabs = RecordingTabHost::default();

        assert_eq!(store.check_due(&FixedClock::at(14, 5, 0), &tabs), 1);
        assert_eq!(store.check_due(&FixedClock::at(14, 4, 59), &tabs), 0);
        assert_eq!(store.check_due(&FixedClock::at(14, 6, 0), &tabs), 0);

        assert_eq!(tabs.opened(), vec!["https://site.com"]);
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), toasts_after_add + 1);
        let fired = toasts.last().unwrap();
        assert_eq!(fired.title, "Opening My Site");
        assert_eq!(fired.description.as_deref(), Some("Scheduled for 14:05"));
    }

    #[test]
    fn check_due_skips_disabled_entries() {
        let (mut store, _) = store();
        let entry = store.add("site.com", "14:05", "").unwrap();
        store.toggle(&entry.id);
        let tabs = RecordingTabHost::default();
        assert_eq!(store.check_due(&FixedClock::at(14, 5, 0), &tabs), 0);
        assert!(tabs.opened().is_empty());
    }

    #[test]
    fn storage_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(StorageArea::open(dir.path()).unwrap());
        let notifier = Arc::new(RecordingNotifier::default());

        let mut store = ScheduleStore::with_storage(storage.clone(), notifier.clone());
        let entry = store.add("irctc.co.in", "09:30", "IRCTC").unwrap();
        drop(store);

        let reloaded = ScheduleStore::with_storage(storage, notifier);
        assert_eq!(reloaded.list().len(), 1);
        assert_eq!(reloaded.list()[0], entry);
    }
}
