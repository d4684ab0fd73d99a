//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::core::directory::validate_username;
use crate::core::{AccountListListener, Directory, DirectoryError, Entry};
use crate::tui::controller::{AccountList, OverlaySettings};

#[derive(Default)]
struct MemoryInner {
    entries: Vec<Entry>,
    add_calls: Vec<String>,
    list_calls: usize,
    unavailable: bool,
}

/// In-memory directory. Clones share the same data, so a test can keep a
/// handle and change things behind the controller's back.
#[derive(Clone, Default)]
pub struct MemoryDirectory {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryDirectory {
    pub fn with_names(names: &[&str]) -> Self {
        let dir = Self::default();
        for name in names {
            dir.insert(name);
        }
        dir
    }

    /// Add an account directly, bypassing `add_entry` bookkeeping.
    pub fn insert(&self, name: &str) {
        self.inner.borrow_mut().entries.push(Entry {
            username: name.to_string(),
            created_at: 1_700_000_000,
        });
    }

    pub fn remove(&self, name: &str) {
        self.inner
            .borrow_mut()
            .entries
            .retain(|e| e.username != name);
    }

    /// Names passed to `add_entry`, as typed, in call order.
    pub fn add_calls(&self) -> Vec<String> {
        self.inner.borrow().add_calls.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.inner.borrow().list_calls
    }

    /// Make every call fail with an I/O error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.borrow_mut().unavailable = unavailable;
    }

    fn check_available(&self) -> Result<(), DirectoryError> {
        if self.inner.borrow().unavailable {
            return Err(DirectoryError::Io(io::Error::other("directory unavailable")));
        }
        Ok(())
    }
}

impl Directory for MemoryDirectory {
    fn list_entries(&self) -> Result<Vec<String>, DirectoryError> {
        self.inner.borrow_mut().list_calls += 1;
        self.check_available()?;
        Ok(self
            .inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.username.clone())
            .collect())
    }

    fn load_entry(&self, username: &str) -> Result<Option<Entry>, DirectoryError> {
        self.check_available()?;
        Ok(self
            .inner
            .borrow()
            .entries
            .iter()
            .find(|e| e.username == username)
            .cloned())
    }

    fn add_entry(&mut self, mut entry: Entry) -> Result<(), DirectoryError> {
        self.inner
            .borrow_mut()
            .add_calls
            .push(entry.username.clone());
        self.check_available()?;

        entry.username = validate_username(&entry.username)?;
        let mut inner = self.inner.borrow_mut();
        if inner.entries.iter().any(|e| e.username == entry.username) {
            return Err(DirectoryError::Duplicate(entry.username));
        }
        inner.entries.push(entry);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Selected(Option<Entry>),
    EditRequested(Option<Entry>),
}

pub type Events = Rc<RefCell<Vec<Notification>>>;

/// Listener that records every callback it receives.
pub struct RecordingListener {
    events: Events,
}

impl RecordingListener {
    pub fn new(events: Events) -> Self {
        Self { events }
    }
}

impl AccountListListener for RecordingListener {
    fn on_entry_selected(&mut self, entry: Option<&Entry>) {
        self.events
            .borrow_mut()
            .push(Notification::Selected(entry.cloned()));
    }

    fn on_edit_requested(&mut self, entry: Option<&Entry>) {
        self.events
            .borrow_mut()
            .push(Notification::EditRequested(entry.cloned()));
    }
}

pub fn test_overlay_settings() -> OverlaySettings {
    OverlaySettings {
        prompt: "username:".to_string(),
        width_percent: 60,
    }
}

/// Creates a controller over a `MemoryDirectory` with one recording listener.
pub fn test_controller(names: &[&str]) -> (AccountList, MemoryDirectory, Events) {
    let dir = MemoryDirectory::with_names(names);
    let events = Events::default();
    let mut list = AccountList::new(Box::new(dir.clone()), test_overlay_settings());
    list.add_listener(Box::new(RecordingListener::new(events.clone())));
    (list, dir, events)
}
