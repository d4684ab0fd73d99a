//! # Key Bindings
//!
//! Maps (region, key, modifiers) to a controller [`Action`]. Lookup is done
//! against the focused region only, so the same key can mean different
//! things in the list and in the add-account input.

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logical screen regions. Only the list and the overlay input take focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    List,
    OverlayFrame,
    OverlayLabel,
    OverlayInput,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::List => "accounts-list",
            Region::OverlayFrame => "add-account",
            Region::OverlayLabel => "add-account-label",
            Region::OverlayInput => "add-account-input",
        };
        f.write_str(name)
    }
}

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    EditSelected,
    Refresh,
    OpenOverlay,
    SubmitOverlay,
    ClearOverlay,
    Quit,
}

#[derive(Debug, Default)]
pub struct Keymap {
    bindings: HashMap<(Region, KeyCode, KeyModifiers), Action>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key in a region. Rebinding the same triple replaces the action.
    pub fn bind(&mut self, region: Region, key: KeyCode, modifiers: KeyModifiers, action: Action) {
        if let Some(previous) = self.bindings.insert((region, key, modifiers), action) {
            log::debug!("Rebound {:?}+{:?} in {}: {:?} -> {:?}", modifiers, key, region, previous, action);
        }
    }

    pub fn lookup(&self, region: Region, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .get(&(region, key.code, normalize(key)))
            .copied()
    }

    /// The bindings the account screen ships with.
    pub fn account_list() -> Self {
        let mut keymap = Self::new();
        let none = KeyModifiers::NONE;

        keymap.bind(Region::OverlayInput, KeyCode::Enter, none, Action::SubmitOverlay);
        keymap.bind(Region::OverlayInput, KeyCode::Char('u'), KeyModifiers::CONTROL, Action::ClearOverlay);

        keymap.bind(Region::List, KeyCode::Enter, none, Action::EditSelected);
        keymap.bind(Region::List, KeyCode::Down, none, Action::CursorDown);
        keymap.bind(Region::List, KeyCode::Up, none, Action::CursorUp);
        keymap.bind(Region::List, KeyCode::Char('a'), none, Action::OpenOverlay);
        keymap.bind(Region::List, KeyCode::Char('r'), none, Action::Refresh);

        for region in [Region::List, Region::OverlayInput] {
            keymap.bind(region, KeyCode::Char('c'), KeyModifiers::CONTROL, Action::Quit);
        }

        keymap
    }
}

/// Shift is implied by the character itself for printable keys.
fn normalize(key: &KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}
