//! # Account List Controller
//!
//! Owns the account [`ListView`] and, while an account is being composed,
//! the [`OverlayForm`]. Key events are resolved through the [`Keymap`]
//! against the focused region and turned into handler calls; handlers talk
//! to the injected [`Directory`] and broadcast to listeners.
//!
//! ```text
//!               a (list)                 Enter (input)
//!   Browsing ───────────────▶ Composing ───────────────▶ Browsing
//!   list focused              overlay + input focused    (add ok or not)
//! ```
//!
//! The overlay lives inside `Mode::Composing`, so it cannot exist while
//! browsing and is built and dropped as a whole.

use std::fmt;

use log::{debug, info, warn};
use ratatui::Frame;
use ratatui::layout::Rect;

use crossterm::event::KeyEvent;

use crate::core::{AccountListListener, Directory, DirectoryError, Entry};
use crate::tui::component::Component;
use crate::tui::components::{Direction, HelpBar, ListView, OverlayForm};
use crate::tui::keymap::{Action, Keymap, Region};

pub const LIST_HELP: &str =
    "enter: edit account | a: add account | up/down: select account | r: reload | ctrl-c: quit";
pub const OVERLAY_HELP: &str = "enter: add account | ctrl-u: clear | ctrl-c: quit";

pub enum Mode {
    Browsing,
    Composing(OverlayForm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Browsing,
    Composing,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Browsing => ModeKind::Browsing,
            Mode::Composing(_) => ModeKind::Composing,
        }
    }
}

/// Whether the run loop should keep going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A handler could not run. Nothing was changed when one of these comes back.
#[derive(Debug)]
pub enum ControllerError {
    /// A region was used before it was laid out.
    RegionMissing(Region),
    /// A handler ran in the wrong mode.
    WrongMode { expected: ModeKind, actual: ModeKind },
    /// Listing the directory failed.
    Directory(DirectoryError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::RegionMissing(region) => write!(f, "region '{region}' does not exist"),
            ControllerError::WrongMode { expected, actual } => {
                write!(f, "expected {expected:?} mode, was {actual:?}")
            }
            ControllerError::Directory(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ControllerError {}

/// How the add-account dialog looks.
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    pub prompt: String,
    pub width_percent: u16,
}

pub struct AccountList {
    directory: Box<dyn Directory>,
    keymap: Keymap,
    listeners: Vec<Box<dyn AccountListListener>>,
    list: Option<ListView>,
    mode: Mode,
    overlay: OverlaySettings,
    help: String,
    error: Option<String>,
}

impl AccountList {
    pub fn new(directory: Box<dyn Directory>, overlay: OverlaySettings) -> Self {
        Self {
            directory,
            keymap: Keymap::account_list(),
            listeners: Vec::new(),
            list: None,
            mode: Mode::Browsing,
            overlay,
            help: String::new(),
            error: None,
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn AccountListListener>) {
        self.listeners.push(listener);
    }

    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    pub fn directory(&self) -> &dyn Directory {
        self.directory.as_ref()
    }

    pub fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn focused_region(&self) -> Region {
        match self.mode {
            Mode::Browsing => Region::List,
            Mode::Composing(_) => Region::OverlayInput,
        }
    }

    /// Where a region currently sits; None when it does not exist.
    pub fn region_rect(&self, region: Region) -> Option<Rect> {
        match region {
            Region::List => self.list.as_ref().map(ListView::viewport),
            Region::OverlayFrame => self.overlay().map(OverlayForm::frame_rect),
            Region::OverlayLabel => self.overlay().map(OverlayForm::label_rect),
            Region::OverlayInput => self.overlay().map(OverlayForm::input_rect),
        }
    }

    pub fn list(&self) -> Option<&ListView> {
        self.list.as_ref()
    }

    pub fn overlay(&self) -> Option<&OverlayForm> {
        match &self.mode {
            Mode::Composing(form) => Some(form),
            Mode::Browsing => None,
        }
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Show a failure in the help bar until the next key press.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn expect_mode(&self, expected: ModeKind) -> Result<(), ControllerError> {
        let actual = self.mode.kind();
        if actual != expected {
            return Err(ControllerError::WrongMode { expected, actual });
        }
        Ok(())
    }

    fn list_view(&self) -> Result<&ListView, ControllerError> {
        self.list
            .as_ref()
            .ok_or(ControllerError::RegionMissing(Region::List))
    }

    fn list_view_mut(&mut self) -> Result<&mut ListView, ControllerError> {
        self.list
            .as_mut()
            .ok_or(ControllerError::RegionMissing(Region::List))
    }

    // ------------------------------------------------------------------
    // ListView
    // ------------------------------------------------------------------

    /// Create the list on the first call; later calls only track the viewport.
    pub fn layout(&mut self, viewport: Rect) -> Result<(), ControllerError> {
        match self.list.as_mut() {
            Some(list) => list.set_viewport(viewport),
            None => {
                let entries = self
                    .directory
                    .list_entries()
                    .map_err(ControllerError::Directory)?;
                info!("Account list laid out with {} accounts", entries.len());
                self.list = Some(ListView::new(entries, viewport));
            }
        }
        Ok(())
    }

    /// Re-read the directory into the list.
    pub fn refresh(&mut self) -> Result<(), ControllerError> {
        self.list_view()?;
        let entries = self
            .directory
            .list_entries()
            .map_err(ControllerError::Directory)?;
        debug!("Account list refreshed: {} accounts", entries.len());
        self.list_view_mut()?.sync(entries);
        Ok(())
    }

    pub fn move_cursor(&mut self, direction: Direction) -> Result<(), ControllerError> {
        self.expect_mode(ModeKind::Browsing)?;
        self.list_view_mut()?.move_cursor(direction);
        self.notify_selected()
    }

    /// Name under the cursor; "" for an empty list.
    pub fn selected_identifier(&self) -> Result<String, ControllerError> {
        Ok(self.list_view()?.selected_identifier().to_string())
    }

    /// Focus the list and announce the initial selection.
    pub fn activate(&mut self) -> Result<(), ControllerError> {
        self.expect_mode(ModeKind::Browsing)?;
        self.list_view()?;
        self.help = LIST_HELP.to_string();
        self.notify_selected()
    }

    pub fn submit_edit(&mut self) -> Result<(), ControllerError> {
        self.expect_mode(ModeKind::Browsing)?;
        let entry = self.load_selected()?;
        for listener in &mut self.listeners {
            listener.on_edit_requested(entry.as_ref());
        }
        Ok(())
    }

    fn notify_selected(&mut self) -> Result<(), ControllerError> {
        let entry = self.load_selected()?;
        for listener in &mut self.listeners {
            listener.on_entry_selected(entry.as_ref());
        }
        Ok(())
    }

    /// Load the selected account fresh. Misses and load failures both come
    /// back as `None`; failures are also shown in the help bar.
    fn load_selected(&mut self) -> Result<Option<Entry>, ControllerError> {
        let username = self.selected_identifier()?;
        match self.directory.load_entry(&username) {
            Ok(entry) => {
                if entry.is_none() {
                    debug!("No account named '{}'", username);
                }
                Ok(entry)
            }
            Err(e) => {
                warn!("Failed to load account '{}': {}", username, e);
                self.error = Some(e.to_string());
                Ok(None)
            }
        }
    }

    // ------------------------------------------------------------------
    // OverlayForm
    // ------------------------------------------------------------------

    /// Show the add-account dialog centered on `screen`. No-op when already open.
    pub fn open_overlay(&mut self, screen: Rect) -> Result<(), ControllerError> {
        if let Mode::Composing(_) = self.mode {
            debug!("Add-account overlay already open");
            return Ok(());
        }
        self.list_view()?;
        let form = OverlayForm::open(screen, self.overlay.width_percent, &self.overlay.prompt);
        debug!("Opened add-account overlay at {:?}", form.frame_rect());
        self.mode = Mode::Composing(form);
        self.help = OVERLAY_HELP.to_string();
        Ok(())
    }

    pub fn current_draft(&self) -> Option<&str> {
        self.overlay().map(OverlayForm::current_draft)
    }

    pub fn clear_overlay(&mut self) -> Result<(), ControllerError> {
        match &mut self.mode {
            Mode::Composing(form) => {
                form.clear();
                Ok(())
            }
            Mode::Browsing => Err(ControllerError::WrongMode {
                expected: ModeKind::Composing,
                actual: ModeKind::Browsing,
            }),
        }
    }

    /// Close the dialog and try to add the typed account.
    ///
    /// The overlay closes whatever the directory says. A rejected add leaves
    /// the list untouched and puts the reason in the help bar.
    pub fn submit_overlay(&mut self) -> Result<(), ControllerError> {
        self.expect_mode(ModeKind::Composing)?;
        self.list_view()?;
        let form = match std::mem::replace(&mut self.mode, Mode::Browsing) {
            Mode::Composing(form) => form,
            Mode::Browsing => {
                return Err(ControllerError::WrongMode {
                    expected: ModeKind::Composing,
                    actual: ModeKind::Browsing,
                });
            }
        };
        let username = form.current_draft().to_string();
        drop(form);
        self.help = LIST_HELP.to_string();

        match self.directory.add_entry(Entry::new(username.clone())) {
            Ok(()) => {
                info!("Added account '{}'", username);
                self.refresh()
            }
            Err(e) => {
                warn!("Failed to add account '{}': {}", username, e);
                self.error = Some(e.to_string());
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Input dispatch
    // ------------------------------------------------------------------

    /// Route a key to the focused region's binding, or to the input editor.
    pub fn handle_key(&mut self, key: &KeyEvent, screen: Rect) -> Result<Flow, ControllerError> {
        self.error = None;

        let region = self.focused_region();
        let Some(action) = self.keymap.lookup(region, key) else {
            if let Mode::Composing(form) = &mut self.mode {
                form.edit(key);
            }
            return Ok(Flow::Continue);
        };

        debug!("{} -> {:?}", region, action);
        match action {
            Action::CursorUp => self.move_cursor(Direction::Up)?,
            Action::CursorDown => self.move_cursor(Direction::Down)?,
            Action::EditSelected => self.submit_edit()?,
            Action::Refresh => {
                self.refresh()?;
                self.notify_selected()?;
            }
            Action::OpenOverlay => self.open_overlay(screen)?,
            Action::SubmitOverlay => self.submit_overlay()?,
            Action::ClearOverlay => self.clear_overlay()?,
            Action::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Mode::Composing(form) = &mut self.mode {
            form.paste(text);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, list_area: Rect, help_area: Rect) {
        if let Some(list) = self.list.as_mut() {
            list.render(frame, list_area);
        }
        HelpBar::new(self.help.clone(), self.error.clone()).render(frame, help_area);
        if let Mode::Composing(form) = &self.mode {
            form.render(frame);
        }
    }
}
