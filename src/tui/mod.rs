//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, lays out the screen,
//! draws, and feeds key events to the account list controller one at a time.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: lay out, draw, block on the next terminal
//! event, dispatch it, repeat. Handlers run to completion (including their
//! directory calls) before the next event is read. There are no timers and
//! no background tasks; the screen only redraws after an event.

mod component;
pub mod components;
pub mod controller;
mod event;
pub mod keymap;
mod ui;

use log::{error, info};
use std::cell::RefCell;
use std::io::stdout;
use std::rc::Rc;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::config::ResolvedConfig;
use crate::core::Directory;
use crate::tui::components::{AccountDetailListener, AccountDetailState};
use crate::tui::controller::{AccountList, ControllerError, Flow, OverlaySettings};
use crate::tui::event::{TuiEvent, poll_event};
use crate::tui::ui::ScreenLayout;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

/// Surface a handler failure: log it loudly and show it in the help bar.
fn report(accounts: &mut AccountList, context: &str, e: ControllerError) {
    error!("{} failed: {}", context, e);
    accounts.report_error(e.to_string());
}

pub fn run(config: ResolvedConfig, directory: Box<dyn Directory>) -> std::io::Result<()> {
    let mut accounts = AccountList::new(
        directory,
        OverlaySettings {
            prompt: config.overlay_prompt.clone(),
            width_percent: config.overlay_width_percent,
        },
    );
    let detail = Rc::new(RefCell::new(AccountDetailState::default()));
    accounts.add_listener(Box::new(AccountDetailListener::new(detail.clone())));

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut activated = false;

    let result = loop {
        let size = match terminal.size() {
            Ok(size) => size,
            Err(e) => break Err(e),
        };
        let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height), config.list_width);

        if let Err(e) = accounts.layout(layout.list) {
            report(&mut accounts, "layout", e);
        } else if !activated {
            activated = true;
            if let Err(e) = accounts.activate() {
                report(&mut accounts, "activate", e);
            }
        }

        if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &layout, &mut accounts, &detail.borrow())) {
            break Err(e);
        }

        let event = match poll_event() {
            Ok(event) => event,
            Err(e) => break Err(e),
        };

        match event {
            TuiEvent::Key(key) => match accounts.handle_key(&key, layout.screen) {
                Ok(Flow::Quit) => {
                    info!("Quit requested");
                    break Ok(());
                }
                Ok(Flow::Continue) => {}
                Err(e) => report(&mut accounts, "key handler", e),
            },
            TuiEvent::Paste(text) => accounts.handle_paste(&text),
            // Picked up by the next layout pass
            TuiEvent::Resize => {}
        }
    };

    ratatui::restore();
    result
}
