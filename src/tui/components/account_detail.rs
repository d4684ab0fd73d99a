//! # Account Detail Component
//!
//! Right-hand pane showing the selected account. It is fed entirely through
//! the [`AccountListListener`] callbacks; the pane never talks to the
//! directory itself.
//!
//! State is shared between the listener registered with the controller and
//! the renderer, both on the UI thread, through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::{AccountListListener, Entry};
use crate::tui::component::Component;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Selection {
    /// Nothing announced yet.
    #[default]
    Pending,
    Found(Entry),
    NotFound,
}

#[derive(Debug, Default)]
pub struct AccountDetailState {
    pub selection: Selection,
    /// Name of the last account Enter was pressed on.
    pub edit_requested: Option<String>,
}

/// Listener half: registered with the controller.
pub struct AccountDetailListener {
    state: Rc<RefCell<AccountDetailState>>,
}

impl AccountDetailListener {
    pub fn new(state: Rc<RefCell<AccountDetailState>>) -> Self {
        Self { state }
    }
}

impl AccountListListener for AccountDetailListener {
    fn on_entry_selected(&mut self, entry: Option<&Entry>) {
        let mut state = self.state.borrow_mut();
        state.selection = match entry {
            Some(e) => Selection::Found(e.clone()),
            None => Selection::NotFound,
        };
        // A new selection supersedes any pending edit marker
        if state.edit_requested.as_deref() != entry.map(|e| e.username.as_str()) {
            state.edit_requested = None;
        }
    }

    fn on_edit_requested(&mut self, entry: Option<&Entry>) {
        let mut state = self.state.borrow_mut();
        match entry {
            Some(e) => {
                log::info!("Edit requested for {}", e.username);
                state.edit_requested = Some(e.username.clone());
                state.selection = Selection::Found(e.clone());
            }
            None => {
                log::warn!("Edit requested for an account that no longer exists");
                state.edit_requested = None;
                state.selection = Selection::NotFound;
            }
        }
    }
}

/// Transient render wrapper.
pub struct AccountDetail<'a> {
    state: &'a AccountDetailState,
}

impl<'a> AccountDetail<'a> {
    pub fn new(state: &'a AccountDetailState) -> Self {
        Self { state }
    }
}

impl Component for AccountDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Account ");

        let dim = Style::default().fg(Color::DarkGray);
        let lines = match &self.state.selection {
            Selection::Pending => vec![Line::from(Span::styled("No account selected.", dim))],
            Selection::NotFound => vec![Line::from(Span::styled("Account not found.", dim))],
            Selection::Found(entry) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("Username: ", dim),
                        Span::styled(
                            entry.username.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Created:  ", dim),
                        Span::raw(format_timestamp(entry.created_at)),
                    ]),
                ];
                if self.state.edit_requested.as_deref() == Some(entry.username.as_str()) {
                    lines.push(Line::default());
                    lines.push(Line::from(Span::styled(
                        "Edit requested",
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines
            }
        };

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Format a Unix timestamp as "2024-01-15 09:30" local time.
fn format_timestamp(ts: i64) -> String {
    use chrono::{DateTime, Local, Utc};
    let dt: DateTime<Local> = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(&Local);
    dt.format("%Y-%m-%d %H:%M").to_string()
}
