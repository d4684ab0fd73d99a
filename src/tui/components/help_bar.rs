//! # HelpBar Component
//!
//! Bottom line of the screen. Shows the key help for the focused region, or
//! an error from the last operation in its place.
//!
//! ## Props
//!
//! - `help`: static key help set when a region gains focus
//! - `error`: failure text from the last handler, if any
//!
//! The error wins when both are present. It is cleared by the controller on
//! the next key press, so the help comes back on its own.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub struct HelpBar {
    pub help: String,
    pub error: Option<String>,
}

impl HelpBar {
    pub fn new(help: String, error: Option<String>) -> Self {
        Self { help, error }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match &self.error {
            Some(error) => Span::styled(
                format!("error: {error}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(self.help.clone(), Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(span, area);
    }
}
