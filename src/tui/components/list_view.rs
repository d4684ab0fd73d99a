//! # ListView Component
//!
//! The persistent account list: an ordered snapshot of names with a
//! movable cursor, rendered non-wrapping with the cursor row highlighted.
//!
//! The names come from the directory and nowhere else. The controller
//! replaces the whole sequence via [`ListView::sync`] after every mutation
//! instead of patching individual lines.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

pub struct ListView {
    entries: Vec<String>,
    cursor: usize,
    list_state: ListState,
    viewport: Rect,
}

impl ListView {
    pub fn new(entries: Vec<String>, viewport: Rect) -> Self {
        let mut list = Self {
            entries: Vec::new(),
            cursor: 0,
            list_state: ListState::default(),
            viewport,
        };
        list.sync(entries);
        list
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Replace the names, keeping the cursor row where it was when possible.
    pub fn sync(&mut self, entries: Vec<String>) {
        self.entries = entries;
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        self.list_state
            .select((!self.entries.is_empty()).then_some(self.cursor));
    }

    /// Move one row, clamped to the content. Returns whether the cursor moved.
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let next = match direction {
            Direction::Up => self.cursor.saturating_sub(1),
            Direction::Down => (self.cursor + 1).min(self.entries.len() - 1),
        };
        let moved = next != self.cursor;
        self.cursor = next;
        self.list_state.select(Some(self.cursor));
        moved
    }

    /// Name under the cursor, or "" for an empty list.
    pub fn selected_identifier(&self) -> &str {
        self.entries
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or("")
    }
}

impl Component for ListView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.viewport = area;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Accounts ");

        if self.entries.is_empty() {
            let empty = Paragraph::new("No accounts.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|name| ListItem::new(Line::from(truncate_str(name, inner_width))))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

/// Cut a name to `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn viewport() -> Rect {
        Rect::new(0, 0, 30, 10)
    }

    #[test]
    fn test_cursor_clamped_at_both_ends() {
        let mut list = ListView::new(names(&["alice", "bob", "carol"]), viewport());
        assert!(!list.move_cursor(Direction::Up));
        assert_eq!(list.cursor(), 0);

        assert!(list.move_cursor(Direction::Down));
        assert!(list.move_cursor(Direction::Down));
        assert!(!list.move_cursor(Direction::Down));
        assert_eq!(list.cursor(), 2);
        assert_eq!(list.selected_identifier(), "carol");
    }

    #[test]
    fn test_empty_list_selects_nothing() {
        let mut list = ListView::new(Vec::new(), viewport());
        assert_eq!(list.selected_identifier(), "");
        assert!(!list.move_cursor(Direction::Down));
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_sync_clamps_cursor_when_list_shrinks() {
        let mut list = ListView::new(names(&["a", "b", "c"]), viewport());
        list.move_cursor(Direction::Down);
        list.move_cursor(Direction::Down);
        list.sync(names(&["a"]));
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected_identifier(), "a");
    }

    #[test]
    fn test_sync_keeps_cursor_row() {
        let mut list = ListView::new(names(&["a", "b"]), viewport());
        list.move_cursor(Direction::Down);
        list.sync(names(&["a", "b", "c"]));
        assert_eq!(list.selected_identifier(), "b");
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("alice", 10), "alice");
        assert_eq!(truncate_str("alexandria", 8), "alexa...");
        assert_eq!(truncate_str("alexandria", 2), "..");
    }

    #[test]
    fn test_render_lists_names_in_order() {
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = ListView::new(names(&["zed", "alice"]), Rect::new(0, 0, 20, 6));

        terminal
            .draw(|f| {
                list.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..20).map(|x| buffer[(x, y)].symbol()).collect::<String>()
        };
        assert!(row(0).contains("Accounts"));
        assert!(row(1).contains("zed"));
        assert!(row(2).contains("alice"));
    }

    #[test]
    fn test_render_empty_list() {
        let backend = TestBackend::new(20, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list = ListView::new(Vec::new(), Rect::new(0, 0, 20, 4));

        terminal
            .draw(|f| {
                list.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("No accounts."));
    }
}
