//! # OverlayForm Component
//!
//! The add-account dialog: a framed box centered on the screen holding a
//! static prompt label and a single-line input.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │username: alice█                          │
//! └──────────────────────────────────────────┘
//! ```
//!
//! The three rectangles are computed together in [`OverlayForm::open`] and
//! live exactly as long as the value. Closing the overlay is dropping it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Frame height: top border, input row, bottom border.
const OVERLAY_HEIGHT: u16 = 3;
/// Narrowest frame that still fits a label and a few input columns.
const MIN_OVERLAY_WIDTH: u16 = 20;

pub struct OverlayForm {
    prompt: String,
    frame: Rect,
    label: Rect,
    input: Rect,
    draft: String,
    /// Byte offset of the caret in `draft` (0..=draft.len())
    caret: usize,
}

impl OverlayForm {
    /// Build all regions for a dialog centered on `screen`, sized to
    /// `width_percent` of its width.
    pub fn open(screen: Rect, width_percent: u16, prompt: &str) -> Self {
        let width = (screen.width as u32 * width_percent.min(100) as u32 / 100) as u16;
        let width = width.max(MIN_OVERLAY_WIDTH).min(screen.width);
        let height = OVERLAY_HEIGHT.min(screen.height);
        let frame = Rect {
            x: screen.x + (screen.width - width) / 2,
            y: screen.y + (screen.height - height) / 2,
            width,
            height,
        };

        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let label_width = (prompt.width() as u16 + 1).min(inner.width);
        let label = Rect {
            width: label_width,
            height: inner.height.min(1),
            ..inner
        };
        let input = Rect {
            x: inner.x + label_width,
            width: inner.width - label_width,
            ..label
        };

        Self {
            prompt: prompt.to_string(),
            frame,
            label,
            input,
            draft: String::new(),
            caret: 0,
        }
    }

    pub fn frame_rect(&self) -> Rect {
        self.frame
    }

    pub fn label_rect(&self) -> Rect {
        self.label
    }

    pub fn input_rect(&self) -> Rect {
        self.input
    }

    /// First line of the input; "" when nothing was typed.
    pub fn current_draft(&self) -> &str {
        self.draft.lines().next().unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.draft.clear();
        self.caret = 0;
    }

    /// Insert pasted text. Only the first line is kept; the field is single-line.
    pub fn paste(&mut self, text: &str) {
        let line = text.lines().next().unwrap_or("");
        self.draft.insert_str(self.caret, line);
        self.caret += line.len();
    }

    /// Apply an editing key. Returns false when the key means nothing here.
    pub fn edit(&mut self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.draft.insert(self.caret, c);
                self.caret += c.len_utf8();
                true
            }
            KeyCode::Backspace if self.caret > 0 => {
                let prev = prev_char_boundary(&self.draft, self.caret);
                self.draft.drain(prev..self.caret);
                self.caret = prev;
                true
            }
            KeyCode::Delete if self.caret < self.draft.len() => {
                let next = next_char_boundary(&self.draft, self.caret);
                self.draft.drain(self.caret..next);
                true
            }
            KeyCode::Left if self.caret > 0 => {
                self.caret = prev_char_boundary(&self.draft, self.caret);
                true
            }
            KeyCode::Right if self.caret < self.draft.len() => {
                self.caret = next_char_boundary(&self.draft, self.caret);
                true
            }
            KeyCode::Home => {
                self.caret = 0;
                true
            }
            KeyCode::End => {
                self.caret = self.draft.len();
                true
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Clear, self.frame);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" Add account "),
            self.frame,
        );
        frame.render_widget(Paragraph::new(self.prompt.as_str()), self.label);

        // Scroll horizontally so the caret stays inside the input
        let before_caret = u16::try_from(self.draft[..self.caret].width()).unwrap_or(u16::MAX);
        let skip = before_caret.saturating_sub(self.input.width.saturating_sub(1));
        let input = Paragraph::new(self.draft.as_str())
            .style(Style::default().fg(Color::Green))
            .scroll((0, skip));
        frame.render_widget(input, self.input);

        frame.set_cursor_position((self.input.x + before_caret - skip, self.input.y));
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
