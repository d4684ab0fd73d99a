use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::component::Component;
use crate::tui::components::{AccountDetail, AccountDetailState};
use crate::tui::controller::AccountList;

/// Where each region sits on screen.
///
/// ```text
/// ┌ Accounts ──┐┌ Account ─────────────────┐
/// │alice       ││Username: alice           │
/// │bob         ││Created:  2024-01-15 09:30│
/// └────────────┘└──────────────────────────┘
/// enter: edit account | a: add account | ...
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub screen: Rect,
    pub list: Rect,
    pub detail: Rect,
    pub help: Rect,
}

impl ScreenLayout {
    pub fn new(screen: Rect, list_width: u16) -> Self {
        use Constraint::{Length, Min};
        let [main, help] = Layout::vertical([Min(0), Length(1)]).areas(screen);
        let [list, detail] = Layout::horizontal([Length(list_width), Min(0)]).areas(main);
        Self {
            screen,
            list,
            detail,
            help,
        }
    }
}

pub fn draw_ui(
    frame: &mut Frame,
    layout: &ScreenLayout,
    accounts: &mut AccountList,
    detail: &AccountDetailState,
) {
    AccountDetail::new(detail).render(frame, layout.detail);
    // Drawn last so the overlay sits on top of the detail pane
    accounts.render(frame, layout.list, layout.help);
}
