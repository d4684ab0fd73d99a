//! # TUI Components
//!
//! All widgets of the account screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they draw as fields:
//! - `HelpBar`: key help or the last error, bottom line
//! - `AccountDetail`: the selected account, right-hand pane
//!
//! ### Stateful Components
//!
//! Own state the controller drives:
//! - `ListView`: account names with a cursor
//! - `OverlayForm`: the add-account dialog and its single-line input
//!
//! Each component file contains its state, rendering, and tests.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── list_view.rs       (Account list)
//! ├── overlay_form.rs    (Add-account dialog)
//! ├── account_detail.rs  (Selected account pane + its listener)
//! └── help_bar.rs        (Bottom help/error line)
//! ```

pub mod account_detail;
mod help_bar;
pub mod list_view;
pub mod overlay_form;

pub use account_detail::{AccountDetail, AccountDetailListener, AccountDetailState};
pub use help_bar::HelpBar;
pub use list_view::{Direction, ListView};
pub use overlay_form::OverlayForm;
