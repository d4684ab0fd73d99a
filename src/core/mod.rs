//! # Core
//!
//! Everything the account list needs that isn't terminal-specific.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Entry (account)      │
//!                    │  • Directory (store)    │
//!                    │  • Listener (observer)  │
//!                    │  • Config               │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entry`]: The `Entry` record
//! - [`directory`]: The `Directory` trait and the JSON-file store
//! - [`listener`]: The `AccountListListener` observer trait
//! - [`config`]: TOML config loading and resolution

pub mod config;
pub mod directory;
pub mod entry;
pub mod listener;

pub use directory::{Directory, DirectoryError, JsonDirectory};
pub use entry::Entry;
pub use listener::AccountListListener;
