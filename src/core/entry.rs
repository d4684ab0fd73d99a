//! # Account Entry
//!
//! The record the directory hands out. The controller only ever reads
//! `username`; everything else is for display.

use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub username: String,
    /// Unix seconds (UTC) when the entry was built.
    pub created_at: i64,
}

impl Entry {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            created_at: Utc::now().timestamp(),
        }
    }
}
