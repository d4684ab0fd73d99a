//! # Account Directory
//!
//! The store the account list reads from and writes to. The controller only
//! sees the [`Directory`] trait; [`JsonDirectory`] is the file-backed
//! implementation the binary uses.
//!
//! Accounts live in `<data_dir>/accounts.json` in insertion order:
//!
//! ```text
//! { "accounts": [ { "username": "alice", "created_at": 1700000000 }, ... ] }
//! ```
//!
//! All writes use atomic rename (write `.tmp`, then `rename()`) for crash safety.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::entry::Entry;

const ACCOUNTS_FILE: &str = "accounts.json";

/// Errors a directory can report.
#[derive(Debug)]
pub enum DirectoryError {
    /// An account with this name already exists.
    Duplicate(String),
    /// The name is empty after trimming.
    InvalidName(String),
    /// Reading or writing the backing file failed.
    Io(io::Error),
    /// The backing file exists but is not a valid account list.
    Parse(serde_json::Error),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Duplicate(name) => write!(f, "account '{name}' already exists"),
            DirectoryError::InvalidName(name) => write!(f, "invalid account name '{name}'"),
            DirectoryError::Io(e) => write!(f, "directory I/O error: {e}"),
            DirectoryError::Parse(e) => write!(f, "directory parse error: {e}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

impl From<io::Error> for DirectoryError {
    fn from(e: io::Error) -> Self {
        DirectoryError::Io(e)
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Parse(e)
    }
}

/// List/load/add over account entries.
pub trait Directory {
    /// All account names, in the order the directory keeps them.
    fn list_entries(&self) -> Result<Vec<String>, DirectoryError>;

    /// Load one account. `Ok(None)` means no such account.
    fn load_entry(&self, username: &str) -> Result<Option<Entry>, DirectoryError>;

    /// Persist a new account. Rejects duplicates and empty names.
    fn add_entry(&mut self, entry: Entry) -> Result<(), DirectoryError>;
}

/// Normalize a candidate name, rejecting ones that are empty once trimmed.
pub fn validate_username(raw: &str) -> Result<String, DirectoryError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DirectoryError::InvalidName(raw.to_string()));
    }
    Ok(name.to_string())
}

#[derive(Serialize, Deserialize, Default, Debug)]
struct AccountsFile {
    accounts: Vec<Entry>,
}

/// Directory backed by a single JSON file.
pub struct JsonDirectory {
    base_dir: PathBuf,
}

impl JsonDirectory {
    /// Open (creating if needed) the directory rooted at `base_dir`.
    pub fn open(base_dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&base_dir)?;
        info!("Account directory at {}", base_dir.display());
        Ok(Self { base_dir })
    }

    /// Default location: `<platform data dir>/roster`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("roster")
    }

    fn accounts_path(&self) -> PathBuf {
        self.base_dir.join(ACCOUNTS_FILE)
    }

    fn read(&self) -> Result<AccountsFile, DirectoryError> {
        let path = self.accounts_path();
        if !path.exists() {
            return Ok(AccountsFile::default());
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), DirectoryError> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl Directory for JsonDirectory {
    fn list_entries(&self) -> Result<Vec<String>, DirectoryError> {
        let file = self.read()?;
        debug!("Listed {} accounts", file.accounts.len());
        Ok(file.accounts.into_iter().map(|a| a.username).collect())
    }

    fn load_entry(&self, username: &str) -> Result<Option<Entry>, DirectoryError> {
        let file = self.read()?;
        Ok(file.accounts.into_iter().find(|a| a.username == username))
    }

    fn add_entry(&mut self, mut entry: Entry) -> Result<(), DirectoryError> {
        entry.username = validate_username(&entry.username)?;

        let mut file = self.read()?;
        if file.accounts.iter().any(|a| a.username == entry.username) {
            return Err(DirectoryError::Duplicate(entry.username));
        }

        info!("Adding account {}", entry.username);
        file.accounts.push(entry);
        atomic_write_json(&self.accounts_path(), &file)
    }
}
