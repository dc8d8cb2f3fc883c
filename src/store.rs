//! Durable storage for the ledger.
//!
//! The whole ledger is serialized to `$PGLEDGER_HOME/ledger.json` after every
//! mutation. The file carries `app_name` and `format_version` fields that are
//! validated on load, and week records written by older versions gain
//! defaults for any fields they are missing.

use crate::model::{Ledger, WeekRecord};
use crate::{fs, Home, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "pgledger";
const FORMAT_VERSION: u8 = 1;

/// Reads and writes the persisted ledger file.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(home: &Home) -> Self {
        Self {
            path: home.ledger().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the ledger, or initializes a fresh one at week 1 / month 1 when
    /// no file has been written yet.
    pub fn load(&self) -> Result<Ledger> {
        if !self.path.is_file() {
            debug!("No ledger file at {}, starting fresh", self.path.display());
            return Ok(Ledger::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let file: LedgerFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse ledger file at {}", self.path.display()))?;
        anyhow::ensure!(
            file.app_name == APP_NAME,
            "Invalid app_name in ledger file: expected '{}', got '{}'",
            APP_NAME,
            file.app_name
        );
        anyhow::ensure!(
            file.format_version <= FORMAT_VERSION,
            "The ledger file at {} uses format version {} but this program only understands \
            versions up to {}",
            self.path.display(),
            file.format_version,
            FORMAT_VERSION
        );
        // The stored month is for readers of the file only; the ledger
        // derives the month from the week.
        Ok(Ledger::from_parts(file.current_week, file.weeks))
    }

    /// Serializes the whole ledger and writes it out.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let file = LedgerFile {
            app_name: APP_NAME.to_string(),
            format_version: FORMAT_VERSION,
            current_week: ledger.current_week(),
            current_month: ledger.current_month(),
            weeks: ledger.weeks().clone(),
        };
        let data = serde_json::to_string_pretty(&file).context("Unable to serialize the ledger")?;
        fs::write(&self.path, data)
    }

    /// Clears persisted state and returns a fresh, already-saved ledger at
    /// week 1 / month 1.
    pub fn reset(&self) -> Result<Ledger> {
        if self.path.is_file() {
            fs::remove_file(&self.path)?;
        }
        let ledger = Ledger::new();
        self.save(&ledger)?;
        Ok(ledger)
    }
}

/// Represents the serialization format of the ledger file.
///
/// `current_month` is written for human readers and other consumers of the
/// file, but it is recomputed from `current_week` on load so a stale value
/// can never drift the cursor.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct LedgerFile {
    /// Application name, should always be "pgledger".
    app_name: String,

    /// Ledger file format version.
    format_version: u8,

    /// The week the cursor was on when the file was written.
    current_week: u32,

    /// Derived from `current_week`; ignored on load.
    #[serde(default)]
    current_month: u32,

    /// One record per visited week, keyed by week number.
    #[serde(default)]
    weeks: BTreeMap<u32, WeekRecord>,
}
