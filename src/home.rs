use crate::{fs, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};

const LEDGER_JSON: &str = "ledger.json";

/// The `Home` object represents the file paths of the `$PGLEDGER_HOME`
/// directory, such as `$PGLEDGER_HOME/ledger.json`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Home {
    root: PathBuf,
    ledger: PathBuf,
}

impl Home {
    /// This will create the home directory, if it does not exist, and
    /// canonicalize itself.
    pub fn new(pgledger_home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = pgledger_home.into();
        fs::create_dir_all(&maybe_relative)
            .context("Unable to create the pgledger home directory")?;
        let root = std::fs::canonicalize(&maybe_relative).with_context(|| {
            format!(
                "Unable to canonicalize the path {}",
                maybe_relative.display()
            )
        })?;
        let ledger = root.join(LEDGER_JSON);
        Ok(Self { root, ledger })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn ledger(&self) -> &Path {
        &self.ledger
    }
}

#[test]
fn test_home() {
    use tempfile::TempDir;
    let dir = TempDir::new().unwrap();
    let home_dir = dir.path().join("pgledger");
    let home = Home::new(&home_dir).unwrap();
    assert!(home.root().is_dir());
    assert_eq!(home.ledger().file_name().unwrap(), LEDGER_JSON);
}
