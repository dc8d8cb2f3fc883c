//! Command handlers for the pgledger CLI.
//!
//! Every mutating handler follows the same shape: load the ledger, apply one
//! core operation, then persist. A failed save is logged as a warning and
//! does not roll back the applied change.

mod edit;
mod report;
mod reset;
mod status;
mod week;

use crate::model::Ledger;
use crate::Store;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info, warn};

pub use edit::{
    add_item, add_payment, finalize, remove_item, remove_payment, set_expense, set_in_charge,
};
pub use report::report;
pub use reset::reset;
pub use status::{status, StatusView};
pub use week::week;

/// The output type for a command. This allows the command to return a
/// consistent message and, optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the
    /// command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists) as
    /// JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Persists the ledger after a mutation has been applied. Losing just-entered
/// data on a transient storage error is worse than a brief inconsistency, so
/// the in-memory change stands and a failed save only produces a warning.
pub(crate) fn save_applied(store: &Store, ledger: &Ledger) {
    if let Err(e) = store.save(ledger) {
        warn!(
            "The change was applied but could not be persisted to {}: {e:#}",
            store.path().display()
        );
    }
}
