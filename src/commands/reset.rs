use crate::commands::Out;
use crate::{Result, Store};

/// Discards all data, persisted and in-memory, and starts over at week 1,
/// month 1.
pub fn reset(store: &Store) -> Result<Out<()>> {
    let ledger = store.reset()?;
    Ok(format!(
        "All tracker data has been reset. Back to week {}, month {}.",
        ledger.current_week(),
        ledger.current_month()
    )
    .into())
}
