use crate::commands::Out;
use crate::{fs, report, Result, Store};
use std::path::Path;

/// Renders the printable report for the current week, either to stdout (as
/// the command's message) or to a file.
pub fn report(store: &Store, output: Option<&Path>) -> Result<Out<()>> {
    let ledger = store.load()?;
    let text = report::weekly_report(&ledger);
    match output {
        Some(path) => {
            fs::write(path, &text)?;
            Ok(format!(
                "Report for week {} written to {}",
                ledger.current_week(),
                path.display()
            )
            .into())
        }
        None => Ok(text.into()),
    }
}
