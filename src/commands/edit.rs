//! Handlers that edit the current week: in-charge, payments, expense,
//! market items and finalization.

use crate::commands::{save_applied, Out};
use crate::model::Amount;
use crate::{Result, Store};

/// Sets the current week's in-charge name.
pub fn set_in_charge(store: &Store, name: &str) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    ledger.set_in_charge(name)?;
    save_applied(store, &ledger);
    Ok(format!(
        "In-charge for week {} set to {}",
        ledger.current_week(),
        ledger.current_record().in_charge
    )
    .into())
}

/// Records a payment toward the current week's expenses.
pub fn add_payment(store: &Store, payer: &str, amount: Amount) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    ledger.add_payment(payer, amount)?;
    save_applied(store, &ledger);
    let week = ledger.current_week();
    Ok(format!(
        "Recorded a payment of ₹{amount} from {} for week {week}. \
        Weekly total paid is now ₹{}",
        payer.trim(),
        ledger.weekly_total_paid(week)
    )
    .into())
}

/// Removes the payment entry at `index` from the current week.
pub fn remove_payment(store: &Store, index: usize) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    let removed = ledger.remove_payment(index)?;
    save_applied(store, &ledger);
    Ok(format!(
        "Removed the payment of ₹{} from {}",
        removed.amount, removed.payer
    )
    .into())
}

/// Sets the current week's total expense.
pub fn set_expense(store: &Store, amount: Amount) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    ledger.set_expense(amount)?;
    save_applied(store, &ledger);
    Ok(format!(
        "Weekly expense for week {} set to ₹{amount}",
        ledger.current_week()
    )
    .into())
}

/// Adds an item to the current week's market list.
pub fn add_item(store: &Store, text: &str) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    ledger.add_market_item(text)?;
    save_applied(store, &ledger);
    Ok(format!(
        "Added \"{}\" to the market list for week {}",
        text.trim(),
        ledger.current_week()
    )
    .into())
}

/// Removes the market item at `index` from the current week.
pub fn remove_item(store: &Store, index: usize) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    let removed = ledger.remove_market_item(index)?;
    save_applied(store, &ledger);
    Ok(format!("Removed \"{removed}\" from the market list").into())
}

/// Closes the current week's books. One-way; re-finalizing is a no-op.
pub fn finalize(store: &Store) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    let newly = ledger.finalize();
    save_applied(store, &ledger);
    let week = ledger.current_week();
    let message = if newly {
        format!("Week {week} finalized. No more changes can be made.")
    } else {
        format!("Week {week} was already finalized.")
    };
    Ok(message.into())
}
