use crate::commands::Out;
use crate::model::{Amount, MonthlyTotals, Payment};
use crate::{Result, Store};
use serde::Serialize;
use std::fmt::Write;

/// A read-only snapshot of the current week and its summary numbers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusView {
    pub week: u32,
    pub month: u32,
    pub in_charge: String,
    pub payments: Vec<Payment>,
    pub expense: Amount,
    pub market_items: Vec<String>,
    pub finalized: bool,
    pub weekly_total_paid: Amount,
    pub monthly_totals: MonthlyTotals,
}

/// Shows the current week, its entries (with the indices `remove` expects)
/// and the weekly/monthly totals.
pub fn status(store: &Store) -> Result<Out<StatusView>> {
    let ledger = store.load()?;
    let record = ledger.current_record();
    let view = StatusView {
        week: ledger.current_week(),
        month: ledger.current_month(),
        in_charge: record.in_charge.clone(),
        payments: record.payments.clone(),
        expense: record.expense,
        market_items: record.market_items.clone(),
        finalized: record.finalized,
        weekly_total_paid: ledger.weekly_total_paid(ledger.current_week()),
        monthly_totals: ledger.monthly_totals(ledger.current_month()),
    };

    let mut message = String::new();
    let state = if view.finalized {
        "finalized"
    } else {
        "in progress"
    };
    let _ = writeln!(message, "Week {}, Month {} ({state})", view.week, view.month);
    let in_charge = if view.in_charge.is_empty() {
        "Not Set"
    } else {
        view.in_charge.as_str()
    };
    let _ = writeln!(message, "In-charge: {in_charge}");

    let _ = writeln!(message, "Payments:");
    if view.payments.is_empty() {
        let _ = writeln!(message, "  (none yet)");
    } else {
        for (index, payment) in view.payments.iter().enumerate() {
            let _ = writeln!(message, "  [{index}] {}: ₹{}", payment.payer, payment.amount);
        }
    }

    let _ = writeln!(message, "Market items:");
    if view.market_items.is_empty() {
        let _ = writeln!(message, "  (none yet)");
    } else {
        for (index, item) in view.market_items.iter().enumerate() {
            let _ = writeln!(message, "  [{index}] {item}");
        }
    }

    let _ = writeln!(
        message,
        "Weekly total paid: ₹{}, weekly expense: ₹{}",
        view.weekly_total_paid, view.expense
    );
    let _ = write!(
        message,
        "Month {} so far: paid ₹{}, spent ₹{}",
        view.month, view.monthly_totals.total_paid, view.monthly_totals.total_expense
    );

    Ok(Out::new(message, view))
}
