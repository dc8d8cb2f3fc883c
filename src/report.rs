//! Renders a printable, human-readable report of the current week.

use crate::model::Ledger;
use std::fmt::Write;

/// Builds the plain-text report for the ledger's current week: header,
/// payment entries, market items and the weekly/monthly summary.
pub(crate) fn weekly_report(ledger: &Ledger) -> String {
    let record = ledger.current_record();
    let week = ledger.current_week();
    let month = ledger.current_month();
    let weekly_paid = ledger.weekly_total_paid(week);
    let monthly = ledger.monthly_totals(month);

    let in_charge = if record.in_charge.is_empty() {
        "Not Set"
    } else {
        record.in_charge.as_str()
    };
    let status = if record.finalized {
        "Finalized"
    } else {
        "In Progress"
    };

    let mut out = String::new();
    let _ = writeln!(out, "PG Expense Report");
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "Week: {week}, Month: {month}");
    let _ = writeln!(out, "In-Charge: {in_charge}");
    let _ = writeln!(out);

    let _ = writeln!(out, "Weekly Payment Entries:");
    if record.payments.is_empty() {
        let _ = writeln!(out, "  (no payment entries recorded for this week)");
    } else {
        for payment in &record.payments {
            let _ = writeln!(out, "  - {}: ₹{}", payment.payer, payment.amount);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Weekly Market Items:");
    if record.market_items.is_empty() {
        let _ = writeln!(out, "  (no items recorded for this week)");
    } else {
        for item in &record.market_items {
            let _ = writeln!(out, "  - {item}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "  Weekly Total Paid: ₹{weekly_paid}");
    let _ = writeln!(out, "  Weekly Expense: ₹{}", record.expense);
    let _ = writeln!(out, "  Monthly Total Paid: ₹{}", monthly.total_paid);
    let _ = writeln!(out, "  Monthly Expense: ₹{}", monthly.total_expense);
    let _ = writeln!(out, "  Status: {status}");
    out
}
