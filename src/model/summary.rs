//! Weekly and monthly aggregation over the ledger.
//!
//! These are pure reads: weeks that have not been visited yet contribute
//! zero rather than an error, so a month's totals can be asked for while the
//! month is still in progress.

use crate::model::ledger::{Ledger, WEEKS_PER_MONTH};
use crate::model::{Amount, WeekRecord};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Paid and spent totals for one month.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthlyTotals {
    pub total_paid: Amount,
    pub total_expense: Amount,
}

/// The week numbers belonging to the given month: `(month-1)*4 + 1 ..= month*4`.
/// The end of the range may lie beyond the furthest week visited.
pub fn monthly_range(month: u32) -> RangeInclusive<u32> {
    let month = month.max(1);
    let start = (month - 1) * WEEKS_PER_MONTH + 1;
    start..=month * WEEKS_PER_MONTH
}

impl Ledger {
    /// The sum of payments for the given week; zero if the week has no
    /// record yet.
    pub fn weekly_total_paid(&self, week: u32) -> Amount {
        self.week(week).map(WeekRecord::total_paid).unwrap_or_default()
    }

    /// Totals over every existing week in the month. Summation is exact;
    /// rounding happens only on display.
    pub fn monthly_totals(&self, month: u32) -> MonthlyTotals {
        let mut totals = MonthlyTotals::default();
        for week in monthly_range(month) {
            if let Some(record) = self.week(week) {
                totals.total_paid += record.total_paid();
                totals.total_expense += record.expense;
            }
        }
        totals
    }
}
