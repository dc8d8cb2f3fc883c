//! Types that represent the core ledger model, such as `Ledger` and `WeekRecord`.
mod amount;
mod ledger;
mod summary;
mod week;

pub use amount::{Amount, AmountError};
pub use ledger::{month_of_week, Ledger, LedgerError, WEEKS_PER_MONTH};
pub use summary::{monthly_range, MonthlyTotals};
pub use week::{Payment, WeekRecord};
