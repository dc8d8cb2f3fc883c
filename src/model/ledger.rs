//! The week/month ledger state machine.
//!
//! A `Ledger` holds one `WeekRecord` per visited week and a cursor pointing
//! at the current week. The current month is never stored; it is derived from
//! the current week, so the two can never drift apart.

use crate::model::{Amount, Payment, WeekRecord};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Weeks are grouped into months of exactly four weeks.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Returns the month a week number belongs to. Weeks 1-4 are month 1,
/// weeks 5-8 are month 2, and so on.
pub fn month_of_week(week: u32) -> u32 {
    week.saturating_sub(1) / WEEKS_PER_MONTH + 1
}

/// An error produced by a ledger operation. No variant leaves the ledger in
/// a partially mutated state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum LedgerError {
    /// Required text was blank, or an amount was out of range.
    InvalidInput(String),
    /// A removal target that no longer exists.
    IndexOutOfRange { index: usize, len: usize },
    /// A mutation was attempted on a week whose books are closed.
    WeekFinalized(u32),
    /// An attempt to navigate before week 1.
    AtBoundary,
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidInput(message) => write!(f, "{message}"),
            LedgerError::IndexOutOfRange { index, len } => {
                write!(f, "There is no entry at index {index}; the list has {len} entries")
            }
            LedgerError::WeekFinalized(week) => {
                write!(f, "Week {week} is finalized and can no longer be edited")
            }
            LedgerError::AtBoundary => write!(f, "You are already at Week 1"),
        }
    }
}

impl std::error::Error for LedgerError {}

/// The in-memory ledger: all week records plus the current-week cursor.
///
/// Week records are created lazily the first time a week is visited in either
/// direction, so the map is dense from week 1 up to the furthest week reached.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ledger {
    current_week: u32,
    weeks: BTreeMap<u32, WeekRecord>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a fresh ledger at week 1 / month 1 with an empty first record.
    pub fn new() -> Self {
        let mut weeks = BTreeMap::new();
        weeks.insert(1, WeekRecord::default());
        Self {
            current_week: 1,
            weeks,
        }
    }

    /// Rebuilds a ledger from persisted parts. A stored cursor below week 1
    /// is clamped, and the current week's record is created if it is missing.
    pub(crate) fn from_parts(current_week: u32, mut weeks: BTreeMap<u32, WeekRecord>) -> Self {
        let current_week = current_week.max(1);
        weeks.entry(1).or_default();
        weeks.entry(current_week).or_default();
        Self {
            current_week,
            weeks,
        }
    }

    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    /// The month the current week belongs to. Derived, never stored.
    pub fn current_month(&self) -> u32 {
        month_of_week(self.current_week)
    }

    /// The record for the given week, if that week has been visited.
    pub fn week(&self, week: u32) -> Option<&WeekRecord> {
        self.weeks.get(&week)
    }

    /// The current week's record. Always present: navigation creates records
    /// on demand.
    pub fn current_record(&self) -> &WeekRecord {
        self.weeks
            .get(&self.current_week)
            .expect("the current week record always exists")
    }

    pub(crate) fn weeks(&self) -> &BTreeMap<u32, WeekRecord> {
        &self.weeks
    }

    /// Moves the cursor forward one week, creating the record on first visit.
    /// Returns the new current week.
    pub fn advance_week(&mut self) -> u32 {
        self.current_week += 1;
        self.weeks.entry(self.current_week).or_default();
        self.current_week
    }

    /// Moves the cursor back one week. Fails with `AtBoundary` at week 1.
    /// Returns the new current week.
    pub fn retreat_week(&mut self) -> Result<u32, LedgerError> {
        if self.current_week == 1 {
            return Err(LedgerError::AtBoundary);
        }
        self.current_week -= 1;
        // The week should already exist; recreate it if the store was ever
        // handed a sparse map.
        self.weeks.entry(self.current_week).or_default();
        Ok(self.current_week)
    }

    /// The current record, writable. Fails once the week is finalized.
    fn editable(&mut self) -> Result<&mut WeekRecord, LedgerError> {
        let week = self.current_week;
        let record = self.weeks.entry(week).or_default();
        if record.finalized {
            return Err(LedgerError::WeekFinalized(week));
        }
        Ok(record)
    }

    /// Sets the current week's in-charge. The name is trimmed and must not
    /// be blank.
    pub fn set_in_charge(&mut self, name: &str) -> Result<(), LedgerError> {
        let record = self.editable()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Please enter a name for the in-charge".to_string(),
            ));
        }
        record.in_charge = name.to_string();
        Ok(())
    }

    /// Appends a payment to the current week. The payer name is trimmed and
    /// must not be blank; the amount must be greater than zero.
    pub fn add_payment(&mut self, payer: &str, amount: Amount) -> Result<(), LedgerError> {
        let record = self.editable()?;
        let payer = payer.trim();
        if payer.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Please enter the payer's name".to_string(),
            ));
        }
        if !amount.is_positive() {
            return Err(LedgerError::InvalidInput(
                "The payment amount must be greater than zero".to_string(),
            ));
        }
        record.payments.push(Payment::new(payer, amount));
        Ok(())
    }

    /// Removes and returns the payment at `index` in the current week.
    pub fn remove_payment(&mut self, index: usize) -> Result<Payment, LedgerError> {
        let record = self.editable()?;
        let len = record.payments.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(record.payments.remove(index))
    }

    /// Sets the current week's total expense. The amount must not be negative.
    pub fn set_expense(&mut self, amount: Amount) -> Result<(), LedgerError> {
        let record = self.editable()?;
        if amount.is_negative() {
            return Err(LedgerError::InvalidInput(
                "The weekly expense cannot be negative".to_string(),
            ));
        }
        record.expense = amount;
        Ok(())
    }

    /// Appends a market item to the current week's shopping list. The text is
    /// trimmed and must not be blank.
    pub fn add_market_item(&mut self, text: &str) -> Result<(), LedgerError> {
        let record = self.editable()?;
        let text = text.trim();
        if text.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Please enter an item to add".to_string(),
            ));
        }
        record.market_items.push(text.to_string());
        Ok(())
    }

    /// Removes and returns the market item at `index` in the current week.
    pub fn remove_market_item(&mut self, index: usize) -> Result<String, LedgerError> {
        let record = self.editable()?;
        let len = record.market_items.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }
        Ok(record.market_items.remove(index))
    }

    /// Closes the current week's books. One-way: there is no un-finalize.
    /// Calling this on an already finalized week is harmless; the return
    /// value is false in that case.
    pub fn finalize(&mut self) -> bool {
        let record = self.weeks.entry(self.current_week).or_default();
        let newly = !record.finalized;
        record.finalized = true;
        newly
    }

    /// Discards everything and starts over at week 1 / month 1.
    pub fn reset(&mut self) {
        *self = Ledger::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_new_ledger_starts_at_week_one() {
        let ledger = Ledger::new();
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_month(), 1);
        assert_eq!(ledger.current_record(), &WeekRecord::default());
    }

    #[test]
    fn test_month_of_week() {
        assert_eq!(month_of_week(1), 1);
        assert_eq!(month_of_week(4), 1);
        assert_eq!(month_of_week(5), 2);
        assert_eq!(month_of_week(8), 2);
        assert_eq!(month_of_week(9), 3);
    }

    #[test]
    fn test_advance_creates_records_and_crosses_month_boundary() {
        let mut ledger = Ledger::new();
        for expected in [2, 3, 4] {
            assert_eq!(ledger.advance_week(), expected);
            assert_eq!(ledger.current_month(), 1);
            assert!(ledger.week(expected).is_some());
        }
        assert_eq!(ledger.advance_week(), 5);
        assert_eq!(ledger.current_month(), 2);
    }

    #[test]
    fn test_retreat_at_week_one_fails() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.retreat_week(), Err(LedgerError::AtBoundary));
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_month(), 1);
    }

    #[test]
    fn test_retreat_recomputes_month() {
        let mut ledger = Ledger::new();
        for _ in 0..4 {
            ledger.advance_week();
        }
        assert_eq!(ledger.current_week(), 5);
        assert_eq!(ledger.current_month(), 2);
        assert_eq!(ledger.retreat_week().unwrap(), 4);
        assert_eq!(ledger.current_month(), 1);
    }

    #[test]
    fn test_month_stable_after_far_navigation() {
        // The legacy incremental month counter could drift after navigating
        // far forward and back; the derived month cannot.
        let mut ledger = Ledger::new();
        for _ in 0..11 {
            ledger.advance_week();
        }
        assert_eq!(ledger.current_week(), 12);
        assert_eq!(ledger.current_month(), 3);
        for _ in 0..11 {
            ledger.retreat_week().unwrap();
        }
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_month(), 1);
    }

    #[test]
    fn test_set_in_charge() {
        let mut ledger = Ledger::new();
        ledger.set_in_charge("  Meena  ").unwrap();
        assert_eq!(ledger.current_record().in_charge, "Meena");
    }

    #[test]
    fn test_set_in_charge_blank_fails() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            ledger.set_in_charge("   "),
            Err(LedgerError::InvalidInput(_))
        ));
        assert_eq!(ledger.current_record().in_charge, "");
    }

    #[test]
    fn test_add_payment_validation() {
        let mut ledger = Ledger::new();
        assert!(matches!(
            ledger.add_payment("", amount("10")),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.add_payment("Asha", amount("0")),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(matches!(
            ledger.add_payment("Asha", amount("-5")),
            Err(LedgerError::InvalidInput(_))
        ));
        assert!(ledger.current_record().payments.is_empty());
    }

    #[test]
    fn test_payment_scenario() {
        let mut ledger = Ledger::new();
        ledger.add_payment("Asha", amount("250")).unwrap();
        ledger.add_payment("Ravi", amount("150")).unwrap();
        assert_eq!(ledger.weekly_total_paid(1), amount("400"));

        let removed = ledger.remove_payment(0).unwrap();
        assert_eq!(removed.payer, "Asha");
        assert_eq!(ledger.weekly_total_paid(1), amount("150"));
    }

    #[test]
    fn test_remove_payment_index_bounds() {
        let mut ledger = Ledger::new();
        ledger.add_payment("Asha", amount("100")).unwrap();
        ledger.add_payment("Ravi", amount("200")).unwrap();

        // Index equal to the length is out of range.
        assert_eq!(
            ledger.remove_payment(2),
            Err(LedgerError::IndexOutOfRange { index: 2, len: 2 })
        );

        // The last index removes the last entry and shifts nothing else.
        let removed = ledger.remove_payment(1).unwrap();
        assert_eq!(removed.payer, "Ravi");
        assert_eq!(ledger.current_record().payments[0].payer, "Asha");
    }

    #[test]
    fn test_set_expense() {
        let mut ledger = Ledger::new();
        ledger.set_expense(amount("0")).unwrap();
        ledger.set_expense(amount("75.25")).unwrap();
        assert_eq!(ledger.current_record().expense, amount("75.25"));
        assert!(matches!(
            ledger.set_expense(amount("-1")),
            Err(LedgerError::InvalidInput(_))
        ));
        assert_eq!(ledger.current_record().expense, amount("75.25"));
    }

    #[test]
    fn test_market_items() {
        let mut ledger = Ledger::new();
        ledger.add_market_item(" rice ").unwrap();
        ledger.add_market_item("dal").unwrap();
        assert_eq!(ledger.current_record().market_items, vec!["rice", "dal"]);

        assert!(matches!(
            ledger.add_market_item("  "),
            Err(LedgerError::InvalidInput(_))
        ));

        let removed = ledger.remove_market_item(0).unwrap();
        assert_eq!(removed, "rice");
        assert_eq!(
            ledger.remove_market_item(5),
            Err(LedgerError::IndexOutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_finalize_blocks_every_mutation() {
        let mut ledger = Ledger::new();
        ledger.set_in_charge("Meena").unwrap();
        ledger.add_payment("Asha", amount("100")).unwrap();
        ledger.add_market_item("rice").unwrap();
        ledger.set_expense(amount("20")).unwrap();

        assert!(ledger.finalize());
        let before = ledger.current_record().clone();

        assert_eq!(
            ledger.set_in_charge("Ravi"),
            Err(LedgerError::WeekFinalized(1))
        );
        assert_eq!(
            ledger.add_payment("Ravi", amount("50")),
            Err(LedgerError::WeekFinalized(1))
        );
        assert_eq!(
            ledger.remove_payment(0),
            Err(LedgerError::WeekFinalized(1))
        );
        assert_eq!(
            ledger.set_expense(amount("30")),
            Err(LedgerError::WeekFinalized(1))
        );
        assert_eq!(
            ledger.add_market_item("dal"),
            Err(LedgerError::WeekFinalized(1))
        );
        assert_eq!(
            ledger.remove_market_item(0),
            Err(LedgerError::WeekFinalized(1))
        );

        assert_eq!(ledger.current_record(), &before);
    }

    #[test]
    fn test_finalize_twice_is_harmless() {
        let mut ledger = Ledger::new();
        assert!(ledger.finalize());
        assert!(!ledger.finalize());
        assert!(ledger.current_record().finalized);
    }

    #[test]
    fn test_finalized_week_does_not_block_other_weeks() {
        let mut ledger = Ledger::new();
        ledger.finalize();
        ledger.advance_week();
        ledger.add_payment("Asha", amount("10")).unwrap();
        assert_eq!(ledger.weekly_total_paid(2), amount("10"));
    }

    #[test]
    fn test_reset() {
        let mut ledger = Ledger::new();
        ledger.add_payment("Asha", amount("100")).unwrap();
        for _ in 0..5 {
            ledger.advance_week();
        }
        ledger.reset();
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_month(), 1);
        assert_eq!(ledger.current_record(), &WeekRecord::default());
        assert!(ledger.week(2).is_none());
    }

    #[test]
    fn test_from_parts_clamps_and_fills() {
        let ledger = Ledger::from_parts(0, BTreeMap::new());
        assert_eq!(ledger.current_week(), 1);
        assert!(ledger.week(1).is_some());

        let ledger = Ledger::from_parts(3, BTreeMap::new());
        assert_eq!(ledger.current_week(), 3);
        assert!(ledger.week(3).is_some());
    }
}
