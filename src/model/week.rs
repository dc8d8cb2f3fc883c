use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// A single payment made toward the week's shared expenses.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Payment {
    /// Who paid.
    pub payer: String,
    /// How much they paid. Always greater than zero.
    pub amount: Amount,
}

impl Payment {
    pub fn new(payer: impl Into<String>, amount: Amount) -> Self {
        Self {
            payer: payer.into(),
            amount,
        }
    }
}

/// Everything recorded for one week.
///
/// Every field carries a serde default so that records written by an older
/// version of the program load cleanly when new fields are added.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeekRecord {
    /// The person responsible for collections this week. Empty until set.
    #[serde(default)]
    pub in_charge: String,

    /// Payments in insertion order. Display and removal are index-based.
    #[serde(default)]
    pub payments: Vec<Payment>,

    /// The week's total spend. Zero until explicitly set.
    #[serde(default)]
    pub expense: Amount,

    /// Shared shopping-list entries, in insertion order.
    #[serde(default)]
    pub market_items: Vec<String>,

    /// One-way latch. Once true the record is closed to edits.
    #[serde(default)]
    pub finalized: bool,
}

impl WeekRecord {
    /// Sums the week's payments at full precision.
    pub fn total_paid(&self) -> Amount {
        self.payments.iter().map(|p| p.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_total_paid_empty() {
        let record = WeekRecord::default();
        assert!(record.total_paid().is_zero());
    }

    #[test]
    fn test_total_paid() {
        let mut record = WeekRecord::default();
        record
            .payments
            .push(Payment::new("Asha", Amount::from_str("250").unwrap()));
        record
            .payments
            .push(Payment::new("Ravi", Amount::from_str("150").unwrap()));
        assert_eq!(record.total_paid(), Amount::from_str("400").unwrap());
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        // A record persisted before market items and finalization existed.
        let json = r#"{ "expense": "20" }"#;
        let record: WeekRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.in_charge, "");
        assert!(record.payments.is_empty());
        assert_eq!(record.expense, Amount::from_str("20").unwrap());
        assert!(record.market_items.is_empty());
        assert!(!record.finalized);
    }

    #[test]
    fn test_round_trip() {
        let mut record = WeekRecord::default();
        record.in_charge = "Meena".to_string();
        record
            .payments
            .push(Payment::new("Asha", Amount::from_str("33.33").unwrap()));
        record.expense = Amount::from_str("12.50").unwrap();
        record.market_items.push("rice".to_string());
        record.finalized = true;

        let json = serde_json::to_string(&record).unwrap();
        let loaded: WeekRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, loaded);
    }
}
