use crate::args::NextPrev;
use crate::commands::{save_applied, Out};
use crate::{Result, Store};

/// Moves the cursor one week forward or back. Forward always works and
/// creates the new week's record on first visit; back stops at week 1.
pub fn week(store: &Store, direction: NextPrev) -> Result<Out<()>> {
    let mut ledger = store.load()?;
    let week = match direction {
        NextPrev::Next => ledger.advance_week(),
        NextPrev::Prev => ledger.retreat_week()?,
    };
    save_applied(store, &ledger);
    Ok(format!("Now on week {week}, month {}", ledger.current_month()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LedgerError;
    use crate::test::TestEnv;

    #[test]
    fn test_week_next_creates_and_persists() {
        let env = TestEnv::new();
        let out = week(env.store(), NextPrev::Next).unwrap();
        assert!(out.message().contains("week 2, month 1"));

        let ledger = env.store().load().unwrap();
        assert_eq!(ledger.current_week(), 2);
        assert!(ledger.week(2).is_some());
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        let env = TestEnv::new();
        for _ in 0..3 {
            week(env.store(), NextPrev::Next).unwrap();
        }
        let out = week(env.store(), NextPrev::Next).unwrap();
        assert!(out.message().contains("week 5, month 2"));
    }

    #[test]
    fn test_week_prev_at_boundary() {
        let env = TestEnv::new();
        let err = week(env.store(), NextPrev::Prev).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LedgerError>(),
            Some(&LedgerError::AtBoundary)
        );

        let ledger = env.store().load().unwrap();
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_month(), 1);
    }

    #[test]
    fn test_week_back_and_forth_keeps_data() {
        use crate::model::Amount;
        use std::str::FromStr;
        let env = TestEnv::new();
        crate::commands::add_payment(env.store(), "Asha", Amount::from_str("100").unwrap())
            .unwrap();
        week(env.store(), NextPrev::Next).unwrap();
        week(env.store(), NextPrev::Prev).unwrap();

        let ledger = env.store().load().unwrap();
        assert_eq!(ledger.current_week(), 1);
        assert_eq!(ledger.current_record().payments.len(), 1);
    }
}
