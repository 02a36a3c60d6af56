use chrono::{Months, NaiveDate};

use crate::errors::{Result, ScheduleError};

/// add calendar months, clamping to the last day of shorter months
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| ScheduleError::InvalidDate {
            message: format!("{} plus {} months is out of range", date, months),
        })
}

/// due dates for `count` monthly installments starting at `first`
///
/// Each date is offset from `first` rather than from its predecessor, so a
/// schedule anchored on the 31st returns to the 31st after a short month.
pub fn payment_dates(first: NaiveDate, count: u32) -> Result<Vec<NaiveDate>> {
    (0..count).map(|offset| add_months_clamped(first, offset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_end_clamping() {
        assert_eq!(add_months_clamped(ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(add_months_clamped(ymd(2023, 1, 31), 1).unwrap(), ymd(2023, 2, 28));
        assert_eq!(add_months_clamped(ymd(2024, 3, 31), 1).unwrap(), ymd(2024, 4, 30));
        assert_eq!(add_months_clamped(ymd(2024, 11, 15), 2).unwrap(), ymd(2025, 1, 15));
    }

    #[test]
    fn test_dates_keep_anchor_day() {
        let dates = payment_dates(ymd(2024, 1, 31), 4).unwrap();
        assert_eq!(
            dates,
            vec![ymd(2024, 1, 31), ymd(2024, 2, 29), ymd(2024, 3, 31), ymd(2024, 4, 30)]
        );
    }

    #[test]
    fn test_dates_one_month_apart() {
        let first = ymd(2024, 1, 30);
        let dates = payment_dates(first, 74).unwrap();
        assert_eq!(dates.len(), 74);

        for pair in dates.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            assert!(next > prev);
            let months_prev = prev.year() * 12 + prev.month() as i32;
            let months_next = next.year() * 12 + next.month() as i32;
            assert_eq!(months_next - months_prev, 1);

            let last_day = add_months_clamped(ymd(next.year(), next.month(), 1), 1)
                .unwrap()
                .pred_opt()
                .unwrap()
                .day();
            assert_eq!(next.day(), first.day().min(last_day));
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = add_months_clamped(NaiveDate::MAX, 1).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidDate { .. }));
    }
}
