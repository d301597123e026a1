use crate::error::TGError;
use chrono::{Months, NaiveDate};
use std::convert::TryFrom;

/// The half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeWindow {
    /// The `years` calendar years ending just before `end`.
    ///
    /// Years are subtracted as whole months, so a start that would land on a missing day is
    /// clamped to the end of its month: 29 February minus one year is 28 February.
    pub fn trailing_years(end: NaiveDate, years: i32) -> Result<Self, TGError> {
        let months = u32::try_from(years)
            .map_err(|_| TGError::InvalidWindow(years, "window length is negative".to_owned()))?
            .checked_mul(12)
            .ok_or_else(|| TGError::InvalidWindow(years, "window length overflows".to_owned()))?;
        let start = end.checked_sub_months(Months::new(months)).ok_or_else(|| {
            TGError::InvalidWindow(years, format!("window start before {} is out of range", end))
        })?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use crate::snapshot::tests::date;
    use crate::temporal::window::TimeWindow;

    #[test]
    fn bounds_are_half_open() {
        let window = TimeWindow::trailing_years(date(2020, 1, 1), 10).expect("Valid window");
        assert_eq!(window.start(), date(2010, 1, 1));
        assert!(window.contains(date(2010, 1, 1)));
        assert!(window.contains(date(2019, 12, 31)));
        assert!(!window.contains(date(2020, 1, 1)));
        assert!(!window.contains(date(2009, 12, 31)));
        assert_eq!(window.to_string(), "[2010-01-01, 2020-01-01)");
    }

    #[test]
    fn leap_days_use_calendar_arithmetic() {
        let window = TimeWindow::trailing_years(date(2024, 2, 29), 1).expect("Valid window");
        assert_eq!(window.start(), date(2023, 2, 28));

        let window = TimeWindow::trailing_years(date(2024, 2, 29), 4).expect("Valid window");
        assert_eq!(window.start(), date(2020, 2, 29));

        // 1461 days would land on 1 March 2020.
        let window = TimeWindow::trailing_years(date(2024, 3, 1), 4).expect("Valid window");
        assert_eq!(window.start(), date(2020, 3, 1));
    }

    #[test]
    fn zero_years_is_empty() {
        let window = TimeWindow::trailing_years(date(2020, 1, 1), 0).expect("Valid window");
        assert!(!window.contains(date(2020, 1, 1)));
        assert!(!window.contains(date(2019, 12, 31)));
    }

    #[test]
    fn invalid_windows_are_rejected() {
        let error = TimeWindow::trailing_years(date(2020, 1, 1), -1).expect_err("Negative window");
        assert!(error.to_string().starts_with("[WindowError]"));
        assert!(TimeWindow::trailing_years(date(2020, 1, 1), 400_000).is_err());
    }
}
