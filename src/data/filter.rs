//! Date Range Filter Module
//! Sidebar date selection resolution and inclusive row filtering.

use crate::data::model::{DayRecord, HourRecord};
use chrono::NaiveDate;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Min/max date over the daily dataset, None when empty.
pub fn date_bounds(days: &[DayRecord]) -> Option<DateRange> {
    let mut iter = days.iter();
    let first = iter.next()?.date;
    let (start, end) = iter.fold((first, first), |(min, max), record| {
        (min.min(record.date), max.max(record.date))
    });
    Some(DateRange::new(start, end))
}

/// Parse a sidebar date input (`YYYY-MM-DD`). Whitespace is tolerated.
pub fn parse_input_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

/// Resolve a user-supplied date selection against the dataset bounds.
///
/// A malformed or missing side, or an inverted selection, falls back to the
/// full dataset range. Valid sides are clamped into the bounds.
pub fn resolve_range(start_text: &str, end_text: &str, bounds: DateRange) -> DateRange {
    let (Some(start), Some(end)) = (parse_input_date(start_text), parse_input_date(end_text))
    else {
        return bounds;
    };

    if start > end {
        return bounds;
    }

    DateRange::new(
        start.clamp(bounds.start, bounds.end),
        end.clamp(bounds.start, bounds.end),
    )
}

/// Keep exactly the daily rows whose date lies in the range.
pub fn filter_days(days: &[DayRecord], range: DateRange) -> Vec<DayRecord> {
    days.iter()
        .copied()
        .filter(|record| range.contains(record.date))
        .collect()
}

/// Keep exactly the hourly rows whose date lies in the range.
pub fn filter_hours(hours: &[HourRecord], range: DateRange) -> Vec<HourRecord> {
    hours
        .iter()
        .copied()
        .filter(|record| range.contains(record.date))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::DayRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32, cnt: i64) -> DayRecord {
        DayRecord::new(date(y, m, d), 1, 1, true, cnt).unwrap()
    }

    fn sample_days() -> Vec<DayRecord> {
        (1..=10).map(|d| day(2011, 1, d, d as i64 * 100)).collect()
    }

    #[test]
    fn test_bounds_over_unordered_records() {
        let days = vec![day(2011, 3, 5, 1), day(2011, 1, 2, 1), day(2011, 2, 9, 1)];
        let bounds = date_bounds(&days).unwrap();
        assert_eq!(bounds.start, date(2011, 1, 2));
        assert_eq!(bounds.end, date(2011, 3, 5));

        assert!(date_bounds(&[]).is_none());
    }

    #[test]
    fn test_filter_is_inclusive() {
        let days = sample_days();
        let range = DateRange::new(date(2011, 1, 3), date(2011, 1, 5));
        let filtered = filter_days(&days, range);

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0].date, date(2011, 1, 3));
        assert_eq!(filtered[2].date, date(2011, 1, 5));
    }

    #[test]
    fn test_malformed_selection_falls_back_to_full_range() {
        let bounds = DateRange::new(date(2011, 1, 1), date(2011, 1, 10));

        assert_eq!(resolve_range("", "", bounds), bounds);
        assert_eq!(resolve_range("2011-01-03", "", bounds), bounds);
        assert_eq!(resolve_range("not a date", "2011-01-05", bounds), bounds);
        // Inverted selection is invalid too
        assert_eq!(resolve_range("2011-01-08", "2011-01-02", bounds), bounds);
    }

    #[test]
    fn test_valid_selection_is_clamped() {
        let bounds = DateRange::new(date(2011, 1, 1), date(2011, 1, 10));

        let resolved = resolve_range("2010-12-01", "2011-01-05", bounds);
        assert_eq!(resolved, DateRange::new(date(2011, 1, 1), date(2011, 1, 5)));

        let resolved = resolve_range(" 2011-01-03 ", "2012-06-01", bounds);
        assert_eq!(resolved, DateRange::new(date(2011, 1, 3), date(2011, 1, 10)));
    }

    #[test]
    fn test_totals_grow_monotonically_with_range() {
        let days = sample_days();
        let mut previous_total = 0u64;

        for end in 1..=10 {
            let range = DateRange::new(date(2011, 1, 1), date(2011, 1, end));
            let total: u64 = filter_days(&days, range)
                .iter()
                .map(|r| u64::from(r.cnt))
                .sum();
            assert!(total >= previous_total);
            previous_total = total;
        }

        assert_eq!(previous_total, (1..=10u64).map(|d| d * 100).sum::<u64>());
    }
}
