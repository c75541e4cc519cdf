//! Dashboard Statistics Module
//! Descriptive aggregates computed from the filtered record sets.

use crate::data::{DayRecord, Daypart, HourRecord, Season, Weather};
use chrono::NaiveDate;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Five-number summary for a box plot, plus mean and sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub count: usize,
    pub mean: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_low: f64,
    pub whisker_high: f64,
}

impl BoxStats {
    /// Compute the summary for a set of values. None when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);
        let iqr = q3 - q1;

        // Whiskers reach the outermost values within 1.5 IQR of the box
        let whisker_low = sorted
            .iter()
            .copied()
            .find(|&v| v >= q1 - 1.5 * iqr)
            .unwrap_or(q1);
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|&v| v <= q3 + 1.5 * iqr)
            .unwrap_or(q3);

        Some(Self {
            count: sorted.len(),
            mean,
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
        })
    }
}

/// Calculate percentile using linear interpolation (NumPy compatible).
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted_values[0];
    }

    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;

    if lower == upper {
        sorted_values[lower]
    } else {
        sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
    }
}

/// All aggregates backing the dashboard's fixed chart sequence.
#[derive(Debug, Clone, Default)]
pub struct DashboardStats {
    /// Sum of daily `cnt` over the filtered range.
    pub total_rentals: u64,
    /// Per-day rental totals, ascending by date.
    pub daily_totals: Vec<(NaiveDate, u64)>,
    /// Daily `cnt` distribution per weather condition, code order.
    pub weather_boxes: Vec<(Weather, BoxStats)>,
    /// Mean rentals per hour over working-day rows.
    pub workday_hourly: [f64; 24],
    /// Mean rentals per hour over weekend/holiday rows.
    pub weekend_hourly: [f64; 24],
    /// Mean rentals per hour over all filtered hourly rows.
    pub hourly_means: [f64; 24],
    /// Mean rentals per daypart, display order.
    pub daypart_means: Vec<(Daypart, f64)>,
    /// Mean daily rentals per season, code order.
    pub season_means: Vec<(Season, f64)>,
}

impl DashboardStats {
    /// Compute every aggregate from the filtered record sets.
    pub fn compute(days: &[DayRecord], hours: &[HourRecord]) -> Self {
        let total_rentals = days.iter().map(|r| u64::from(r.cnt)).sum();

        let mut by_date: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in days {
            *by_date.entry(record.date).or_default() += u64::from(record.cnt);
        }
        let daily_totals: Vec<(NaiveDate, u64)> = by_date.into_iter().collect();

        // The weather distributions are independent, compute them in parallel
        let weather_boxes: Vec<(Weather, BoxStats)> = Weather::ALL
            .par_iter()
            .filter_map(|&weather| {
                let values: Vec<f64> = days
                    .iter()
                    .filter(|r| r.weather == weather)
                    .map(|r| f64::from(r.cnt))
                    .collect();
                BoxStats::from_values(&values).map(|stats| (weather, stats))
            })
            .collect();

        let workday_hourly = hourly_profile(hours, |r| r.working_day);
        let weekend_hourly = hourly_profile(hours, |r| !r.working_day);
        let hourly_means = hourly_profile(hours, |_| true);

        let daypart_means = Daypart::ALL
            .iter()
            .map(|&daypart| {
                let mean = mean_of(
                    hours
                        .iter()
                        .filter(|r| r.daypart() == daypart)
                        .map(|r| f64::from(r.cnt)),
                );
                (daypart, mean)
            })
            .collect();

        let season_means = Season::ALL
            .iter()
            .filter_map(|&season| {
                let values: Vec<f64> = days
                    .iter()
                    .filter(|r| r.season == season)
                    .map(|r| f64::from(r.cnt))
                    .collect();
                if values.is_empty() {
                    None
                } else {
                    Some((season, values.iter().sum::<f64>() / values.len() as f64))
                }
            })
            .collect();

        Self {
            total_rentals,
            daily_totals,
            weather_boxes,
            workday_hourly,
            weekend_hourly,
            hourly_means,
            daypart_means,
            season_means,
        }
    }
}

/// Mean `cnt` per hour of day over the rows matching the predicate.
/// Hours with no rows report 0.
fn hourly_profile<F>(hours: &[HourRecord], keep: F) -> [f64; 24]
where
    F: Fn(&HourRecord) -> bool,
{
    let mut sums = [0.0f64; 24];
    let mut counts = [0usize; 24];

    for record in hours.iter().filter(|r| keep(r)) {
        sums[record.hour as usize] += f64::from(record.cnt);
        counts[record.hour as usize] += 1;
    }

    let mut means = [0.0f64; 24];
    for hour in 0..24 {
        if counts[hour] > 0 {
            means[hour] = sums[hour] / counts[hour] as f64;
        }
    }
    means
}

fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DayRecord, HourRecord};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2011, 1, d).unwrap()
    }

    fn day(d: u32, season: i64, weather: i64, cnt: i64) -> DayRecord {
        DayRecord::new(date(d), season, weather, true, cnt).unwrap()
    }

    fn hour(d: u32, hr: i64, working: bool, cnt: i64) -> HourRecord {
        HourRecord::new(date(d), hr, 1, 1, working, cnt).unwrap()
    }

    #[test]
    fn test_box_stats_quartiles() {
        let values: Vec<f64> = (1..=9).map(f64::from).collect();
        let stats = BoxStats::from_values(&values).unwrap();

        assert_eq!(stats.count, 9);
        assert!((stats.mean - 5.0).abs() < 1e-9);
        assert!((stats.q1 - 3.0).abs() < 1e-9);
        assert!((stats.median - 5.0).abs() < 1e-9);
        assert!((stats.q3 - 7.0).abs() < 1e-9);
        assert!((stats.whisker_low - 1.0).abs() < 1e-9);
        assert!((stats.whisker_high - 9.0).abs() < 1e-9);

        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_whiskers_exclude_outliers() {
        let mut values: Vec<f64> = (10..=20).map(f64::from).collect();
        values.push(100.0);
        let stats = BoxStats::from_values(&values).unwrap();

        assert!(stats.whisker_high < 100.0);
        assert!((stats.whisker_low - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_totals_sum_and_sort() {
        let days = vec![day(3, 1, 1, 30), day(1, 1, 1, 10), day(1, 2, 1, 5)];
        let stats = DashboardStats::compute(&days, &[]);

        assert_eq!(stats.total_rentals, 45);
        assert_eq!(
            stats.daily_totals,
            vec![(date(1), 15), (date(3), 30)]
        );
    }

    #[test]
    fn test_weather_groups_in_code_order_and_skip_empty() {
        let days = vec![
            day(1, 1, 3, 20),
            day(2, 1, 1, 100),
            day(3, 1, 1, 200),
            day(4, 1, 3, 40),
        ];
        let stats = DashboardStats::compute(&days, &[]);

        let conditions: Vec<Weather> = stats.weather_boxes.iter().map(|(w, _)| *w).collect();
        assert_eq!(conditions, vec![Weather::Clear, Weather::LightRain]);

        let clear = stats.weather_boxes[0].1;
        assert_eq!(clear.count, 2);
        assert!((clear.mean - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_profiles_split_by_working_day() {
        let hours = vec![
            hour(1, 8, true, 100),
            hour(2, 8, true, 200),
            hour(1, 8, false, 30),
            hour(1, 14, false, 50),
        ];
        let stats = DashboardStats::compute(&[], &hours);

        assert!((stats.workday_hourly[8] - 150.0).abs() < 1e-9);
        assert!((stats.weekend_hourly[8] - 30.0).abs() < 1e-9);
        assert!((stats.weekend_hourly[14] - 50.0).abs() < 1e-9);
        assert!((stats.hourly_means[8] - 110.0).abs() < 1e-9);
        // Hours with no rows report 0
        assert_eq!(stats.hourly_means[3], 0.0);
    }

    #[test]
    fn test_daypart_means() {
        let hours = vec![
            hour(1, 6, true, 10),  // Morning
            hour(1, 9, true, 30),  // Morning
            hour(1, 13, true, 40), // Afternoon
            hour(1, 22, true, 8),  // Night
        ];
        let stats = DashboardStats::compute(&[], &hours);

        let by_part: std::collections::HashMap<Daypart, f64> =
            stats.daypart_means.iter().copied().collect();
        assert!((by_part[&Daypart::Morning] - 20.0).abs() < 1e-9);
        assert!((by_part[&Daypart::Afternoon] - 40.0).abs() < 1e-9);
        assert_eq!(by_part[&Daypart::Evening], 0.0);
        assert!((by_part[&Daypart::Night] - 8.0).abs() < 1e-9);

        // Fixed display order
        let order: Vec<Daypart> = stats.daypart_means.iter().map(|(p, _)| *p).collect();
        assert_eq!(order, Daypart::ALL.to_vec());
    }

    #[test]
    fn test_season_means() {
        let days = vec![day(1, 1, 1, 100), day(2, 1, 1, 300), day(3, 3, 1, 50)];
        let stats = DashboardStats::compute(&days, &[]);

        assert_eq!(
            stats.season_means,
            vec![(Season::Spring, 200.0), (Season::Fall, 50.0)]
        );
    }
}
