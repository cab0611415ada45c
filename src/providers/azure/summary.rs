use indexmap::IndexMap;

use super::aggregate::DateAggregate;
use crate::constants::SUMMARY_HEADERS;
use crate::insights::{SummaryRow, SummaryTable};

const PERCENTILE: f64 = 95.0;
const SECONDS_PER_MINUTE: i64 = 60;

/// Builds one row per date bucket, in bucket order.
///
/// Unknown (`-1`) durations are part of the statistics input like any other
/// sample.
pub fn summary_table(buckets: &IndexMap<String, DateAggregate>) -> SummaryTable {
    SummaryTable {
        headers: SUMMARY_HEADERS.iter().map(ToString::to_string).collect(),
        rows: buckets
            .iter()
            .filter_map(|(date, bucket)| summarize_bucket(date, bucket))
            .collect(),
    }
}

pub fn summarize_bucket(date: &str, bucket: &DateAggregate) -> Option<SummaryRow> {
    if bucket.is_empty() {
        return None;
    }
    let max = bucket.durations.iter().max().copied()?;
    let min = bucket.durations.iter().min().copied()?;

    Some(SummaryRow {
        date: date.to_string(),
        count: bucket.len(),
        pass_percent: pass_percent(&bucket.passed),
        duration_max: max.div_euclid(SECONDS_PER_MINUTE),
        duration_min: min.div_euclid(SECONDS_PER_MINUTE),
        duration_95th: seconds_to_minutes(round_hundredths(percentile(
            &bucket.durations,
            PERCENTILE,
        ))),
        duration_avg: seconds_to_minutes(round_hundredths(mean(&bucket.durations))),
    })
}

fn pass_percent(passed: &[bool]) -> u32 {
    if passed.is_empty() {
        return 0;
    }
    let successes = passed.iter().filter(|p| **p).count();

    #[allow(clippy::cast_possible_truncation)]
    let percent = (successes * 100 / passed.len()) as u32;
    percent
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64
}

/// Percentile with linear interpolation between the closest ranks.
#[allow(clippy::cast_precision_loss)]
pub fn percentile(values: &[i64], pct: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let rank = (pct / 100.0) * (sorted.len() - 1) as f64;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let weight = rank - rank.floor();

    let low = sorted[lower] as f64;
    let high = sorted[upper] as f64;
    low + (high - low) * weight
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[allow(clippy::cast_possible_truncation)]
fn seconds_to_minutes(seconds: f64) -> i64 {
    (seconds / 60.0).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(durations: &[i64], passed: &[bool]) -> DateAggregate {
        DateAggregate {
            durations: durations.to_vec(),
            passed: passed.to_vec(),
        }
    }

    #[test]
    fn test_summarize_bucket() {
        let data = bucket(&[600, 1200, 827, 3599], &[true, true, false, true]);

        let row = summarize_bucket("2019-02-25", &data).unwrap();

        assert_eq!(row.date, "2019-02-25");
        assert_eq!(row.count, 4);
        assert_eq!(row.pass_percent, 75);
        assert_eq!(row.duration_max, 59);
        assert_eq!(row.duration_min, 10);
        // p95 rank 2.85 between 1200 and 3599 -> 3239.15s
        assert_eq!(row.duration_95th, 53);
        // mean 1556.5s
        assert_eq!(row.duration_avg, 25);
    }

    #[test]
    fn test_pass_percent_is_floored() {
        assert_eq!(pass_percent(&[true, true, false]), 66);
        assert_eq!(pass_percent(&[true, false, false]), 33);
        assert_eq!(pass_percent(&[false]), 0);
        assert_eq!(pass_percent(&[true]), 100);
    }

    #[test]
    fn test_pass_percent_avoids_float_drift() {
        let mut passed = vec![true; 57];
        passed.extend(vec![false; 43]);

        assert_eq!(pass_percent(&passed), 57);
    }

    #[test]
    fn test_percentile_interpolates() {
        assert!((percentile(&[1, 2, 3, 4, 5], 95.0) - 4.8).abs() < 1e-9);
        assert!((percentile(&[10], 95.0) - 10.0).abs() < 1e-9);
        assert!((percentile(&[0, 100], 50.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_statistics_are_order_invariant() {
        let forward = bucket(&[61, 3000, 45, 900, 1800], &[true, false, true, true, false]);
        let reversed = bucket(&[1800, 900, 45, 3000, 61], &[false, true, true, false, true]);

        assert_eq!(
            summarize_bucket("d", &forward),
            summarize_bucket("d", &reversed)
        );
    }

    #[test]
    fn test_unknown_durations_feed_statistics() {
        let data = bucket(&[-1, 120], &[false, true]);

        let row = summarize_bucket("2019-02-25", &data).unwrap();

        assert_eq!(row.duration_min, -1);
        assert_eq!(row.duration_max, 2);
        // mean 59.5s
        assert_eq!(row.duration_avg, 0);
    }

    #[test]
    fn test_all_unknown_durations_floor_below_zero() {
        let row = summarize_bucket("N/A", &bucket(&[-1, -1], &[false, false])).unwrap();

        assert_eq!(row.duration_max, -1);
        assert_eq!(row.duration_95th, -1);
        assert_eq!(row.duration_avg, -1);
    }

    #[test]
    fn test_empty_bucket_has_no_row() {
        assert_eq!(summarize_bucket("2019-02-25", &DateAggregate::default()), None);
    }

    #[test]
    fn test_summary_table_headers_and_order() {
        let mut buckets = IndexMap::new();
        buckets.insert("2019-02-26".to_string(), bucket(&[60], &[true]));
        buckets.insert("2019-02-25".to_string(), bucket(&[120], &[false]));

        let table = summary_table(&buckets);

        assert_eq!(
            table.headers,
            vec![
                "Date",
                "Count",
                "Pass/Fail %",
                "Duration Max",
                "Duration Min",
                "Duration 95th",
                "Duration Avg"
            ]
        );
        let dates: Vec<_> = table.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2019-02-26", "2019-02-25"]);
    }
}
