use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of all builds that started on one date.
///
/// Durations are whole minutes, floored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub date: String,
    pub count: usize,
    pub pass_percent: u32,
    pub duration_max: i64,
    pub duration_min: i64,
    pub duration_95th: i64,
    pub duration_avg: i64,
}

impl SummaryRow {
    /// Cell values in header order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.count.to_string(),
            self.pass_percent.to_string(),
            self.duration_max.to_string(),
            self.duration_min.to_string(),
            self.duration_95th.to_string(),
            self.duration_avg.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTable {
    pub headers: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildMetricsReport {
    pub provider: String,
    pub build_url: String,
    pub collected_at: DateTime<Utc>,
    pub total_dates: usize,
    pub summary: SummaryTable,
}
