use serde::Serialize;

/// One build run, normalized from a raw build-server entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRecord {
    pub id: Option<String>,
    pub build_number: Option<String>,
    pub queue_time: Option<String>,
    pub start_time: Option<String>,
    pub finish_time: Option<String>,
    pub status: Option<String>,
    pub result: Option<String>,
    /// `YYYY-MM-DD`, or `N/A` when the start time is unusable.
    pub build_date: String,
    /// Whole seconds, or `-1` when start or finish could not be read.
    pub duration_seconds: i64,
    pub passed: bool,
}
