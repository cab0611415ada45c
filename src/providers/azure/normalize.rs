use serde_json::{Map, Value};

use super::timestamps::{calendar_date, duration_seconds};
use super::types::BuildRecord;
use crate::constants::{
    BUILD_NUMBER_KEY, BUILD_SUCCESS_RESULT, FINISH_TIME_KEY, ID_KEY, QUEUED_TIME_KEY, RESULT_KEY,
    START_TIME_KEY, STATUS_KEY,
};

/// Normalizes one raw entry of the build list.
///
/// Returns `None` only when the entry is not a JSON object. Missing or
/// unreadable fields never fail the entry.
pub fn normalize_entry(entry: &Value) -> Option<BuildRecord> {
    entry.as_object().map(normalize_build)
}

pub fn normalize_build(entry: &Map<String, Value>) -> BuildRecord {
    let start_time = field_text(entry, START_TIME_KEY);
    let finish_time = field_text(entry, FINISH_TIME_KEY);
    let result = field_text(entry, RESULT_KEY);

    BuildRecord {
        id: field_text(entry, ID_KEY),
        build_number: field_text(entry, BUILD_NUMBER_KEY),
        queue_time: field_text(entry, QUEUED_TIME_KEY),
        build_date: calendar_date(start_time.as_deref()),
        duration_seconds: duration_seconds(start_time.as_deref(), finish_time.as_deref()),
        passed: result.as_deref() == Some(BUILD_SUCCESS_RESULT),
        status: field_text(entry, STATUS_KEY),
        start_time,
        finish_time,
        result,
    }
}

// Numeric ids are kept as their decimal text; any other non-string is absent.
fn field_text(entry: &Map<String, Value>, key: &str) -> Option<String> {
    match entry.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
