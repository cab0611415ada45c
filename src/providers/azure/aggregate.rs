use indexmap::IndexMap;
use serde::Serialize;

use super::types::BuildRecord;

/// Durations and pass flags of every build that started on one date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateAggregate {
    pub durations: Vec<i64>,
    pub passed: Vec<bool>,
}

impl DateAggregate {
    fn with_record(mut self, record: &BuildRecord) -> Self {
        self.durations.push(record.duration_seconds);
        self.passed.push(record.passed);
        self
    }

    pub fn len(&self) -> usize {
        self.durations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

/// Buckets records by build date, keeping dates in first-seen order and
/// samples in input order. Records sharing an id are all counted.
pub fn aggregate_by_date<'a, I>(records: I) -> IndexMap<String, DateAggregate>
where
    I: IntoIterator<Item = &'a BuildRecord>,
{
    records
        .into_iter()
        .fold(IndexMap::new(), |mut buckets, record| {
            let bucket = buckets.entry(record.build_date.clone()).or_default();
            *bucket = std::mem::take(bucket).with_record(record);
            buckets
        })
}
