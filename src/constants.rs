//! Fixed values shared by the collector, the normalizer and the CLI.

pub const DEFAULT_BUILD_URL: &str =
    "https://quadpay.visualstudio.com/quadpay-services/_apis/build/builds/";
pub const USER_AGENT: &str = "buildstats/0.1.0";

pub const BUILD_VALUE_KEY: &str = "value";
pub const ID_KEY: &str = "id";
pub const BUILD_NUMBER_KEY: &str = "buildNumber";
pub const QUEUED_TIME_KEY: &str = "queueTime";
pub const START_TIME_KEY: &str = "startTime";
pub const FINISH_TIME_KEY: &str = "finishTime";
pub const STATUS_KEY: &str = "status";
pub const RESULT_KEY: &str = "result";

pub const BUILD_SUCCESS_RESULT: &str = "succeeded";
pub const UNKNOWN_VALUE: &str = "N/A";
pub const UNKNOWN_DURATION_VALUE: i64 = -1;

pub const SUMMARY_HEADERS: [&str; 7] = [
    "Date",
    "Count",
    "Pass/Fail %",
    "Duration Max",
    "Duration Min",
    "Duration 95th",
    "Duration Avg",
];
