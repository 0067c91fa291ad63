use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One day's study check-in. At most one entry per `date`; re-recording a
/// date replaces the earlier entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub date: NaiveDate,
    pub hours: f64,
    pub topic: String,
    pub proof: String,
    pub is_low_energy: bool,
    pub timestamp: DateTime<Utc>,
}

/// A weekly reflection. Append-only, no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReviewEntry {
    pub date: DateTime<Utc>,
    pub week_ending: NaiveDate,
    pub improved: String,
    pub challenges: String,
    pub next_week: String,
}

/// The whole persisted document. `daily_logs` stays sorted descending by
/// date after every mutation; the streak fields are derived from
/// `daily_logs`, and `longest_streak` only ever grows.
///
/// `dailyLogs` and `weeklyReviews` have no serde default on purpose: a
/// payload missing either is not a tracker document and must be rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerData {
    pub daily_logs: Vec<DailyLogEntry>,
    pub weekly_reviews: Vec<WeeklyReviewEntry>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default = "Utc::now")]
    pub start_date: DateTime<Utc>,
}

impl TrackerData {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            daily_logs: Vec::new(),
            weekly_reviews: Vec::new(),
            current_streak: 0,
            longest_streak: 0,
            start_date: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub hours: f64,
    pub topic: String,
    pub proof: String,
    #[serde(default)]
    pub is_low_energy: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub improved: String,
    pub challenges: String,
    pub next_week: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub date: String,
    pub completed_today: bool,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub total_days: usize,
    pub total_hours: f64,
    pub avg_hours: f64,
    pub entries: Vec<DailyLogEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub unlocked: bool,
    pub days_remaining: usize,
    pub reviews: Vec<WeeklyReviewEntry>,
}
