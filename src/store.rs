use crate::errors::AppError;
use crate::models::{CheckInRequest, DailyLogEntry, ReviewRequest, TrackerData, WeeklyReviewEntry};
use crate::stats;
use chrono::{DateTime, NaiveDate, Utc};

pub fn validate_check_in(hours: f64, is_low_energy: bool) -> Result<(), AppError> {
    if is_low_energy && !(1.0..=2.0).contains(&hours) {
        return Err(AppError::validation(
            "Low Energy Day requires 1-2 hours of study",
        ));
    }

    if !is_low_energy && hours < 0.5 {
        return Err(AppError::validation(
            "Minimum 0.5 hours required for normal days",
        ));
    }

    Ok(())
}

/// Validates and records today's check-in: replaces an existing entry for
/// the same date in place, otherwise appends, then re-sorts the logs
/// newest-first and recomputes the streak fields. On rejection the document
/// is left untouched. The caller persists.
pub fn record_daily_check_in(
    data: &mut TrackerData,
    req: &CheckInRequest,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<DailyLogEntry, AppError> {
    validate_check_in(req.hours, req.is_low_energy)?;

    let entry = DailyLogEntry {
        date: today,
        hours: req.hours,
        topic: req.topic.trim().to_string(),
        proof: req.proof.trim().to_string(),
        is_low_energy: req.is_low_energy,
        timestamp: now,
    };

    match data.daily_logs.iter_mut().find(|log| log.date == today) {
        Some(existing) => *existing = entry.clone(),
        None => data.daily_logs.push(entry.clone()),
    }
    data.daily_logs.sort_by(|a, b| b.date.cmp(&a.date));

    stats::update_streaks(data, today);

    Ok(entry)
}

/// Appends a weekly review stamped with the upcoming Sunday. Unconditional:
/// the 7-check-ins unlock rule only gates the UI, not this operation.
pub fn record_weekly_review(
    data: &mut TrackerData,
    req: &ReviewRequest,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> WeeklyReviewEntry {
    let entry = WeeklyReviewEntry {
        date: now,
        week_ending: stats::week_ending(today),
        improved: req.improved.trim().to_string(),
        challenges: req.challenges.trim().to_string(),
        next_week: req.next_week.trim().to_string(),
    };
    data.weekly_reviews.push(entry.clone());
    entry
}

/// Parses a backup payload into a full document. Anything that is not a
/// tracker document — missing `dailyLogs` or `weeklyReviews`, wrong types
/// anywhere — is rejected, and the caller's state stays as it was.
pub fn import_data(raw: &str) -> Result<TrackerData, AppError> {
    serde_json::from_str(raw)
        .map_err(|err| AppError::bad_format(format!("invalid tracker document: {err}")))
}
