use crate::errors::AppError;
use crate::models::{
    CheckInRequest, DailyLogEntry, HistoryResponse, ReviewRequest, ReviewsResponse, StatusResponse,
    TrackerData, WeeklyReviewEntry,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::persist_data;
use crate::store;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::{NaiveDate, Utc};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = today();
    let data = state.data.lock().await;
    let completed = data.daily_logs.iter().any(|log| log.date == today);
    Html(render_index(
        &today.to_string(),
        completed,
        data.current_streak,
        data.longest_streak,
    ))
}

pub async fn get_status(State(state): State<AppState>) -> Result<Json<StatusResponse>, AppError> {
    let today = today();
    let data = state.data.lock().await;
    Ok(Json(to_status(&data, today)))
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<DailyLogEntry>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let entry = store::record_daily_check_in(&mut data, &payload, today, Utc::now())?;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(entry))
}

pub async fn get_history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(HistoryResponse {
        total_days: data.daily_logs.len(),
        total_hours: stats::total_hours(&data.daily_logs),
        avg_hours: stats::average_hours(&data.daily_logs),
        entries: data.daily_logs.clone(),
    }))
}

pub async fn get_reviews(State(state): State<AppState>) -> Result<Json<ReviewsResponse>, AppError> {
    let today = today();
    let data = state.data.lock().await;
    let recent = stats::recent_check_in_count(&data.daily_logs, today);
    let mut reviews = data.weekly_reviews.clone();
    reviews.reverse();

    Ok(Json(ReviewsResponse {
        unlocked: recent >= stats::REVIEW_UNLOCK_DAYS,
        days_remaining: stats::REVIEW_UNLOCK_DAYS.saturating_sub(recent),
        reviews,
    }))
}

pub async fn weekly_review(
    State(state): State<AppState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<WeeklyReviewEntry>, AppError> {
    let today = today();
    let mut data = state.data.lock().await;
    let entry = store::record_weekly_review(&mut data, &payload, today, Utc::now());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(entry))
}

pub async fn export_data(State(state): State<AppState>) -> Result<Json<TrackerData>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(data.clone()))
}

pub async fn import_data(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<StatusResponse>, AppError> {
    let imported = store::import_data(&body)?;
    let today = today();
    let mut data = state.data.lock().await;
    *data = imported;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(to_status(&data, today)))
}

fn to_status(data: &TrackerData, today: NaiveDate) -> StatusResponse {
    StatusResponse {
        date: today.to_string(),
        completed_today: data.daily_logs.iter().any(|log| log.date == today),
        current_streak: data.current_streak,
        longest_streak: data.longest_streak,
    }
}

// Days are keyed in UTC, matching the stored timestamps.
fn today() -> NaiveDate {
    Utc::now().date_naive()
}
