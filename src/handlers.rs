use crate::engine;
use crate::errors::AppError;
use crate::models::{
    AppData, CalendarQuery, CalendarResponse, CompletionRecord, StreakResponse, TodayResponse,
    ToggleRequest, ToggleResponse,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::{Datelike, Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    let streak = engine::compute_streak(&data.completions, today);
    Ok(Html(render_index(&date_string(today), streak)))
}

pub async fn get_today(State(state): State<AppState>) -> Result<Json<TodayResponse>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    Ok(Json(today_view(&data.completions, today)))
}

pub async fn get_streak(State(state): State<AppState>) -> Result<Json<StreakResponse>, AppError> {
    let data = state.data.lock().await;
    Ok(Json(StreakResponse {
        streak: engine::compute_streak(&data.completions, today_date()),
    }))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = today_date();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let data = state.data.lock().await;
    Ok(Json(calendar_for(&data.completions, year, month, today)?))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let today = today_date();
    let date = date_string(today);

    let mut data = state.data.lock().await;
    let was_complete = engine::all_complete_on(&data.completions, today);
    let completions = engine::upsert_topic(&data.completions, &date, payload.topic, payload.done);

    persist_data(&state.data_path, &AppData { completions: completions.clone() }).await?;
    data.completions = completions;

    let now_complete = engine::all_complete_on(&data.completions, today);
    Ok(Json(ToggleResponse {
        today: today_view(&data.completions, today),
        celebrate: !was_complete && now_complete,
    }))
}

fn today_view(completions: &[CompletionRecord], today: NaiveDate) -> TodayResponse {
    let date = date_string(today);
    let flags = engine::dedupe(completions)
        .get(&today)
        .copied()
        .unwrap_or_default();

    TodayResponse {
        date,
        ai_knowledge: flags.ai_knowledge,
        codebasics: flags.codebasics,
        trading: flags.trading,
        all_complete: flags.is_fully_complete(),
        streak: engine::compute_streak(completions, today),
    }
}

fn calendar_for(
    completions: &[CompletionRecord],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<CalendarResponse, AppError> {
    engine::classify_month(completions, year, month, today)
        .ok_or_else(|| AppError::bad_request("month must be a valid calendar month"))
}

fn today_date() -> NaiveDate {
    Local::now().date_naive()
}

fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
