use crate::errors::AppError;
use crate::metrics::{
    build_analytics, compute_emission_stats, compute_environmental_impact, compute_summary,
};
use crate::models::{
    AnalyticsResponse, DayEntryRequest, ProfileRequest, SummaryResponse, TravelRecord,
    UserProfile, Weekday,
};
use crate::session::Session;
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use chrono::{Datelike, Local};
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(session.profile(), today()))
}

pub async fn get_profile(State(state): State<AppState>) -> Json<Option<UserProfile>> {
    let session = state.session.lock().await;
    Json(session.profile().cloned())
}

pub async fn save_profile(
    State(state): State<AppState>,
    Json(payload): Json<ProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let mut session = state.session.lock().await;
    let profile =
        session.save_profile(&payload.name, payload.age, &payload.vehicle, &payload.city)?;
    info!(name = %profile.name, "profile saved");
    Ok(Json(profile))
}

pub async fn list_days(State(state): State<AppState>) -> Json<Vec<TravelRecord>> {
    let session = state.session.lock().await;
    Json(session.list_days())
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<Option<TravelRecord>>, AppError> {
    let day: Weekday = day.parse()?;
    let session = state.session.lock().await;
    Ok(Json(session.find_day(day)))
}

pub async fn upsert_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(payload): Json<DayEntryRequest>,
) -> Result<Json<TravelRecord>, AppError> {
    let day: Weekday = day.parse()?;
    let mut session = state.session.lock().await;
    require_profile(&session)?;

    // The entry form never saves a travel day without any distance.
    if payload.traveled && payload.distance_km == 0.0 {
        return Err(AppError::bad_request(
            "distance must be greater than zero for a travel day",
        ));
    }

    let record = session.upsert_day(
        day,
        payload.traveled,
        &payload.destination,
        payload.distance_km,
    )?;

    info!(
        %day,
        traveled = record.traveled(),
        distance_km = record.distance_km(),
        "day saved"
    );
    Ok(Json(record))
}

pub async fn clear_days(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    clear_all(&state).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_days_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    clear_all(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let records = state.session.lock().await.list_days();
    let summary = compute_summary(&records);
    let emissions = if summary.travel_days > 0 {
        compute_emission_stats(&records).ok()
    } else {
        None
    };
    let impact = compute_environmental_impact(summary.total_emission_grams, summary.travel_days);
    debug!(travel_days = summary.travel_days, "summary computed");

    Json(SummaryResponse {
        records,
        summary,
        emissions,
        impact,
    })
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let records = state.session.lock().await.list_days();
    Json(build_analytics(&records))
}

pub async fn reset_session(State(state): State<AppState>) -> StatusCode {
    state.session.lock().await.reset();
    info!("session reset");
    StatusCode::NO_CONTENT
}

async fn clear_all(state: &AppState) -> Result<(), AppError> {
    let mut session = state.session.lock().await;
    require_profile(&session)?;
    session.clear_all_days();
    info!("all days cleared");
    Ok(())
}

fn require_profile(session: &Session) -> Result<(), AppError> {
    if session.profile().is_none() {
        return Err(AppError::conflict("save your profile before tracking travel"));
    }
    Ok(())
}

fn today() -> Weekday {
    Local::now().weekday().into()
}
