use axum::{extract::State, Json};
use chrono::Local;

use crate::{
    error::AppError,
    models::feedback::{SubmitFeedbackRequest, SubmitFeedbackResponse},
    services::{
        feedback::{build_record, FeedbackService},
        menu::{parse_items, MenuService},
        vote,
    },
    AppState,
};

/// POST /feedback — validate and append one submission to the feedback log.
/// The returned marker key is what the client stores locally to block an
/// accidental second vote; setting it happens client-side after this call
/// succeeds, with no atomicity between the two steps.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<SubmitFeedbackRequest>,
) -> Result<Json<SubmitFeedbackResponse>, AppError> {
    for score in [body.taste_score, body.hygiene_score, body.service_score] {
        if !(1..=5).contains(&score) {
            return Err(AppError::BadRequest("Puanlar 1 ile 5 arasında olmalı".into()));
        }
    }

    let now = Local::now();
    if vote::active_meal(now.time()) != Some(body.meal) {
        return Err(AppError::Forbidden(format!(
            "{} için oylama şu anda kapalı",
            body.meal
        )));
    }

    let block = MenuService::today(&state.sheets, &state.config, now.date_naive())
        .await
        .map_err(AppError::upstream)?
        .ok_or_else(|| {
            AppError::NotFound("Bugün için menü planı bulunamadı! Lütfen idareye bildir.".into())
        })?;

    let items_listed = !parse_items(block.text_for(body.meal)).is_empty();
    let record = build_record(now.naive_local(), &block.date, &body, items_listed);

    FeedbackService::append(&state.sheets, &state.config, &record)
        .await
        .map_err(AppError::upstream)?;
    tracing::info!("feedback recorded for {} on {}", record.meal, record.meal_date);

    Ok(Json(SubmitFeedbackResponse {
        success: true,
        marker_key: vote::marker_key(&record.meal_date, record.meal),
    }))
}
