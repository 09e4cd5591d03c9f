use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use crate::{
    error::AppError,
    models::menu::{MenuTodayQuery, MenuTodayResponse},
    services::{
        menu::{parse_items, MenuService},
        vote,
    },
    AppState,
};

/// GET /menu/today?meal= — today's menu projection for one meal, plus
/// everything the voting form needs (item list, window state, marker key).
pub async fn today(
    State(state): State<AppState>,
    Query(params): Query<MenuTodayQuery>,
) -> Result<Json<MenuTodayResponse>, AppError> {
    let now = Local::now();
    let block = MenuService::today(&state.sheets, &state.config, now.date_naive())
        .await
        .map_err(AppError::upstream)?
        .ok_or_else(|| {
            AppError::NotFound("Bugün için menü planı bulunamadı! Lütfen idareye bildir.".into())
        })?;

    let items = parse_items(block.text_for(params.meal));
    Ok(Json(MenuTodayResponse {
        date: block.date.clone(),
        meal: params.meal,
        detailed_form: params.meal.detailed() && !items.is_empty(),
        window_open: vote::active_meal(now.time()) == Some(params.meal),
        marker_key: vote::marker_key(&block.date, params.meal),
        items,
    }))
}
