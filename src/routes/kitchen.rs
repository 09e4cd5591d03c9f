use axum::{extract::State, Json};
use chrono::Local;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    models::{
        auth::{Role, StaffSession},
        feedback::display_date,
    },
    services::feedback::{aggregate, records_for_day, FeedbackService},
    AppState,
};

/// GET /kitchen/today — same-day-only summary for kitchen staff. The admin
/// can see it too; everything else on the staff surface is admin-only.
pub async fn today(
    State(state): State<AppState>,
    session: StaffSession,
) -> Result<Json<Value>, AppError> {
    if session.role == Role::Guest {
        return Err(AppError::Forbidden("Oturum gerekli".into()));
    }

    let today = Local::now().date_naive();
    let records = FeedbackService::list(&state.sheets, &state.config)
        .await
        .map_err(AppError::upstream)?;
    let todays = records_for_day(records, today);
    let stats = aggregate(&todays);

    Ok(Json(json!({
        "date": display_date(today),
        "stats": stats,
    })))
}
