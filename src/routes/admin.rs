use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use crate::{
    error::AppError,
    models::{
        auth::{Role, StaffSession},
        feedback::{DateRangeQuery, FeedbackRecord, StatsResponse},
        report::{ArchivedReport, GenerateReportRequest, GenerateReportResponse, ModelListResponse},
    },
    services::{
        feedback::{aggregate, FeedbackService},
        report::{scope_label, ReportService},
    },
    AppState,
};

fn require_admin(session: StaffSession) -> Result<(), AppError> {
    if session.role != Role::Admin {
        return Err(AppError::Forbidden("Bu ekran yalnızca yönetici için".into()));
    }
    Ok(())
}

/// GET /admin/stats?from=&to= — per-meal score averages and counts.
pub async fn stats(
    State(state): State<AppState>,
    session: StaffSession,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    require_admin(session)?;
    let records = FeedbackService::list_in_range(&state.sheets, &state.config, &range)
        .await
        .map_err(AppError::upstream)?;
    Ok(Json(aggregate(&records)))
}

/// GET /admin/records?from=&to= — the raw feedback rows for the table view.
pub async fn records(
    State(state): State<AppState>,
    session: StaffSession,
    Query(range): Query<DateRangeQuery>,
) -> Result<Json<Vec<FeedbackRecord>>, AppError> {
    require_admin(session)?;
    FeedbackService::list_in_range(&state.sheets, &state.config, &range)
        .await
        .map(Json)
        .map_err(AppError::upstream)
}

/// GET /admin/models — usable model ids, with the fixed fallback when the
/// listing endpoint is down.
pub async fn models(
    State(state): State<AppState>,
    _session: StaffSession,
) -> Json<ModelListResponse> {
    let (models, fallback) = state.gemini.list_models().await;
    Json(ModelListResponse { models, fallback })
}

/// POST /admin/report — generate, archive, and return a written summary of
/// the comments. Kitchen staff are limited to today's records; the admin
/// picks any range.
pub async fn generate_report(
    State(state): State<AppState>,
    session: StaffSession,
    Json(body): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    let range = match session.role {
        Role::Admin => body.range,
        Role::KitchenStaff => {
            let today = Local::now().date_naive();
            DateRangeQuery {
                from: Some(today),
                to: Some(today),
            }
        }
        Role::Guest => return Err(AppError::Forbidden("Oturum gerekli".into())),
    };

    let records = FeedbackService::list_in_range(&state.sheets, &state.config, &range)
        .await
        .map_err(AppError::upstream)?;
    if records.is_empty() {
        return Err(AppError::NotFound(
            "Seçilen aralıkta değerlendirilecek kayıt yok".into(),
        ));
    }

    let model = body
        .model
        .unwrap_or_else(|| state.config.default_model.clone());
    let scope = scope_label(&range);
    let report = ReportService::generate(
        &state.sheets,
        &state.gemini,
        &state.config,
        session.role,
        &model,
        &records,
        &scope,
    )
    .await
    .map_err(AppError::upstream)?;

    Ok(Json(GenerateReportResponse {
        model,
        scope,
        report,
    }))
}

/// GET /admin/reports — the report archive, newest last (sheet order).
pub async fn list_reports(
    State(state): State<AppState>,
    session: StaffSession,
) -> Result<Json<Vec<ArchivedReport>>, AppError> {
    require_admin(session)?;
    ReportService::list_archive(&state.sheets, &state.config)
        .await
        .map(Json)
        .map_err(AppError::upstream)
}
