use axum::{extract::State, Json};

use crate::{
    error::AppError,
    models::auth::{LoginRequest, LoginResponse, Role},
    services::auth::AuthService,
    AppState,
};

/// POST /auth/login — exchange a role password for a session token. A wrong
/// password gets a bare 401; the client simply re-prompts.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let role = AuthService::resolve_role(&state.config, &body.password);
    if role == Role::Guest {
        return Err(AppError::Unauthorized("Hatalı şifre".into()));
    }

    let token = AuthService::issue_session_token(&state.config, role)
        .map_err(|e| AppError::Upstream(e.to_string()))?;
    tracing::info!("staff login as {role}");
    Ok(Json(LoginResponse { token, role }))
}
