use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

use crate::{models::feedback::display_date, services::vote};

/// GET /vote/active — which meal (if any) is open for voting right now,
/// judged by the server clock in local civil time.
pub async fn active() -> Json<Value> {
    let now = Local::now();
    Json(json!({
        "date": display_date(now.date_naive()),
        "active_meal": vote::active_meal(now.time()),
    }))
}
