use serde::{Deserialize, Serialize};

use crate::models::{auth::Role, feedback::DateRangeQuery};

/// Body for POST /admin/report.
#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    /// Model id; falls back to the configured default when absent.
    pub model: Option<String>,
    #[serde(flatten)]
    pub range: DateRangeQuery,
}

#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    pub model: String,
    pub scope: String,
    pub report: String,
}

/// One row of the report-archive sheet, in its fixed column order.
#[derive(Debug, Clone, Serialize)]
pub struct ArchivedReport {
    pub archived_at: String,
    pub scope_label: String,
    pub role: Role,
    pub model_name: String,
    pub report_text: String,
}

impl ArchivedReport {
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.archived_at.clone(),
            self.scope_label.clone(),
            self.role.to_string(),
            self.model_name.clone(),
            self.report_text.clone(),
        ]
    }

    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 5 {
            return None;
        }
        let role = match row[2].trim() {
            "admin" => Role::Admin,
            "kitchen_staff" => Role::KitchenStaff,
            _ => return None,
        };
        Some(Self {
            archived_at: row[0].clone(),
            scope_label: row[1].clone(),
            role,
            model_name: row[3].clone(),
            report_text: row[4].clone(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
    /// True when the list came from the fixed fallback rather than the API.
    pub fallback: bool,
}
