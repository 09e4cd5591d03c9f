use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::menu::Meal;

/// One student's submission, mirroring the feedback sheet's fixed column
/// order. Appended once, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRecord {
    /// "YYYY-MM-DD HH:MM:SS" wall-clock timestamp.
    pub submitted_at: String,
    /// Display-format date ("5.3.2025", unpadded).
    pub meal_date: String,
    pub meal: Meal,
    pub taste_score: u8,
    pub hygiene_score: u8,
    pub service_score: u8,
    pub comment: String,
    pub favorite_item: String,
    pub complaint_item: String,
}

impl FeedbackRecord {
    /// The 9 cells in the sheet's fixed column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.submitted_at.clone(),
            self.meal_date.clone(),
            self.meal.label().to_string(),
            self.taste_score.to_string(),
            self.hygiene_score.to_string(),
            self.service_score.to_string(),
            self.comment.clone(),
            self.favorite_item.clone(),
            self.complaint_item.clone(),
        ]
    }

    /// Parse one sheet row back into a record. Rows that do not look like a
    /// feedback entry (short, header, unknown meal, non-numeric scores) yield
    /// None rather than an error — malformed external data degrades, it never
    /// crashes the page.
    pub fn from_row(row: &[String]) -> Option<Self> {
        if row.len() < 6 {
            return None;
        }
        let meal: Meal = row[2].trim().parse().ok()?;
        let taste_score: u8 = row[3].trim().parse().ok()?;
        let hygiene_score: u8 = row[4].trim().parse().ok()?;
        let service_score: u8 = row[5].trim().parse().ok()?;
        let cell = |i: usize| row.get(i).map(|s| s.to_string()).unwrap_or_default();
        Some(Self {
            submitted_at: row[0].clone(),
            meal_date: row[1].clone(),
            meal,
            taste_score,
            hygiene_score,
            service_score,
            comment: cell(6),
            favorite_item: cell(7),
            complaint_item: cell(8),
        })
    }

    /// Calendar date of the record, if the display string parses.
    pub fn date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.meal_date)
    }
}

/// Parse the sheet's unpadded "D.M.YYYY" display format.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().splitn(3, '.');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a date in the sheet's unpadded "D.M.YYYY" display format.
pub fn display_date(date: NaiveDate) -> String {
    use chrono::Datelike;
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Body for POST /feedback.
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub meal: Meal,
    pub taste_score: u8,
    pub hygiene_score: u8,
    pub service_score: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub favorite_item: Option<String>,
    #[serde(default)]
    pub complaint_item: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    pub success: bool,
    /// Flag name the client stores locally to block accidental re-submission.
    pub marker_key: String,
}

/// Optional date range for the admin views (inclusive bounds).
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Per-meal score averages over a set of records.
#[derive(Debug, Serialize)]
pub struct MealStats {
    pub meal: Meal,
    pub count: usize,
    pub avg_taste: f64,
    pub avg_hygiene: f64,
    pub avg_service: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub per_meal: Vec<MealStats>,
}
