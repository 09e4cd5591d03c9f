use chrono::Utc;

use crate::{
    config::Config,
    models::{
        auth::Role,
        feedback::{DateRangeQuery, FeedbackRecord},
        report::ArchivedReport,
    },
    services::{feedback, gemini::GeminiClient, sheets::SheetsClient},
};

pub struct ReportService;

impl ReportService {
    /// Build the comment-summary prompt, call the language model, archive the
    /// result, and return the report text. The archive append is best-effort:
    /// a generated report still reaches the reader if archiving fails.
    pub async fn generate(
        sheets: &SheetsClient,
        gemini: &GeminiClient,
        config: &Config,
        role: Role,
        model: &str,
        records: &[FeedbackRecord],
        scope_label: &str,
    ) -> anyhow::Result<String> {
        let prompt = build_prompt(records, scope_label);
        let report = gemini.complete(model, &prompt).await?;

        let entry = ArchivedReport {
            archived_at: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            scope_label: scope_label.to_string(),
            role,
            model_name: model.to_string(),
            report_text: report.clone(),
        };
        if let Err(e) = sheets
            .append_row(&config.report_archive_sheet, &entry.to_row())
            .await
        {
            tracing::warn!("report archive append failed: {e}");
        }

        Ok(report)
    }

    pub async fn list_archive(
        sheets: &SheetsClient,
        config: &Config,
    ) -> anyhow::Result<Vec<ArchivedReport>> {
        let grid = sheets.read_grid(&config.report_archive_sheet).await?;
        Ok(grid
            .iter()
            .filter_map(|row| ArchivedReport::from_row(row))
            .collect())
    }
}

/// Human-readable label for the report's scope, shown in the archive.
pub fn scope_label(range: &DateRangeQuery) -> String {
    match (range.from, range.to) {
        (Some(from), Some(to)) if from == to => from.format("%-d.%-m.%Y").to_string(),
        (Some(from), Some(to)) => format!(
            "{} - {}",
            from.format("%-d.%-m.%Y"),
            to.format("%-d.%-m.%Y")
        ),
        (Some(from), None) => format!("{} ve sonrası", from.format("%-d.%-m.%Y")),
        (None, Some(to)) => format!("{} ve öncesi", to.format("%-d.%-m.%Y")),
        (None, None) => "tüm kayıtlar".to_string(),
    }
}

/// Prompt for the comment summary. Scores go in as context; the model is
/// asked for a short plain-language report for cafeteria management.
pub fn build_prompt(records: &[FeedbackRecord], scope_label: &str) -> String {
    let stats = feedback::aggregate(records);
    let mut prompt = String::new();
    prompt.push_str(
        "Sen bir pansiyon yemekhanesinin değerlendirme asistanısın. Aşağıdaki \
         öğrenci geri bildirimlerini yönetim için kısa, yapıcı bir raporda özetle. \
         Genel memnuniyeti, öne çıkan şikayetleri ve beğenilen yemekleri belirt.\n\n",
    );
    prompt.push_str(&format!(
        "Kapsam: {scope_label}. Toplam {} kayıt.\n",
        stats.total
    ));
    for m in &stats.per_meal {
        if m.count > 0 {
            prompt.push_str(&format!(
                "{}: {} oy, lezzet {:.1}, hijyen {:.1}, servis {:.1}\n",
                m.meal, m.count, m.avg_taste, m.avg_hygiene, m.avg_service
            ));
        }
    }
    prompt.push_str("\nYorumlar:\n");
    for record in records {
        if !record.comment.trim().is_empty() {
            prompt.push_str(&format!("- [{}] {}\n", record.meal, record.comment.trim()));
        }
        if !record.favorite_item.is_empty() && record.favorite_item != "Listelenmedi" {
            prompt.push_str(&format!("  beğenilen: {}\n", record.favorite_item));
        }
        if !record.complaint_item.is_empty() && record.complaint_item != "Listelenmedi" {
            prompt.push_str(&format!("  sorunlu: {}\n", record.complaint_item));
        }
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn scope_label_covers_all_range_shapes() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 3, day);
        let label = |from, to| scope_label(&DateRangeQuery { from, to });
        assert_eq!(label(d(5), d(5)), "5.3.2025");
        assert_eq!(label(d(5), d(8)), "5.3.2025 - 8.3.2025");
        assert_eq!(label(None, None), "tüm kayıtlar");
    }

    #[test]
    fn prompt_includes_comments_but_skips_blank_ones() {
        let record = FeedbackRecord {
            submitted_at: "2025-03-05 12:15:00".into(),
            meal_date: "5.3.2025".into(),
            meal: crate::models::menu::Meal::Lunch,
            taste_score: 4,
            hygiene_score: 5,
            service_score: 3,
            comment: "Tuz azdı".into(),
            favorite_item: "Çorba".into(),
            complaint_item: String::new(),
        };
        let mut silent = record.clone();
        silent.comment = "   ".into();

        let prompt = build_prompt(&[record, silent], "5.3.2025");
        assert!(prompt.contains("Tuz azdı"));
        assert!(prompt.contains("beğenilen: Çorba"));
        assert!(prompt.contains("Toplam 2 kayıt"));
    }
}
