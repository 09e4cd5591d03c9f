use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    config::Config,
    models::{
        feedback::{
            DateRangeQuery, FeedbackRecord, MealStats, StatsResponse, SubmitFeedbackRequest,
        },
        menu::Meal,
    },
    services::sheets::SheetsClient,
};

/// Sentinel written to the dish columns when a detailed meal had no parsed
/// menu items to choose from.
const NO_ITEMS_LISTED: &str = "Listelenmedi";

pub struct FeedbackService;

impl FeedbackService {
    /// Append one record to the feedback log. A failure surfaces directly to
    /// the submitting student; there is no retry and no idempotency key.
    pub async fn append(
        sheets: &SheetsClient,
        config: &Config,
        record: &FeedbackRecord,
    ) -> anyhow::Result<()> {
        sheets
            .append_row(&config.feedback_sheet, &record.to_row())
            .await
    }

    /// All parseable records from the feedback log, skipping the header row
    /// and anything malformed.
    pub async fn list(
        sheets: &SheetsClient,
        config: &Config,
    ) -> anyhow::Result<Vec<FeedbackRecord>> {
        let grid = sheets.read_grid(&config.feedback_sheet).await?;
        Ok(grid
            .iter()
            .filter_map(|row| FeedbackRecord::from_row(row))
            .collect())
    }

    pub async fn list_in_range(
        sheets: &SheetsClient,
        config: &Config,
        range: &DateRangeQuery,
    ) -> anyhow::Result<Vec<FeedbackRecord>> {
        let records = Self::list(sheets, config).await?;
        Ok(filter_range(records, range))
    }
}

/// Assemble the record for one submission. The dish selectors only apply to
/// lunch and dinner; for a detailed meal whose menu parsed empty, the
/// sentinel marks that nothing was listed to choose from.
pub fn build_record(
    now: NaiveDateTime,
    date_display: &str,
    req: &SubmitFeedbackRequest,
    items_listed: bool,
) -> FeedbackRecord {
    let (favorite_item, complaint_item) = if !req.meal.detailed() {
        (String::new(), String::new())
    } else if !items_listed {
        (NO_ITEMS_LISTED.to_string(), NO_ITEMS_LISTED.to_string())
    } else {
        (
            req.favorite_item.clone().unwrap_or_default(),
            req.complaint_item.clone().unwrap_or_default(),
        )
    };

    FeedbackRecord {
        submitted_at: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        meal_date: date_display.to_string(),
        meal: req.meal,
        taste_score: req.taste_score,
        hygiene_score: req.hygiene_score,
        service_score: req.service_score,
        comment: req.comment.clone(),
        favorite_item,
        complaint_item,
    }
}

/// Keep records whose date falls inside the inclusive range. Records with an
/// unparseable date cell are dropped from filtered views.
pub fn filter_range(records: Vec<FeedbackRecord>, range: &DateRangeQuery) -> Vec<FeedbackRecord> {
    if range.from.is_none() && range.to.is_none() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| match r.date() {
            Some(d) => {
                range.from.map_or(true, |from| d >= from)
                    && range.to.map_or(true, |to| d <= to)
            }
            None => false,
        })
        .collect()
}

pub fn records_for_day(records: Vec<FeedbackRecord>, day: NaiveDate) -> Vec<FeedbackRecord> {
    records
        .into_iter()
        .filter(|r| r.date() == Some(day))
        .collect()
}

/// Per-meal averages of the three scores plus submission counts.
pub fn aggregate(records: &[FeedbackRecord]) -> StatsResponse {
    let per_meal = Meal::ALL
        .iter()
        .map(|&meal| {
            let scores: Vec<&FeedbackRecord> =
                records.iter().filter(|r| r.meal == meal).collect();
            let count = scores.len();
            let avg = |pick: fn(&FeedbackRecord) -> u8| {
                if count == 0 {
                    0.0
                } else {
                    scores.iter().map(|r| pick(r) as f64).sum::<f64>() / count as f64
                }
            };
            MealStats {
                meal,
                count,
                avg_taste: avg(|r| r.taste_score),
                avg_hygiene: avg(|r| r.hygiene_score),
                avg_service: avg(|r| r.service_score),
            }
        })
        .collect();

    StatsResponse {
        total: records.len(),
        per_meal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(meal: Meal) -> SubmitFeedbackRequest {
        SubmitFeedbackRequest {
            meal,
            taste_score: 4,
            hygiene_score: 5,
            service_score: 3,
            comment: "good".to_string(),
            favorite_item: Some("Soup".to_string()),
            complaint_item: None,
        }
    }

    fn at_noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(12, 15, 0)
            .unwrap()
    }

    #[test]
    fn row_follows_fixed_column_order() {
        let record = build_record(at_noon(), "5.3.2025", &req(Meal::Lunch), true);
        assert_eq!(
            record.to_row(),
            vec![
                "2025-03-05 12:15:00",
                "5.3.2025",
                "ÖĞLE",
                "4",
                "5",
                "3",
                "good",
                "Soup",
                "",
            ]
        );
    }

    #[test]
    fn simple_meals_never_carry_dish_selections() {
        let record = build_record(at_noon(), "5.3.2025", &req(Meal::Breakfast), true);
        assert_eq!(record.favorite_item, "");
        assert_eq!(record.complaint_item, "");
    }

    #[test]
    fn detailed_meal_without_menu_items_gets_sentinel() {
        let record = build_record(at_noon(), "5.3.2025", &req(Meal::Dinner), false);
        assert_eq!(record.favorite_item, NO_ITEMS_LISTED);
        assert_eq!(record.complaint_item, NO_ITEMS_LISTED);
    }

    #[test]
    fn round_trips_through_sheet_row() {
        let record = build_record(at_noon(), "5.3.2025", &req(Meal::Lunch), true);
        let parsed = FeedbackRecord::from_row(&record.to_row()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn header_and_malformed_rows_are_skipped() {
        let header: Vec<String> = ["zaman", "tarih", "öğün", "lezzet", "hijyen", "servis"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(FeedbackRecord::from_row(&header).is_none());
        assert!(FeedbackRecord::from_row(&["x".to_string()]).is_none());
    }

    #[test]
    fn range_filter_is_inclusive() {
        let mut a = build_record(at_noon(), "5.3.2025", &req(Meal::Lunch), true);
        a.meal_date = "5.3.2025".to_string();
        let mut b = a.clone();
        b.meal_date = "7.3.2025".to_string();

        let range = DateRangeQuery {
            from: NaiveDate::from_ymd_opt(2025, 3, 5),
            to: NaiveDate::from_ymd_opt(2025, 3, 6),
        };
        let kept = filter_range(vec![a, b], &range);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].meal_date, "5.3.2025");
    }

    #[test]
    fn aggregates_per_meal_averages() {
        let mut lunch_a = build_record(at_noon(), "5.3.2025", &req(Meal::Lunch), true);
        lunch_a.taste_score = 2;
        let lunch_b = build_record(at_noon(), "5.3.2025", &req(Meal::Lunch), true);
        let dinner = build_record(at_noon(), "5.3.2025", &req(Meal::Dinner), true);

        let stats = aggregate(&[lunch_a, lunch_b, dinner]);
        assert_eq!(stats.total, 3);
        let lunch = stats
            .per_meal
            .iter()
            .find(|m| m.meal == Meal::Lunch)
            .unwrap();
        assert_eq!(lunch.count, 2);
        assert!((lunch.avg_taste - 3.0).abs() < f64::EPSILON);
        let snack = stats
            .per_meal
            .iter()
            .find(|m| m.meal == Meal::Snack)
            .unwrap();
        assert_eq!(snack.count, 0);
        assert_eq!(snack.avg_taste, 0.0);
    }
}
