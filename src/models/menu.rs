use serde::{Deserialize, Serialize};

/// The four meal periods of a boarding-house day. Wire values are the
/// labels used in the spreadsheet and the feedback log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meal {
    #[serde(rename = "KAHVALTI")]
    Breakfast,
    #[serde(rename = "ÖĞLE")]
    Lunch,
    #[serde(rename = "AKŞAM")]
    Dinner,
    #[serde(rename = "ARA ÖĞÜN")]
    Snack,
}

impl Meal {
    pub const ALL: [Meal; 4] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack];

    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "KAHVALTI",
            Meal::Lunch => "ÖĞLE",
            Meal::Dinner => "AKŞAM",
            Meal::Snack => "ARA ÖĞÜN",
        }
    }

    /// Lunch and dinner get the per-dish favorite/complaint selectors;
    /// breakfast and the snack break use the simple form.
    pub fn detailed(&self) -> bool {
        matches!(self, Meal::Lunch | Meal::Dinner)
    }
}

impl std::fmt::Display for Meal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Meal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KAHVALTI" => Ok(Meal::Breakfast),
            "ÖĞLE" => Ok(Meal::Lunch),
            "AKŞAM" => Ok(Meal::Dinner),
            "ARA ÖĞÜN" => Ok(Meal::Snack),
            _ => Err(anyhow::anyhow!("Unknown meal: {s}")),
        }
    }
}

/// One calendar day's full menu, assembled from the 4-row block anchored at
/// today's date row. Recomputed on every lookup, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuBlock {
    /// Display-format date exactly as it appears in the sheet ("5.3.2025").
    pub date: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

impl MenuBlock {
    pub fn text_for(&self, meal: Meal) -> &str {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
            Meal::Snack => &self.snack,
        }
    }
}

/// Query params for GET /menu/today.
#[derive(Debug, Deserialize)]
pub struct MenuTodayQuery {
    pub meal: Meal,
}

/// Response body for GET /menu/today — everything the voting form needs.
#[derive(Debug, Serialize)]
pub struct MenuTodayResponse {
    pub date: String,
    pub meal: Meal,
    pub items: Vec<String>,
    /// Whether the favorite/complaint selectors apply (lunch or dinner with
    /// at least one listed dish).
    pub detailed_form: bool,
    /// Whether the meal's voting window is open right now.
    pub window_open: bool,
    /// Client-side duplicate-vote flag name for this (date, meal).
    pub marker_key: String,
}
