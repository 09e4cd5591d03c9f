use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;

/// Thin client for the spreadsheet REST API. One read-only reference sheet
/// (the menu grid) and two append-only logs (feedback, report archive) live
/// in the same spreadsheet.
pub struct SheetsClient {
    client: Client,
    base: String,
    spreadsheet_id: String,
    token: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl SheetsClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("building spreadsheet HTTP client")?;
        Ok(Self {
            client,
            base: config.sheets_api_base.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            token: config.sheets_api_token.clone(),
        })
    }

    /// Fetch the full rectangular grid of a sheet as trimmed-to-text cells.
    /// Every menu lookup re-reads the grid; nothing is cached.
    pub async fn read_grid(&self, sheet: &str) -> anyhow::Result<Vec<Vec<String>>> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.base, self.spreadsheet_id, sheet
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("reading sheet {sheet}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("sheets read {sheet} failed with {status}: {text}");
            anyhow::bail!("Spreadsheet read failed ({status})");
        }

        let range: ValueRange = response.json().await.context("decoding sheet values")?;
        Ok(range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_to_text).collect())
            .collect())
    }

    /// Blind append of one row at the tail of an append-only log sheet.
    pub async fn append_row(&self, sheet: &str, values: &[String]) -> anyhow::Result<()> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}:append?valueInputOption=USER_ENTERED",
            self.base, self.spreadsheet_id, sheet
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "values": [values] }))
            .send()
            .await
            .with_context(|| format!("appending to sheet {sheet}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("sheets append {sheet} failed with {status}: {text}");
            anyhow::bail!("Spreadsheet append failed ({status})");
        }
        Ok(())
    }
}

/// The values API returns strings for user-entered cells but may hand back
/// numbers or booleans for typed cells.
fn cell_to_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
