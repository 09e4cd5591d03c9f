use std::time::Duration;

use anyhow::Context;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;

/// Known-good model ids used when the listing endpoint is unreachable.
const FALLBACK_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-1.0-pro"];

/// Client for the generative-language API used to write comment summaries.
pub struct GeminiClient {
    client: Client,
    base: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
struct ModelInfo {
    name: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("building language-model HTTP client")?;
        Ok(Self {
            client,
            base: config.gemini_api_base.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
        })
    }

    /// One-shot text completion. Provider failures surface to the caller,
    /// which renders them as a visible non-fatal message.
    pub async fn complete(&self, model: &str, prompt: &str) -> anyhow::Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base, model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("calling model {model}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!("completion with {model} failed ({status}): {text}");
            anyhow::bail!("Language model request failed ({status})");
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .context("decoding completion response")?;
        let text = parsed
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            anyhow::bail!("Language model returned an empty response");
        }
        Ok(text)
    }

    /// Model ids from the listing endpoint, or the fixed fallback list when
    /// it fails. The second element is true when the fallback was used.
    pub async fn list_models(&self) -> (Vec<String>, bool) {
        match self.fetch_models().await {
            Ok(models) if !models.is_empty() => (models, false),
            Ok(_) => (fallback_models(), true),
            Err(e) => {
                tracing::warn!("model listing failed, using fallback list: {e}");
                (fallback_models(), true)
            }
        }
    }

    async fn fetch_models(&self) -> anyhow::Result<Vec<String>> {
        let url = format!("{}/models?key={}", self.base, self.api_key);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("model listing returned {}", response.status());
        }
        let list: ModelList = response.json().await?;
        Ok(list
            .models
            .into_iter()
            .map(|m| m.name.trim_start_matches("models/").to_string())
            .collect())
    }
}

pub fn fallback_models() -> Vec<String> {
    FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
}
