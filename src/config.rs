use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub session_ttl_seconds: u64,
    /// Spreadsheet backing store (menu + feedback + report archive sheets).
    pub sheets_api_base: String,
    pub spreadsheet_id: String,
    pub sheets_api_token: String,
    pub menu_sheet: String,
    pub feedback_sheet: String,
    pub report_archive_sheet: String,
    /// Generative-language API for comment summaries.
    pub gemini_api_base: String,
    pub gemini_api_key: String,
    pub default_model: String,
    /// Plaintext role passwords, compared by equality at login.
    pub admin_password: String,
    pub kitchen_password: String,
    /// Timeout applied to every outbound HTTP call.
    pub upstream_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,
            jwt_secret: required("JWT_SECRET")?,
            session_ttl_seconds: env::var("SESSION_TTL_SECONDS")
                .unwrap_or_else(|_| "43200".into())
                .parse()?,
            sheets_api_base: env::var("SHEETS_API_BASE")
                .unwrap_or_else(|_| "https://sheets.googleapis.com/v4".into()),
            spreadsheet_id: required("SPREADSHEET_ID")?,
            sheets_api_token: required("SHEETS_API_TOKEN")?,
            menu_sheet: env::var("MENU_SHEET").unwrap_or_else(|_| "aktif_menu".into()),
            feedback_sheet: env::var("FEEDBACK_SHEET").unwrap_or_else(|_| "geribildirim".into()),
            report_archive_sheet: env::var("REPORT_ARCHIVE_SHEET")
                .unwrap_or_else(|_| "rapor_arsivi".into()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".into()),
            gemini_api_key: required("GEMINI_API_KEY")?,
            default_model: env::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".into()),
            admin_password: required("ADMIN_PASSWORD")?,
            kitchen_password: required("KITCHEN_PASSWORD")?,
            upstream_timeout_seconds: env::var("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "20".into())
                .parse()?,
        })
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
