use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_ADMIN_FEE_LABEL: &str = "Admin/Transfer Fee";
pub const DEFAULT_ADMIN_FEE_COLOR: &str = "#9E9E9E";

/// Runtime configuration for the API client and the analysis engine.
///
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the REST API, without trailing slash (e.g., "https://api.example.com/api")
    pub api_base_url: String,

    /// Bearer token sent with every request, if logged in
    pub auth_token: Option<String>,

    pub request_timeout_secs: u64,

    /// How many transactions the analysis view pulls in a single page.
    pub analysis_page_limit: u32,

    /// Category-name keyword that marks a transfer when the server sends no explicit flag
    pub transfer_keyword: String,

    /// Name of the synthetic admin-fee chart bucket
    pub admin_fee_label: String,

    /// Color of the synthetic admin-fee chart bucket
    pub admin_fee_color: String,

    /// Number of transactions shown on the dashboard
    pub recent_transactions_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000/api".to_string(),
            auth_token: None,
            request_timeout_secs: 30,
            analysis_page_limit: 1000,
            transfer_keyword: "Transfer".to_string(),
            admin_fee_label: DEFAULT_ADMIN_FEE_LABEL.to_string(),
            admin_fee_color: DEFAULT_ADMIN_FEE_COLOR.to_string(),
            recent_transactions_limit: 5,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_base_url.trim().is_empty() {
            return Err(CoreError::Config("api_base_url must not be empty".into()));
        }
        if self.analysis_page_limit == 0 {
            return Err(CoreError::Config(
                "analysis_page_limit must be greater than zero".into(),
            ));
        }
        if !is_hex_color(&self.admin_fee_color) {
            return Err(CoreError::Config(format!(
                "admin_fee_color '{}' is not a #RRGGBB color",
                self.admin_fee_color
            )));
        }
        Ok(())
    }
}

pub(crate) fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
