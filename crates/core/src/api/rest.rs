use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

use super::dto::{ApiEnvelope, CategoryDto, TransactionDto, WalletDto};
use super::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::settings::Settings;
use crate::models::transaction::TransactionRecord;
use crate::models::wallet::Wallet;
use crate::services::transfer::TransferClassifier;

/// Longest slice of a raw error body carried into an error message.
const MAX_ERROR_BODY: usize = 200;

/// reqwest-backed client for the wallet REST API.
///
/// - `GET /transactions?page=&limit=`
/// - `GET /wallets`
/// - `GET /categories`
///
/// Responses use the `{ success, message, data }` envelope. The bearer
/// token, when present, is sent on every request.
pub struct RestFinanceApi {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
    classifier: TransferClassifier,
}

impl RestFinanceApi {
    pub fn new(settings: &Settings) -> Result<Self, CoreError> {
        settings.validate()?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(settings.request_timeout_secs));
        let client = builder
            .build()
            .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            auth_token: settings.auth_token.clone().filter(|t| !t.is_empty()),
            classifier: TransferClassifier::new(settings.transfer_keyword.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path`, unwrap the envelope and return its `data`.
    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CoreError> {
        let mut request = self.client.get(self.url(path)).query(query);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error bodies usually still carry the envelope's message.
            let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.message)
                .unwrap_or_else(|| truncate(&body, MAX_ERROR_BODY));
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&body).map_err(|e| {
            CoreError::Deserialization(format!(
                "Failed to parse response from {path}: {e}"
            ))
        })?;

        if !envelope.is_success() {
            return Err(CoreError::Api {
                status: status.as_u16(),
                message: envelope
                    .message
                    .unwrap_or_else(|| "request was not successful".to_string()),
            });
        }

        envelope.data.ok_or_else(|| {
            CoreError::Deserialization(format!("Response from {path} has no data field"))
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FinanceApi for RestFinanceApi {
    async fn get_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>, CoreError> {
        let dtos: Vec<TransactionDto> = self
            .get_data(
                "transactions",
                &[("page", page.to_string()), ("limit", limit.to_string())],
            )
            .await?;

        let fetched = dtos.len();
        let records: Vec<TransactionRecord> = dtos
            .into_iter()
            .filter_map(|dto| match dto.into_record(&self.classifier) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "dropping malformed transaction");
                    None
                }
            })
            .collect();

        debug!(page, limit, fetched, kept = records.len(), "fetched transactions");
        Ok(records)
    }

    async fn get_wallets(&self) -> Result<Vec<Wallet>, CoreError> {
        let dtos: Vec<WalletDto> = self.get_data("wallets", &[]).await?;
        Ok(dtos.into_iter().map(Wallet::from).collect())
    }

    async fn get_categories(&self) -> Result<Vec<Category>, CoreError> {
        let dtos: Vec<CategoryDto> = self.get_data("categories", &[]).await?;
        dtos.into_iter().map(Category::try_from).collect()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
