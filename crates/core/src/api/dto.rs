use serde::{Deserialize, Deserializer};

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::{TransactionRecord, TransactionType};
use crate::models::wallet::Wallet;
use crate::services::transfer::TransferClassifier;

// ── Response envelope ───────────────────────────────────────────────

/// Every endpoint wraps its payload as `{ success, message, data }`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Missing means success; only an explicit `false` is a failure.
    #[serde(default)]
    pub success: Option<bool>,

    #[serde(default)]
    pub message: Option<String>,

    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(true)
    }
}

// ── Transaction ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub date: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub wallet_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_transfer: Option<bool>,
}

impl TransactionDto {
    /// Map to the domain record.
    ///
    /// An explicit `isTransfer` from the server wins; otherwise the
    /// classifier decides from the category name. Amounts are stored as
    /// magnitudes, so a negative server amount is flipped.
    pub fn into_record(self, classifier: &TransferClassifier) -> Result<TransactionRecord, CoreError> {
        let transaction_type: TransactionType = self.transaction_type.parse().map_err(|e| {
            CoreError::Deserialization(format!("Transaction {}: {e}", self.id))
        })?;
        if !self.amount.is_finite() {
            return Err(CoreError::Deserialization(format!(
                "Transaction {}: amount is not a finite number",
                self.id
            )));
        }
        let is_transfer = self
            .is_transfer
            .unwrap_or_else(|| classifier.is_transfer(&self.category_name));

        Ok(TransactionRecord {
            id: self.id,
            amount: self.amount.abs(),
            transaction_type,
            date: self.date,
            category_name: self.category_name,
            wallet_name: self.wallet_name,
            is_transfer,
            note: self.note.filter(|n| !n.trim().is_empty()),
        })
    }
}

// ── Wallet ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct WalletDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(rename = "type", default)]
    pub wallet_type: Option<String>,
}

impl From<WalletDto> for Wallet {
    fn from(dto: WalletDto) -> Self {
        Wallet {
            id: dto.id,
            name: dto.name,
            balance: dto.balance,
            wallet_type: dto.wallet_type,
        }
    }
}

// ── Category ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: String,
}

impl TryFrom<CategoryDto> for Category {
    type Error = CoreError;

    fn try_from(dto: CategoryDto) -> Result<Self, Self::Error> {
        let category_type: TransactionType = dto.category_type.parse().map_err(|e: String| {
            CoreError::Deserialization(format!("Category {}: {e}", dto.id))
        })?;
        Ok(Category {
            id: dto.id,
            name: dto.name,
            category_type,
        })
    }
}

/// Ids arrive as strings from some endpoints and as integers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
