use serde::{Deserialize, Serialize};

/// A money container owned by the user (cash, bank account, e-wallet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: String,
    pub name: String,

    /// Current balance as reported by the server
    pub balance: f64,

    /// Free-form kind, e.g. "BANK" or "CASH"
    #[serde(default)]
    pub wallet_type: Option<String>,
}
