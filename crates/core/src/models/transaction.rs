use serde::{Deserialize, Serialize};

/// Direction of a transaction. Amounts are always stored as magnitudes;
/// the sign is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money coming into a wallet
    Income,
    /// Money leaving a wallet
    Expense,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "INCOME"),
            TransactionType::Expense => write!(f, "EXPENSE"),
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type '{other}'")),
        }
    }
}

/// A single transaction as returned by the remote API.
///
/// Records are immutable inputs to the analysis pipeline. `date` is kept
/// as the raw server string; it is parsed only when aggregating, and a
/// record whose date cannot be parsed simply drops out of every month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Opaque server identifier
    pub id: String,

    /// Magnitude of the transaction (never negative)
    pub amount: f64,

    /// Income or Expense
    pub transaction_type: TransactionType,

    /// Raw timestamp: `2025-03-05T10:00:00.000Z` or `2025-03-05`
    pub date: String,

    /// Display name of the category
    pub category_name: String,

    /// Display name of the wallet (informational only)
    pub wallet_name: String,

    /// Whether this record moves money between the user's own wallets.
    /// Transfers never count as real income or expense.
    #[serde(default)]
    pub is_transfer: bool,

    /// Optional free-text description
    #[serde(default)]
    pub note: Option<String>,
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<String>,
        transaction_type: TransactionType,
        amount: f64,
        date: impl Into<String>,
        category_name: impl Into<String>,
        wallet_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            transaction_type,
            date: date.into(),
            category_name: category_name.into(),
            wallet_name: wallet_name.into(),
            is_transfer: false,
            note: None,
        }
    }

    /// Mark this record as a wallet-to-wallet transfer.
    pub fn as_transfer(mut self) -> Self {
        self.is_transfer = true;
        self
    }

    /// Attach a free-text note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}
