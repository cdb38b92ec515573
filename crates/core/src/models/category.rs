use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// A user-defined transaction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,

    /// Whether the category is meant for income or expense entries
    pub category_type: TransactionType,
}
