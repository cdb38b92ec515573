use serde::{Deserialize, Serialize};

use super::summary::MonthlyAnalysis;
use super::transaction::TransactionRecord;

/// Home-screen snapshot: balances plus the current month at a glance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Sum of every wallet balance
    pub total_balance: f64,

    pub wallet_count: usize,

    /// Aggregated view of the requested month
    pub month: MonthlyAnalysis,

    /// Newest first
    pub recent_transactions: Vec<TransactionRecord>,
}
