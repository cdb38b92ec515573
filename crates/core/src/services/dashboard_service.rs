use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::dashboard::DashboardOverview;
use crate::models::period::MonthPeriod;
use crate::models::settings::Settings;
use crate::models::transaction::TransactionRecord;
use crate::services::aggregator::MonthlyFinanceAggregator;
use crate::services::date_parser::parse_transaction_timestamp;

/// Builds the home-screen overview: balances, the month at a glance and
/// the latest transactions.
///
/// Unlike the analysis view, fetch errors are returned to the caller.
pub struct DashboardService {
    page_limit: u32,
    recent_limit: usize,
}

impl DashboardService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            page_limit: settings.analysis_page_limit,
            recent_limit: settings.recent_transactions_limit,
        }
    }

    pub async fn overview(
        &self,
        api: &dyn FinanceApi,
        aggregator: &mut MonthlyFinanceAggregator,
        period: MonthPeriod,
    ) -> Result<DashboardOverview, CoreError> {
        let wallets = api.get_wallets().await?;
        let transactions = api.get_transactions(1, self.page_limit).await?;

        let month = aggregator.aggregate(&transactions, period);

        Ok(DashboardOverview {
            total_balance: wallets.iter().map(|w| w.balance).sum(),
            wallet_count: wallets.len(),
            month,
            recent_transactions: self.most_recent(transactions),
        })
    }

    /// Newest first; records with unparsable dates go last in server order.
    fn most_recent(&self, mut transactions: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
        transactions.sort_by_cached_key(|t| std::cmp::Reverse(parse_transaction_timestamp(&t.date)));
        transactions.truncate(self.recent_limit);
        transactions
    }
}
