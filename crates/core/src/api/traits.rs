use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::transaction::TransactionRecord;
use crate::models::wallet::Wallet;

/// The remote finance backend, as seen by the analysis and dashboard services.
///
/// `RestFinanceApi` is the production implementation; tests plug in
/// in-memory fakes. Implementations report any failure as a `CoreError`;
/// whether it is surfaced or swallowed is the caller's decision.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FinanceApi: Send + Sync {
    /// Fetch one page of transactions (1-based `page`).
    async fn get_transactions(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<TransactionRecord>, CoreError>;

    /// Fetch every wallet of the current user.
    async fn get_wallets(&self) -> Result<Vec<Wallet>, CoreError>;

    /// Fetch every category of the current user.
    async fn get_categories(&self) -> Result<Vec<Category>, CoreError>;
}
