pub mod api;
pub mod errors;
pub mod logging;
pub mod models;
pub mod services;

use std::sync::Arc;

use api::rest::RestFinanceApi;
use api::traits::FinanceApi;
use errors::CoreError;
use models::{
    category::Category, dashboard::DashboardOverview, period::MonthPeriod, settings::Settings,
    summary::MonthlyAnalysis, wallet::Wallet,
};
use services::{
    aggregator::MonthlyFinanceAggregator, analysis_service::AnalysisController,
    dashboard_service::DashboardService,
};

/// Main entry point for the wallet-analysis core library.
/// Holds the settings, the API client and the services built on it.
#[must_use]
pub struct FinanceCore {
    settings: Settings,
    api: Arc<dyn FinanceApi>,
    aggregator: MonthlyFinanceAggregator,
    dashboard_service: DashboardService,
    /// False when the caller supplied its own API; token changes then leave it alone.
    owns_rest_client: bool,
}

impl std::fmt::Debug for FinanceCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceCore")
            .field("api_base_url", &self.settings.api_base_url)
            .field("authenticated", &self.settings.auth_token.is_some())
            .field("colored_categories", &self.aggregator.palette().len())
            .finish()
    }
}

impl FinanceCore {
    /// Build a core talking to the REST API described by `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let api: Arc<dyn FinanceApi> = Arc::new(RestFinanceApi::new(&settings)?);
        let mut core = Self::build(settings, api)?;
        core.owns_rest_client = true;
        Ok(core)
    }

    /// Build a core on top of any `FinanceApi` implementation.
    pub fn with_api(settings: Settings, api: Arc<dyn FinanceApi>) -> Result<Self, CoreError> {
        Self::build(settings, api)
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shared handle to the API client.
    #[must_use]
    pub fn api(&self) -> Arc<dyn FinanceApi> {
        Arc::clone(&self.api)
    }

    /// Set or clear the bearer token.
    /// Rebuilds the REST client so the change applies to the next request.
    pub fn set_auth_token(&mut self, token: Option<String>) -> Result<(), CoreError> {
        self.settings.auth_token = token.filter(|t| !t.trim().is_empty());
        if self.owns_rest_client {
            self.api = Arc::new(RestFinanceApi::new(&self.settings)?);
        }
        Ok(())
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// A fresh analysis view controller starting at `period`.
    /// Each controller owns its own transaction cache.
    pub fn analysis_controller(&self, period: MonthPeriod) -> AnalysisController {
        AnalysisController::new(Arc::clone(&self.api), &self.settings, period)
    }

    /// One-shot analysis of `period`: fetch a page and aggregate it.
    /// Unlike the controller, fetch errors are returned.
    pub async fn analyze_month(&mut self, period: MonthPeriod) -> Result<MonthlyAnalysis, CoreError> {
        let records = self
            .api
            .get_transactions(1, self.settings.analysis_page_limit)
            .await?;
        Ok(self.aggregator.aggregate(&records, period))
    }

    // ── Dashboard ───────────────────────────────────────────────────

    pub async fn dashboard_overview(
        &mut self,
        period: MonthPeriod,
    ) -> Result<DashboardOverview, CoreError> {
        self.dashboard_service
            .overview(self.api.as_ref(), &mut self.aggregator, period)
            .await
    }

    // ── Reference data ──────────────────────────────────────────────

    pub async fn wallets(&self) -> Result<Vec<Wallet>, CoreError> {
        self.api.get_wallets().await
    }

    /// Categories sorted by name (case-insensitive).
    pub async fn categories(&self) -> Result<Vec<Category>, CoreError> {
        let mut categories = self.api.get_categories().await?;
        categories.sort_by_key(|c| c.name.to_lowercase());
        Ok(categories)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: Settings, api: Arc<dyn FinanceApi>) -> Result<Self, CoreError> {
        settings.validate()?;
        let aggregator = MonthlyFinanceAggregator::new(&settings);
        let dashboard_service = DashboardService::new(&settings);

        Ok(Self {
            settings,
            api,
            aggregator,
            dashboard_service,
            owns_rest_client: false,
        })
    }
}
