use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::api::traits::FinanceApi;
use crate::models::period::MonthPeriod;
use crate::models::settings::Settings;
use crate::models::summary::{CategoryStat, FinancialSummary, MonthlyAnalysis};
use crate::models::transaction::TransactionRecord;
use crate::services::aggregator::MonthlyFinanceAggregator;

/// The analysis screen only ever reads the first page.
const ANALYSIS_PAGE: u32 = 1;

/// Observable state of the analysis view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisState {
    pub selected_period: MonthPeriod,
    pub summary: FinancialSummary,
    pub category_stats: Vec<CategoryStat>,
    pub is_loading: bool,

    /// Message of the most recent failed fetch, cleared by the next successful one
    pub last_error: Option<String>,
}

impl AnalysisState {
    fn initial(period: MonthPeriod) -> Self {
        Self {
            selected_period: period,
            summary: FinancialSummary::default(),
            category_stats: Vec::new(),
            is_loading: false,
            last_error: None,
        }
    }
}

/// What a load or month change ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A fresh page was fetched and the selected month recomputed.
    Applied { records: usize },
    /// The selected month was recomputed from the cached page, no fetch.
    Recomputed,
    /// The fetch finished after a newer one was issued; its result was dropped.
    Superseded,
    /// The fetch failed; previous data stays on screen.
    Failed(String),
}

struct AnalysisInner {
    period: MonthPeriod,
    cache: Vec<TransactionRecord>,
    aggregator: MonthlyFinanceAggregator,
}

/// Drives the monthly analysis view.
///
/// Holds one fetched page of transactions in memory and recomputes the
/// selected month from it on every change. Every load takes a generation
/// number; a fetch that resolves after a newer load was issued is thrown
/// away, so rapid month switching can never leave older data on screen.
///
/// State is published through a `watch` channel; UIs subscribe and
/// render whatever the latest snapshot is.
pub struct AnalysisController {
    api: Arc<dyn FinanceApi>,
    page_limit: u32,
    generation: AtomicU64,
    inner: Mutex<AnalysisInner>,
    state_tx: watch::Sender<AnalysisState>,
}

impl AnalysisController {
    pub fn new(api: Arc<dyn FinanceApi>, settings: &Settings, period: MonthPeriod) -> Self {
        let (state_tx, _) = watch::channel(AnalysisState::initial(period));
        Self {
            api,
            page_limit: settings.analysis_page_limit,
            generation: AtomicU64::new(0),
            inner: Mutex::new(AnalysisInner {
                period,
                cache: Vec::new(),
                aggregator: MonthlyFinanceAggregator::new(settings),
            }),
            state_tx,
        }
    }

    /// Receive every future state change.
    pub fn subscribe(&self) -> watch::Receiver<AnalysisState> {
        self.state_tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AnalysisState {
        self.state_tx.borrow().clone()
    }

    /// Number of transactions currently held in memory.
    pub async fn cached_len(&self) -> usize {
        self.inner.lock().await.cache.len()
    }

    /// Fetch a fresh page and recompute the selected month.
    ///
    /// Failures are logged and recorded in `last_error`; they never
    /// propagate, and previously shown data is kept.
    pub async fn load_analysis_data(&self) -> LoadOutcome {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state_tx.send_modify(|s| s.is_loading = true);

        let result = self.api.get_transactions(ANALYSIS_PAGE, self.page_limit).await;

        let mut guard = self.inner.lock().await;
        if self.generation.load(Ordering::SeqCst) != token {
            debug!(token, "discarding superseded analysis fetch");
            return LoadOutcome::Superseded;
        }
        let inner = &mut *guard;

        match result {
            Ok(records) => {
                let count = records.len();
                if count as u64 >= self.page_limit as u64 {
                    warn!(
                        limit = self.page_limit,
                        "analysis page is full; older transactions may be missing"
                    );
                }
                inner.cache = records;
                let analysis = inner.aggregator.aggregate(&inner.cache, inner.period);
                info!(records = count, period = %inner.period, "analysis data loaded");
                self.publish(analysis, true);
                LoadOutcome::Applied { records: count }
            }
            Err(e) => {
                error!(error = %e, "failed to load transactions for analysis");
                let message = e.to_string();
                self.state_tx.send_modify(|s| {
                    s.is_loading = false;
                    s.last_error = Some(message.clone());
                });
                LoadOutcome::Failed(message)
            }
        }
    }

    /// Move the selected month by `delta` (negative goes back).
    ///
    /// Recomputes from the cached page; fetches first only when nothing
    /// has been cached yet.
    pub async fn change_month(&self, delta: i32) -> LoadOutcome {
        let inner = self.inner.lock().await;
        let target = inner.period.shift(delta);
        self.apply_period(inner, target).await
    }

    /// Jump straight to `period`.
    pub async fn select_period(&self, period: MonthPeriod) -> LoadOutcome {
        let inner = self.inner.lock().await;
        self.apply_period(inner, period).await
    }

    async fn apply_period(
        &self,
        mut inner: MutexGuard<'_, AnalysisInner>,
        period: MonthPeriod,
    ) -> LoadOutcome {
        inner.period = period;

        if inner.cache.is_empty() {
            drop(inner);
            self.state_tx.send_modify(|s| s.selected_period = period);
            return self.load_analysis_data().await;
        }

        let inner = &mut *inner;
        let analysis = inner.aggregator.aggregate(&inner.cache, period);
        // A load still in flight owns the loading flag.
        self.publish(analysis, false);
        LoadOutcome::Recomputed
    }

    fn publish(&self, analysis: MonthlyAnalysis, finish_loading: bool) {
        self.state_tx.send_modify(|s| {
            s.selected_period = analysis.period;
            s.summary = analysis.summary;
            s.category_stats = analysis.category_stats;
            if finish_loading {
                s.is_loading = false;
                s.last_error = None;
            }
        });
    }
}
