use std::collections::HashMap;

use tracing::debug;

use crate::models::period::MonthPeriod;
use crate::models::settings::{Settings, DEFAULT_ADMIN_FEE_COLOR, DEFAULT_ADMIN_FEE_LABEL};
use crate::models::summary::{CategoryStat, FinancialSummary, MonthlyAnalysis};
use crate::models::transaction::{TransactionRecord, TransactionType};
use crate::services::date_parser::parse_transaction_date;
use crate::services::palette::{normalize, CategoryPalette};

/// Turns a flat list of transactions into one month's summary and
/// expense-by-category breakdown.
///
/// Transfers are kept out of real income and expense. What they cost is
/// inferred as `max(0, transfer expense − transfer income)` and reported
/// as an extra "admin fee" expense bucket.
///
/// The only state carried between calls is the color palette, so a
/// category keeps its chart color for the aggregator's lifetime.
#[derive(Debug, Clone)]
pub struct MonthlyFinanceAggregator {
    admin_fee_label: String,
    admin_fee_color: String,
    palette: CategoryPalette,
}

/// Running sums for one partition of a month.
#[derive(Debug, Default)]
struct Totals {
    income: f64,
    expense: f64,
}

impl Totals {
    fn add(&mut self, record: &TransactionRecord) {
        match record.transaction_type {
            TransactionType::Income => self.income += record.amount,
            TransactionType::Expense => self.expense += record.amount,
        }
    }
}

impl MonthlyFinanceAggregator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            admin_fee_label: settings.admin_fee_label.clone(),
            admin_fee_color: settings.admin_fee_color.clone(),
            palette: CategoryPalette::new(),
        }
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Aggregate `transactions` for `period`.
    ///
    /// 1. Parse each date; unparsable records are skipped, as are records outside `period`.
    /// 2. Split transfers from real transactions.
    /// 3. Admin fee = max(0, transfer expense − transfer income).
    /// 4. Summary: real income; real expense + admin fee.
    /// 5. Group real expenses by category name, ignoring case and surrounding
    ///    whitespace, one colored bucket each, plus the admin-fee bucket when
    ///    the fee is positive.
    /// 6. Sort buckets by total, largest first (ties by name).
    ///
    /// Never fails: an empty input or an empty month yields the zero state.
    pub fn aggregate(
        &mut self,
        transactions: &[TransactionRecord],
        period: MonthPeriod,
    ) -> MonthlyAnalysis {
        let mut unparsable = 0usize;
        let in_month: Vec<&TransactionRecord> = transactions
            .iter()
            .filter(|t| match parse_transaction_date(&t.date) {
                Some(date) => period.contains(date),
                None => {
                    unparsable += 1;
                    false
                }
            })
            .collect();

        if unparsable > 0 {
            debug!(unparsable, %period, "skipped transactions with unparsable dates");
        }

        let (transfers, real): (Vec<&TransactionRecord>, Vec<&TransactionRecord>) =
            in_month.into_iter().partition(|t| t.is_transfer);

        let mut transfer_totals = Totals::default();
        for t in &transfers {
            transfer_totals.add(t);
        }
        let admin_fee = (transfer_totals.expense - transfer_totals.income).max(0.0);

        let mut real_totals = Totals::default();
        // Keyed like the palette; the first spelling seen is displayed.
        let mut by_category: HashMap<String, (&str, f64)> = HashMap::new();
        for t in &real {
            real_totals.add(t);
            if t.is_expense() {
                by_category
                    .entry(normalize(&t.category_name))
                    .or_insert((t.category_name.trim(), 0.0))
                    .1 += t.amount;
            }
        }

        let summary = FinancialSummary {
            income: real_totals.income,
            expense: real_totals.expense + admin_fee,
            admin_fee,
        };

        let mut buckets: Vec<(&str, f64)> = by_category.into_values().collect();
        buckets.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });

        let mut category_stats: Vec<CategoryStat> = buckets
            .into_iter()
            .map(|(name, total)| CategoryStat {
                category_name: name.to_string(),
                total,
                color_hex: self.palette.color_for(name).to_string(),
                is_admin_fee: false,
            })
            .collect();

        if admin_fee > 0.0 {
            category_stats.push(CategoryStat {
                category_name: self.admin_fee_label.clone(),
                total: admin_fee,
                color_hex: self.admin_fee_color.clone(),
                is_admin_fee: true,
            });
            category_stats.sort_by(|a, b| {
                b.total
                    .partial_cmp(&a.total)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.category_name.cmp(&b.category_name))
            });
        }

        MonthlyAnalysis {
            period,
            summary,
            category_stats,
        }
    }
}

impl Default for MonthlyFinanceAggregator {
    fn default() -> Self {
        Self {
            admin_fee_label: DEFAULT_ADMIN_FEE_LABEL.to_string(),
            admin_fee_color: DEFAULT_ADMIN_FEE_COLOR.to_string(),
            palette: CategoryPalette::new(),
        }
    }
}
