use serde::{Deserialize, Serialize};

use super::period::MonthPeriod;
use crate::errors::CoreError;

/// Net income/expense for one month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of non-transfer income
    pub income: f64,

    /// Sum of non-transfer expense, plus `admin_fee`
    pub expense: f64,

    /// Transfer cost: max(0, transfer expense − transfer income)
    pub admin_fee: f64,
}

impl FinancialSummary {
    /// income − expense
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// One slice of the expense pie chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category_name: String,

    /// Summed expense amount for this category
    pub total: f64,

    /// `#RRGGBB` color for chart rendering
    pub color_hex: String,

    /// True only for the synthetic admin/transfer fee bucket
    #[serde(default)]
    pub is_admin_fee: bool,
}

/// Everything the analysis view renders for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAnalysis {
    pub period: MonthPeriod,
    pub summary: FinancialSummary,

    /// Sorted largest total first
    pub category_stats: Vec<CategoryStat>,
}

impl MonthlyAnalysis {
    /// The zero state: no income, no expense, no buckets.
    pub fn empty(period: MonthPeriod) -> Self {
        Self {
            period,
            summary: FinancialSummary::default(),
            category_stats: Vec::new(),
        }
    }

    /// Sum of every real (non admin-fee) bucket.
    pub fn category_total(&self) -> f64 {
        self.category_stats
            .iter()
            .filter(|s| !s.is_admin_fee)
            .map(|s| s.total)
            .sum()
    }

    /// Share of the month's expense taken by `category_name`, in percent.
    pub fn category_share_pct(&self, category_name: &str) -> f64 {
        if self.summary.expense <= 0.0 {
            return 0.0;
        }
        self.category_stats
            .iter()
            .find(|s| s.category_name == category_name)
            .map(|s| s.total / self.summary.expense * 100.0)
            .unwrap_or(0.0)
    }

    /// Chart-ready JSON for the presentation layer.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize analysis: {e}")))
    }
}
