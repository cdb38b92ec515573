use chrono::NaiveDate;
use wallet_analysis_core::models::period::MonthPeriod;
use wallet_analysis_core::models::settings::Settings;
use wallet_analysis_core::models::summary::{CategoryStat, FinancialSummary, MonthlyAnalysis};
use wallet_analysis_core::models::transaction::{TransactionRecord, TransactionType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn p(month: u32, year: i32) -> MonthPeriod {
    MonthPeriod::new(month, year).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionType
// ═══════════════════════════════════════════════════════════════════

mod transaction_type {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(TransactionType::Income.to_string(), "INCOME");
        assert_eq!(TransactionType::Expense.to_string(), "EXPENSE");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("income".parse::<TransactionType>(), Ok(TransactionType::Income));
        assert_eq!(" Expense ".parse::<TransactionType>(), Ok(TransactionType::Expense));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "TRANSFER".parse::<TransactionType>().unwrap_err();
        assert!(err.contains("TRANSFER"));
    }

    #[test]
    fn serde_uses_uppercase() {
        let json = serde_json::to_string(&TransactionType::Expense).unwrap();
        assert_eq!(json, "\"EXPENSE\"");
        let back: TransactionType = serde_json::from_str("\"INCOME\"").unwrap();
        assert_eq!(back, TransactionType::Income);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionRecord
// ═══════════════════════════════════════════════════════════════════

mod transaction_record {
    use super::*;

    #[test]
    fn new_is_not_a_transfer() {
        let t = TransactionRecord::new("1", TransactionType::Expense, 50000.0, "2025-03-05", "Makanan", "Cash");
        assert!(!t.is_transfer);
        assert!(t.is_expense());
        assert!(!t.is_income());
        assert_eq!(t.note, None);
    }

    #[test]
    fn builders() {
        let t = TransactionRecord::new("2", TransactionType::Income, 15000.0, "2025-03-10", "Transfer dari Bank", "Cash")
            .as_transfer()
            .with_note("top up");
        assert!(t.is_transfer);
        assert!(t.is_income());
        assert_eq!(t.note.as_deref(), Some("top up"));
    }

    #[test]
    fn deserialize_without_optional_fields() {
        let json = r#"{
            "id": "abc",
            "amount": 1200.5,
            "transaction_type": "EXPENSE",
            "date": "2025-03-05",
            "category_name": "Makanan",
            "wallet_name": "Cash"
        }"#;
        let t: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, "abc");
        assert!(!t.is_transfer);
        assert_eq!(t.note, None);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MonthPeriod
// ═══════════════════════════════════════════════════════════════════

mod month_period {
    use super::*;

    #[test]
    fn rejects_month_zero_and_thirteen() {
        assert!(MonthPeriod::new(0, 2025).is_err());
        assert!(MonthPeriod::new(13, 2025).is_err());
        assert!(MonthPeriod::new(12, 2025).is_ok());
    }

    #[test]
    fn from_date() {
        let period = MonthPeriod::from_date(d(2025, 3, 31));
        assert_eq!(period.month(), 3);
        assert_eq!(period.year(), 2025);
    }

    #[test]
    fn shift_within_year() {
        assert_eq!(p(3, 2025).shift(1), p(4, 2025));
        assert_eq!(p(3, 2025).shift(-2), p(1, 2025));
        assert_eq!(p(3, 2025).shift(0), p(3, 2025));
    }

    #[test]
    fn shift_across_year_boundaries() {
        assert_eq!(p(12, 2024).shift(1), p(1, 2025));
        assert_eq!(p(1, 2025).shift(-1), p(12, 2024));
        assert_eq!(p(6, 2025).shift(-30), p(12, 2022));
        assert_eq!(p(6, 2025).shift(19), p(1, 2027));
    }

    #[test]
    fn shift_and_back_is_identity() {
        let start = p(2, 2025);
        for delta in [-25, -12, -1, 1, 11, 40] {
            assert_eq!(start.shift(delta).shift(-delta), start);
        }
    }

    #[test]
    fn contains() {
        let march = p(3, 2025);
        assert!(march.contains(d(2025, 3, 1)));
        assert!(march.contains(d(2025, 3, 31)));
        assert!(!march.contains(d(2025, 4, 1)));
        assert!(!march.contains(d(2024, 3, 15)));
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(p(12, 2024) < p(1, 2025));
        assert!(p(2, 2025) > p(1, 2025));
    }

    #[test]
    fn display() {
        assert_eq!(p(3, 2025).to_string(), "2025-03");
        assert_eq!(p(11, 987).to_string(), "0987-11");
    }

    #[test]
    fn deserialize_validates_month() {
        let ok: MonthPeriod = serde_json::from_str(r#"{"year":2025,"month":3}"#).unwrap();
        assert_eq!(ok, p(3, 2025));
        let err = serde_json::from_str::<MonthPeriod>(r#"{"year":2025,"month":13}"#).unwrap_err();
        assert!(err.to_string().contains("between 1 and 12"));
        assert!(serde_json::from_str::<MonthPeriod>(r#"{"year":2025,"month":0}"#).is_err());
    }

    #[test]
    fn serialize_round_trips() {
        let json = serde_json::to_string(&p(12, 2024)).unwrap();
        assert_eq!(serde_json::from_str::<MonthPeriod>(&json).unwrap(), p(12, 2024));
    }

    #[test]
    fn first_day() {
        assert_eq!(p(2, 2024).first_day(), Some(d(2024, 2, 1)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  FinancialSummary / MonthlyAnalysis
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    fn stat(name: &str, total: f64, is_admin_fee: bool) -> CategoryStat {
        CategoryStat {
            category_name: name.into(),
            total,
            color_hex: "#000000".into(),
            is_admin_fee,
        }
    }

    #[test]
    fn net_is_income_minus_expense() {
        let s = FinancialSummary { income: 100.0, expense: 30.0, admin_fee: 5.0 };
        assert_eq!(s.net(), 70.0);
        let negative = FinancialSummary { income: 10.0, expense: 30.0, admin_fee: 0.0 };
        assert_eq!(negative.net(), -20.0);
    }

    #[test]
    fn empty_analysis_is_zero_state() {
        let a = MonthlyAnalysis::empty(p(2, 2025));
        assert_eq!(a.summary, FinancialSummary::default());
        assert!(a.category_stats.is_empty());
        assert_eq!(a.category_total(), 0.0);
    }

    #[test]
    fn category_total_skips_admin_fee() {
        let a = MonthlyAnalysis {
            period: p(3, 2025),
            summary: FinancialSummary { income: 0.0, expense: 35.0, admin_fee: 5.0 },
            category_stats: vec![stat("Food", 20.0, false), stat("Fuel", 10.0, false), stat("Fee", 5.0, true)],
        };
        assert_eq!(a.category_total(), 30.0);
    }

    #[test]
    fn to_json_is_chart_ready() {
        let a = MonthlyAnalysis {
            period: p(3, 2025),
            summary: FinancialSummary { income: 0.0, expense: 5000.0, admin_fee: 5000.0 },
            category_stats: vec![stat("Admin/Transfer Fee", 5000.0, true)],
        };
        let json = a.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["admin_fee"], 5000.0);
        assert_eq!(value["category_stats"][0]["is_admin_fee"], true);
        assert_eq!(value["period"]["month"], 3);
    }

    #[test]
    fn category_share_pct() {
        let a = MonthlyAnalysis {
            period: p(3, 2025),
            summary: FinancialSummary { income: 0.0, expense: 40.0, admin_fee: 0.0 },
            category_stats: vec![stat("Food", 30.0, false), stat("Fuel", 10.0, false)],
        };
        assert_eq!(a.category_share_pct("Food"), 75.0);
        assert_eq!(a.category_share_pct("Missing"), 0.0);
        assert_eq!(MonthlyAnalysis::empty(p(3, 2025)).category_share_pct("Food"), 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.analysis_page_limit, 1000);
        assert_eq!(s.transfer_keyword, "Transfer");
        assert_eq!(s.admin_fee_label, "Admin/Transfer Fee");
        assert_eq!(s.admin_fee_color, "#9E9E9E");
        assert_eq!(s.recent_transactions_limit, 5);
        assert!(s.auth_token.is_none());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "api_base_url": "https://api.example.com/api" }"#).unwrap();
        assert_eq!(s.api_base_url, "https://api.example.com/api");
        assert_eq!(s.analysis_page_limit, 1000);
    }

    #[test]
    fn custom_admin_fee_bucket() {
        let s = Settings::from_json(r##"{ "admin_fee_label": "Biaya Admin", "admin_fee_color": "#607d8b" }"##).unwrap();
        assert_eq!(s.admin_fee_label, "Biaya Admin");
        assert_eq!(s.admin_fee_color, "#607d8b");
    }

    #[test]
    fn rejects_zero_page_limit() {
        assert!(Settings::from_json(r#"{ "analysis_page_limit": 0 }"#).is_err());
    }

    #[test]
    fn rejects_bad_color() {
        assert!(Settings::from_json(r#"{ "admin_fee_color": "gray" }"#).is_err());
        assert!(Settings::from_json(r##"{ "admin_fee_color": "#GGGGGG" }"##).is_err());
    }

    #[test]
    fn rejects_empty_base_url() {
        let s = Settings { api_base_url: "  ".into(), ..Settings::default() };
        assert!(s.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Settings::from_json("{ not json").is_err());
    }
}
