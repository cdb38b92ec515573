pub mod aggregator;
pub mod analysis_service;
pub mod dashboard_service;
pub mod date_parser;
pub mod palette;
pub mod transfer;
