pub mod category;
pub mod dashboard;
pub mod period;
pub mod settings;
pub mod summary;
pub mod transaction;
pub mod wallet;
