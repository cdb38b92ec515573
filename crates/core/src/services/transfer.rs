/// Decides whether a category name denotes a wallet-to-wallet transfer.
///
/// The server has no transfer flag on older records; for those the
/// category display name is the only signal. Matching is a
/// case-insensitive substring test against a configurable keyword.
#[derive(Debug, Clone)]
pub struct TransferClassifier {
    keyword: String,
}

impl TransferClassifier {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into().trim().to_lowercase(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// An empty keyword never matches.
    pub fn is_transfer(&self, category_name: &str) -> bool {
        !self.keyword.is_empty() && category_name.to_lowercase().contains(&self.keyword)
    }
}

impl Default for TransferClassifier {
    fn default() -> Self {
        Self::new("Transfer")
    }
}
