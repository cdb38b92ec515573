use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Chart colors handed out to expense categories.
/// Gray is left out: it belongs to the admin-fee bucket.
pub const CATEGORY_COLORS: [&str; 16] = [
    "#F44336", "#E91E63", "#9C27B0", "#673AB7",
    "#3F51B5", "#2196F3", "#03A9F4", "#00BCD4",
    "#009688", "#4CAF50", "#8BC34A", "#CDDC39",
    "#FFC107", "#FF9800", "#FF5722", "#795548",
];

/// Chart color for a category: a pure function of its normalized name.
///
/// The slot comes from a SHA-256 digest of the trimmed, lowercased name,
/// so every palette, screen and run agrees. Distinct categories whose
/// digests land on the same slot share a color.
pub fn category_color(category_name: &str) -> &'static str {
    CATEGORY_COLORS[color_slot(&normalize(category_name))]
}

/// Remembers which categories have been colored so far.
#[derive(Debug, Clone, Default)]
pub struct CategoryPalette {
    assigned: HashMap<String, usize>,
}

impl CategoryPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `category_name`; records the category as seen.
    pub fn color_for(&mut self, category_name: &str) -> &'static str {
        let key = normalize(category_name);
        let slot = *self
            .assigned
            .entry(key)
            .or_insert_with_key(|k| color_slot(k));
        CATEGORY_COLORS[slot]
    }

    /// Color of a category already seen, without recording it.
    pub fn get(&self, category_name: &str) -> Option<&'static str> {
        self.assigned
            .get(&normalize(category_name))
            .map(|&slot| CATEGORY_COLORS[slot])
    }

    /// Number of categories that have a color.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Key categories are grouped and colored by.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn color_slot(key: &str) -> usize {
    let digest = Sha256::digest(key.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % CATEGORY_COLORS.len() as u64) as usize
}
