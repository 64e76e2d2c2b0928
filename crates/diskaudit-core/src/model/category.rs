//! Cleanup categories and their per-run totals.
use serde::ser::{Serialize, Serializer};

use super::entry::LargeFileEntry;

/// Cleanup bucket assigned to a large file.
///
/// The declaration order is the display and export order, so the derived
/// `Ord` is load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    LikelyUseless,
    Media,
    Review,
    SystemCritical,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Category; 4] = [
        Category::LikelyUseless,
        Category::Media,
        Category::Review,
        Category::SystemCritical,
    ];

    /// Label used in tables and the CSV `Category` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::LikelyUseless => "LIKELY_USELESS",
            Self::Media => "MEDIA",
            Self::Review => "REVIEW",
            Self::SystemCritical => "SYSTEM_CRITICAL",
        }
    }

    /// What the user should do with files in this bucket.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::LikelyUseless => "Safe to Delete Manually",
            Self::Media => "Review Before Deleting",
            Self::Review => "Manual Review Required",
            Self::SystemCritical => "Do Not Delete",
        }
    }

    #[inline]
    fn idx(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// Hand-written so JSON map keys and CSV cells carry the same label as the
// console tables.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Size and count totals for a single category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CategoryStats {
    pub total_size: u64,
    pub file_count: u64,
}

/// Per-category accumulator for one audit run.
///
/// Sizes are summed as integer bytes; conversion to GB happens only when
/// rendering, so rounding never compounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotals {
    stats: [CategoryStats; 4],
}

impl CategoryTotals {
    /// Build totals from any sequence of large-file entries.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a LargeFileEntry>,
    {
        let mut totals = Self::default();
        for entry in entries {
            totals.add(entry);
        }
        totals
    }

    /// Account one entry against its category.
    pub fn add(&mut self, entry: &LargeFileEntry) {
        let slot = &mut self.stats[entry.category.idx()];
        slot.total_size = slot.total_size.saturating_add(entry.size_bytes);
        slot.file_count += 1;
    }

    /// Stats for one category (zeroed if nothing was recorded).
    pub fn get(&self, category: Category) -> CategoryStats {
        self.stats[category.idx()]
    }

    /// Categories that received at least one file, in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, CategoryStats)> + '_ {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, s)| s.file_count > 0)
    }

    /// Sum across every category.
    pub fn total_size(&self) -> u64 {
        self.stats.iter().map(|s| s.total_size).sum()
    }

    pub fn file_count(&self) -> u64 {
        self.stats.iter().map(|s| s.file_count).sum()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.non_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(size: u64, category: Category) -> LargeFileEntry {
        LargeFileEntry {
            path: PathBuf::from("x"),
            size_bytes: size,
            category,
        }
    }

    #[test]
    fn display_order_matches_ord() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        assert!(Category::LikelyUseless < Category::SystemCritical);
    }

    #[test]
    fn totals_accumulate_per_category() {
        let entries = [
            entry(100, Category::Media),
            entry(50, Category::Media),
            entry(7, Category::SystemCritical),
        ];
        let totals = CategoryTotals::from_entries(&entries);

        assert_eq!(
            totals.get(Category::Media),
            CategoryStats {
                total_size: 150,
                file_count: 2
            }
        );
        assert_eq!(totals.get(Category::Review), CategoryStats::default());
        assert_eq!(totals.total_size(), 157);
        assert_eq!(totals.file_count(), 3);

        let present: Vec<Category> = totals.non_empty().map(|(c, _)| c).collect();
        assert_eq!(present, vec![Category::Media, Category::SystemCritical]);
    }

    #[test]
    fn totals_serialise_as_label_map() {
        let totals = CategoryTotals::from_entries(&[entry(10, Category::LikelyUseless)]);
        let json = serde_json::to_value(totals).unwrap();
        assert_eq!(json["LIKELY_USELESS"]["total_size"], 10);
        assert_eq!(json["LIKELY_USELESS"]["file_count"], 1);
        assert!(json.get("MEDIA").is_none());
    }
}
