//! Park summary statistics
//!
//! Derives the side-panel numbers from a park subset: total species count,
//! exact-match nativeness tallies, and the top categories by occurrence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::data::SpeciesRecord;

/// How many ranked categories the summary keeps.
pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Display statistics for one park subset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkStats {
    pub total: usize,
    /// Records whose nativeness is exactly "Native".
    pub native: usize,
    /// Records whose nativeness is exactly "Not Native".
    pub non_native: usize,
    /// Up to five (category, count) pairs, descending by count; equal counts
    /// keep first-encountered order.
    pub top_categories: Vec<(String, usize)>,
}

/// Summarize a park subset. Records with an empty or missing category are
/// excluded from the category ranking entirely.
pub fn summarize_park(species: &[SpeciesRecord]) -> ParkStats {
    let native = species
        .iter()
        .filter(|s| s.nativeness.as_deref() == Some("Native"))
        .count();
    let non_native = species
        .iter()
        .filter(|s| s.nativeness.as_deref() == Some("Not Native"))
        .count();

    // Count categories, remembering first-encountered order for tie-breaking.
    let mut category_order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for record in species {
        if let Some(category) = record.category.as_deref().filter(|c| !c.is_empty()) {
            let entry = counts.entry(category).or_insert_with(|| {
                category_order.push(category);
                0
            });
            *entry += 1;
        }
    }

    let mut top_categories: Vec<(String, usize)> = category_order
        .into_iter()
        .map(|category| {
            let count = counts.get(category).copied().unwrap_or(0);
            (category.to_string(), count)
        })
        .collect();
    // Stable sort: equal counts stay in first-encountered order.
    top_categories.sort_by(|a, b| b.1.cmp(&a.1));
    top_categories.truncate(TOP_CATEGORY_LIMIT);

    ParkStats {
        total: species.len(),
        native,
        non_native,
        top_categories,
    }
}
