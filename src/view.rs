//! Per-park view snapshot
//!
//! A `ParkView` is the single immutable value behind the UI for one selected
//! park: the truncated working set plus every derived view, all computed from
//! the identical subset. Selection changes produce a whole new snapshot;
//! nothing is ever patched in place.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::{filter_by_park, SpeciesRecord, MAX_PARK_SPECIES};
use crate::transform::{
    build_species_graph, monthly_activity, summarize_park, MonthlyHistogram, ParkStats,
    SpeciesGraph,
};

/// Everything derived for one park selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkView {
    pub park_name: String,
    /// The working set all derived views were computed from, capped at
    /// [`MAX_PARK_SPECIES`].
    pub species: Vec<SpeciesRecord>,
    /// True when the park had more records than the cap.
    pub truncated: bool,
    pub graph: SpeciesGraph,
    pub activity: MonthlyHistogram,
    pub stats: ParkStats,
}

impl ParkView {
    /// Filter, truncate, and derive all views for one park.
    ///
    /// Truncation happens once, before fan-out, so graph, histogram and
    /// statistics always describe the same records.
    pub fn compute(all_species: &[SpeciesRecord], park_name: &str) -> Self {
        let mut subset = filter_by_park(all_species, park_name);
        let truncated = subset.len() > MAX_PARK_SPECIES;
        subset.truncate(MAX_PARK_SPECIES);

        debug!(
            park = park_name,
            species = subset.len(),
            truncated,
            "recomputing park view"
        );

        let graph = build_species_graph(&subset);
        let activity = monthly_activity(&subset);
        let stats = summarize_park(&subset);

        Self {
            park_name: park_name.to_string(),
            species: subset,
            truncated,
            graph,
            activity,
            stats,
        }
    }
}
