//! View transforms over a filtered species subset
//!
//! Each transform is a pure function of the (already truncated) park subset:
//! - `graph`: node/edge structure for the force-directed galaxy
//! - `seasonality`: 12-month activity histogram for the species clock
//! - `stats`: nativeness and category summary for the side panel

pub mod graph;
pub mod seasonality;
pub mod stats;

// Re-export the transform surface
pub use graph::{build_species_graph, GraphEdge, GraphNode, SpeciesGraph};
pub use seasonality::{active_months, monthly_activity, MonthlyHistogram, MONTHS, MONTH_LABELS};
pub use stats::{summarize_park, ParkStats, TOP_CATEGORY_LIMIT};
