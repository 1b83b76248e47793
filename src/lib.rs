//! Species Galaxy data pipeline
//!
//! Transforms National Park Service occurrence tables (parks.csv,
//! species.csv) into the structures behind an interactive biodiversity
//! explorer:
//! - `data`: CSV loading, record types, park filtering, load sequencing
//! - `transform`: graph synthesis, seasonal aggregation, summary statistics
//! - `encoding`: abundance/nativeness/category visual lookup tables
//! - `layout`: force-simulation parameters consumed by the renderer
//! - `view`: the immutable per-park snapshot tying it all together
//!
//! Rendering and interaction live outside this crate; everything here is a
//! pure, synchronous transform over the loaded dataset.

pub mod data;
pub mod encoding;
pub mod layout;
pub mod transform;
pub mod view;

// Re-export commonly used types
pub use data::{
    filter_by_park, Dataset, LoadError, LoadSequencer, ParkRecord, SpeciesRecord,
    MAX_PARK_SPECIES,
};
pub use encoding::{abundance_size, category_color, nativeness_color, ColorMode};
pub use layout::ForceLayoutConfig;
pub use transform::{
    build_species_graph, monthly_activity, summarize_park, GraphEdge, GraphNode,
    MonthlyHistogram, ParkStats, SpeciesGraph, MONTH_LABELS,
};
pub use view::ParkView;
