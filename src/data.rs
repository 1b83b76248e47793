//! Dataset loading and park selection
//!
//! Loads the parks and species CSVs with Polars and converts them into plain
//! record structs. Column access is header-keyed and permissive: a missing
//! column or empty cell becomes `None` (or a default), never a load failure.
//! Only an unreadable/unparseable source file is an error.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Hard cap on the per-park working set handed to the transforms.
///
/// Applied once, up front, so graph, histogram and statistics are always
/// computed over the identical subset.
pub const MAX_PARK_SPECIES: usize = 500;

/// A national park row from parks.csv. Loaded once, read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkRecord {
    pub code: String,
    pub name: String,
    pub state: String,
    /// NaN when the source cell is missing or not a number.
    pub acres: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// A species occurrence row from species.csv.
///
/// Every descriptive field is free text in the source data; empty cells load
/// as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub id: String,
    pub park_name: String,
    pub category: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub scientific_name: Option<String>,
    pub common_names: Option<String>,
    pub record_status: Option<String>,
    pub occurrence: Option<String>,
    pub nativeness: Option<String>,
    pub abundance: Option<String>,
    pub seasonality: Option<String>,
    pub conservation_status: Option<String>,
}

/// Terminal load failure. There is no partial-dataset recovery and no retry:
/// either both sources load, or the caller gets a single error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("species data source unavailable: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

/// The full loaded dataset. Immutable once constructed; park-selection changes
/// recompute derived views from it rather than mutating it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Parks sorted by name, the order the park selector presents them in.
    pub parks: Vec<ParkRecord>,
    /// Species rows in source order.
    pub species: Vec<SpeciesRecord>,
}

impl Dataset {
    /// Load both CSVs. The two reads are independent and run in parallel;
    /// both must succeed before a `Dataset` exists.
    pub fn load(parks_path: &Path, species_path: &Path) -> Result<Self, LoadError> {
        let (parks, species) = rayon::join(
            || load_parks(parks_path),
            || load_species(species_path),
        );
        let mut parks = parks?;
        let species = species?;

        parks.sort_by(|a, b| a.name.cmp(&b.name));

        info!(parks = parks.len(), species = species.len(), "datasets loaded");

        Ok(Self { parks, species })
    }

    /// Default selection: the first park in name order.
    pub fn default_park(&self) -> Option<&ParkRecord> {
        self.parks.first()
    }
}

/// Select the species recorded for one park.
///
/// Exact, case-sensitive match on park name; source order is preserved. The
/// caller truncates the result to [`MAX_PARK_SPECIES`] before fanning out to
/// the transforms.
pub fn filter_by_park(species: &[SpeciesRecord], park_name: &str) -> Vec<SpeciesRecord> {
    species
        .iter()
        .filter(|s| s.park_name == park_name)
        .cloned()
        .collect()
}

fn load_parks(path: &Path) -> Result<Vec<ParkRecord>, LoadError> {
    let df = read_csv(path)?;

    let code = str_col(&df, "Park Code");
    let name = str_col(&df, "Park Name");
    let state = str_col(&df, "State");
    let acres = str_col(&df, "Acres");
    let latitude = str_col(&df, "Latitude");
    let longitude = str_col(&df, "Longitude");

    let mut parks = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        parks.push(ParkRecord {
            code: field(code, idx).unwrap_or_default(),
            name: field(name, idx).unwrap_or_default(),
            state: field(state, idx).unwrap_or_default(),
            acres: float_field(acres, idx),
            latitude: float_field(latitude, idx),
            longitude: float_field(longitude, idx),
        });
    }

    info!(rows = parks.len(), path = %path.display(), "parks loaded");
    Ok(parks)
}

fn load_species(path: &Path) -> Result<Vec<SpeciesRecord>, LoadError> {
    let df = read_csv(path)?;

    let id = str_col(&df, "Species ID");
    let park_name = str_col(&df, "Park Name");
    let category = str_col(&df, "Category");
    let order = str_col(&df, "Order");
    let family = str_col(&df, "Family");
    let scientific_name = str_col(&df, "Scientific Name");
    let common_names = str_col(&df, "Common Names");
    let record_status = str_col(&df, "Record Status");
    let occurrence = str_col(&df, "Occurrence");
    let nativeness = str_col(&df, "Nativeness");
    let abundance = str_col(&df, "Abundance");
    let seasonality = str_col(&df, "Seasonality");
    let conservation_status = str_col(&df, "Conservation Status");

    let mut species = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        species.push(SpeciesRecord {
            id: field(id, idx).unwrap_or_default(),
            park_name: field(park_name, idx).unwrap_or_default(),
            category: field(category, idx),
            order: field(order, idx),
            family: field(family, idx),
            scientific_name: field(scientific_name, idx),
            common_names: field(common_names, idx),
            record_status: field(record_status, idx),
            occurrence: field(occurrence, idx),
            nativeness: field(nativeness, idx),
            abundance: field(abundance, idx),
            seasonality: field(seasonality, idx),
            conservation_status: field(conservation_status, idx),
        });
    }

    info!(rows = species.len(), path = %path.display(), "species loaded");
    Ok(species)
}

/// Read a CSV with every column as a string. The two numeric park fields are
/// converted explicitly in `load_parks`; everything else is pass-through text.
fn read_csv(path: &Path) -> Result<DataFrame, LoadError> {
    let source_err = |source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.into()))
        .map_err(source_err)?
        .finish()
        .map_err(source_err)
}

fn str_col<'a>(df: &'a DataFrame, name: &str) -> Option<&'a StringChunked> {
    df.column(name).ok().and_then(|c| c.str().ok())
}

/// Cell access that treats a missing column, null cell, or empty string alike.
fn field(col: Option<&StringChunked>, idx: usize) -> Option<String> {
    col.and_then(|c| c.get(idx))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn float_field(col: Option<&StringChunked>, idx: usize) -> f64 {
    field(col, idx)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(f64::NAN)
}

/// Monotonic load-generation tokens for overlapping dataset loads.
///
/// The presentation layer takes a generation with [`begin`](Self::begin)
/// before starting a load and calls [`commit`](Self::commit) when the result
/// arrives. A commit older than one already accepted returns `false` and the
/// caller discards that result, so the last *started* load always wins.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    issued: AtomicU64,
    committed: AtomicU64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next load generation.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Accept a finished load. Returns `false` when a newer generation has
    /// already been committed, in which case the result must be discarded.
    pub fn commit(&self, generation: u64) -> bool {
        let mut current = self.committed.load(Ordering::SeqCst);
        loop {
            if generation <= current {
                return false;
            }
            match self.committed.compare_exchange(
                current,
                generation,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }
}
