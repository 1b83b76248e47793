//! Seasonal activity aggregation
//!
//! Reduces a species subset to a 12-month activity histogram for the species
//! clock. Seasonality in the source data is free text ("Breeder", "Winter
//! resident", ...), so classification is an ordered table of substring rules:
//! the first keyword found in the lower-cased text decides the month set, and
//! anything unrecognized counts as year-round. The rule set is intentionally
//! coarse; the exact keywords and month ranges are part of the contract.

use crate::data::SpeciesRecord;

/// Months per histogram; index 0 is January.
pub const MONTHS: usize = 12;

/// Per-month species activity counts, index 0 = January .. 11 = December.
pub type MonthlyHistogram = [u32; MONTHS];

/// Segment labels for the clock renderer, index-aligned with the histogram.
pub const MONTH_LABELS: [&str; MONTHS] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

struct SeasonRule {
    keyword: &'static str,
    months: &'static [usize],
}

const ALL_YEAR: &[usize] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Ordered rule table, first match wins.
static SEASON_RULES: &[SeasonRule] = &[
    SeasonRule { keyword: "resident", months: ALL_YEAR },
    SeasonRule { keyword: "breeder", months: &[3, 4, 5, 6, 7] },       // Apr-Aug
    SeasonRule { keyword: "migratory", months: &[2, 3, 4, 8, 9, 10] }, // Mar-May, Sep-Nov
    SeasonRule { keyword: "summer", months: &[5, 6, 7] },              // Jun-Aug
    SeasonRule { keyword: "winter", months: &[11, 0, 1] },             // Dec-Feb
    SeasonRule { keyword: "vagrant", months: &[] },
];

/// The month indices a single seasonality label contributes to.
///
/// Matching is case-insensitive substring containment in rule order; missing
/// or unrecognized text is treated as year-round.
pub fn active_months(seasonality: Option<&str>) -> &'static [usize] {
    let text = seasonality.unwrap_or_default().to_lowercase();
    for rule in SEASON_RULES {
        if text.contains(rule.keyword) {
            return rule.months;
        }
    }
    ALL_YEAR
}

/// Sum monthly activity over a species subset.
///
/// Each species contributes +1 to every month its seasonality covers; values
/// are plain counts with no normalization.
pub fn monthly_activity(species: &[SpeciesRecord]) -> MonthlyHistogram {
    let mut histogram = [0u32; MONTHS];
    for record in species {
        for &month in active_months(record.seasonality.as_deref()) {
            histogram[month] += 1;
        }
    }
    histogram
}
