//! Visual encoding lookup tables
//!
//! Maps categorical species attributes to the scalars the renderer draws
//! with. All lookups are total: unknown or missing input resolves to the
//! documented default, never an error. The default fallback values are part
//! of the visual contract and are relied on by consumers.

use serde::{Deserialize, Serialize};

/// Which attribute drives node color. The UI toggles between the two.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Nativeness,
    Category,
}

// ============================================================================
// Abundance → node radius
// ============================================================================

/// Node radius (px) for an abundance label. Missing or unrecognized → 8.
pub fn abundance_size(abundance: Option<&str>) -> f64 {
    match abundance {
        Some("Abundant") => 20.0,
        Some("Common") => 15.0,
        Some("Occasional") => 12.0,
        Some("Uncommon") => 10.0,
        Some("Rare") => 7.0,
        Some("Unknown") => 8.0,
        _ => 8.0,
    }
}

// ============================================================================
// Nativeness → color
// ============================================================================

/// Node color for a nativeness label. Missing or unrecognized → gray.
pub fn nativeness_color(nativeness: Option<&str>) -> &'static str {
    match nativeness {
        Some("Native") => "#22c55e",              // Green
        Some("Not Native") => "#ef4444",          // Red
        Some("Unknown") => "#94a3b8",             // Gray
        Some("Not Checked") => "#64748b",         // Darker gray
        Some("Probably Native") => "#84cc16",     // Light green
        Some("Probably Not Native") => "#f97316", // Orange
        _ => "#94a3b8",
    }
}

// ============================================================================
// Taxonomic category → color
// ============================================================================

/// Node color for a taxonomic category. Missing or unrecognized → slate.
pub fn category_color(category: Option<&str>) -> &'static str {
    match category {
        Some("Mammal") => "#f59e0b",
        Some("Bird") => "#3b82f6",
        Some("Reptile") => "#84cc16",
        Some("Amphibian") => "#10b981",
        Some("Fish") => "#06b6d4",
        Some("Invertebrate") => "#8b5cf6",
        Some("Insect") => "#a855f7",
        Some("Spider/Scorpion") => "#ec4899",
        Some("Slug/Snail") => "#f43f5e",
        Some("Crab/Lobster/Shrimp") => "#14b8a6",
        Some("Vascular Plant") => "#22c55e",
        Some("Nonvascular Plant") => "#65a30d",
        Some("Fungi") => "#d946ef",
        Some("Algae") => "#0ea5e9",
        _ => "#64748b",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_abundance_sizes() {
        assert_relative_eq!(abundance_size(Some("Abundant")), 20.0);
        assert_relative_eq!(abundance_size(Some("Common")), 15.0);
        assert_relative_eq!(abundance_size(Some("Occasional")), 12.0);
        assert_relative_eq!(abundance_size(Some("Uncommon")), 10.0);
        assert_relative_eq!(abundance_size(Some("Rare")), 7.0);
        assert_relative_eq!(abundance_size(Some("Unknown")), 8.0);
    }

    #[test]
    fn test_abundance_size_default() {
        assert_relative_eq!(abundance_size(Some("NotARealValue")), 8.0);
        assert_relative_eq!(abundance_size(None), 8.0);
        // Lookups are case-sensitive; a lowercased label falls to the default.
        assert_relative_eq!(abundance_size(Some("abundant")), 8.0);
    }

    #[test]
    fn test_nativeness_colors() {
        assert_eq!(nativeness_color(Some("Native")), "#22c55e");
        assert_eq!(nativeness_color(Some("Not Native")), "#ef4444");
        assert_eq!(nativeness_color(Some("Unknown")), "#94a3b8");
        assert_eq!(nativeness_color(Some("Not Checked")), "#64748b");
        assert_eq!(nativeness_color(Some("Probably Native")), "#84cc16");
        assert_eq!(nativeness_color(Some("Probably Not Native")), "#f97316");
    }

    #[test]
    fn test_nativeness_color_default() {
        assert_eq!(nativeness_color(Some("Feral")), "#94a3b8");
        assert_eq!(nativeness_color(None), "#94a3b8");
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(category_color(Some("Mammal")), "#f59e0b");
        assert_eq!(category_color(Some("Bird")), "#3b82f6");
        assert_eq!(category_color(Some("Spider/Scorpion")), "#ec4899");
        assert_eq!(category_color(Some("Crab/Lobster/Shrimp")), "#14b8a6");
        assert_eq!(category_color(Some("Algae")), "#0ea5e9");
    }

    #[test]
    fn test_category_color_default() {
        assert_eq!(category_color(Some("Dinosaur")), "#64748b");
        assert_eq!(category_color(None), "#64748b");
    }
}
