//! Force-layout parameterization
//!
//! The galaxy renderer positions nodes with a standard force simulation
//! (link attraction, many-body repulsion, centering, collision avoidance).
//! The iterative integrator lives in the presentation layer; this module owns
//! only its parameter block, so tuning stays in one serializable place.

use serde::{Deserialize, Serialize};

use crate::transform::GraphNode;

/// Simulation parameters consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceLayoutConfig {
    /// Rest length of family chain links.
    pub link_distance: f64,
    /// Link spring strength, 0..1.
    pub link_strength: f64,
    /// Many-body strength; negative values repel.
    pub charge_strength: f64,
    /// Repulsion cutoff distance.
    pub charge_max_distance: f64,
    /// Added to a node's rendered radius for collision avoidance.
    pub collision_padding: f64,
}

impl Default for ForceLayoutConfig {
    fn default() -> Self {
        Self {
            link_distance: 50.0,
            link_strength: 0.3,
            charge_strength: -100.0,
            charge_max_distance: 200.0,
            collision_padding: 2.0,
        }
    }
}

impl ForceLayoutConfig {
    /// Collision radius for a node: rendered radius plus padding.
    pub fn collision_radius(&self, node: &GraphNode) -> f64 {
        node.radius() + self.collision_padding
    }

    /// Centering force position for a viewport.
    pub fn center(&self, width: f64, height: f64) -> (f64, f64) {
        (width / 2.0, height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn node_with_abundance(abundance: Option<&str>) -> GraphNode {
        GraphNode {
            id: "s1".to_string(),
            name: "Test species".to_string(),
            scientific_name: None,
            category: None,
            family: None,
            order: None,
            nativeness: None,
            abundance: abundance.map(str::to_string),
            seasonality: None,
            conservation_status: None,
        }
    }

    #[test]
    fn test_default_parameters() {
        let config = ForceLayoutConfig::default();
        assert_relative_eq!(config.link_distance, 50.0);
        assert_relative_eq!(config.link_strength, 0.3);
        assert_relative_eq!(config.charge_strength, -100.0);
        assert_relative_eq!(config.charge_max_distance, 200.0);
        assert_relative_eq!(config.collision_padding, 2.0);
    }

    #[test]
    fn test_collision_radius_tracks_abundance() {
        let config = ForceLayoutConfig::default();
        let abundant = node_with_abundance(Some("Abundant"));
        let unranked = node_with_abundance(None);

        assert_relative_eq!(config.collision_radius(&abundant), 22.0);
        assert_relative_eq!(config.collision_radius(&unranked), 10.0);
    }

    #[test]
    fn test_center_is_viewport_midpoint() {
        let config = ForceLayoutConfig::default();
        assert_eq!(config.center(800.0, 600.0), (400.0, 300.0));
    }
}
