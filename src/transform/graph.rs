//! Species relationship graph
//!
//! Builds the node/edge structure behind the galaxy view: one node per
//! species, edges inferred from shared taxonomic family. Edge construction is
//! deliberately sparse - consecutive family members are chained rather than
//! fully connected, and large families get no edges at all. The caps bound
//! edge count and keep big parks renderable; they carry no biological meaning.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::data::SpeciesRecord;
use crate::encoding::{abundance_size, category_color, nativeness_color, ColorMode};

/// Families at or above this size contribute no edges.
pub const MAX_FAMILY_GROUP: usize = 50;

/// At most this many chain edges per family.
pub const MAX_FAMILY_EDGES: usize = 5;

/// One galaxy node, carrying everything the renderer and tooltip need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    /// Common names when present, otherwise the scientific name.
    pub name: String,
    pub scientific_name: Option<String>,
    pub category: Option<String>,
    pub family: Option<String>,
    pub order: Option<String>,
    pub nativeness: Option<String>,
    pub abundance: Option<String>,
    pub seasonality: Option<String>,
    pub conservation_status: Option<String>,
}

impl GraphNode {
    fn from_record(record: &SpeciesRecord) -> Self {
        let name = record
            .common_names
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(record.scientific_name.as_deref())
            .unwrap_or_default()
            .to_string();

        Self {
            id: record.id.clone(),
            name,
            scientific_name: record.scientific_name.clone(),
            category: record.category.clone(),
            family: record.family.clone(),
            order: record.order.clone(),
            nativeness: record.nativeness.clone(),
            abundance: record.abundance.clone(),
            seasonality: record.seasonality.clone(),
            conservation_status: record.conservation_status.clone(),
        }
    }

    /// Rendered radius, from the abundance encoding.
    pub fn radius(&self) -> f64 {
        abundance_size(self.abundance.as_deref())
    }

    /// Fill color under the given color mode.
    pub fn color(&self, mode: ColorMode) -> &'static str {
        match mode {
            ColorMode::Nativeness => nativeness_color(self.nativeness.as_deref()),
            ColorMode::Category => category_color(self.category.as_deref()),
        }
    }
}

/// An edge between two species of the same family. Both endpoints always
/// reference node ids present in the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Build the galaxy graph for a park subset (at most
/// [`MAX_PARK_SPECIES`](crate::data::MAX_PARK_SPECIES) records).
///
/// Node identity is the record id; duplicate ids are a data-quality problem
/// for the caller to validate, never silently deduplicated here. Given the
/// same input sequence the output is identical in content and order.
pub fn build_species_graph(species: &[SpeciesRecord]) -> SpeciesGraph {
    let nodes = species.iter().map(GraphNode::from_record).collect();

    // Group row indices by family, keeping first-seen family order so edge
    // generation is deterministic.
    let mut family_order: Vec<&str> = Vec::new();
    let mut family_groups: FxHashMap<&str, SmallVec<[usize; 8]>> = FxHashMap::default();
    for (idx, record) in species.iter().enumerate() {
        if let Some(family) = record.family.as_deref().filter(|f| !f.is_empty()) {
            family_groups
                .entry(family)
                .or_insert_with(|| {
                    family_order.push(family);
                    SmallVec::new()
                })
                .push(idx);
        }
    }

    // Chain consecutive members within each family: singletons and families
    // of MAX_FAMILY_GROUP or more contribute no edges, and each family is
    // capped at MAX_FAMILY_EDGES edges.
    let mut edges = Vec::new();
    for family in &family_order {
        let members = &family_groups[family];
        if members.len() > 1 && members.len() < MAX_FAMILY_GROUP {
            let chain = (members.len() - 1).min(MAX_FAMILY_EDGES);
            for i in 0..chain {
                edges.push(GraphEdge {
                    source: species[members[i]].id.clone(),
                    target: species[members[i + 1]].id.clone(),
                });
            }
        }
    }

    SpeciesGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, family: Option<&str>) -> SpeciesRecord {
        SpeciesRecord {
            id: id.to_string(),
            park_name: "Test Park".to_string(),
            category: None,
            order: None,
            family: family.map(str::to_string),
            scientific_name: Some(format!("Testus {}", id)),
            common_names: None,
            record_status: None,
            occurrence: None,
            nativeness: None,
            abundance: None,
            seasonality: None,
            conservation_status: None,
        }
    }

    fn family_of(size: usize, family: &str) -> Vec<SpeciesRecord> {
        (0..size)
            .map(|i| member(&format!("{}-{}", family, i), Some(family)))
            .collect()
    }

    #[test]
    fn test_edge_counts_per_family_size() {
        // size -> expected edges: 1 -> 0, 2 -> 1, 49 -> 5, 50 -> 0, 60 -> 0
        for (size, expected) in [(1usize, 0usize), (2, 1), (49, 5), (50, 0), (60, 0)] {
            let species = family_of(size, "Corvidae");
            let graph = build_species_graph(&species);
            assert_eq!(graph.nodes.len(), size);
            assert_eq!(
                graph.edges.len(),
                expected,
                "family of {} should produce {} edges",
                size,
                expected
            );
        }
    }

    #[test]
    fn test_edges_chain_consecutive_members() {
        let species = family_of(4, "Anatidae");
        let graph = build_species_graph(&species);

        assert_eq!(graph.edges.len(), 3);
        for (i, edge) in graph.edges.iter().enumerate() {
            assert_eq!(edge.source, format!("Anatidae-{}", i));
            assert_eq!(edge.target, format!("Anatidae-{}", i + 1));
        }
    }

    #[test]
    fn test_missing_family_yields_isolated_nodes() {
        let species = vec![
            member("s1", None),
            member("s2", Some("")),
            member("s3", None),
        ];
        let graph = build_species_graph(&species);
        assert_eq!(graph.nodes.len(), 3, "family-less species still get nodes");
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_families_interleaved_in_source_order() {
        // Two families interleaved: grouping is by first-seen family order,
        // chaining by source index order within each family.
        let species = vec![
            member("a1", Some("Felidae")),
            member("b1", Some("Canidae")),
            member("a2", Some("Felidae")),
            member("b2", Some("Canidae")),
        ];
        let graph = build_species_graph(&species);

        assert_eq!(
            graph.edges,
            vec![
                GraphEdge { source: "a1".into(), target: "a2".into() },
                GraphEdge { source: "b1".into(), target: "b2".into() },
            ]
        );
    }

    #[test]
    fn test_deterministic_output() {
        let mut species = Vec::new();
        for family in ["Felidae", "Canidae", "Ursidae"] {
            species.extend(family_of(7, family));
        }
        let first = build_species_graph(&species);
        let second = build_species_graph(&species);
        assert_eq!(first, second, "same input must give identical output");
    }

    #[test]
    fn test_node_name_prefers_common_names() {
        let mut with_common = member("s1", None);
        with_common.common_names = Some("Gray Wolf".to_string());
        let graph = build_species_graph(&[with_common, member("s2", None)]);

        assert_eq!(graph.nodes[0].name, "Gray Wolf");
        assert_eq!(graph.nodes[1].name, "Testus s2");
    }

    #[test]
    fn test_node_color_follows_mode() {
        let mut record = member("s1", None);
        record.nativeness = Some("Native".to_string());
        record.category = Some("Bird".to_string());
        let graph = build_species_graph(&[record]);
        let node = &graph.nodes[0];

        assert_eq!(node.color(ColorMode::Nativeness), "#22c55e");
        assert_eq!(node.color(ColorMode::Category), "#3b82f6");
    }
}
