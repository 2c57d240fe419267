//! Node classification
//!
//! Partitions the nodes of a [`NetworkGraph`] into mutually exclusive visual
//! categories using the edge table's metadata. Every node receives exactly
//! one category.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::constants::{columns, node_types};
use crate::error::GenoPhenoError;
use crate::graph::NetworkGraph;
use crate::table::EdgeTable;

/// Visual category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    /// A phenotype root, seen in the source column
    Superphenotype,
    /// A gene associated with and overlapping the phenotype
    OverlappingGene,
    /// A first-neighbor interactor of an associated gene
    FirstNeighborGene,
    /// A genotype-phenotype node matching no node-type rule
    Uncategorized,
    /// Any node of a protein interaction network
    Molecule,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Superphenotype => "superphenotype",
            NodeCategory::OverlappingGene => "overlapping gene",
            NodeCategory::FirstNeighborGene => "first-neighbor gene",
            NodeCategory::Uncategorized => "uncategorized",
            NodeCategory::Molecule => "molecule",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which set of categories a table is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationScheme {
    GenotypePhenotype,
    ProteinInteraction,
}

/// A total mapping from node name to category, in graph node order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryAssignment {
    nodes: Vec<(String, NodeCategory)>,
    positions: HashMap<String, usize>,
}

impl CategoryAssignment {
    fn push(&mut self, name: &str, category: NodeCategory) {
        self.positions.insert(name.to_string(), self.nodes.len());
        self.nodes.push((name.to_string(), category));
    }

    pub fn category_of(&self, name: &str) -> Option<NodeCategory> {
        self.positions.get(name).map(|&i| self.nodes[i].1)
    }

    /// Iterate `(name, category)` pairs in graph node order
    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeCategory)> {
        self.nodes.iter().map(|(name, cat)| (name.as_str(), *cat))
    }

    /// Names of every node in `category`
    pub fn members(&self, category: NodeCategory) -> BTreeSet<&str> {
        self.iter()
            .filter(|&(_, cat)| cat == category)
            .map(|(name, _)| name)
            .collect()
    }

    /// Number of nodes per category; categories with no members are omitted
    pub fn counts(&self) -> BTreeMap<NodeCategory, usize> {
        let mut counts = BTreeMap::new();
        for (_, category) in self.iter() {
            *counts.entry(category).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Classifies graph nodes according to a [`ClassificationScheme`]
pub struct NodeClassifier {
    scheme: ClassificationScheme,
}

impl NodeClassifier {
    pub fn new(scheme: ClassificationScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> ClassificationScheme {
        self.scheme
    }

    /// Assign a category to every node of `graph`
    pub fn classify(
        &self,
        graph: &NetworkGraph,
        table: &EdgeTable,
    ) -> Result<CategoryAssignment, GenoPhenoError> {
        let assignment = match self.scheme {
            ClassificationScheme::GenotypePhenotype => Self::classify_gpn(graph, table)?,
            ClassificationScheme::ProteinInteraction => {
                let mut assignment = CategoryAssignment::default();
                for name in graph.node_names() {
                    assignment.push(name, NodeCategory::Molecule);
                }
                assignment
            }
        };

        debug!(scheme = ?self.scheme, counts = ?assignment.counts(), "classified nodes");
        Ok(assignment)
    }

    /// Each node is checked against every row on its own; rows are never
    /// paired across node types.
    fn classify_gpn(
        graph: &NetworkGraph,
        table: &EdgeTable,
    ) -> Result<CategoryAssignment, GenoPhenoError> {
        if !table.has_column(columns::NODE_TYPE) {
            return Err(GenoPhenoError::ClassificationError {
                column: columns::NODE_TYPE.to_string(),
            });
        }

        let sources: HashSet<&str> = table
            .column(columns::SUPERPHENOTYPE)?
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let targets = table.column(columns::NODE_NAME)?;
        let node_types = table.column(columns::NODE_TYPE)?;

        let mut overlapping = HashSet::new();
        let mut neighbors = HashSet::new();
        for (target, node_type) in targets.into_iter().zip(node_types) {
            match node_type {
                node_types::OVERLAPPING => {
                    overlapping.insert(target);
                }
                node_types::FIRST_NEIGHBORS => {
                    neighbors.insert(target);
                }
                _ => {}
            }
        }

        let mut assignment = CategoryAssignment::default();
        for name in graph.node_names() {
            let category = if sources.contains(name) {
                NodeCategory::Superphenotype
            } else if overlapping.contains(name) {
                NodeCategory::OverlappingGene
            } else if neighbors.contains(name) {
                NodeCategory::FirstNeighborGene
            } else {
                NodeCategory::Uncategorized
            };
            assignment.push(name, category);
        }

        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::{EdgeColumns, NetworkGraphBuilder};

    const GPN: EdgeColumns = EdgeColumns {
        source: columns::SUPERPHENOTYPE,
        target: columns::NODE_NAME,
    };

    fn gpn_table(rows: &[[&str; 3]]) -> EdgeTable {
        EdgeTable::from_rows(
            [columns::SUPERPHENOTYPE, columns::NODE_NAME, columns::NODE_TYPE],
            rows.iter().map(|r| r.to_vec()),
        )
    }

    fn classify(table: &EdgeTable) -> CategoryAssignment {
        let mut builder = NetworkGraphBuilder::new(GPN);
        builder.build_from_table(table).unwrap();
        NodeClassifier::new(ClassificationScheme::GenotypePhenotype)
            .classify(builder.graph(), table)
            .unwrap()
    }

    #[test]
    fn test_gpn_categories() {
        let table = gpn_table(&[
            ["P1", "G1", node_types::OVERLAPPING],
            ["P1", "G2", node_types::FIRST_NEIGHBORS],
            ["P1", "G3", "something_else"],
        ]);

        let assignment = classify(&table);

        assert_eq!(assignment.category_of("P1"), Some(NodeCategory::Superphenotype));
        assert_eq!(assignment.category_of("G1"), Some(NodeCategory::OverlappingGene));
        assert_eq!(assignment.category_of("G2"), Some(NodeCategory::FirstNeighborGene));
        assert_eq!(assignment.category_of("G3"), Some(NodeCategory::Uncategorized));
        assert_eq!(assignment.category_of("missing"), None);
    }

    #[test]
    fn test_superphenotype_takes_precedence() {
        let table = gpn_table(&[
            ["P1", "P2", node_types::OVERLAPPING],
            ["P2", "G1", node_types::FIRST_NEIGHBORS],
        ]);

        let assignment = classify(&table);

        assert_eq!(assignment.category_of("P2"), Some(NodeCategory::Superphenotype));
    }

    #[test]
    fn test_overlapping_takes_precedence_over_neighbor() {
        let table = gpn_table(&[
            ["P1", "G1", node_types::FIRST_NEIGHBORS],
            ["P2", "G1", node_types::OVERLAPPING],
        ]);

        let assignment = classify(&table);

        assert_eq!(assignment.category_of("G1"), Some(NodeCategory::OverlappingGene));
    }

    #[test]
    fn test_unequal_category_row_counts() {
        // Three overlapping rows against a single neighbor row
        let table = gpn_table(&[
            ["P1", "G1", node_types::OVERLAPPING],
            ["P1", "G2", node_types::OVERLAPPING],
            ["P1", "G3", node_types::OVERLAPPING],
            ["P1", "N1", node_types::FIRST_NEIGHBORS],
        ]);

        let assignment = classify(&table);

        assert_eq!(
            assignment.members(NodeCategory::OverlappingGene),
            BTreeSet::from(["G1", "G2", "G3"])
        );
        assert_eq!(
            assignment.members(NodeCategory::FirstNeighborGene),
            BTreeSet::from(["N1"])
        );
    }

    #[test]
    fn test_assignment_is_total_and_disjoint() {
        let table = gpn_table(&[
            ["P1", "G1", node_types::OVERLAPPING],
            ["P2", "G1", node_types::FIRST_NEIGHBORS],
            ["P2", "P1", node_types::OVERLAPPING],
            ["P3", "X", ""],
            ["P3", "N2", node_types::FIRST_NEIGHBORS],
        ]);

        let mut builder = NetworkGraphBuilder::new(GPN);
        builder.build_from_table(&table).unwrap();
        let assignment = NodeClassifier::new(ClassificationScheme::GenotypePhenotype)
            .classify(builder.graph(), &table)
            .unwrap();

        assert_eq!(assignment.len(), builder.graph().node_count());
        assert_eq!(
            assignment.counts().values().sum::<usize>(),
            builder.graph().node_count()
        );
        for name in builder.graph().node_names() {
            assert!(assignment.category_of(name).is_some());
        }
    }

    #[test]
    fn test_classification_is_idempotent() {
        let table = gpn_table(&[
            ["P1", "G1", node_types::OVERLAPPING],
            ["P1", "G2", node_types::FIRST_NEIGHBORS],
        ]);

        assert_eq!(classify(&table), classify(&table));
    }

    #[test]
    fn test_missing_node_type_is_classification_error() {
        let table = EdgeTable::from_rows(
            [columns::SUPERPHENOTYPE, columns::NODE_NAME],
            [["P1", "G1"]],
        );
        let mut builder = NetworkGraphBuilder::new(GPN);
        builder.build_from_table(&table).unwrap();

        let result = NodeClassifier::new(ClassificationScheme::GenotypePhenotype)
            .classify(builder.graph(), &table);

        match result {
            Err(GenoPhenoError::ClassificationError { column }) => {
                assert_eq!(column, columns::NODE_TYPE)
            }
            other => panic!("Expected ClassificationError, got {other:?}"),
        }
    }

    #[test]
    fn test_protein_scheme_single_category() {
        let table = EdgeTable::from_rows(
            [columns::MOLECULE_A, columns::MOLECULE_B],
            [["X", "Y"], ["Y", "Z"]],
        );
        let mut builder = NetworkGraphBuilder::new(EdgeColumns {
            source: columns::MOLECULE_A,
            target: columns::MOLECULE_B,
        });
        builder.build_from_table(&table).unwrap();

        let assignment = NodeClassifier::new(ClassificationScheme::ProteinInteraction)
            .classify(builder.graph(), &table)
            .unwrap();

        assert_eq!(assignment.len(), 3);
        assert_eq!(
            assignment.counts(),
            BTreeMap::from([(NodeCategory::Molecule, 3)])
        );
    }
}
