//! Core graph types
//!
//! This module contains the fundamental data structures used in the network
//! graph.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

/// One row of the edge table, reduced to its endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Represents a node in the network graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkNode {
    pub name: String,
}

impl NetworkNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The source and target columns an edge table is read through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeColumns {
    pub source: &'static str,
    pub target: &'static str,
}

/// An undirected network with a name lookup
///
/// Node indices follow first-seen order over the table rows, so iteration
/// order is stable for a given input.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    graph: UnGraph<NetworkNode, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node unless one with the same name exists
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(NetworkNode::new(name));
        self.indices.insert(name.to_string(), idx);
        idx
    }

    /// Add an undirected edge, collapsing parallel edges
    pub fn add_edge(&mut self, a: NodeIndex, b: NodeIndex) {
        self.graph.update_edge(a, b, ());
    }

    pub fn graph(&self) -> &UnGraph<NetworkNode, ()> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn index_of(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.indices.contains_key(name)
    }

    /// Node names in index order
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(NetworkNode::name)
    }

    /// Edge endpoints as names
    pub fn edge_names(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.raw_edges().iter().map(|edge| {
            (
                self.graph[edge.source()].name(),
                self.graph[edge.target()].name(),
            )
        })
    }

    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }
}
