//! Spring layout
//!
//! Positions every node with a force-directed simulation: edges pull their
//! endpoints together while all node pairs repel, which also pushes
//! disconnected components apart. Positions are normalized into the unit
//! square so the renderer can scale them onto any canvas.

use std::collections::HashMap;
use std::f32::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use tracing::debug;

use crate::constants::layout::{
    DAMPING_FACTOR, DEFAULT_ITERATIONS, FORCE_CHARGE, FORCE_MAX, FORCE_SPRING, INITIAL_RADIUS,
    NODE_MASS, NODE_SPEED, TIME_STEP,
};
use crate::graph::NetworkGraph;
use crate::progress::ProgressReporter;

/// A point in the unit square, `(0, 0)` at the top left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Node name to position
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: HashMap<String, Position>,
}

impl Layout {
    pub fn position(&self, name: &str) -> Option<Position> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> {
        self.positions.iter().map(|(name, pos)| (name.as_str(), *pos))
    }
}

pub struct SpringLayout {
    iterations: usize,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl SpringLayout {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    fn parameters() -> SimulationParameters {
        SimulationParameters {
            force_charge: FORCE_CHARGE,
            force_spring: FORCE_SPRING,
            force_max: FORCE_MAX,
            node_speed: NODE_SPEED,
            damping_factor: DAMPING_FACTOR,
        }
    }

    /// Compute positions for every node of `graph`
    pub fn compute(&self, graph: &NetworkGraph, progress: Option<&mut ProgressReporter>) -> Layout {
        let count = graph.node_count();
        if count == 0 {
            return Layout::default();
        }

        let mut simulation: ForceGraph<String, ()> = ForceGraph::new(Self::parameters());
        let mut indices = Vec::with_capacity(count);

        // Start on a circle so runs are reproducible
        for (i, name) in graph.node_names().enumerate() {
            let angle = i as f32 * 2.0 * PI / count as f32;
            indices.push(simulation.add_node(NodeData {
                x: INITIAL_RADIUS * angle.cos(),
                y: INITIAL_RADIUS * angle.sin(),
                mass: NODE_MASS,
                is_anchor: false,
                user_data: name.to_string(),
            }));
        }

        for edge in graph.graph().raw_edges() {
            let (a, b) = (edge.source().index(), edge.target().index());
            if a != b {
                simulation.add_edge(indices[a], indices[b], EdgeData::default());
            }
        }

        let bar = progress.map(|p| p.start_layout(self.iterations as u64));
        for _ in 0..self.iterations {
            simulation.update(TIME_STEP);
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }

        let mut raw = Vec::with_capacity(count);
        simulation.visit_nodes(|node| raw.push((node.data.user_data.clone(), node.x(), node.y())));

        debug!(nodes = count, iterations = self.iterations, "computed spring layout");
        normalize(raw)
    }
}

/// Scale raw coordinates into the unit square, preserving aspect ratio
fn normalize(raw: Vec<(String, f32, f32)>) -> Layout {
    let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
    let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    for (_, x, y) in &raw {
        min_x = min_x.min(*x);
        min_y = min_y.min(*y);
        max_x = max_x.max(*x);
        max_y = max_y.max(*y);
    }

    let span = (max_x - min_x).max(max_y - min_y);
    let positions = raw
        .into_iter()
        .map(|(name, x, y)| {
            let position = if span.is_finite() && span > f32::EPSILON {
                Position {
                    x: (x - min_x) / span + (1.0 - (max_x - min_x) / span) / 2.0,
                    y: (y - min_y) / span + (1.0 - (max_y - min_y) / span) / 2.0,
                }
            } else {
                Position { x: 0.5, y: 0.5 }
            };
            (name, position)
        })
        .collect();

    Layout { positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeColumns, EdgeRecord, NetworkGraphBuilder};

    fn graph(edges: &[(&str, &str)]) -> NetworkGraph {
        let records: Vec<EdgeRecord> = edges.iter().map(|(a, b)| EdgeRecord::new(*a, *b)).collect();
        let mut builder = NetworkGraphBuilder::new(EdgeColumns {
            source: "a",
            target: "b",
        });
        builder.build_from_records(&records);
        builder.into_graph()
    }

    fn distance(layout: &Layout, a: &str, b: &str) -> f32 {
        let (pa, pb) = (layout.position(a).unwrap(), layout.position(b).unwrap());
        ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt()
    }

    #[test]
    fn test_empty_graph_yields_empty_layout() {
        let layout = SpringLayout::default().compute(&NetworkGraph::new(), None);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_single_node_is_centered() {
        let graph = graph(&[("P1", "")]);

        let layout = SpringLayout::default().compute(&graph, None);

        assert_eq!(layout.position("P1"), Some(Position { x: 0.5, y: 0.5 }));
    }

    #[test]
    fn test_every_node_positioned_in_unit_square() {
        let graph = graph(&[("P1", "G1"), ("P1", "G2"), ("P2", "G3"), ("G3", "G3")]);

        let layout = SpringLayout::new(50).compute(&graph, None);

        assert_eq!(layout.len(), graph.node_count());
        for (_, pos) in layout.iter() {
            assert!((0.0..=1.0).contains(&pos.x), "x out of range: {pos:?}");
            assert!((0.0..=1.0).contains(&pos.y), "y out of range: {pos:?}");
        }
    }

    #[test]
    fn test_connected_nodes_drawn_closer() {
        // Two separate pairs: each pair should end up tighter than the gap
        let graph = graph(&[("A", "B"), ("C", "D")]);

        let layout = SpringLayout::default().compute(&graph, None);

        assert!(distance(&layout, "A", "B") < distance(&layout, "A", "C"));
        assert!(distance(&layout, "C", "D") < distance(&layout, "B", "D"));
    }
}
