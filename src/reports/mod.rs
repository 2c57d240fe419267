//! Report generation modules for different output formats
//!
//! This module contains report generators for the run summary:
//! - human: Human-readable console output with banner
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::classifier::NodeCategory;
use crate::error::GenoPhenoError;
use crate::style::LabelScope;

/// What a finished run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub mode: &'static str,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub nodes: usize,
    pub edges: usize,
    pub labels: LabelScope,
    pub labeled_nodes: usize,
    pub categories: BTreeMap<NodeCategory, usize>,
}

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a run summary
    fn generate_report(&self, summary: &RenderSummary) -> Result<String, GenoPhenoError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;

#[cfg(test)]
pub(crate) fn sample_summary() -> RenderSummary {
    RenderSummary {
        mode: "gpn",
        input: PathBuf::from("table.csv"),
        output: PathBuf::from("graph.png"),
        rows: 2,
        nodes: 3,
        edges: 2,
        labels: LabelScope::All,
        labeled_nodes: 3,
        categories: BTreeMap::from([
            (NodeCategory::Superphenotype, 1),
            (NodeCategory::OverlappingGene, 1),
            (NodeCategory::FirstNeighborGene, 1),
        ]),
    }
}
