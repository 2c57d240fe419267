//! # GenoPheno - Render Network Tables as Graph Images
//!
//! GenoPheno turns a CSV edge table into a PNG network graph. In
//! genotype-phenotype (gpn) mode, superphenotypes are linked to the genes in
//! the `Node_name` column and every node is colored by its category
//! (superphenotype, overlapping gene or first-neighbor interactor). In
//! protein interaction mode the table lists interacting molecule pairs.
//!
//! ## Main Components
//!
//! - **Table**: Loads the CSV edge table and previews it
//! - **Graph**: Builds the undirected network and renders it
//! - **Classifier**: Assigns each node a category
//! - **Layout**: Positions nodes with a force-directed simulation
//! - **Style**: Maps categories and the label scope to colors and labels
//! - **Reports**: Summarizes a run for humans or as JSON
//!
//! ## Usage
//!
//! ```no_run
//! use genopheno::cli::NetworkMode;
//! use genopheno::common::ConfigBuilder;
//! use genopheno::config::RenderOptions;
//! use genopheno::executors::CommandExecutor;
//! use genopheno::executors::render::RenderExecutor;
//! use genopheno::style::LabelScope;
//!
//! # fn main() -> miette::Result<()> {
//! let options = RenderOptions::builder()
//!     .with_mode(NetworkMode::Gpn)
//!     .with_input("gpn_table.csv")
//!     .with_output("gpn_graph")
//!     .with_label_scope(LabelScope::Overlapping)
//!     .build()?;
//!
//! // Writes gpn_graph.png and prints a summary
//! RenderExecutor::execute(options)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Working With the Pieces
//!
//! ```
//! use genopheno::classifier::{ClassificationScheme, NodeCategory, NodeClassifier};
//! use genopheno::graph::{EdgeColumns, NetworkGraphBuilder};
//! use genopheno::table::EdgeTable;
//!
//! # fn main() -> Result<(), genopheno::error::GenoPhenoError> {
//! let table = EdgeTable::from_rows(
//!     ["Superphenotype", "Node_name", "Node_type"],
//!     [
//!         ["Cancer", "TP53", "associated_and_overlapping_genes"],
//!         ["Cancer", "MDM2", "Intact_first_neighbors"],
//!     ],
//! );
//!
//! let mut builder = NetworkGraphBuilder::new(EdgeColumns {
//!     source: "Superphenotype",
//!     target: "Node_name",
//! });
//! builder.build_from_table(&table)?;
//!
//! let assignment = NodeClassifier::new(ClassificationScheme::GenotypePhenotype)
//!     .classify(builder.graph(), &table)?;
//!
//! assert_eq!(assignment.category_of("Cancer"), Some(NodeCategory::Superphenotype));
//! assert_eq!(assignment.category_of("TP53"), Some(NodeCategory::OverlappingGene));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod classifier;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod layout;
pub mod progress;
pub mod reports;
pub mod style;
pub mod table;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::cli::Cli;
    use crate::config::RenderOptions;
    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = RenderOptions::try_from(cli)?;
    RenderExecutor::execute(options)
}
