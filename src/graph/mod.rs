//! # Graph Construction and Rendering Module
//!
//! This module provides functionality for building network graphs from edge
//! tables and drawing them as images.
//!
//! ## Components
//!
//! ### Graph Building
//! - **NetworkGraphBuilder**: Constructs the undirected network from table
//!   rows
//! - **NetworkGraph**: The graph plus a name-to-index lookup
//! - **EdgeRecord**: A row's source and target values
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Draws edges, colored nodes and styled labels to SVG,
//!   and rasterizes that to PNG
//!
//! ## Example
//!
//! ```
//! use genopheno::graph::{EdgeColumns, GraphRenderer, NetworkGraphBuilder};
//! use genopheno::layout::SpringLayout;
//! use genopheno::table::EdgeTable;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = EdgeTable::from_rows(["moleculeA", "moleculeB"], [["X", "Y"]]);
//!
//! let mut builder = NetworkGraphBuilder::new(EdgeColumns {
//!     source: "moleculeA",
//!     target: "moleculeB",
//! });
//! builder.build_from_table(&table)?;
//!
//! let layout = SpringLayout::default().compute(builder.graph(), None);
//!
//! let renderer = GraphRenderer::new(400, 400);
//! let mut output = Vec::new();
//! renderer.render_svg(builder.graph(), &layout, &Default::default(), &mut output)?;
//!
//! let svg = String::from_utf8(output)?;
//! assert!(svg.contains("<line"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

// Re-export main types and builders
pub use builder::NetworkGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{EdgeColumns, EdgeRecord, NetworkGraph, NetworkNode};
