//! Configuration constants for genopheno
//!
//! Column names, canvas geometry, and layout defaults used throughout the
//! pipeline.

use std::time::Duration;

/// Column names expected in the input tables
pub mod columns {
    /// Source column of a genotype-phenotype table
    pub const SUPERPHENOTYPE: &str = "Superphenotype";
    /// Target column of a genotype-phenotype table
    pub const NODE_NAME: &str = "Node_name";
    /// Node-type column of a genotype-phenotype table
    pub const NODE_TYPE: &str = "Node_type";
    /// Source column of a protein interaction table
    pub const MOLECULE_A: &str = "moleculeA";
    /// Target column of a protein interaction table
    pub const MOLECULE_B: &str = "moleculeB";
    /// Index column left behind by pandas exports
    pub const PANDAS_INDEX: &str = "Unnamed: 0";
}

/// Node-type values recognized in the `Node_type` column
pub mod node_types {
    pub const OVERLAPPING: &str = "associated_and_overlapping_genes";
    pub const FIRST_NEIGHBORS: &str = "Intact_first_neighbors";
}

/// Canvas geometry
pub mod canvas {
    /// 50in x 50in at 100 dpi
    pub const WIDTH: u32 = 5000;
    pub const HEIGHT: u32 = 5000;
    pub const MARGIN: f32 = 150.0;
    pub const BACKGROUND: &str = "white";
    pub const NODE_RADIUS: f32 = 10.0;
    pub const EDGE_COLOR: &str = "black";
    pub const EDGE_WIDTH: f32 = 1.0;
    pub const IMAGE_EXTENSION: &str = "png";
}

/// Spring layout defaults
pub mod layout {
    pub const DEFAULT_ITERATIONS: usize = 300;
    pub const TIME_STEP: f32 = 0.02;
    pub const INITIAL_RADIUS: f32 = 500.0;
    pub const FORCE_CHARGE: f32 = 12000.0;
    pub const FORCE_SPRING: f32 = 0.3;
    pub const FORCE_MAX: f32 = 280.0;
    pub const NODE_SPEED: f32 = 7000.0;
    pub const DAMPING_FACTOR: f32 = 0.95;
    pub const NODE_MASS: f32 = 10.0;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames shown while a pipeline stage runs
    pub const SPINNER_FRAMES: &[&str] = &["🧬 ", "🧬·", "🧬•", "🧬●", "🧬•", "🧬·"];
}

/// Output formatting configuration
pub mod output {
    /// Default summary format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default label scope when not specified
    pub const DEFAULT_LABELS: &str = "none";

    /// Rows shown from each end of the table preview
    pub const PREVIEW_ROWS: usize = 5;
}
