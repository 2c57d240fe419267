use std::path::PathBuf;

use clap::Parser;

use crate::classifier::ClassificationScheme;
use crate::constants::{columns, layout, output};
use crate::graph::EdgeColumns;

#[derive(Parser, Debug)]
#[command(
    name = "genopheno",
    about = "🧬 Apply graph theory to your network table!",
    long_about = "genopheno renders a network table as a PNG graph. In gpn mode the table links \
                  superphenotypes to overlapping genes and their first-neighbor interactors, and \
                  nodes are colored and optionally labeled by category. In protein_interactions \
                  mode the table lists interacting molecule pairs.",
    version
)]
pub struct Cli {
    /// Network type of the input table
    #[arg(short, long, value_enum, env = "GENOPHENO_MODE")]
    pub mode: NetworkMode,

    /// Input table (CSV)
    #[arg(short, long, value_name = "INPUT_FILENAME.csv", env = "GENOPHENO_INPUT")]
    pub input: PathBuf,

    /// Output image; the extension is always replaced with .png
    #[arg(short, long, value_name = "OUTPUT_FILENAME.png", env = "GENOPHENO_OUTPUT")]
    pub output: PathBuf,

    /// Labels: "none", "subtype", "overlapping", "interactors", "all", or
    /// "protein_interactions"
    #[arg(
        short,
        long,
        default_value = output::DEFAULT_LABELS,
        env = "GENOPHENO_LABELS"
    )]
    pub labels: String,

    /// Spring layout iterations
    #[arg(long, default_value_t = layout::DEFAULT_ITERATIONS, env = "GENOPHENO_ITERATIONS")]
    pub iterations: usize,

    /// Summary format
    #[arg(
        short,
        long,
        value_enum,
        default_value = output::DEFAULT_FORMAT,
        env = "GENOPHENO_FORMAT"
    )]
    pub format: OutputFormat,

    /// Suppress the table preview, status lines and banner
    #[arg(short, long, env = "GENOPHENO_QUIET")]
    pub quiet: bool,

    /// Show debug logging on stderr
    #[arg(short, long, env = "GENOPHENO_VERBOSE")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum NetworkMode {
    /// Genotype-phenotype network
    Gpn,
    /// Protein interaction network
    #[value(name = "protein_interactions")]
    ProteinInteractions,
}

impl NetworkMode {
    /// The source and target columns for this mode
    pub fn edge_columns(&self) -> EdgeColumns {
        match self {
            NetworkMode::Gpn => EdgeColumns {
                source: columns::SUPERPHENOTYPE,
                target: columns::NODE_NAME,
            },
            NetworkMode::ProteinInteractions => EdgeColumns {
                source: columns::MOLECULE_A,
                target: columns::MOLECULE_B,
            },
        }
    }

    pub fn scheme(&self) -> ClassificationScheme {
        match self {
            NetworkMode::Gpn => ClassificationScheme::GenotypePhenotype,
            NetworkMode::ProteinInteractions => ClassificationScheme::ProteinInteraction,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkMode::Gpn => "gpn",
            NetworkMode::ProteinInteractions => "protein_interactions",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_required_flags() {
        let cli = Cli::try_parse_from([
            "genopheno",
            "--mode",
            "gpn",
            "--input",
            "table.csv",
            "--output",
            "graph.png",
        ])
        .unwrap();

        assert_eq!(cli.mode, NetworkMode::Gpn);
        assert_eq!(cli.input, PathBuf::from("table.csv"));
        assert_eq!(cli.labels, "none");
        assert_eq!(cli.iterations, layout::DEFAULT_ITERATIONS);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_protein_mode_and_labels() {
        let cli = Cli::try_parse_from([
            "genopheno",
            "-m",
            "protein_interactions",
            "-i",
            "ppi.csv",
            "-o",
            "ppi",
            "-l",
            "all",
        ])
        .unwrap();

        assert_eq!(cli.mode, NetworkMode::ProteinInteractions);
        assert_eq!(cli.labels, "all");
    }

    #[test]
    fn test_unknown_labels_still_parse() {
        let cli = Cli::try_parse_from([
            "genopheno", "-m", "gpn", "-i", "t.csv", "-o", "g", "-l", "bogus",
        ])
        .unwrap();

        assert_eq!(cli.labels, "bogus");
    }

    #[test]
    fn test_mode_is_required() {
        assert!(Cli::try_parse_from(["genopheno", "-i", "t.csv", "-o", "g"]).is_err());
    }

    #[test]
    fn test_mode_columns() {
        assert_eq!(NetworkMode::Gpn.edge_columns().source, "Superphenotype");
        assert_eq!(NetworkMode::ProteinInteractions.edge_columns().target, "moleculeB");
    }
}
