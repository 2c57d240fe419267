//! Render command executor

use console::style;
use miette::{Result, WrapErr};
use tracing::info;

use crate::classifier::NodeClassifier;
use crate::cli::OutputFormat;
use crate::config::RenderOptions;
use crate::constants::output::PREVIEW_ROWS;
use crate::error::GenoPhenoError;
use crate::executors::CommandExecutor;
use crate::graph::{GraphRenderer, NetworkGraphBuilder};
use crate::layout::SpringLayout;
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, RenderSummary, ReportGenerator};
use crate::style::VisualEncoder;
use crate::table::EdgeTable;

pub struct RenderExecutor;

impl RenderExecutor {
    /// Run the whole pipeline and return what it produced
    ///
    /// Every fallible step before the final write runs first, so an error
    /// never leaves an image behind.
    pub fn run(
        config: &RenderOptions,
        progress: &mut ProgressReporter,
    ) -> Result<RenderSummary, GenoPhenoError> {
        progress.start_loading(&config.input);
        let table = EdgeTable::from_path(&config.input)?;
        progress.finish_loading(table.row_count());

        if !config.quiet && config.format == OutputFormat::Human {
            eprintln!("\n{}\n", style("Processing your input table:").bold());
            eprintln!("{}\n", table.preview(PREVIEW_ROWS));
        }

        let mut builder = NetworkGraphBuilder::new(config.mode.edge_columns());
        builder.build_from_table(&table)?;
        let graph = builder.into_graph();
        progress.finish_graph_building(graph.node_count(), graph.edge_count());

        let assignment = NodeClassifier::new(config.mode.scheme()).classify(&graph, &table)?;

        let layout = SpringLayout::new(config.iterations).compute(&graph, Some(&mut *progress));

        let encoding = VisualEncoder::new(config.label_scope).encode(&assignment);

        let image_path = config.image_path();
        progress.start_rendering();
        GraphRenderer::new(config.width, config.height).save_png(
            &graph,
            &layout,
            &encoding,
            &image_path,
        )?;
        progress.finish_rendering(&image_path);

        let summary = RenderSummary {
            mode: config.mode.as_str(),
            input: config.input.clone(),
            output: image_path,
            rows: table.row_count(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            labels: config.label_scope,
            labeled_nodes: encoding.labeled_nodes().len(),
            categories: assignment.counts(),
        };

        info!(
            output = %summary.output.display(),
            nodes = summary.nodes,
            edges = summary.edges,
            "rendered network graph"
        );
        Ok(summary)
    }
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let mut progress = ProgressReporter::new(config.quiet || config.format == OutputFormat::Json);

        let summary = Self::run(&config, &mut progress).wrap_err_with(|| {
            format!("Failed to render network graph from '{}'", config.input.display())
        })?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new(!config.quiet).generate_report(&summary),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&summary),
        }
        .wrap_err("Failed to generate summary report")?;

        println!("{report}");
        Ok(())
    }
}
