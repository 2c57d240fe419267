//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{RenderSummary, ReportGenerator};
use crate::error::GenoPhenoError;
use crate::utils::string::pluralize;

const BANNER: &str = r"
  O---o      ___  ___  _  _   ___   ___  _  _  ___  _  _   ___
   O-o      / __|| __|| \| | / _ \ | _ \| || || __|| \| | / _ \
    O      | (_ || _| | .` || (_) ||  _/| __ || _| | .` || (_) |
   o-O      \___||___||_|\_| \___/ |_|  |_||_||___||_|\_| \___/
  o---O
  O---o    Genomic Network Analysis
";

const RULE: &str = "--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+";

pub struct HumanReportGenerator {
    banner: bool,
}

impl HumanReportGenerator {
    pub fn new(banner: bool) -> Self {
        Self { banner }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, summary: &RenderSummary) -> Result<String, GenoPhenoError> {
        let mut output = String::new();

        if self.banner {
            writeln!(output, "\nThank you for using...")?;
            writeln!(output, "{}", style(BANNER).cyan())?;
        }
        writeln!(output, "{RULE}\n")?;

        writeln!(
            output,
            "  {} Your network graph was saved as \"{}\" from {} total {}.",
            style("✅").green(),
            style(summary.output.display()).bold(),
            style(summary.rows).yellow().bold(),
            pluralize("row", summary.rows)
        )?;
        writeln!(
            output,
            "  {} {} {}, {} {} ({} mode, labels: {})",
            style("🔗").cyan(),
            summary.nodes,
            pluralize("node", summary.nodes),
            summary.edges,
            pluralize("edge", summary.edges),
            summary.mode,
            summary.labels
        )?;

        for (category, count) in &summary.categories {
            writeln!(output, "    {} {}: {}", style("•").dim(), category, count)?;
        }

        if summary.labeled_nodes > 0 {
            writeln!(
                output,
                "  {} {} labeled {}",
                style("🏷").blue(),
                summary.labeled_nodes,
                pluralize("node", summary.labeled_nodes)
            )?;
        }

        writeln!(output, "\n{RULE}")?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::sample_summary;

    #[test]
    fn test_report_mentions_output_and_rows() {
        console::set_colors_enabled(false);
        let report = HumanReportGenerator::new(false)
            .generate_report(&sample_summary())
            .unwrap();

        assert!(report.contains("saved as \"graph.png\" from 2 total rows"));
        assert!(report.contains("3 nodes, 2 edges"));
        assert!(report.contains("overlapping gene: 1"));
        assert!(report.contains("3 labeled nodes"));
        assert!(!report.contains("Thank you"));
    }

    #[test]
    fn test_report_banner() {
        let report = HumanReportGenerator::new(true)
            .generate_report(&sample_summary())
            .unwrap();

        assert!(report.contains("Thank you for using..."));
        assert!(report.contains("Genomic Network Analysis"));
    }

    #[test]
    fn test_report_omits_zero_labels() {
        console::set_colors_enabled(false);
        let mut summary = sample_summary();
        summary.labeled_nodes = 0;

        let report = HumanReportGenerator::new(false)
            .generate_report(&summary)
            .unwrap();

        assert!(!report.contains("labeled"));
    }
}
