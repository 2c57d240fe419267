use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Stage-by-stage status on stderr
///
/// A quiet reporter keeps the same interface but draws nothing.
pub struct ProgressReporter {
    term: Term,
    quiet: bool,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            quiet,
            current_bar: None,
        }
    }

    fn new_bar(&self, bar: ProgressBar) -> ProgressBar {
        if self.quiet {
            bar.set_draw_target(ProgressDrawTarget::hidden());
        }
        bar
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.new_bar(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.new_bar(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            let mut frames = SPINNER_FRAMES.to_vec();
            frames.push("✓");
            pb.set_style(spinner_style.tick_strings(&frames));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn status(&self, line: String) {
        if !self.quiet {
            let _ = self.term.clear_line();
            eprintln!("{line}");
        }
    }

    pub fn start_loading(&mut self, path: &Path) {
        self.status(format!(
            "{} Reading input table {}...",
            style("📄").cyan(),
            style(path.display()).dim()
        ));
    }

    pub fn finish_loading(&mut self, rows: usize) {
        self.status(format!(
            "{} Loaded {} {}",
            style("✓").green(),
            style(rows).yellow().bold(),
            pluralize("row", rows)
        ));
    }

    pub fn finish_graph_building(&mut self, nodes: usize, edges: usize) {
        self.status(format!(
            "{} Built network with {} {} and {} {}",
            style("✓").green(),
            style(nodes).yellow().bold(),
            pluralize("node", nodes),
            style(edges).yellow().bold(),
            pluralize("edge", edges)
        ));
    }

    pub fn start_layout(&mut self, iterations: u64) -> ProgressBar {
        let pb = self.create_progress_bar(iterations, "Computing spring layout");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn start_rendering(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let spinner = self.create_spinner("Rendering graph image...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_rendering(&mut self, output: &Path) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        self.status(format!(
            "{} Graph written to {}",
            style("✓").green(),
            style(output.display()).bold()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_hides_bars() {
        let mut reporter = ProgressReporter::new(true);
        let bar = reporter.start_layout(10);

        assert!(bar.is_hidden());
        bar.inc(10);
        assert_eq!(bar.position(), 10);
    }

    #[test]
    fn test_rendering_replaces_current_bar() {
        let mut reporter = ProgressReporter::new(true);
        let _layout = reporter.start_layout(5);

        reporter.start_rendering();
        assert!(reporter.current_bar.is_some());

        reporter.finish_rendering(Path::new("out.png"));
        assert!(reporter.current_bar.is_none());
    }
}
