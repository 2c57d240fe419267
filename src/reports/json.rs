//! JSON format report generation

use super::{RenderSummary, ReportGenerator};
use crate::error::GenoPhenoError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, summary: &RenderSummary) -> Result<String, GenoPhenoError> {
        Ok(serde_json::to_string_pretty(summary)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::reports::sample_summary;

    #[test]
    fn test_json_report_fields() {
        let report = JsonReportGenerator::new()
            .generate_report(&sample_summary())
            .unwrap();
        let value: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["mode"], "gpn");
        assert_eq!(value["output"], "graph.png");
        assert_eq!(value["rows"], 2);
        assert_eq!(value["nodes"], 3);
        assert_eq!(value["labels"], "all");
        assert_eq!(
            value["categories"],
            json!({
                "superphenotype": 1,
                "overlapping_gene": 1,
                "first_neighbor_gene": 1,
            })
        );
    }
}
