use tracing::debug;

use super::types::{EdgeColumns, EdgeRecord, NetworkGraph};
use crate::error::GenoPhenoError;
use crate::table::EdgeTable;

/// Builder for constructing network graphs from an edge table
///
/// Every row contributes its source and target values as nodes and the pair
/// as an undirected edge. Empty cells are skipped, so a row with only a
/// source still yields an isolated node.
pub struct NetworkGraphBuilder {
    columns: EdgeColumns,
    graph: NetworkGraph,
}

impl NetworkGraphBuilder {
    /// Create a new builder reading endpoints from `columns`
    pub fn new(columns: EdgeColumns) -> Self {
        Self {
            columns,
            graph: NetworkGraph::new(),
        }
    }

    /// Extract the edge records of a table
    ///
    /// Fails with a schema error if either endpoint column is absent.
    pub fn edge_records(&self, table: &EdgeTable) -> Result<Vec<EdgeRecord>, GenoPhenoError> {
        let sources = table.column(self.columns.source)?;
        let targets = table.column(self.columns.target)?;

        Ok(sources
            .into_iter()
            .zip(targets)
            .map(|(source, target)| EdgeRecord::new(source, target))
            .collect())
    }

    /// Build the graph from every row of `table`
    pub fn build_from_table(&mut self, table: &EdgeTable) -> Result<(), GenoPhenoError> {
        let records = self.edge_records(table)?;
        self.build_from_records(&records);

        debug!(
            source = self.columns.source,
            target = self.columns.target,
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "built network graph"
        );
        Ok(())
    }

    /// Add nodes and edges for each record
    pub fn build_from_records(&mut self, records: &[EdgeRecord]) {
        for record in records {
            let source = (!record.source().is_empty()).then(|| self.graph.add_node(record.source()));
            let target = (!record.target().is_empty()).then(|| self.graph.add_node(record.target()));

            if let (Some(a), Some(b)) = (source, target) {
                self.graph.add_edge(a, b);
            }
        }
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    pub fn into_graph(self) -> NetworkGraph {
        self.graph
    }
}
