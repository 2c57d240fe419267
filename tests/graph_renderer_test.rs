//! Tests for the SVG drawing of encoded networks

use genopheno::classifier::{ClassificationScheme, NodeClassifier};
use genopheno::graph::{EdgeColumns, GraphRenderer, NetworkGraph, NetworkGraphBuilder};
use genopheno::layout::SpringLayout;
use genopheno::style::{LabelScope, VisualEncoder};
use genopheno::table::EdgeTable;
use predicates::prelude::*;

const GPN_COLUMNS: EdgeColumns = EdgeColumns {
    source: "Superphenotype",
    target: "Node_name",
};

const PROTEIN_COLUMNS: EdgeColumns = EdgeColumns {
    source: "moleculeA",
    target: "moleculeB",
};

fn gpn_table() -> EdgeTable {
    EdgeTable::from_rows(
        ["Superphenotype", "Node_name", "Node_type"],
        [
            ["Cancer", "TP53", "associated_and_overlapping_genes"],
            ["Cancer", "MDM2", "Intact_first_neighbors"],
            ["Diabetes", "TP53", "associated_and_overlapping_genes"],
        ],
    )
}

fn build(table: &EdgeTable, columns: EdgeColumns) -> NetworkGraph {
    let mut builder = NetworkGraphBuilder::new(columns);
    builder.build_from_table(table).unwrap();
    builder.into_graph()
}

fn render(
    table: &EdgeTable,
    columns: EdgeColumns,
    scheme: ClassificationScheme,
    scope: LabelScope,
) -> String {
    let graph = build(table, columns);
    let assignment = NodeClassifier::new(scheme).classify(&graph, table).unwrap();
    let layout = SpringLayout::new(30).compute(&graph, None);
    let encoding = VisualEncoder::new(scope).encode(&assignment);

    let mut output = Vec::new();
    GraphRenderer::new(500, 500)
        .render_svg(&graph, &layout, &encoding, &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_gpn_node_colors() {
    let svg = render(
        &gpn_table(),
        GPN_COLUMNS,
        ClassificationScheme::GenotypePhenotype,
        LabelScope::None,
    );

    assert_eq!(svg.matches("<line").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 4);
    assert!(predicate::str::contains("fill=\"yellow\"").eval(&svg));
    assert!(predicate::str::contains("fill=\"red\"").eval(&svg));
    assert!(predicate::str::contains("fill=\"green\"").eval(&svg));
    assert!(predicate::str::contains("<text").not().eval(&svg));
}

#[test]
fn test_overlapping_scope_labels_only_overlapping_genes() {
    let svg = render(
        &gpn_table(),
        GPN_COLUMNS,
        ClassificationScheme::GenotypePhenotype,
        LabelScope::Overlapping,
    );

    assert!(predicate::str::contains(">TP53</text>").eval(&svg));
    assert!(predicate::str::contains(">MDM2</text>").not().eval(&svg));
    assert!(predicate::str::contains(">Cancer</text>").not().eval(&svg));
    assert!(predicate::str::contains("Copperplate").eval(&svg));
}

#[test]
fn test_all_scope_draws_every_box_shape() {
    let svg = render(
        &gpn_table(),
        GPN_COLUMNS,
        ClassificationScheme::GenotypePhenotype,
        LabelScope::All,
    );

    assert_eq!(svg.matches("</text>").count(), 4);
    // Superphenotype boxes
    assert!(predicate::str::contains("<rect x=").eval(&svg));
    assert!(predicate::str::contains("fill=\"blue\"").eval(&svg));
    // First-neighbor box
    assert!(predicate::str::contains("<polygon").eval(&svg));
    // Superphenotype labels sit underneath gene labels
    let cancer = svg.find(">Cancer</text>").unwrap();
    let tp53 = svg.find(">TP53</text>").unwrap();
    assert!(cancer < tp53);
}

#[test]
fn test_protein_labels_are_plain() {
    let table = EdgeTable::from_rows(["moleculeA", "moleculeB"], [["X", "Y"], ["Y", "Z"]]);

    let svg = render(
        &table,
        PROTEIN_COLUMNS,
        ClassificationScheme::ProteinInteraction,
        LabelScope::ProteinInteractions,
    );

    assert_eq!(svg.matches("fill=\"lightblue\"").count(), 3);
    assert_eq!(svg.matches("</text>").count(), 3);
    assert!(predicate::str::contains("<polygon").not().eval(&svg));
    assert!(predicate::str::contains("<rect x=").not().eval(&svg));
}

#[test]
fn test_self_loop_is_not_drawn() {
    let table = EdgeTable::from_rows(["moleculeA", "moleculeB"], [["A", "A"], ["A", "B"]]);

    let svg = render(
        &table,
        PROTEIN_COLUMNS,
        ClassificationScheme::ProteinInteraction,
        LabelScope::None,
    );

    assert_eq!(svg.matches("<line").count(), 1);
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn test_label_text_is_escaped() {
    let table = EdgeTable::from_rows(["moleculeA", "moleculeB"], [["A&B", "<C>"]]);

    let svg = render(
        &table,
        PROTEIN_COLUMNS,
        ClassificationScheme::ProteinInteraction,
        LabelScope::All,
    );

    assert!(predicate::str::contains(">A&amp;B</text>").eval(&svg));
    assert!(predicate::str::contains(">&lt;C&gt;</text>").eval(&svg));
}
