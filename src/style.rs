//! Visual encoding
//!
//! Maps node categories to draw colors and decides, per category, whether
//! members get a text label and how that label looks. The mapping is a pure
//! function of `(category, scope)`; nothing here holds mutable state.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::classifier::{CategoryAssignment, NodeCategory};

mod colors {
    pub const SUPERPHENOTYPE: &str = "green";
    pub const OVERLAPPING_GENE: &str = "yellow";
    pub const FIRST_NEIGHBOR_GENE: &str = "red";
    pub const UNCATEGORIZED: &str = "green";
    pub const MOLECULE_LABELED: &str = "lightblue";
    pub const MOLECULE_UNLABELED: &str = "green";

    pub const SUPERPHENOTYPE_BOX: &str = "blue";
    pub const LABEL_BORDER: &str = "black";
}

const LABEL_FONT_FAMILY: &str = "Copperplate, serif";
const MOLECULE_FONT_FAMILY: &str = "sans-serif";
const LABEL_FONT_SIZE: f32 = 14.0;
const MOLECULE_FONT_SIZE: f32 = 12.0;
const LABEL_BORDER_WIDTH: f32 = 2.0;

/// Which node categories receive on-image labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelScope {
    #[default]
    None,
    /// Superphenotype nodes
    Subtype,
    /// Overlapping genes
    Overlapping,
    /// First-neighbor genes
    Interactors,
    /// Every labeled category of the active mode
    All,
    /// Molecules of a protein interaction network
    ProteinInteractions,
}

impl LabelScope {
    /// Parse a recognized scope name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "none" => Some(LabelScope::None),
            "subtype" => Some(LabelScope::Subtype),
            "overlapping" => Some(LabelScope::Overlapping),
            "interactors" => Some(LabelScope::Interactors),
            "all" => Some(LabelScope::All),
            "protein_interactions" => Some(LabelScope::ProteinInteractions),
            _ => None,
        }
    }

    /// Parse a scope, treating unknown names as [`LabelScope::None`]
    pub fn from_name_or_none(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            debug!(scope = name, "unrecognized label scope, drawing no labels");
            LabelScope::None
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelScope::None => "none",
            LabelScope::Subtype => "subtype",
            LabelScope::Overlapping => "overlapping",
            LabelScope::Interactors => "interactors",
            LabelScope::All => "all",
            LabelScope::ProteinInteractions => "protein_interactions",
        }
    }

    /// Whether members of `category` are labeled under this scope
    pub fn includes(&self, category: NodeCategory) -> bool {
        use NodeCategory::*;

        match self {
            LabelScope::None => false,
            LabelScope::Subtype => category == Superphenotype,
            LabelScope::Overlapping => category == OverlappingGene,
            LabelScope::Interactors => category == FirstNeighborGene,
            LabelScope::All => matches!(
                category,
                Superphenotype | OverlappingGene | FirstNeighborGene | Molecule
            ),
            LabelScope::ProteinInteractions => category == Molecule,
        }
    }
}

impl fmt::Display for LabelScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline drawn behind a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxShape {
    Square,
    Circle,
    Sawtooth,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub shape: BoxShape,
    pub fill: &'static str,
    pub border: &'static str,
    pub border_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_family: &'static str,
    /// Size in points
    pub font_size: f32,
    pub font_color: &'static str,
    pub background: Option<LabelBox>,
}

/// How every member of one category is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryStyle {
    pub fill: &'static str,
    /// `None` when members are not labeled
    pub label: Option<LabelStyle>,
}

fn boxed_label(font_color: &'static str, shape: BoxShape, fill: &'static str) -> LabelStyle {
    LabelStyle {
        font_family: LABEL_FONT_FAMILY,
        font_size: LABEL_FONT_SIZE,
        font_color,
        background: Some(LabelBox {
            shape,
            fill,
            border: colors::LABEL_BORDER,
            border_width: LABEL_BORDER_WIDTH,
        }),
    }
}

/// The style of `category` under `scope`
pub fn render_spec(category: NodeCategory, scope: LabelScope) -> CategoryStyle {
    let labeled = scope.includes(category);

    let (fill, label) = match category {
        NodeCategory::Superphenotype => (
            colors::SUPERPHENOTYPE,
            boxed_label("white", BoxShape::Square, colors::SUPERPHENOTYPE_BOX),
        ),
        NodeCategory::OverlappingGene => (
            colors::OVERLAPPING_GENE,
            boxed_label("black", BoxShape::Circle, colors::OVERLAPPING_GENE),
        ),
        NodeCategory::FirstNeighborGene => (
            colors::FIRST_NEIGHBOR_GENE,
            boxed_label("black", BoxShape::Sawtooth, colors::FIRST_NEIGHBOR_GENE),
        ),
        NodeCategory::Uncategorized => {
            return CategoryStyle {
                fill: colors::UNCATEGORIZED,
                label: None,
            };
        }
        NodeCategory::Molecule => {
            return if labeled {
                CategoryStyle {
                    fill: colors::MOLECULE_LABELED,
                    label: Some(LabelStyle {
                        font_family: MOLECULE_FONT_FAMILY,
                        font_size: MOLECULE_FONT_SIZE,
                        font_color: "black",
                        background: None,
                    }),
                }
            } else {
                CategoryStyle {
                    fill: colors::MOLECULE_UNLABELED,
                    label: None,
                }
            };
        }
    };

    CategoryStyle {
        fill,
        label: labeled.then_some(label),
    }
}

/// One node ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedNode {
    pub name: String,
    pub category: NodeCategory,
    pub fill: &'static str,
    pub label: Option<LabelStyle>,
}

/// Per-node draw instructions, in graph node order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisualEncoding {
    nodes: Vec<EncodedNode>,
}

impl VisualEncoding {
    pub fn iter(&self) -> impl Iterator<Item = &EncodedNode> {
        self.nodes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&EncodedNode> {
        self.nodes.iter().find(|node| node.name == name)
    }

    /// Names of nodes that carry a label
    pub fn labeled_nodes(&self) -> BTreeSet<&str> {
        self.nodes
            .iter()
            .filter(|node| node.label.is_some())
            .map(|node| node.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

pub struct VisualEncoder {
    scope: LabelScope,
}

impl VisualEncoder {
    pub fn new(scope: LabelScope) -> Self {
        Self { scope }
    }

    pub fn encode(&self, assignment: &CategoryAssignment) -> VisualEncoding {
        let nodes = assignment
            .iter()
            .map(|(name, category)| {
                let style = render_spec(category, self.scope);
                EncodedNode {
                    name: name.to_string(),
                    category,
                    fill: style.fill,
                    label: style.label,
                }
            })
            .collect();

        VisualEncoding { nodes }
    }
}
