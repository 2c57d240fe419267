use std::fs;
use std::io::Write;
use std::path::Path;

use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::classifier::NodeCategory;
use crate::constants::canvas;
use crate::error::GenoPhenoError;
use crate::graph::NetworkGraph;
use crate::layout::{Layout, Position};
use crate::style::{BoxShape, EncodedNode, LabelBox, LabelStyle, VisualEncoding};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GenoPhenoError::from)
    };
}

/// Pixels per point at the canvas resolution
const PX_PER_PT: f32 = 100.0 / 72.0;
/// Rough glyph advance as a fraction of the font size
const GLYPH_WIDTH: f32 = 0.6;
/// Label box padding as a fraction of the font size
const BOX_PAD: f32 = 0.3;

/// Draws a laid-out, encoded network onto a fixed-size canvas
pub struct GraphRenderer {
    width: u32,
    height: u32,
    margin: f32,
    node_radius: f32,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(canvas::WIDTH, canvas::HEIGHT)
    }
}

impl GraphRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: canvas::MARGIN.min(width.min(height) as f32 / 4.0),
            node_radius: canvas::NODE_RADIUS,
        }
    }

    fn to_canvas(&self, pos: Position) -> (f32, f32) {
        let w = self.width as f32 - 2.0 * self.margin;
        let h = self.height as f32 - 2.0 * self.margin;
        (self.margin + pos.x * w, self.margin + pos.y * h)
    }

    /// Write the graph as an SVG document: edges, then nodes, then labels
    pub fn render_svg(
        &self,
        graph: &NetworkGraph,
        layout: &Layout,
        encoding: &VisualEncoding,
        output: &mut dyn Write,
    ) -> Result<(), GenoPhenoError> {
        writeln_out!(
            output,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        )?;
        writeln_out!(
            output,
            "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            canvas::BACKGROUND
        )?;

        writeln_out!(
            output,
            "<g stroke=\"{}\" stroke-width=\"{}\">",
            canvas::EDGE_COLOR,
            canvas::EDGE_WIDTH
        )?;
        for (a, b) in graph.edge_names() {
            if a == b {
                continue;
            }
            if let (Some(pa), Some(pb)) = (layout.position(a), layout.position(b)) {
                let ((x1, y1), (x2, y2)) = (self.to_canvas(pa), self.to_canvas(pb));
                writeln_out!(
                    output,
                    "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\"/>"
                )?;
            }
        }
        writeln_out!(output, "</g>")?;

        for node in encoding.iter() {
            if let Some(pos) = layout.position(&node.name) {
                let (cx, cy) = self.to_canvas(pos);
                writeln_out!(
                    output,
                    "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{}\" fill=\"{}\"/>",
                    self.node_radius,
                    node.fill
                )?;
            }
        }

        // Labels stack by category so superphenotypes sit underneath genes
        let mut labeled: Vec<(NodeCategory, usize, &EncodedNode, LabelStyle)> = encoding
            .iter()
            .enumerate()
            .filter_map(|(i, node)| node.label.map(|label| (node.category, i, node, label)))
            .collect();
        labeled.sort_by_key(|&(category, i, _, _)| (category, i));

        for (_, _, node, label) in labeled {
            if let Some(pos) = layout.position(&node.name) {
                self.write_label(output, self.to_canvas(pos), &node.name, &label)?;
            }
        }

        writeln_out!(output, "</svg>")?;
        Ok(())
    }

    fn write_label(
        &self,
        output: &mut dyn Write,
        (x, y): (f32, f32),
        text: &str,
        label: &LabelStyle,
    ) -> Result<(), GenoPhenoError> {
        let font_px = label.font_size * PX_PER_PT;

        if let Some(background) = &label.background {
            let half_w = text.chars().count() as f32 * font_px * GLYPH_WIDTH / 2.0;
            let half_h = font_px / 2.0;
            let pad = font_px * BOX_PAD;
            writeln_out!(
                output,
                "{}",
                label_box_svg(background, x, y, half_w + pad, half_h + pad)
            )?;
        }

        writeln_out!(
            output,
            "<text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{font_px:.1}\" fill=\"{}\">{}</text>",
            y + font_px * 0.35,
            label.font_family,
            label.font_color,
            escape_xml(text)
        )?;
        Ok(())
    }

    /// Render the graph to PNG bytes
    pub fn render_png(
        &self,
        graph: &NetworkGraph,
        layout: &Layout,
        encoding: &VisualEncoding,
    ) -> Result<Vec<u8>, GenoPhenoError> {
        let mut svg = Vec::new();
        self.render_svg(graph, layout, encoding, &mut svg)?;
        let svg = String::from_utf8(svg).map_err(|e| GenoPhenoError::RenderError {
            message: e.to_string(),
        })?;

        let mut opt = usvg::Options::default();
        opt.fontdb_mut().load_system_fonts();

        let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| GenoPhenoError::RenderError {
            message: e.to_string(),
        })?;
        let size = tree.size().to_int_size();
        let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
            GenoPhenoError::RenderError {
                message: format!("failed to allocate {}x{} pixmap", size.width(), size.height()),
            }
        })?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        pixmap.encode_png().map_err(|e| GenoPhenoError::RenderError {
            message: e.to_string(),
        })
    }

    /// Render and write a PNG to `path`
    ///
    /// The image is fully encoded before the file is created, so a failed
    /// render never leaves a partial file behind.
    pub fn save_png(
        &self,
        graph: &NetworkGraph,
        layout: &Layout,
        encoding: &VisualEncoding,
        path: &Path,
    ) -> Result<(), GenoPhenoError> {
        let png = self.render_png(graph, layout, encoding)?;
        fs::write(path, &png)?;

        debug!(path = %path.display(), bytes = png.len(), "saved graph image");
        Ok(())
    }
}

fn label_box_svg(background: &LabelBox, x: f32, y: f32, half_w: f32, half_h: f32) -> String {
    let paint = format!(
        "fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
        background.fill, background.border, background.border_width
    );

    match background.shape {
        BoxShape::Square => format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {paint}/>",
            x - half_w,
            y - half_h,
            half_w * 2.0,
            half_h * 2.0
        ),
        BoxShape::Circle => {
            let r = (half_w * half_w + half_h * half_h).sqrt();
            format!("<circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{r:.2}\" {paint}/>")
        }
        BoxShape::Sawtooth => {
            let points: Vec<String> = sawtooth_points(x, y, half_w, half_h)
                .into_iter()
                .map(|(px, py)| format!("{px:.2},{py:.2}"))
                .collect();
            format!("<polygon points=\"{}\" {paint}/>", points.join(" "))
        }
    }
}

/// Outline of a box whose sides are zig-zags pointing outward
fn sawtooth_points(x: f32, y: f32, half_w: f32, half_h: f32) -> Vec<(f32, f32)> {
    let tooth = (half_h * 0.6).max(1.0);
    let corners = [
        (x - half_w, y - half_h),
        (x + half_w, y - half_h),
        (x + half_w, y + half_h),
        (x - half_w, y + half_h),
    ];

    let mut points = Vec::new();
    for i in 0..corners.len() {
        let (x0, y0) = corners[i];
        let (x1, y1) = corners[(i + 1) % corners.len()];
        let (dx, dy) = (x1 - x0, y1 - y0);
        let len = (dx * dx + dy * dy).sqrt();
        let teeth = ((len / (tooth * 2.0)).round() as usize).max(1);
        // Clockwise outline, so the outward normal is (dy, -dx)
        let (nx, ny) = (dy / len * tooth / 2.0, -dx / len * tooth / 2.0);

        for t in 0..teeth {
            let start = t as f32 / teeth as f32;
            let mid = (t as f32 + 0.5) / teeth as f32;
            points.push((x0 + dx * start, y0 + dy * start));
            points.push((x0 + dx * mid + nx, y0 + dy * mid + ny));
        }
    }
    points
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
