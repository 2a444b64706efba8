//! SVG rendering backend
//! Collects primitives as SVG elements and wraps them into a document.
//!
//! Text metrics are approximated with a fixed character width since no font
//! is loaded.

use std::fmt::Write;

use crate::renderer::RenderSurface;

const CHAR_WIDTH: f64 = 7.0;
const LINE_HEIGHT: f64 = 14.0;
const MARKER_PADDING: f64 = 2.0;
const MARKER_RADIUS: f64 = 2.5;

/// Surface that emits SVG markup.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Wrap the collected elements in an `<svg>` root of the given size.
    pub fn to_svg_document(&self, width: f64, height: f64) -> String {
        let mut doc = String::new();
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            fmt_num(width),
            fmt_num(height),
            fmt_num(width),
            fmt_num(height)
        );
        let _ = writeln!(
            doc,
            r#"<g fill="none" stroke="black" stroke-width="1" font-family="sans-serif" font-size="12">"#
        );
        for element in &self.elements {
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</g>\n</svg>\n");
        doc
    }
}

fn fmt_num(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Point at `angle` degrees on the ellipse inscribed in a box (y down).
fn ellipse_point(x: f64, y: f64, w: f64, h: f64, angle: f64) -> (f64, f64) {
    let rad = angle.to_radians();
    (
        x + w / 2.0 + (w / 2.0) * rad.cos(),
        y + h / 2.0 + (h / 2.0) * rad.sin(),
    )
}

impl RenderSurface for SvgSurface {
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        ));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height)
        ));
    }

    fn stroke_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"/>"#,
            fmt_num(x + width / 2.0),
            fmt_num(y + height / 2.0),
            fmt_num(width / 2.0),
            fmt_num(height / 2.0)
        ));
    }

    fn stroke_arc(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) {
        let (sx, sy) = ellipse_point(x, y, width, height, start_angle);
        let (ex, ey) = ellipse_point(x, y, width, height, start_angle + sweep_angle);
        let large_arc = u8::from(sweep_angle.abs() > 180.0);
        // Positive sweeps run clockwise on screen, which is SVG's sweep-flag 1.
        let sweep = u8::from(sweep_angle > 0.0);
        self.elements.push(format!(
            r#"<path d="M {} {} A {} {} 0 {} {} {} {}"/>"#,
            fmt_num(sx),
            fmt_num(sy),
            fmt_num(width / 2.0),
            fmt_num(height / 2.0),
            large_arc,
            sweep,
            fmt_num(ex),
            fmt_num(ey)
        ));
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="black" stroke="none">{}</text>"#,
            fmt_num(x + width / 2.0),
            fmt_num(y + height / 2.0),
            escape(text)
        ));
    }

    fn draw_text_with_marker(&mut self, text: &str, x: f64, y: f64) {
        let box_width = text.chars().count() as f64 * CHAR_WIDTH + 2.0 * MARKER_PADDING;
        let box_height = LINE_HEIGHT + 2.0 * MARKER_PADDING;
        self.stroke_rect(x, y, box_width, box_height);
        self.draw_text(text, x, y, box_width, box_height);
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
            fmt_num(x + box_width / 2.0),
            fmt_num(y - MARKER_RADIUS * 2.0),
            fmt_num(MARKER_RADIUS)
        ));
    }

    fn stroke_dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-dasharray="4 4"/>"#,
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2)
        ));
    }
}
