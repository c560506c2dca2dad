use crate::animation::reveal::PROGRESS_COMPLETE;
use crate::foundation::core::Canvas;
use crate::path::artifact::{LOGICAL_EXTENT, PathArtifact};
use crate::style::config::StyleConfig;
use crate::style::filters::{FILTER_DEFS, METAL_GRADIENT_DEF};
use crate::style::resolver::{resolve_filter_reference, resolve_paint};

/// Everything needed to draw one frame of the artwork.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    /// Path to draw, if one is bound.
    pub path: Option<&'a PathArtifact>,
    /// Visual settings.
    pub style: &'a StyleConfig,
    /// Revealed percentage in `[0, 100]`.
    pub progress: f64,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Dash length used when the path could not be measured.
    pub fallback_dash_length: f64,
}

impl Scene<'_> {
    /// Build a standalone SVG document for this frame.
    ///
    /// The 0..1000 logical square is scaled uniformly into the canvas and centered
    /// (`xMidYMid meet`); the background covers the whole canvas. Partial reveals use the dash
    /// technique: one dash as long as the path, offset by the unrevealed length.
    pub fn to_svg(&self) -> String {
        let Canvas { width, height } = self.canvas;
        let w = f64::from(width);
        let h = f64::from(height);
        let scale = w.min(h) / LOGICAL_EXTENT;
        let tx = (w - LOGICAL_EXTENT * scale) / 2.0;
        let ty = (h - LOGICAL_EXTENT * scale) / 2.0;

        let mut svg = String::with_capacity(4096);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        svg.push_str("<defs>");
        svg.push_str(FILTER_DEFS);
        svg.push_str(METAL_GRADIENT_DEF);
        svg.push_str("</defs>");
        svg.push_str(&format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{}"/>"#,
            self.style.background.to_hex()
        ));

        let progress = self.progress.clamp(0.0, PROGRESS_COMPLETE);
        if let Some(path) = self.path
            && progress > 0.0
        {
            svg.push_str(&format!(
                r#"<g transform="translate({tx:.4} {ty:.4}) scale({scale:.6})">"#
            ));
            self.write_path(&mut svg, path, progress);
            svg.push_str("</g>");
        }
        svg.push_str("</svg>");
        svg
    }

    fn write_path(&self, svg: &mut String, path: &PathArtifact, progress: f64) {
        let paint = resolve_paint(self.style.filter, self.style.stroke_color);
        svg.push_str(&format!(
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="{:.3}" stroke-linecap="round" stroke-linejoin="round""#,
            escape_xml(path.d()),
            paint.to_svg_value(),
            self.style.stroke_width,
        ));
        if let Some(filter) = resolve_filter_reference(self.style.filter) {
            svg.push_str(&format!(r#" filter="{}""#, filter.to_svg_value()));
        }
        if progress < PROGRESS_COMPLETE {
            let total = path.length().unwrap_or(self.fallback_dash_length);
            let offset = total - total * (progress / PROGRESS_COMPLETE);
            svg.push_str(&format!(
                r#" stroke-dasharray="{total:.3}" stroke-dashoffset="{offset:.3}""#
            ));
        }
        svg.push_str("/>");
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
