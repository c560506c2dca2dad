use crate::foundation::core::Canvas;
use crate::foundation::error::{StudioError, StudioResult};

// Avoid pathological allocations from misconfigured export sizes.
const MAX_DIM: u32 = 16_384;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ];
        Some(if self.premultiplied {
            demultiply(px)
        } else {
            px
        })
    }

    /// Convert into a straight-alpha image buffer.
    pub fn into_rgba_image(self) -> StudioResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        let mut data = self.data;
        if self.premultiplied {
            for px in data.chunks_exact_mut(4) {
                let out = demultiply([px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&out);
            }
        }
        image::RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| StudioError::export("frame byte len mismatch"))
    }
}

/// Parse an SVG document and rasterize it into a `canvas`-sized premultiplied frame.
#[tracing::instrument(skip(svg), fields(len = svg.len()))]
pub fn rasterize_svg(svg: &str, canvas: Canvas) -> StudioResult<FrameRGBA> {
    canvas.validate()?;
    if canvas.width > MAX_DIM || canvas.height > MAX_DIM {
        return Err(StudioError::export(format!(
            "raster size too large: {}x{} (max {MAX_DIM}x{MAX_DIM})",
            canvas.width, canvas.height
        )));
    }

    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| StudioError::export(format!("svg parsing failed: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| StudioError::export("failed to allocate pixmap"))?;

    let sx = (canvas.width as f32) / tree.size().width();
    let sy = (canvas.height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

fn demultiply(px: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = px;
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let a16 = u16::from(a);
    let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8 };
    [un(r), un(g), un(b), a]
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
