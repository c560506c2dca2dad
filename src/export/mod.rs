use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::animation::reveal::PROGRESS_COMPLETE;
use crate::foundation::core::{Canvas, Complexity};
use crate::foundation::error::{StudioError, StudioResult};
use crate::path::artifact::PathArtifact;
use crate::render::raster::rasterize_svg;
use crate::render::svg::Scene;
use crate::style::config::StyleConfig;
use crate::style::filters::FilterKind;

/// Export settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Prefix of generated file names.
    pub file_stem: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 3200,
                height: 2400,
            },
            file_stem: "LineFlow".to_owned(),
        }
    }
}

impl ExportConfig {
    /// Check the canvas and file stem.
    pub fn validate(&self) -> StudioResult<()> {
        self.canvas.validate()?;
        if self.file_stem.is_empty()
            || self
                .file_stem
                .contains(|c: char| matches!(c, '/' | '\\') || c.is_control())
        {
            return Err(StudioError::validation(format!(
                "invalid export file stem \"{}\"",
                self.file_stem
            )));
        }
        Ok(())
    }
}

/// Flattened PNG of a finished artwork.
#[derive(Clone, Debug)]
pub struct ExportedImage {
    /// Suggested file name, encoding complexity and filter.
    pub file_name: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write the PNG into `dir` under [`ExportedImage::file_name`]; returns the full path.
    pub fn save_in(&self, dir: impl AsRef<Path>) -> StudioResult<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.png)
            .with_context(|| format!("write export '{}'", path.display()))?;
        Ok(path)
    }
}

/// Renders the complete path at a fixed resolution, independent of live animation progress.
#[derive(Clone, Debug, Default)]
pub struct Exporter {
    cfg: ExportConfig,
}

impl Exporter {
    /// Create an exporter.
    pub fn new(cfg: ExportConfig) -> StudioResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Export settings.
    pub fn config(&self) -> &ExportConfig {
        &self.cfg
    }

    /// File name for an artwork at `complexity` with `filter`.
    pub fn file_name(&self, complexity: Complexity, filter: FilterKind) -> String {
        format!("{}_c{}_{}.png", self.cfg.file_stem, complexity.get(), filter.name())
    }

    /// SVG document of the export (background, complete path, resolved paint and filter).
    pub fn svg(&self, path: &PathArtifact, style: &StyleConfig) -> String {
        Scene {
            path: Some(path),
            style,
            progress: PROGRESS_COMPLETE,
            canvas: self.cfg.canvas,
            // Unused at full reveal.
            fallback_dash_length: crate::config::DEFAULT_FALLBACK_DASH_LENGTH,
        }
        .to_svg()
    }

    /// Render and PNG-encode the artwork.
    #[tracing::instrument(skip(self, path, style), fields(filter = %style.filter))]
    pub fn export(
        &self,
        path: &PathArtifact,
        style: &StyleConfig,
        complexity: Complexity,
    ) -> StudioResult<ExportedImage> {
        style.validate()?;
        let svg = self.svg(path, style);
        let frame = rasterize_svg(&svg, self.cfg.canvas)?;
        let img = frame.into_rgba_image()?;

        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| StudioError::export(format!("PNG encoding failed: {e}")))?;

        let out = ExportedImage {
            file_name: self.file_name(complexity, style.filter),
            width: self.cfg.canvas.width,
            height: self.cfg.canvas.height,
            png,
        };
        tracing::info!(file = %out.file_name, bytes = out.png.len(), "artwork exported");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
