use crate::foundation::core::Rgb8;
use crate::foundation::error::{StudioError, StudioResult};
use crate::style::filters::FilterKind;

/// Visual settings of the artwork. Purely cosmetic: changing them never touches paths or
/// animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Ink color.
    pub stroke_color: Rgb8,
    /// Canvas color.
    pub background: Rgb8,
    /// Stroke width in logical units (1000-unit square).
    pub stroke_width: f64,
    /// Finishing filter.
    pub filter: FilterKind,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: Rgb8::new(0x1e, 0x29, 0x3b),
            background: Rgb8::new(0xff, 0xff, 0xff),
            stroke_width: 6.0,
            filter: FilterKind::None,
        }
    }
}

impl StyleConfig {
    /// Reject non-positive or non-finite stroke widths.
    pub fn validate(&self) -> StudioResult<()> {
        validate_stroke_width(self.stroke_width)
    }

    /// Apply the fields set in `patch`.
    pub fn merge(&mut self, patch: &StylePatch) {
        if let Some(c) = patch.stroke_color {
            self.stroke_color = c;
        }
        if let Some(c) = patch.background {
            self.background = c;
        }
        if let Some(w) = patch.stroke_width {
            self.stroke_width = w;
        }
        if let Some(f) = patch.filter {
            self.filter = f;
        }
    }
}

/// Partial [`StyleConfig`] update; `None` fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StylePatch {
    /// New ink color.
    pub stroke_color: Option<Rgb8>,
    /// New canvas color.
    pub background: Option<Rgb8>,
    /// New stroke width.
    pub stroke_width: Option<f64>,
    /// New filter.
    pub filter: Option<FilterKind>,
}

impl StylePatch {
    /// Patch that only sets the ink color.
    pub fn stroke_color(color: Rgb8) -> Self {
        Self {
            stroke_color: Some(color),
            ..Self::default()
        }
    }

    /// Patch that only sets the canvas color.
    pub fn background(color: Rgb8) -> Self {
        Self {
            background: Some(color),
            ..Self::default()
        }
    }

    /// Patch that only sets the stroke width.
    pub fn stroke_width(width: f64) -> Self {
        Self {
            stroke_width: Some(width),
            ..Self::default()
        }
    }

    /// Patch that only sets the filter.
    pub fn filter(filter: FilterKind) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// Check the fields that are set.
    pub fn validate(&self) -> StudioResult<()> {
        match self.stroke_width {
            Some(w) => validate_stroke_width(w),
            None => Ok(()),
        }
    }
}

fn validate_stroke_width(w: f64) -> StudioResult<()> {
    if !w.is_finite() || w <= 0.0 {
        return Err(StudioError::validation(format!(
            "stroke width must be finite and > 0, got {w}"
        )));
    }
    Ok(())
}
