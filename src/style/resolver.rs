use std::fmt;

use crate::foundation::core::Rgb8;
use crate::style::filters::{FilterKind, METAL_GRADIENT_ID};

/// Paint used for the stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintRef {
    /// Flat ink color.
    Solid(Rgb8),
    /// Predefined gradient, by element id.
    Gradient(&'static str),
}

impl PaintRef {
    /// Value for an SVG `stroke` attribute.
    pub fn to_svg_value(self) -> String {
        match self {
            Self::Solid(c) => c.to_hex(),
            Self::Gradient(id) => format!("url(#{id})"),
        }
    }
}

/// Reference to a predefined filter recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterRef {
    kind: FilterKind,
}

impl FilterRef {
    /// Finish this reference points at.
    pub fn kind(self) -> FilterKind {
        self.kind
    }

    /// Element id of the recipe.
    pub fn id(self) -> String {
        format!("{}-effect", self.kind.name())
    }

    /// Value for an SVG `filter` attribute.
    pub fn to_svg_value(self) -> String {
        format!("url(#{})", self.id())
    }
}

impl fmt::Display for FilterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg_value())
    }
}

/// Stroke paint for a filter selection: the metal gradient for `metal`, else the ink color.
pub fn resolve_paint(filter: FilterKind, stroke_color: Rgb8) -> PaintRef {
    match filter {
        FilterKind::Metal => PaintRef::Gradient(METAL_GRADIENT_ID),
        _ => PaintRef::Solid(stroke_color),
    }
}

/// Filter recipe for a selection, `None` for the plain stroke.
pub fn resolve_filter_reference(filter: FilterKind) -> Option<FilterRef> {
    match filter {
        FilterKind::None => None,
        kind => Some(FilterRef { kind }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/resolver.rs"]
mod tests;
