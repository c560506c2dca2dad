use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{StudioError, StudioResult};

/// Finishing filter applied to the stroke.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Plain stroke.
    #[default]
    None,
    /// Soft blur halo merged under the stroke.
    Glow,
    /// Faded blur behind the stroke.
    Glass,
    /// Specular lighting over a grey gradient paint.
    Metal,
    /// Two stacked blur halos.
    Neon,
    /// Fractal-noise displacement.
    Sketch,
    /// Offset drop shadow.
    Shadow,
    /// 3x3 emboss convolution.
    Emboss,
}

impl FilterKind {
    /// Every filter in picker order.
    pub const ALL: [FilterKind; 8] = [
        FilterKind::None,
        FilterKind::Glow,
        FilterKind::Glass,
        FilterKind::Metal,
        FilterKind::Neon,
        FilterKind::Sketch,
        FilterKind::Shadow,
        FilterKind::Emboss,
    ];

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Glow => "glow",
            Self::Glass => "glass",
            Self::Metal => "metal",
            Self::Neon => "neon",
            Self::Sketch => "sketch",
            Self::Shadow => "shadow",
            Self::Emboss => "emboss",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = StudioError;

    fn from_str(s: &str) -> StudioResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| StudioError::validation(format!("unknown filter \"{s}\"")))
    }
}

/// Element id of the gradient paint used by the metal finish.
pub const METAL_GRADIENT_ID: &str = "metal-gradient";

/// SVG `<filter>` definitions, one per finish, keyed by `<name>-effect`.
pub(crate) const FILTER_DEFS: &str = concat!(
    r#"<filter id="glow-effect" x="-50%" y="-50%" width="200%" height="200%">"#,
    r#"<feGaussianBlur in="SourceGraphic" stdDeviation="4" result="blur"/>"#,
    r#"<feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
    r#"</filter>"#,
    r#"<filter id="metal-effect">"#,
    r##"<feSpecularLighting surfaceScale="5" specularConstant="0.75" specularExponent="20" lighting-color="#bbbbbb" result="specOut">"##,
    r#"<fePointLight x="-5000" y="-10000" z="20000"/>"#,
    r#"</feSpecularLighting>"#,
    r#"<feComposite in="SourceGraphic" in2="specOut" operator="arithmetic" k1="0" k2="1" k3="1" k4="0"/>"#,
    r#"</filter>"#,
    r#"<filter id="glass-effect">"#,
    r#"<feGaussianBlur in="SourceGraphic" stdDeviation="1.5" result="blur"/>"#,
    r#"<feComponentTransfer in="blur" result="faded"><feFuncA type="linear" slope="0.7"/></feComponentTransfer>"#,
    r#"<feMerge><feMergeNode in="faded"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
    r#"</filter>"#,
    r#"<filter id="neon-effect" x="-50%" y="-50%" width="200%" height="200%">"#,
    r#"<feGaussianBlur in="SourceGraphic" stdDeviation="2" result="blur1"/>"#,
    r#"<feGaussianBlur in="SourceGraphic" stdDeviation="8" result="blur2"/>"#,
    r#"<feMerge><feMergeNode in="blur2"/><feMergeNode in="blur1"/><feMergeNode in="SourceGraphic"/></feMerge>"#,
    r#"</filter>"#,
    r#"<filter id="sketch-effect">"#,
    r#"<feTurbulence type="fractalNoise" baseFrequency="0.5" numOctaves="3" result="noise"/>"#,
    r#"<feDisplacementMap in="SourceGraphic" in2="noise" scale="3" xChannelSelector="R" yChannelSelector="G"/>"#,
    r#"</filter>"#,
    r#"<filter id="shadow-effect">"#,
    r#"<feDropShadow dx="8" dy="8" stdDeviation="5" flood-opacity="0.5"/>"#,
    r#"</filter>"#,
    r#"<filter id="emboss-effect">"#,
    r#"<feConvolveMatrix order="3" kernelMatrix="-1 -1 0 -1 7 1 0 1 1"/>"#,
    r#"</filter>"#,
);

/// Linear gradient painted by the metal finish.
pub(crate) const METAL_GRADIENT_DEF: &str = concat!(
    r#"<linearGradient id="metal-gradient" x1="0%" y1="0%" x2="100%" y2="100%">"#,
    r##"<stop offset="0%" stop-color="#777777" stop-opacity="1"/>"##,
    r##"<stop offset="50%" stop-color="#eeeeee" stop-opacity="1"/>"##,
    r##"<stop offset="100%" stop-color="#777777" stop-opacity="1"/>"##,
    r#"</linearGradient>"#,
);

#[cfg(test)]
#[path = "../../tests/unit/style/filters.rs"]
mod tests;
