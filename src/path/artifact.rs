use std::fmt;
use std::sync::Arc;

use kurbo::ParamCurveArclen;

use crate::foundation::error::{StudioError, StudioResult};

/// Side of the square logical coordinate space paths are expressed in.
pub const LOGICAL_EXTENT: f64 = 1000.0;

const ARCLEN_ACCURACY: f64 = 1e-3;

/// Immutable single-stroke vector path produced by the path oracle.
///
/// The normalized `d` text is kept verbatim; it is never repaired. When the text parses as SVG
/// path data its arc length is measured once so the reveal can be driven by real geometry.
#[derive(Clone, PartialEq)]
pub struct PathArtifact {
    d: Arc<str>,
    fingerprint: u64,
    length: Option<f64>,
}

impl PathArtifact {
    /// Wrap normalized path data. Empty data is rejected.
    pub fn new(d: impl Into<String>) -> StudioResult<Self> {
        let d: String = d.into();
        let d = d.trim();
        if d.is_empty() {
            return Err(StudioError::synthesis("path data is empty"));
        }
        let fingerprint = xxhash_rust::xxh3::xxh3_64(d.as_bytes());
        let length = measure_length(d);
        if length.is_none() {
            tracing::debug!("path data did not parse; reveal falls back to dash constant");
        }
        Ok(Self {
            d: Arc::from(d),
            fingerprint,
            length,
        })
    }

    /// Path data suitable for an SVG `d` attribute.
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Content hash of the path data.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Measured arc length in logical units, when the data parsed.
    pub fn length(&self) -> Option<f64> {
        self.length
    }

    /// Number of drawing commands (letters) in the data.
    pub fn command_count(&self) -> usize {
        self.d
            .chars()
            .filter(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
            .count()
    }
}

impl fmt::Debug for PathArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathArtifact")
            .field("fingerprint", &format_args!("{:016x}", self.fingerprint))
            .field("len", &self.d.len())
            .field("length", &self.length)
            .finish()
    }
}

fn measure_length(d: &str) -> Option<f64> {
    let path = kurbo::BezPath::from_svg(d).ok()?;
    let total: f64 = path
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum();
    (total.is_finite() && total > 0.0).then_some(total)
}

#[cfg(test)]
#[path = "../../tests/unit/path/artifact.rs"]
mod tests;
