use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::reveal::RevealConfig;
use crate::export::ExportConfig;
use crate::foundation::core::Complexity;
use crate::foundation::error::{StudioError, StudioResult};
use crate::oracle::gemini::OracleConfig;
use crate::style::config::StyleConfig;

/// Dash length used to reveal paths whose geometry could not be measured.
pub const DEFAULT_FALLBACK_DASH_LENGTH: f64 = 35_000.0;

/// Studio configuration. Every field has a default, so a partial JSON document is enough.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    /// Complexity selected for a fresh session.
    pub default_complexity: Complexity,
    /// Reveal speed.
    pub reveal: RevealConfig,
    /// Initial visual settings.
    pub style: StyleConfig,
    /// Export resolution and naming.
    pub export: ExportConfig,
    /// Dash length for unmeasurable paths.
    pub fallback_dash_length: f64,
    /// Hosted oracle settings.
    pub oracle: OracleConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_complexity: Complexity::DEFAULT,
            reveal: RevealConfig::default(),
            style: StyleConfig::default(),
            export: ExportConfig::default(),
            fallback_dash_length: DEFAULT_FALLBACK_DASH_LENGTH,
            oracle: OracleConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StudioResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| StudioError::validation(format!("parse studio config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StudioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StudioError::validation(format!("open studio config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every section.
    pub fn validate(&self) -> StudioResult<()> {
        self.reveal.validate()?;
        self.style.validate()?;
        self.export.validate()?;
        self.oracle.validate()?;
        if !self.fallback_dash_length.is_finite() || self.fallback_dash_length <= 0.0 {
            return Err(StudioError::validation(
                "fallback_dash_length must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
