//! Boundary to the external path-generation service.
//!
//! [`PathOracle`] is the raw service (image + complexity in, free-form text out).
//! [`PathOracleAdapter`] turns that text into a [`PathArtifact`] and is what the session talks to,
//! through the [`PathSynthesizer`] seam.

pub(crate) mod gemini;

use crate::foundation::core::Complexity;
use crate::foundation::error::{StudioError, StudioResult};
use crate::path::artifact::PathArtifact;
use crate::source::SourceImage;

/// Raw path-generation service.
pub trait PathOracle {
    /// Ask for a single continuous path tracing the subject of `image`.
    ///
    /// Network or service errors are reported as [`StudioError::Transport`].
    fn generate(&self, image: &SourceImage, complexity: Complexity) -> StudioResult<String>;
}

impl<F> PathOracle for F
where
    F: Fn(&SourceImage, Complexity) -> StudioResult<String>,
{
    fn generate(&self, image: &SourceImage, complexity: Complexity) -> StudioResult<String> {
        self(image, complexity)
    }
}

/// Producer of ready-to-bind path artifacts.
pub trait PathSynthesizer {
    /// Synthesize the path for `image` at `complexity`.
    fn synthesize(&self, image: &SourceImage, complexity: Complexity)
    -> StudioResult<PathArtifact>;
}

/// Adapts a [`PathOracle`] into a [`PathSynthesizer`] by normalizing its text output.
#[derive(Debug, Clone)]
pub struct PathOracleAdapter<O> {
    oracle: O,
}

impl<O: PathOracle> PathOracleAdapter<O> {
    /// Wrap a raw oracle.
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Borrow the wrapped oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }
}

impl<O: PathOracle> PathSynthesizer for PathOracleAdapter<O> {
    #[tracing::instrument(skip(self, image), fields(image = %format_args!("{:016x}", image.fingerprint())))]
    fn synthesize(
        &self,
        image: &SourceImage,
        complexity: Complexity,
    ) -> StudioResult<PathArtifact> {
        let raw = self.oracle.generate(image, complexity)?;
        let d = normalize_path_text(&raw)?;
        let artifact = PathArtifact::new(d)?;
        tracing::debug!(
            commands = artifact.command_count(),
            length = ?artifact.length(),
            "path synthesized"
        );
        Ok(artifact)
    }
}

/// Clean up oracle output into bare path data.
///
/// Strips a surrounding code fence, a `d="..."` attribute wrapper and every quote character, then
/// drops anything before the first move-to command. Output without a move-to command is a
/// [`StudioError::Synthesis`] failure. Geometry is not validated.
pub fn normalize_path_text(raw: &str) -> StudioResult<String> {
    let mut s = strip_code_fence(raw.trim()).trim();
    s = strip_d_attribute(s);
    let s: String = s.chars().filter(|c| !matches!(c, '\'' | '"' | '`')).collect();

    let Some(start) = find_move_to(&s) else {
        return Err(StudioError::synthesis(
            "oracle response contains no move-to command",
        ));
    };

    let d = s[start..].trim();
    if d.is_empty() {
        return Err(StudioError::synthesis("oracle response is empty"));
    }
    Ok(d.to_owned())
}

fn strip_code_fence(s: &str) -> &str {
    let mut s = s;
    if let Some(rest) = s.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        let rest = rest.strip_prefix('\r').unwrap_or(rest);
        s = rest.strip_prefix('\n').unwrap_or(rest);
    }
    if let Some(rest) = s.strip_suffix("```") {
        let rest = rest.strip_suffix('\n').unwrap_or(rest);
        s = rest.strip_suffix('\r').unwrap_or(rest);
    }
    s
}

fn strip_d_attribute(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() < 4 || !bytes[0].eq_ignore_ascii_case(&b'd') || bytes[1] != b'=' {
        return s;
    }
    let open = bytes[2];
    let close = bytes[bytes.len() - 1];
    if matches!(open, b'"' | b'\'') && matches!(close, b'"' | b'\'') {
        return &s[3..s.len() - 1];
    }
    s
}

/// Byte offset of the first `M`/`m` that is followed by a coordinate.
fn find_move_to(s: &str) -> Option<usize> {
    s.char_indices()
        .filter(|(_, c)| matches!(c, 'M' | 'm'))
        .map(|(i, _)| i)
        .find(|&i| {
            s[i + 1..]
                .trim_start_matches([' ', '\t', '\r', '\n', ','])
                .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/oracle/normalize.rs"]
mod tests;
