/// Convenience result type used across LineFlow.
pub type StudioResult<T> = Result<T, StudioError>;

/// Top-level error taxonomy used by studio APIs.
///
/// Every variant is terminal for the action that raised it only: the session is left as it was
/// before the action.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// The path oracle was unreachable or answered with a service error.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The path oracle answered, but without a usable path.
    #[error("synthesis failure: {0}")]
    Synthesis(String),

    /// The image source refused access (camera permission, unreadable file).
    #[error("capture denied: {0}")]
    CaptureDenied(String),

    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// The action needs a loaded image.
    #[error("no image loaded")]
    NoImage,

    /// The action needs a bound path.
    #[error("no path bound")]
    NoPath,

    /// A synthesis is already in flight for this session.
    #[error("a synthesis is already in flight")]
    SynthesisInFlight,

    /// Rendering or encoding the export artifact failed.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    /// Build a [`StudioError::Transport`] value.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Build a [`StudioError::Synthesis`] value.
    pub fn synthesis(msg: impl Into<String>) -> Self {
        Self::Synthesis(msg.into())
    }

    /// Build a [`StudioError::CaptureDenied`] value.
    pub fn capture_denied(msg: impl Into<String>) -> Self {
        Self::CaptureDenied(msg.into())
    }

    /// Build a [`StudioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StudioError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Short notification text suitable for showing to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Transport(_) => "AI Processing error. Try again.",
            Self::Synthesis(_) => "Path generation failed. Try a different complexity.",
            Self::CaptureDenied(_) => "Camera access denied.",
            Self::Validation(_) => "Invalid setting.",
            Self::NoImage => "Capture or upload an image first.",
            Self::NoPath => "Draw the artwork before exporting.",
            Self::SynthesisInFlight => "Still synthesizing. Please wait.",
            Self::Export(_) => "Export failed. Try again.",
            Self::Other(_) => "Something went wrong. Try again.",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
