//! LineFlow turns a still image into a single continuous line drawing and reveals it stroke by
//! stroke.
//!
//! The public API is session-oriented:
//!
//! - Create a [`SessionController`] from a [`StudioConfig`]
//! - Load a [`SourceImage`] and request a path through a [`PathSynthesizer`]
//!   (usually a [`PathOracleAdapter`] around [`GeminiOracle`])
//! - Drive the reveal with [`SessionController::advance`], preview it, and export the finished
//!   artwork with an [`Exporter`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod oracle;
pub(crate) mod path;
pub(crate) mod render;
pub(crate) mod session;
pub(crate) mod source;
pub(crate) mod style;

pub use crate::foundation::core::{Canvas, Complexity, ComplexityTier, Fps, Rgb8};
pub use crate::foundation::error::{StudioError, StudioResult};

pub use crate::animation::clock::FrameClock;
pub use crate::animation::reveal::{
    AnimationState, ClockToken, PROGRESS_COMPLETE, RevealAnimator, RevealConfig, RevealPhase,
    RevealSnapshot,
};
pub use crate::config::{DEFAULT_FALLBACK_DASH_LENGTH, StudioConfig};
pub use crate::export::{ExportConfig, ExportedImage, Exporter};
pub use crate::oracle::gemini::{GeminiOracle, OracleConfig, complexity_prompt};
pub use crate::oracle::{PathOracle, PathOracleAdapter, PathSynthesizer, normalize_path_text};
pub use crate::path::artifact::{LOGICAL_EXTENT, PathArtifact};
pub use crate::path::cache::PathCache;
pub use crate::render::raster::{FrameRGBA, rasterize_svg};
pub use crate::render::svg::Scene;
pub use crate::session::controller::{
    DrawCompletion, DrawDispatch, PlaybackChange, SessionController, SynthesisRequest,
};
pub use crate::session::state::{Session, StudioStatus, SynthesisTicket};
pub use crate::source::{FileImageSource, ImageSource, SourceImage};
pub use crate::style::config::{StyleConfig, StylePatch};
pub use crate::style::filters::{FilterKind, METAL_GRADIENT_ID};
pub use crate::style::resolver::{
    FilterRef, PaintRef, resolve_filter_reference, resolve_paint,
};
