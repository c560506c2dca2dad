use std::sync::Arc;

use crate::animation::reveal::{
    AnimationState, RevealAnimator, RevealConfig, RevealPhase, RevealSnapshot,
};
use crate::foundation::core::Complexity;
use crate::path::artifact::PathArtifact;
use crate::path::cache::PathCache;
use crate::source::SourceImage;
use crate::style::config::StyleConfig;

/// Identity of one outstanding synthesis.
///
/// Carries the session generation at dispatch time; a completion whose generation no longer
/// matches belongs to a replaced image and is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesisTicket {
    pub(crate) generation: u64,
    pub(crate) id: u64,
    pub(crate) complexity: Complexity,
}

impl SynthesisTicket {
    /// Complexity requested.
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Session generation at dispatch time.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InFlight {
    pub(crate) ticket: SynthesisTicket,
    pub(crate) restore: RevealSnapshot,
}

/// The single active studio workflow: one image, its cached paths, the bound path, the reveal
/// and the style.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) image: Option<SourceImage>,
    pub(crate) selected_complexity: Complexity,
    pub(crate) cache: PathCache,
    pub(crate) active_path: Option<Arc<PathArtifact>>,
    pub(crate) in_flight: Option<InFlight>,
    pub(crate) animator: RevealAnimator,
    pub(crate) style: StyleConfig,
    pub(crate) generation: u64,
}

impl Session {
    pub(crate) fn new(
        default_complexity: Complexity,
        reveal: RevealConfig,
        style: StyleConfig,
    ) -> Self {
        Self {
            image: None,
            selected_complexity: default_complexity,
            cache: PathCache::new(),
            active_path: None,
            in_flight: None,
            animator: RevealAnimator::new(reveal),
            style,
            generation: 0,
        }
    }

    /// Current source image.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Committed complexity level.
    pub fn selected_complexity(&self) -> Complexity {
        self.selected_complexity
    }

    /// Paths synthesized for the current image.
    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Path bound for display.
    pub fn active_path(&self) -> Option<&Arc<PathArtifact>> {
        self.active_path.as_ref()
    }

    /// Return `true` while an oracle call is outstanding.
    pub fn is_synthesizing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Outstanding synthesis, if any.
    pub fn in_flight(&self) -> Option<SynthesisTicket> {
        self.in_flight.as_ref().map(|f| f.ticket)
    }

    /// Reveal progress and playing flag.
    pub fn animation(&self) -> AnimationState {
        self.animator.state()
    }

    /// Reveal phase.
    pub fn phase(&self) -> RevealPhase {
        self.animator.phase()
    }

    /// Visual settings.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Counter bumped on every image change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Studio-level summary for status displays.
    pub fn status(&self) -> StudioStatus {
        if self.is_synthesizing() {
            return StudioStatus::Synthesizing;
        }
        if self.image.is_none() {
            return StudioStatus::Empty;
        }
        if self.active_path.is_none() {
            return StudioStatus::PreviewLoaded;
        }
        let percent = self.animator.progress().round().clamp(0.0, 100.0) as u8;
        match self.animator.phase() {
            RevealPhase::Idle => StudioStatus::ReadyToDraw,
            RevealPhase::Playing => StudioStatus::Tracing { percent },
            RevealPhase::Paused => StudioStatus::Paused { percent },
            RevealPhase::Complete => StudioStatus::Complete,
        }
    }
}

/// What the studio is doing, as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudioStatus {
    /// No image loaded.
    Empty,
    /// Image loaded, no path bound yet.
    PreviewLoaded,
    /// Waiting for the oracle.
    Synthesizing,
    /// Path bound, reveal not started.
    ReadyToDraw,
    /// Reveal running.
    Tracing {
        /// Rounded progress.
        percent: u8,
    },
    /// Reveal paused.
    Paused {
        /// Rounded progress.
        percent: u8,
    },
    /// Fully drawn; export available.
    Complete,
}

impl StudioStatus {
    /// Label of the primary action button.
    pub fn label(self) -> String {
        match self {
            Self::Synthesizing => "Synthesizing...".to_owned(),
            Self::Tracing { percent } => format!("Tracing... {percent}%"),
            _ => "Start Drawing".to_owned(),
        }
    }
}
