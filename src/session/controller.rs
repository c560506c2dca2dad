use std::sync::Arc;
use std::time::Duration;

use crate::animation::clock::FrameClock;
use crate::animation::reveal::{AnimationState, ClockToken, RevealPhase};
use crate::config::StudioConfig;
use crate::export::{ExportedImage, Exporter};
use crate::foundation::core::{Canvas, Complexity};
use crate::foundation::error::{StudioError, StudioResult};
use crate::oracle::PathSynthesizer;
use crate::path::artifact::PathArtifact;
use crate::render::raster::{FrameRGBA, rasterize_svg};
use crate::render::svg::Scene;
use crate::session::state::{InFlight, Session, StudioStatus, SynthesisTicket};
use crate::source::SourceImage;
use crate::style::config::StylePatch;

/// Work handed to a synthesizer by [`SessionController::begin_draw`].
#[derive(Clone, Debug)]
pub struct SynthesisRequest {
    /// Token to pass back to [`SessionController::complete_draw`].
    pub ticket: SynthesisTicket,
    /// Image to trace.
    pub image: SourceImage,
    /// Requested complexity.
    pub complexity: Complexity,
}

/// Outcome of [`SessionController::begin_draw`].
#[derive(Clone, Debug)]
pub enum DrawDispatch {
    /// Served from the cache; the reveal already restarted.
    Bound(Arc<PathArtifact>),
    /// The caller must run synthesis and report back.
    Dispatched(SynthesisRequest),
}

/// Outcome of [`SessionController::complete_draw`].
#[derive(Clone, Debug)]
pub enum DrawCompletion {
    /// Path cached, bound and revealing.
    Bound(Arc<PathArtifact>),
    /// The result belonged to a replaced image or an already settled request; nothing changed.
    Stale,
}

impl DrawCompletion {
    /// Bound artifact, if any.
    pub fn artifact(&self) -> Option<&Arc<PathArtifact>> {
        match self {
            Self::Bound(a) => Some(a),
            Self::Stale => None,
        }
    }
}

/// Effect of [`SessionController::toggle_playback`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackChange {
    /// Running reveal frozen.
    Paused,
    /// Paused reveal continued.
    Resumed,
    /// Reveal restarted from 0.
    Started,
    /// Nothing happened.
    Unchanged,
}

/// Orchestrates the studio: image lifecycle, path requests, playback and style.
///
/// Owns the [`Session`]. All mutation goes through `&mut self`, so callbacks from a host event
/// loop are serialized by construction; a result that arrives after the image was replaced is
/// recognized by its [`SynthesisTicket`] and discarded.
#[derive(Debug, Clone)]
pub struct SessionController {
    session: Session,
    frame_clock: FrameClock,
    fallback_dash_length: f64,
    next_ticket: u64,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::build(&StudioConfig::default())
    }
}

impl SessionController {
    /// Create a controller with an empty session.
    pub fn new(cfg: &StudioConfig) -> StudioResult<Self> {
        cfg.validate()?;
        Ok(Self::build(cfg))
    }

    fn build(cfg: &StudioConfig) -> Self {
        Self {
            session: Session::new(cfg.default_complexity, cfg.reveal, cfg.style),
            frame_clock: FrameClock::new(cfg.reveal.tick_rate),
            fallback_dash_length: cfg.fallback_dash_length,
            next_ticket: 0,
        }
    }

    /// Read-only view of the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reveal progress and playing flag.
    pub fn animation_state(&self) -> AnimationState {
        self.session.animation()
    }

    /// Path bound for display.
    pub fn active_path(&self) -> Option<&Arc<PathArtifact>> {
        self.session.active_path()
    }

    /// Return `true` while an oracle call is outstanding.
    pub fn is_synthesizing(&self) -> bool {
        self.session.is_synthesizing()
    }

    /// Studio-level summary.
    pub fn status(&self) -> StudioStatus {
        self.session.status()
    }

    /// Replace the source image (or clear it with `None`).
    ///
    /// Drops every cached path, unbinds the active path, stops the reveal and orphans any
    /// outstanding synthesis.
    pub fn load_image(&mut self, image: Option<SourceImage>) {
        let s = &mut self.session;
        s.generation = s.generation.wrapping_add(1);
        if s.in_flight.take().is_some() {
            tracing::debug!(generation = s.generation, "outstanding synthesis orphaned");
        }
        s.cache.clear();
        s.active_path = None;
        s.animator.reset();
        self.frame_clock.reset();
        match &image {
            Some(img) => tracing::info!(
                generation = s.generation,
                image = %format_args!("{:016x}", img.fingerprint()),
                mime = img.mime_type(),
                "image loaded"
            ),
            None => tracing::info!(generation = s.generation, "session reset"),
        }
        s.image = image;
    }

    /// Clear the image and everything derived from it.
    pub fn reset_session(&mut self) {
        self.load_image(None);
    }

    /// Commit a new complexity selection and unbind the active path.
    ///
    /// The next draw request for the level is served from the cache when possible.
    pub fn select_complexity(&mut self, complexity: Complexity) -> StudioResult<()> {
        if self.session.is_synthesizing() {
            return Err(StudioError::SynthesisInFlight);
        }
        let s = &mut self.session;
        s.selected_complexity = complexity;
        s.active_path = None;
        s.animator.reset();
        tracing::debug!(complexity = %complexity, "complexity selected");
        Ok(())
    }

    /// First half of a draw request.
    ///
    /// A cached path is bound and its reveal restarted immediately. Otherwise the reveal is frozen
    /// at 0 and a [`SynthesisRequest`] is returned for the caller to run; its result goes to
    /// [`SessionController::complete_draw`]. Only one synthesis may be outstanding.
    pub fn begin_draw(&mut self, complexity: Complexity) -> StudioResult<DrawDispatch> {
        if self.session.is_synthesizing() {
            return Err(StudioError::SynthesisInFlight);
        }
        let Some(image) = self.session.image.clone() else {
            return Err(StudioError::NoImage);
        };

        if let Some(hit) = self.session.cache.get(complexity) {
            tracing::debug!(complexity = %complexity, "path cache hit");
            self.bind(complexity, Arc::clone(&hit));
            return Ok(DrawDispatch::Bound(hit));
        }

        let s = &mut self.session;
        let restore = s.animator.snapshot();
        s.animator.reset();
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = SynthesisTicket {
            generation: s.generation,
            id: self.next_ticket,
            complexity,
        };
        s.in_flight = Some(InFlight { ticket, restore });
        tracing::info!(complexity = %complexity, ticket = ticket.id, "synthesis dispatched");
        Ok(DrawDispatch::Dispatched(SynthesisRequest {
            ticket,
            image,
            complexity,
        }))
    }

    /// Second half of a draw request: settle the synthesis identified by `ticket`.
    ///
    /// On success the artifact is cached, bound and revealed from 0. On failure the reveal state
    /// from before the request is restored, the selection is left unchanged and the error is
    /// returned. Results for a replaced image or an already settled ticket are ignored.
    pub fn complete_draw(
        &mut self,
        ticket: SynthesisTicket,
        result: StudioResult<PathArtifact>,
    ) -> StudioResult<DrawCompletion> {
        let current = self.session.in_flight.as_ref().map(|f| f.ticket);
        if ticket.generation != self.session.generation || current != Some(ticket) {
            tracing::debug!(
                ticket = ticket.id,
                generation = ticket.generation,
                "stale synthesis result discarded"
            );
            return Ok(DrawCompletion::Stale);
        }
        let Some(in_flight) = self.session.in_flight.take() else {
            return Ok(DrawCompletion::Stale);
        };

        match result {
            Ok(artifact) => {
                let shared = self
                    .session
                    .cache
                    .put(ticket.complexity, Arc::new(artifact));
                self.bind(ticket.complexity, Arc::clone(&shared));
                tracing::info!(
                    complexity = %ticket.complexity,
                    fingerprint = %format_args!("{:016x}", shared.fingerprint()),
                    "path bound"
                );
                Ok(DrawCompletion::Bound(shared))
            }
            Err(err) => {
                self.session.animator.restore(in_flight.restore);
                self.frame_clock.reset();
                tracing::warn!(complexity = %ticket.complexity, error = %err, "synthesis failed");
                Err(err)
            }
        }
    }

    /// Serve a draw request end to end, running `synth` inline on a cache miss.
    pub fn request_draw<S: PathSynthesizer + ?Sized>(
        &mut self,
        complexity: Complexity,
        synth: &S,
    ) -> StudioResult<DrawCompletion> {
        match self.begin_draw(complexity)? {
            DrawDispatch::Bound(hit) => Ok(DrawCompletion::Bound(hit)),
            DrawDispatch::Dispatched(req) => {
                let result = synth.synthesize(&req.image, req.complexity);
                self.complete_draw(req.ticket, result)
            }
        }
    }

    /// Primary action: pause a running reveal, resume a paused one, restart an idle or finished
    /// one, or synthesize the selected level when nothing is bound.
    pub fn toggle_playback<S: PathSynthesizer + ?Sized>(
        &mut self,
        synth: &S,
    ) -> StudioResult<PlaybackChange> {
        if self.session.is_synthesizing() {
            return Err(StudioError::SynthesisInFlight);
        }
        if self.session.image.is_none() {
            return Err(StudioError::NoImage);
        }

        if self.session.animator.pause() {
            tracing::debug!(progress = self.session.animator.progress(), "reveal paused");
            return Ok(PlaybackChange::Paused);
        }
        if self.session.active_path.is_none() {
            let selected = self.session.selected_complexity;
            return Ok(match self.request_draw(selected, synth)? {
                DrawCompletion::Bound(_) => PlaybackChange::Started,
                DrawCompletion::Stale => PlaybackChange::Unchanged,
            });
        }
        if self.session.animator.resume().is_some() {
            self.frame_clock.reset();
            tracing::debug!(progress = self.session.animator.progress(), "reveal resumed");
            return Ok(PlaybackChange::Resumed);
        }

        let tier = self.session.selected_complexity.tier();
        self.session.animator.start(tier);
        self.frame_clock.reset();
        tracing::debug!("reveal restarted");
        Ok(PlaybackChange::Started)
    }

    /// Apply a partial style update. Never touches the path or the reveal.
    pub fn update_style(&mut self, patch: &StylePatch) -> StudioResult<()> {
        patch.validate()?;
        self.session.style.merge(patch);
        Ok(())
    }

    /// Token of the running reveal clock, for hosts driving ticks from timer callbacks.
    pub fn clock(&self) -> Option<ClockToken> {
        self.session.animator.current_clock()
    }

    /// One reveal tick.
    pub fn on_frame(&mut self) -> RevealPhase {
        self.session.animator.tick()
    }

    /// One reveal tick, only if `token` belongs to the running clock.
    pub fn on_frame_with(&mut self, token: ClockToken) -> bool {
        self.session.animator.tick_with(token)
    }

    /// Advance the reveal by wall-clock time at the configured tick rate.
    pub fn advance(&mut self, elapsed: Duration) -> RevealPhase {
        if !self.session.animator.is_playing() {
            self.frame_clock.reset();
            return self.session.animator.phase();
        }
        for _ in 0..self.frame_clock.advance(elapsed) {
            if self.session.animator.tick() != RevealPhase::Playing {
                self.frame_clock.reset();
                break;
            }
        }
        self.session.animator.phase()
    }

    /// Return `true` when a path is bound and no synthesis is outstanding.
    pub fn can_export(&self) -> bool {
        self.session.active_path.is_some() && !self.session.is_synthesizing()
    }

    /// SVG of the live preview at the current progress.
    pub fn preview_svg(&self, canvas: Canvas) -> String {
        Scene {
            path: self.session.active_path.as_deref(),
            style: &self.session.style,
            progress: self.session.animator.progress(),
            canvas,
            fallback_dash_length: self.fallback_dash_length,
        }
        .to_svg()
    }

    /// Rasterized live preview.
    pub fn preview_frame(&self, canvas: Canvas) -> StudioResult<FrameRGBA> {
        rasterize_svg(&self.preview_svg(canvas), canvas)
    }

    /// Export the bound path fully drawn, whatever the reveal progress.
    pub fn export(&self, exporter: &Exporter) -> StudioResult<ExportedImage> {
        let Some(path) = self.session.active_path.as_deref() else {
            return Err(StudioError::NoPath);
        };
        exporter.export(
            path,
            &self.session.style,
            self.session.selected_complexity,
        )
    }

    fn bind(&mut self, complexity: Complexity, artifact: Arc<PathArtifact>) {
        let s = &mut self.session;
        s.selected_complexity = complexity;
        s.active_path = Some(artifact);
        s.animator.start(complexity.tier());
        self.frame_clock.reset();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
