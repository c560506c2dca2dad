use crate::foundation::core::{ComplexityTier, Fps};
use crate::foundation::error::{StudioError, StudioResult};

/// Fully revealed progress value.
pub const PROGRESS_COMPLETE: f64 = 100.0;

// Absorbs float drift from summing fractional increments.
const COMPLETE_EPSILON: f64 = 1e-6;

/// Reveal speed settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Rate of the display-refresh clock that drives ticks.
    pub tick_rate: Fps,
    /// Percent per tick for levels 1 to 4.
    pub low_increment: f64,
    /// Percent per tick for levels 5 to 8.
    pub mid_increment: f64,
    /// Percent per tick for levels 9 and 10.
    pub high_increment: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            tick_rate: Fps::default(),
            low_increment: 1.5,
            mid_increment: 0.8,
            high_increment: 0.4,
        }
    }
}

impl RevealConfig {
    /// Per-tick progress increment for `tier`.
    pub fn increment(&self, tier: ComplexityTier) -> f64 {
        match tier {
            ComplexityTier::Low => self.low_increment,
            ComplexityTier::Mid => self.mid_increment,
            ComplexityTier::High => self.high_increment,
        }
    }

    /// Check increments are positive and ordered so denser tiers never reveal faster.
    pub fn validate(&self) -> StudioResult<()> {
        Fps::new(self.tick_rate.num, self.tick_rate.den)?;
        for (name, v) in [
            ("low_increment", self.low_increment),
            ("mid_increment", self.mid_increment),
            ("high_increment", self.high_increment),
        ] {
            if !v.is_finite() || v <= 0.0 || v > PROGRESS_COMPLETE {
                return Err(StudioError::validation(format!(
                    "reveal {name} must be in (0, 100], got {v}"
                )));
            }
        }
        if !(self.low_increment >= self.mid_increment && self.mid_increment >= self.high_increment)
        {
            return Err(StudioError::validation(
                "reveal increments must be non-increasing from low to high tier",
            ));
        }
        Ok(())
    }

    /// Ticks needed for a full reveal at `tier`.
    pub fn ticks_to_complete(&self, tier: ComplexityTier) -> u64 {
        (PROGRESS_COMPLETE / self.increment(tier) - COMPLETE_EPSILON).ceil() as u64
    }
}

/// Phase of the reveal state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing revealed, clock stopped.
    Idle,
    /// Clock advancing.
    Playing,
    /// Clock stopped at an intermediate progress.
    Paused,
    /// Fully revealed, clock stopped.
    Complete,
}

/// Observable animation state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Revealed percentage in `[0, 100]`.
    pub progress: f64,
    /// Whether the clock is advancing.
    pub is_playing: bool,
}

/// Handle to one advancing clock.
///
/// Every `start`/`resume` issues a new token and every transition that stops or restarts the
/// clock invalidates the previous one, so a tick callback scheduled for an old clock is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockToken {
    epoch: u64,
}

/// Saved animator state, used to undo a transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSnapshot {
    progress: f64,
    phase: RevealPhase,
    tier: ComplexityTier,
}

/// Deterministic, resumable 0..100 reveal clock.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    cfg: RevealConfig,
    progress: f64,
    phase: RevealPhase,
    tier: ComplexityTier,
    epoch: u64,
}

impl RevealAnimator {
    /// Create an idle animator.
    pub fn new(cfg: RevealConfig) -> Self {
        Self {
            cfg,
            progress: 0.0,
            phase: RevealPhase::Idle,
            tier: ComplexityTier::Mid,
            epoch: 0,
        }
    }

    /// Speed settings.
    pub fn config(&self) -> &RevealConfig {
        &self.cfg
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Revealed percentage in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Return `true` while the clock advances.
    pub fn is_playing(&self) -> bool {
        self.phase == RevealPhase::Playing
    }

    /// Observable state.
    pub fn state(&self) -> AnimationState {
        AnimationState {
            progress: self.progress,
            is_playing: self.is_playing(),
        }
    }

    /// Tier whose increment the clock uses.
    pub fn tier(&self) -> ComplexityTier {
        self.tier
    }

    /// Token of the running clock, if any.
    pub fn current_clock(&self) -> Option<ClockToken> {
        self.is_playing().then_some(ClockToken { epoch: self.epoch })
    }

    /// Restart from 0 at the speed of `tier`, from any phase.
    pub fn start(&mut self, tier: ComplexityTier) -> ClockToken {
        self.tier = tier;
        self.progress = 0.0;
        self.phase = RevealPhase::Playing;
        self.next_clock()
    }

    /// Continue a paused reveal from its current progress.
    ///
    /// Returns `None` unless the animator is paused.
    pub fn resume(&mut self) -> Option<ClockToken> {
        if self.phase != RevealPhase::Paused {
            return None;
        }
        self.phase = RevealPhase::Playing;
        Some(self.next_clock())
    }

    /// Freeze a playing reveal. Returns `false` (and does nothing) unless playing.
    pub fn pause(&mut self) -> bool {
        if self.phase != RevealPhase::Playing {
            return false;
        }
        self.phase = RevealPhase::Paused;
        self.epoch = self.epoch.wrapping_add(1);
        true
    }

    /// Back to `Idle` from any phase.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.phase = RevealPhase::Idle;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Advance the running clock by one tick.
    pub fn tick(&mut self) -> RevealPhase {
        if self.phase != RevealPhase::Playing {
            return self.phase;
        }
        let next = self.progress + self.cfg.increment(self.tier);
        if next >= PROGRESS_COMPLETE - COMPLETE_EPSILON {
            self.progress = PROGRESS_COMPLETE;
            self.phase = RevealPhase::Complete;
            self.epoch = self.epoch.wrapping_add(1);
        } else {
            self.progress = next;
        }
        self.phase
    }

    /// Advance only if `token` belongs to the running clock. Returns whether a tick happened.
    pub fn tick_with(&mut self, token: ClockToken) -> bool {
        if self.current_clock() != Some(token) {
            return false;
        }
        self.tick();
        true
    }

    /// Capture the current state.
    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            progress: self.progress,
            phase: self.phase,
            tier: self.tier,
        }
    }

    /// Return to a captured state. A restored `Playing` state runs on a fresh clock.
    pub fn restore(&mut self, snap: RevealSnapshot) -> Option<ClockToken> {
        self.progress = snap.progress;
        self.phase = snap.phase;
        self.tier = snap.tier;
        let token = self.next_clock();
        self.is_playing().then_some(token)
    }

    fn next_clock(&mut self) -> ClockToken {
        self.epoch = self.epoch.wrapping_add(1);
        ClockToken { epoch: self.epoch }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
