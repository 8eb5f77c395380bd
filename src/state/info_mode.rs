//! Timed info overlay.
//!
//! # Phases
//!
//! | Elapsed since activation | Phase |
//! |---|---|
//! | `< TITLE_DURATION_MS` | [`InfoPhase::Title`] |
//! | `< INFO_MODE_DURATION_MS` | [`InfoPhase::Range`] |
//! | otherwise | [`InfoPhase::Inactive`] |
//!
//! Expiry is polled, not scheduled: the chart calls [`InfoMode::poll`] once per
//! render with that frame's timestamp, so the text drawn always matches the
//! phase at the moment of drawing.

use crate::config::{INFO_MODE_DURATION_MS, TITLE_DURATION_MS};

/// What the overlay shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InfoPhase {
    /// Plain chart, only the latest value readout.
    #[default]
    Inactive,
    /// Chart title in the bottom-right corner.
    Title,
    /// Current min/max in the top-left corner.
    Range,
}

impl InfoPhase {
    /// Check if any overlay text is shown.
    #[inline]
    pub const fn is_active(self) -> bool { !matches!(self, Self::Inactive) }
}

/// Info overlay state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfoMode {
    /// Activation timestamp while active.
    activated_at: Option<u64>,
}

impl InfoMode {
    /// Create an inactive overlay.
    pub const fn new() -> Self { Self { activated_at: None } }

    /// Create an overlay activated at `now_ms`.
    pub const fn active_since(now_ms: u64) -> Self {
        Self {
            activated_at: Some(now_ms),
        }
    }

    /// Start (or restart) the overlay from the title phase.
    pub fn activate(
        &mut self,
        now_ms: u64,
    ) {
        debug!("info mode on at {} ms", now_ms);
        self.activated_at = Some(now_ms);
    }

    /// Hide the overlay immediately.
    pub fn deactivate(&mut self) {
        if self.activated_at.take().is_some() {
            debug!("info mode off");
        }
    }

    /// Explicit override: activate at `now_ms` or deactivate.
    pub fn set(
        &mut self,
        active: bool,
        now_ms: u64,
    ) {
        if active {
            self.activate(now_ms);
        } else {
            self.deactivate();
        }
    }

    /// Activation timestamp, if active.
    #[inline]
    pub const fn activated_at(&self) -> Option<u64> { self.activated_at }

    /// Phase at `now_ms` without committing expiry.
    ///
    /// A clock reading earlier than the activation time counts as zero elapsed.
    pub const fn phase_at(
        &self,
        now_ms: u64,
    ) -> InfoPhase {
        match self.activated_at {
            None => InfoPhase::Inactive,
            Some(start) => {
                let elapsed = now_ms.saturating_sub(start);
                if elapsed < TITLE_DURATION_MS {
                    InfoPhase::Title
                } else if elapsed < INFO_MODE_DURATION_MS {
                    InfoPhase::Range
                } else {
                    InfoPhase::Inactive
                }
            }
        }
    }

    /// Advance the state machine to `now_ms` and return the current phase.
    ///
    /// Once the overlay duration has passed the overlay switches off and stays
    /// off until activated again.
    pub fn poll(
        &mut self,
        now_ms: u64,
    ) -> InfoPhase {
        let phase = self.phase_at(now_ms);
        if !phase.is_active() {
            self.deactivate();
        }
        phase
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
