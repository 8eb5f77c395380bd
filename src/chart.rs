//! Rolling bar chart: sample store plus renderer.
//!
//! # Data Flow
//!
//! A sampler calls [`RollingChart::update`] at its own cadence; a display loop
//! calls [`RollingChart::render`] once per frame. Both run on the same thread
//! of control; if they ever run concurrently the whole chart must sit behind a
//! single lock held for the duration of each call.
//!
//! # Frame Layout
//!
//! | Element | Position | When |
//! |---|---|---|
//! | Bars | one column per slot, oldest at x = 0, bottom-anchored | every non-empty slot with a usable scale |
//! | Latest value | [`LAST_VALUE_POS`] | once any sample exists |
//! | Title | bottom-right corner | [`InfoPhase::Title`] |
//! | Min/max range | [`RANGE_POS`] | [`InfoPhase::Range`] |
//!
//! `render` does not clear the display; callers clear the frame first.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::clock::Clock;
use crate::config::{LAST_VALUE_POS, RANGE_POS};
use crate::state::{InfoMode, InfoPhase, SampleBuffer, SampleError, ScaleBounds, check_sample};
use crate::ui::primitives::{draw_bar, draw_text, draw_text_bottom_right};
use crate::ui::styles::{READOUT_STYLE, TITLE_STYLE};
use crate::ui::text::{format_range, format_value};

/// One display column as laid out by [`RollingChart::columns`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Column {
    /// Pixel column, 0 for the oldest slot.
    pub x: i32,
    /// Bar height in pixels, `None` for an empty slot or when no scale exists yet.
    pub height: Option<u32>,
}

/// Auto-scaling rolling bar chart holding the last `N` samples.
///
/// The title is borrowed for the lifetime of the chart. The clock is owned;
/// pass `&clock` to share one.
pub struct RollingChart<'a, C, const N: usize> {
    buffer: SampleBuffer<N>,
    bounds: ScaleBounds,
    info: InfoMode,
    max_height: u32,
    title: &'a str,
    clock: C,
}

impl<'a, C, const N: usize> RollingChart<'a, C, N>
where
    C: Clock,
{
    /// Create an empty chart. The info overlay starts active, in the title phase.
    pub fn new(
        title: &'a str,
        max_height: u32,
        clock: C,
    ) -> Self {
        let info = InfoMode::active_since(clock.now_ms());
        Self {
            buffer: SampleBuffer::new(),
            bounds: ScaleBounds::new(),
            info,
            max_height,
            title,
            clock,
        }
    }

    // =========================================================================
    // Sample Store
    // =========================================================================

    /// Record a sample. Negative and non-finite values are dropped silently.
    #[inline]
    pub fn update(
        &mut self,
        value: f32,
    ) {
        self.try_update(value).ok();
    }

    /// Record a sample, reporting why it was dropped.
    ///
    /// A rejected sample leaves buffer, bounds and write position untouched.
    pub fn try_update(
        &mut self,
        value: f32,
    ) -> Result<(), SampleError> {
        let value = match check_sample(value) {
            Ok(value) => value,
            Err(err) => {
                trace!("sample rejected: {}", err);
                return Err(err);
            }
        };

        self.bounds.include(value);
        self.buffer.push(value);
        Ok(())
    }

    /// Drop all samples and scale, and restart the info overlay.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.bounds.reset();
        self.info.activate(self.clock.now_ms());
        debug!("chart reset");
    }

    // =========================================================================
    // Info Mode
    // =========================================================================

    /// Show (restarting from the title) or hide the info overlay.
    pub fn set_info_mode(
        &mut self,
        active: bool,
    ) {
        let now = self.clock.now_ms();
        self.info.set(active, now);
    }

    /// Check if the overlay is showing the title or the range right now.
    pub fn info_mode(&self) -> bool { self.info_phase().is_active() }

    /// Overlay phase right now.
    pub fn info_phase(&self) -> InfoPhase { self.info.phase_at(self.clock.now_ms()) }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Lay out every slot as a column, oldest first.
    ///
    /// Empty slots still occupy a column so x positions stay aligned with
    /// buffer positions.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.buffer.iter().enumerate().map(move |(x, sample)| Column {
            x: x as i32,
            height: sample.and_then(|value| self.bounds.bar_height(value, self.max_height)),
        })
    }

    /// Draw bars and text for this frame.
    ///
    /// Reads the clock once and advances the info overlay before drawing, so
    /// the overlay text always matches the phase at this instant. Buffer and
    /// bounds are not modified.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = BinaryColor>,
    {
        let phase = self.info.poll(self.clock.now_ms());

        for column in self.columns() {
            if let Some(height) = column.height {
                draw_bar(display, column.x, height);
            }
        }

        let Some(latest) = self.buffer.latest() else {
            return;
        };

        draw_text(display, &format_value(latest), LAST_VALUE_POS, READOUT_STYLE);

        match phase {
            InfoPhase::Inactive => {}
            InfoPhase::Title => draw_text_bottom_right(display, self.title, TITLE_STYLE),
            InfoPhase::Range => {
                if let Some((min, max)) = self.bounds.range() {
                    draw_text(display, &format_range(min, max), RANGE_POS, READOUT_STYLE);
                }
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Sample history.
    #[inline]
    pub const fn buffer(&self) -> &SampleBuffer<N> { &self.buffer }

    /// Current scale.
    #[inline]
    pub const fn bounds(&self) -> &ScaleBounds { &self.bounds }

    /// Tallest bar in pixels.
    #[inline]
    pub const fn max_height(&self) -> u32 { self.max_height }

    /// Chart title.
    #[inline]
    pub const fn title(&self) -> &'a str { self.title }
}

// =============================================================================
// Unit Tests
// =============================================================================
