//! Time-based color evolution over the frame buffer.
//!
//! The [`Animator`] owns the active [`AnimationState`] and the frame buffer.
//! Each transition method replaces the animation wholesale and leaves a frame
//! ready to be rendered immediately. [`Animator::advance`] is called once per
//! tick and hands back a frame only when a new one is due, so the render
//! cadence is bounded by the animator itself and not by how fast the outer
//! loop spins.
//!
//! A frame stays pending until the caller confirms it reached the strip with
//! [`Animator::mark_rendered`]. Until then `advance` keeps offering it, so a
//! failed render is retried on the next tick even when the animation itself
//! has settled.

use crate::color::{PixelColor, blend, fade_mix, hsv8, sin8};
use crate::config::{IndicatorConfig, RainbowConfig};
use crate::frame::FrameBuffer;
use crate::time::{TimeInstant, elapsed_millis};

/// Rainbow pixel brightness floor; the shimmer adds up to 31 on top.
const RAINBOW_VALUE_BASE: u8 = 192;

/// The animation currently driving the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState<I> {
    /// One static color on every pixel.
    Solid(PixelColor),
    /// Linear fade from `start` to `end`.
    Fade {
        /// Color at the start of the fade.
        start: PixelColor,
        /// Color at the end of the fade.
        end: PixelColor,
        /// When the fade began.
        start_time: I,
        /// Fade length in milliseconds, at least 1.
        duration_ms: u32,
    },
    /// Hue gradient rotating along the strip.
    Rainbow {
        /// When the rainbow began.
        start_time: I,
        /// Hue of pixel 0 in the most recently rendered frame.
        base_hue: u8,
    },
}

/// Computes frames for the active animation.
///
/// # Type Parameters
/// * `I` - Time instant type
/// * `N` - Number of pixels on the strip
pub struct Animator<I: TimeInstant, const N: usize> {
    state: AnimationState<I>,
    frame: FrameBuffer<N>,
    last_render: Option<I>,
    pending: bool,
    fade_interval_ms: u32,
    rainbow: RainbowConfig,
}

impl<I: TimeInstant, const N: usize> Animator<I, N> {
    /// Creates an animator showing solid `off_color`.
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            state: AnimationState::Solid(config.off_color),
            frame: FrameBuffer::filled(config.off_color),
            last_render: None,
            pending: true,
            fade_interval_ms: config.fade_interval_ms,
            rainbow: config.rainbow,
        }
    }

    /// Switches to a static color. The returned frame must be rendered.
    pub fn set_solid(&mut self, color: PixelColor) -> &FrameBuffer<N> {
        self.state = AnimationState::Solid(color);
        self.frame.fill(color);
        self.last_render = None;
        self.pending = true;
        &self.frame
    }

    /// Starts a fade from `start` to `end` over `duration_ms`.
    ///
    /// The returned frame shows `start` and must be rendered. Equal colors
    /// skip the animation and show `end` directly.
    pub fn begin_fade(
        &mut self,
        start: PixelColor,
        end: PixelColor,
        now: I,
        duration_ms: u32,
    ) -> &FrameBuffer<N> {
        if start == end {
            return self.set_solid(end);
        }

        self.state = AnimationState::Fade {
            start,
            end,
            start_time: now,
            duration_ms: duration_ms.max(1),
        };
        self.frame.fill(start);
        // First fade step is computed on the next advance, whatever the interval.
        self.last_render = None;
        self.pending = true;
        &self.frame
    }

    /// Starts the rainbow from its configured hue and renders the first frame.
    ///
    /// Restarting an already running rainbow resets its phase.
    pub fn start_rainbow(&mut self, now: I) -> &FrameBuffer<N> {
        let base_hue = self.rainbow.start_hue;
        self.state = AnimationState::Rainbow {
            start_time: now,
            base_hue,
        };
        self.render_rainbow(base_hue);
        self.last_render = Some(now);
        self.pending = true;
        &self.frame
    }

    /// Advances the active animation to `now`.
    ///
    /// Returns the frame to render: a freshly computed one when it is due, or
    /// the previous one again while it has not been marked rendered. `None`
    /// means the strip already shows the current frame.
    pub fn advance(&mut self, now: I) -> Option<&FrameBuffer<N>> {
        if self.step(now) {
            self.pending = true;
        }
        self.pending.then_some(&self.frame)
    }

    /// Records that the current frame reached the strip.
    pub fn mark_rendered(&mut self) {
        self.pending = false;
    }

    /// True while the current frame has not been rendered successfully.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// The active animation.
    pub fn state(&self) -> AnimationState<I> {
        self.state
    }

    /// The frame most recently computed.
    pub fn frame(&self) -> &FrameBuffer<N> {
        &self.frame
    }

    /// The color currently shown at the head of the strip.
    ///
    /// Fades into Idle start from this color.
    pub fn current_color(&self) -> PixelColor {
        self.frame.head()
    }

    /// Current rainbow phase, if the rainbow is running.
    pub fn base_hue(&self) -> Option<u8> {
        match self.state {
            AnimationState::Rainbow { base_hue, .. } => Some(base_hue),
            _ => None,
        }
    }

    /// Computes the next frame if one is due. Returns true when the frame changed.
    fn step(&mut self, now: I) -> bool {
        match self.state {
            AnimationState::Solid(_) => false,
            AnimationState::Fade {
                start,
                end,
                start_time,
                duration_ms,
            } => {
                if !self.is_due(now, self.fade_interval_ms) {
                    return false;
                }
                self.last_render = Some(now);

                let elapsed = elapsed_millis(now, start_time);
                let duration = u64::from(duration_ms);
                if elapsed >= duration {
                    // Final frame is the exact target, not an interpolation.
                    self.state = AnimationState::Solid(end);
                    self.frame.fill(end);
                } else {
                    self.frame.fill(blend(start, end, fade_mix(elapsed, duration)));
                }
                true
            }
            AnimationState::Rainbow {
                start_time,
                base_hue,
            } => {
                if !self.is_due(now, self.rainbow.interval_ms) {
                    return false;
                }
                self.last_render = Some(now);

                let base_hue = base_hue.wrapping_add(self.rainbow.hue_step);
                self.state = AnimationState::Rainbow {
                    start_time,
                    base_hue,
                };
                self.render_rainbow(base_hue);
                true
            }
        }
    }

    /// True when no frame has been rendered yet or `interval_ms` has passed.
    fn is_due(&self, now: I, interval_ms: u32) -> bool {
        self.last_render
            .is_none_or(|last| elapsed_millis(now, last) >= u64::from(interval_ms))
    }

    fn render_rainbow(&mut self, base_hue: u8) {
        let RainbowConfig {
            spread, shimmer, ..
        } = self.rainbow;

        for (index, pixel) in self.frame.iter_mut().enumerate() {
            // Hue is cyclic, so the pixel index only matters modulo 256.
            let offset = index as u8;
            let hue = base_hue.wrapping_add(offset.wrapping_mul(spread));
            let wave = sin8(base_hue.wrapping_add(offset.wrapping_mul(shimmer)));
            let value = RAINBOW_VALUE_BASE + (wave >> 3);
            *pixel = hsv8(hue, u8::MAX, value);
        }
    }
}
