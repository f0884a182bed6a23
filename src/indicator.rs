//! The cooperative scheduler tying commands, state and animation together.
//!
//! Provides [`Indicator`], which owns the strip, the serial link, the state
//! machine and the animator. Each [`tick`](Indicator::tick) drains every
//! buffered command byte, checks the Send timeout, then advances the
//! animation. Nothing in a tick waits: the animator decides on its own
//! whether a frame is due.

use crate::animation::{AnimationState, Animator};
use crate::color::PixelColor;
use crate::command::{Command, decode};
use crate::config::IndicatorConfig;
use crate::frame::FrameBuffer;
use crate::renderer::StripRenderer;
use crate::serial::SerialLink;
use crate::state::{LogicalState, StateMachine, StatusLine};
use crate::time::{TimeInstant, TimeSource};

/// Errors surfaced by the hardware capabilities.
///
/// Neither is produced by the indicator logic itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError<R, S> {
    /// The strip driver failed to push a frame.
    Render(R),
    /// The serial link failed to read or write.
    Serial(S),
}

impl<R: core::fmt::Debug, S: core::fmt::Debug> core::fmt::Display for IndicatorError<R, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            IndicatorError::Render(err) => write!(f, "strip render failed: {:?}", err),
            IndicatorError::Serial(err) => write!(f, "serial link failed: {:?}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<R: core::fmt::Debug, S: core::fmt::Debug> std::error::Error for IndicatorError<R, S> {}

/// Result of an indicator operation.
pub type IndicatorResult<R, S> =
    Result<(), IndicatorError<<R as StripRenderer>::Error, <S as SerialLink>::Error>>;

/// Drives an `N`-pixel strip as a state indicator.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `R` - Strip renderer type
/// * `S` - Serial link type
/// * `N` - Number of pixels on the strip
pub struct Indicator<'t, I, T, R, S, const N: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    R: StripRenderer,
    S: SerialLink,
{
    time_source: &'t T,
    renderer: R,
    serial: S,
    machine: StateMachine<I>,
    animator: Animator<I, N>,
}

impl<'t, I, T, R, S, const N: usize> Indicator<'t, I, T, R, S, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    R: StripRenderer,
    S: SerialLink,
{
    /// Creates an indicator and applies the configured global brightness.
    ///
    /// Nothing is rendered until [`start`](Self::start).
    pub fn new(mut renderer: R, serial: S, time_source: &'t T, config: IndicatorConfig) -> Self {
        renderer.set_global_brightness(config.brightness);

        Self {
            time_source,
            renderer,
            serial,
            machine: StateMachine::new(config),
            animator: Animator::new(&config),
        }
    }

    /// Shows Idle immediately, then reports `STATE:IDLE` and `READY`.
    ///
    /// Both lines are written even if the first frame fails to render; that
    /// error is returned afterwards and the frame is retried on the next tick.
    pub fn start(&mut self) -> IndicatorResult<R, S> {
        let status = self.machine.boot(&mut self.animator);
        let rendered = self.render_current();
        self.emit(status)?;
        info!("indicator ready");
        self.emit(StatusLine::Ready)?;
        rendered
    }

    /// Runs one scheduler iteration.
    ///
    /// All buffered bytes are handled before the animation advances, so a
    /// burst of commands ends in the state of the last one.
    pub fn tick(&mut self) -> IndicatorResult<R, S> {
        while let Some(byte) = self
            .serial
            .read_byte_if_available()
            .map_err(IndicatorError::Serial)?
        {
            self.handle_byte(byte)?;
        }

        let now = self.time_source.now();
        if let Some(command) = self.machine.poll_timeout(now) {
            info!("send timed out");
            self.apply(command, now)?;
        }

        if self.animator.advance(now).is_some() {
            trace!("frame");
            self.render_current()?;
        }
        Ok(())
    }

    /// Decodes and applies one input byte.
    pub fn handle_byte(&mut self, byte: u8) -> IndicatorResult<R, S> {
        match decode(byte) {
            Some(command) => {
                let now = self.time_source.now();
                self.apply(command, now)
            }
            None => Ok(()),
        }
    }

    /// Ticks forever, logging failures and carrying on.
    pub fn run(&mut self) -> ! {
        loop {
            match self.tick() {
                Ok(()) => {}
                Err(IndicatorError::Render(_)) => warn!("strip render failed"),
                Err(IndicatorError::Serial(_)) => warn!("serial link failed"),
            }
        }
    }

    /// Changes the global brightness; takes effect from the next frame.
    pub fn set_global_brightness(&mut self, level: u8) {
        self.renderer.set_global_brightness(level);
    }

    /// The current logical state.
    pub fn state(&self) -> LogicalState {
        self.machine.state()
    }

    /// The active animation.
    pub fn animation(&self) -> AnimationState<I> {
        self.animator.state()
    }

    /// The frame most recently computed.
    pub fn frame(&self) -> &FrameBuffer<N> {
        self.animator.frame()
    }

    /// The color at the head of the strip.
    pub fn current_color(&self) -> PixelColor {
        self.animator.current_color()
    }

    /// The strip renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable access to the strip renderer.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The serial link.
    pub fn serial(&self) -> &S {
        &self.serial
    }

    /// Mutable access to the serial link, for feeding input from a host.
    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Applies a command. The status line is written whether or not the
    /// transition frame renders; a render error is returned after it.
    fn apply(&mut self, command: Command, now: I) -> IndicatorResult<R, S> {
        let status = self.machine.transition(command, now, &mut self.animator);
        let rendered = if status.is_transition() {
            self.render_current()
        } else {
            Ok(())
        };
        self.emit(status)?;
        rendered
    }

    /// Pushes the animator's frame; it stays pending if the strip fails.
    fn render_current(&mut self) -> IndicatorResult<R, S> {
        self.renderer
            .render(self.animator.frame())
            .map_err(IndicatorError::Render)?;
        self.animator.mark_rendered();
        Ok(())
    }

    fn emit(&mut self, status: StatusLine) -> IndicatorResult<R, S> {
        self.serial
            .write_line(status.to_line().as_str())
            .map_err(IndicatorError::Serial)
    }
}
