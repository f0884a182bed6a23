//! Shared test infrastructure for led-indicator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;

use led_indicator::{
    FrameBuffer, Indicator, IndicatorConfig, Millis, PixelColor, SerialLink, StripRenderer,
    TimeSource,
};

/// Pixel count used throughout the tests.
pub const PIXELS: usize = 8;

pub type TestIndicator<'t> = Indicator<'t, Millis, MockTimeSource, MockStrip, MockSerial, PIXELS>;

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<Millis>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(Millis(millis)),
        }
    }

    pub fn now_millis(&self) -> u32 {
        self.current_time.get().0
    }

    /// Advance time by the given number of milliseconds, wrapping like the hardware counter
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(Millis(current.0.wrapping_add(millis)));
    }
}

impl TimeSource<Millis> for MockTimeSource {
    fn now(&self) -> Millis {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Strip
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripFault;

/// Mock strip that records every rendered frame
pub struct MockStrip {
    frames: Vec<Vec<PixelColor>>,
    brightness: u8,
    failing: bool,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            brightness: 255,
            failing: false,
        }
    }

    pub fn frames(&self) -> &[Vec<PixelColor>] {
        &self.frames
    }

    pub fn render_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> &[PixelColor] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }
}

impl StripRenderer for MockStrip {
    type Error = StripFault;

    fn render<const N: usize>(&mut self, frame: &FrameBuffer<N>) -> Result<(), Self::Error> {
        if self.failing {
            return Err(StripFault);
        }
        self.frames.push(frame.to_vec());
        Ok(())
    }

    fn set_global_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

/// Mock serial link with a scripted input buffer and captured output lines
pub struct MockSerial {
    input: VecDeque<u8>,
    lines: Vec<String>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            lines: Vec::new(),
        }
    }

    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes.iter().copied());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

impl SerialLink for MockSerial {
    type Error = core::convert::Infallible;

    fn read_byte_if_available(&mut self) -> Result<Option<u8>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds and starts an indicator with the given configuration
pub fn started(timer: &MockTimeSource, config: IndicatorConfig) -> TestIndicator<'_> {
    let mut indicator = Indicator::new(MockStrip::new(), MockSerial::new(), timer, config);
    indicator.start().unwrap();
    indicator.serial_mut().take_lines();
    indicator
}

/// Feeds bytes and runs one tick
pub fn send(indicator: &mut TestIndicator<'_>, bytes: &[u8]) {
    indicator.serial_mut().push_input(bytes);
    indicator.tick().unwrap();
}

/// Advances the clock in `step` increments, ticking after each one
pub fn run_for(indicator: &mut TestIndicator<'_>, timer: &MockTimeSource, millis: u32, step: u32) {
    let mut elapsed = 0;
    while elapsed < millis {
        let step = step.min(millis - elapsed);
        timer.advance(step);
        indicator.tick().unwrap();
        elapsed += step;
    }
}

/// True when every pixel of `frame` is `color`
pub fn is_solid(frame: &[PixelColor], color: PixelColor) -> bool {
    !frame.is_empty() && frame.iter().all(|pixel| *pixel == color)
}
