//! Pushing frames to the physical strip.
//!
//! [`StripRenderer`] is the hardware seam. [`SmartLedsRenderer`] implements it
//! for any `smart-leds` driver (WS2812 over SPI, RMT, PIO, ...), applying the
//! global brightness on the way out.

use smart_leds::{RGB8, SmartLedsWrite, brightness};

use crate::frame::FrameBuffer;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip driver. `render` receives one complete
/// [`FrameBuffer`] and should push it in a single transfer.
pub trait StripRenderer {
    /// Error reported by the underlying driver.
    type Error;

    /// Pushes one full frame to the strip.
    fn render<const N: usize>(&mut self, frame: &FrameBuffer<N>) -> Result<(), Self::Error>;

    /// Sets the global brightness applied to every subsequent frame.
    fn set_global_brightness(&mut self, level: u8);
}

/// [`StripRenderer`] over a `smart-leds` writer.
pub struct SmartLedsRenderer<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsRenderer<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wraps `writer`, scaling every frame by `brightness` (255 = unscaled).
    pub fn new(writer: W, brightness: u8) -> Self {
        Self { writer, brightness }
    }

    /// Current global brightness.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Releases the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripRenderer for SmartLedsRenderer<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    type Error = W::Error;

    fn render<const N: usize>(&mut self, frame: &FrameBuffer<N>) -> Result<(), Self::Error> {
        let rgb = frame
            .iter()
            .map(|pixel| RGB8::new(pixel.red, pixel.green, pixel.blue));
        self.writer.write(brightness(rgb, self.brightness))
    }

    fn set_global_brightness(&mut self, level: u8) {
        self.brightness = level;
    }
}
