//! The frame buffer: one color per pixel of the strip.

use core::ops::{Deref, DerefMut};

use crate::color::{BLACK, PixelColor};

/// Fixed-size pixel data for an `N`-pixel strip.
///
/// Every pixel always holds a defined color. The animator fills the whole
/// buffer before handing it to a [`StripRenderer`](crate::StripRenderer), so
/// a render always pushes one complete frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameBuffer<const N: usize>([PixelColor; N]);

impl<const N: usize> FrameBuffer<N> {
    /// Number of pixels in this frame.
    pub const LEN: usize = N;

    /// Creates an all-black frame.
    pub const fn new() -> Self {
        Self([BLACK; N])
    }

    /// Creates a frame with every pixel set to `color`.
    pub const fn filled(color: PixelColor) -> Self {
        Self([color; N])
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: PixelColor) {
        self.0 = [color; N];
    }

    /// The first pixel, or black for an empty strip.
    pub fn head(&self) -> PixelColor {
        self.0.first().copied().unwrap_or(BLACK)
    }
}

impl<const N: usize> Deref for FrameBuffer<N> {
    type Target = [PixelColor; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for FrameBuffer<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
