//! Pixel colors and the 8-bit color math used by the animations.
//!
//! Pixels are stored as `Srgb<u8>` so that a frame is exactly what the strip
//! receives. Procedural colors (the rainbow) are generated in HSV and
//! converted through `palette`. Blending and dimming are done in integer
//! math on the 8-bit channels.

use palette::{FromColor, Hsv, Srgb};

/// One pixel: three 8-bit channels.
pub type PixelColor = Srgb<u8>;

/// All channels off.
pub const BLACK: PixelColor = PixelColor::new(0, 0, 0);
/// Full red.
pub const RED: PixelColor = PixelColor::new(255, 0, 0);
/// Full green.
pub const GREEN: PixelColor = PixelColor::new(0, 255, 0);
/// Full blue.
pub const BLUE: PixelColor = PixelColor::new(0, 0, 255);
/// All channels full.
pub const WHITE: PixelColor = PixelColor::new(255, 255, 255);

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
///
/// `hue` is in degrees, `saturation` and `value` in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Creates a pixel from 8-bit HSV, where the full hue circle is 0-255.
pub fn hsv8(hue: u8, saturation: u8, value: u8) -> PixelColor {
    let degrees = f32::from(hue) * (360.0 / 256.0);
    hsv(
        degrees,
        f32::from(saturation) / 255.0,
        f32::from(value) / 255.0,
    )
    .into_format::<u8>()
}

/// Blends one 8-bit channel toward another.
///
/// `amount_of_b` of 0 returns `a`; 255 returns a value within one step of `b`.
#[inline]
pub fn blend8(a: u8, b: u8, amount_of_b: u8) -> u8 {
    let a = i32::from(a);
    let b = i32::from(b);
    let amount = i32::from(amount_of_b);

    // Result is always between a and b, so it fits in a u8.
    (a + (((b - a) * amount) >> 8)) as u8
}

/// Blends two colors channel by channel, producing a new color.
pub fn blend(start: PixelColor, end: PixelColor, amount_of_end: u8) -> PixelColor {
    PixelColor::new(
        blend8(start.red, end.red, amount_of_end),
        blend8(start.green, end.green, amount_of_end),
        blend8(start.blue, end.blue, amount_of_end),
    )
}

/// Fade progress in 0-255 for `elapsed` out of `duration` milliseconds.
///
/// A zero duration is treated as one millisecond. The result never decreases
/// as `elapsed` grows and saturates at 255.
pub fn fade_mix(elapsed: u64, duration: u64) -> u8 {
    let duration = duration.max(1);
    let mix = elapsed.saturating_mul(255) / duration;
    u8::try_from(mix.min(255)).unwrap_or(u8::MAX)
}

/// Scales a channel by `scale / 256`, never dimming a lit channel to zero.
#[inline]
pub fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((u16::from(value) * u16::from(scale)) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Dims every channel of a color with [`scale8_video`].
pub fn dim_video(color: PixelColor, scale: u8) -> PixelColor {
    PixelColor::new(
        scale8_video(color.red, scale),
        scale8_video(color.green, scale),
        scale8_video(color.blue, scale),
    )
}

/// 8-bit sine: one full period over `theta` 0-255, output centred on 128.
pub fn sin8(theta: u8) -> u8 {
    let angle = f32::from(theta) * (core::f32::consts::TAU / 256.0);
    let value = 128.0 + 127.0 * libm::sinf(angle);
    libm::roundf(value).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(RED, BLUE, 0), RED);
        let almost = blend(BLACK, WHITE, 255);
        assert!(almost.red >= 254 && almost.green >= 254 && almost.blue >= 254);
    }

    #[test]
    fn blend8_stays_between_endpoints() {
        for a in 0..=u8::MAX {
            for b in 0..=u8::MAX {
                for amount in 0..=u8::MAX {
                    let mixed = blend8(a, b, amount);
                    assert!(mixed >= a.min(b) && mixed <= a.max(b), "{a} {b} {amount}");
                }
            }
        }
    }

    #[test]
    fn blend8_full_swing() {
        assert_eq!(blend8(0, 255, 255), 254);
        assert_eq!(blend8(255, 0, 255), 0);
    }

    #[test]
    fn blend_downward_channel() {
        assert_eq!(blend8(200, 0, 128), 100);
    }

    #[test]
    fn fade_mix_clamps_and_handles_zero_duration() {
        assert_eq!(fade_mix(0, 2000), 0);
        assert_eq!(fade_mix(1000, 2000), 127);
        assert_eq!(fade_mix(5000, 2000), 255);
        assert_eq!(fade_mix(0, 0), 0);
        assert_eq!(fade_mix(1, 0), 255);
    }

    #[test]
    fn fade_mix_is_monotonic() {
        let mut previous = 0;
        for elapsed in 0..2000 {
            let mix = fade_mix(elapsed, 2000);
            assert!(mix >= previous);
            previous = mix;
        }
    }

    #[test]
    fn scale8_video_keeps_lit_channels_lit() {
        assert_eq!(scale8_video(255, 32), 32);
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
    }

    #[test]
    fn sin8_shape() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn hsv8_primaries() {
        assert_eq!(hsv8(0, 255, 255), RED);
        assert_eq!(hsv8(0, 0, 0), BLACK);
    }
}
