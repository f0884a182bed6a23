//! Integration tests for color module

use led_indicator::color::{self, PixelColor};
use led_indicator::{BLACK, BLUE, RED, Srgb};

fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.01;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

#[test]
fn hsv_creates_primary_colors() {
    // Red (hue = 0)
    let red = color::hsv(0.0, 1.0, 1.0);
    assert!(colors_equal(red, Srgb::new(1.0, 0.0, 0.0)));

    // Green (hue = 120)
    let green = color::hsv(120.0, 1.0, 1.0);
    assert!(colors_equal(green, Srgb::new(0.0, 1.0, 0.0)));

    // Blue (hue = 240)
    let blue = color::hsv(240.0, 1.0, 1.0);
    assert!(colors_equal(blue, Srgb::new(0.0, 0.0, 1.0)));
}

#[test]
fn hsv_handles_value() {
    let dim = color::hsv(0.0, 1.0, 0.5);
    assert!(dim.red > 0.49 && dim.red < 0.51);

    let black = color::hsv(0.0, 1.0, 0.0);
    assert!(colors_equal(black, Srgb::new(0.0, 0.0, 0.0)));
}

#[test]
fn hue_wraps_around_360() {
    let red1 = color::hue(0.0);
    let red2 = color::hue(360.0);
    assert!(colors_equal(red1, red2));
}

#[test]
fn hsv8_covers_the_circle_in_256_steps() {
    // 256 steps span the full circle, so 85 is a third of the way round
    let green = color::hsv8(85, 255, 255);
    assert!(green.green > 250 && green.red < 5 && green.blue < 5);

    let blue = color::hsv8(171, 255, 255);
    assert!(blue.blue > 250 && blue.red < 5 && blue.green < 5);
}

#[test]
fn hsv8_value_dims() {
    let dim = color::hsv8(0, 255, 128);
    assert_eq!(dim, PixelColor::new(128, 0, 0));
    assert_eq!(color::hsv8(42, 255, 0), BLACK);
}

#[test]
fn blend_moves_toward_end_color() {
    let quarter = color::blend(RED, BLUE, 64);
    assert!(quarter.red > quarter.blue);

    let three_quarters = color::blend(RED, BLUE, 192);
    assert!(three_quarters.blue > three_quarters.red);
}

#[test]
fn dim_video_keeps_hue() {
    assert_eq!(color::dim_video(BLUE, 32), PixelColor::new(0, 0, 32));
    assert_eq!(color::dim_video(BLACK, 32), BLACK);
}

#[test]
fn sin8_is_periodic_and_symmetric() {
    for theta in 0..=u8::MAX {
        let mirrored = color::sin8(theta.wrapping_neg());
        let sum = u16::from(color::sin8(theta)) + u16::from(mirrored);
        assert!((255..=257).contains(&sum), "theta {theta}: sum {sum}");
    }
}
