//! Build-time configuration of the indicator.

use crate::color::{BLACK, BLUE, PixelColor, RED};

/// Pixel count of the reference strip.
pub const DEFAULT_PIXEL_COUNT: usize = 96;

/// How the Idle state is entered from a command or a Send timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IdleEntry {
    /// Fade from whatever is currently displayed to the Idle color.
    Direct,
    /// Start from a nearly dark Idle color and fade up to full Idle color.
    Gentle,
}

/// What the Send state displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendStyle {
    /// Moving hue gradient with a subtle shimmer.
    Rainbow,
    /// The configured Send color, shown immediately.
    Solid,
}

/// Rainbow rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowConfig {
    /// Hue of the first frame after entering Send.
    pub start_hue: u8,
    /// Base hue advance per rendered frame.
    pub hue_step: u8,
    /// Hue offset between neighbouring pixels.
    pub spread: u8,
    /// Phase offset between neighbouring pixels for the brightness shimmer.
    pub shimmer: u8,
    /// Minimum time between rainbow frames, in milliseconds.
    pub interval_ms: u32,
}

/// Indicator configuration. All fields are fixed when the firmware is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    /// Global strip brightness (255 = unscaled).
    pub brightness: u8,
    /// Color shown in Idle.
    pub idle_color: PixelColor,
    /// Color shown in Send when [`SendStyle::Solid`] is selected.
    pub send_color: PixelColor,
    /// Color shown in Off.
    pub off_color: PixelColor,
    /// Duration of the fade into Idle, in milliseconds.
    pub fade_ms: u32,
    /// Minimum time between fade frames, in milliseconds.
    pub fade_interval_ms: u32,
    /// Send returns to Idle on its own after this many milliseconds.
    pub send_timeout_ms: Option<u32>,
    /// How Idle is entered after boot.
    pub idle_entry: IdleEntry,
    /// Video scale applied to the Idle color at the start of a gentle entry.
    pub gentle_dim_scale: u8,
    /// What Send displays.
    pub send_style: SendStyle,
    /// Rainbow parameters.
    pub rainbow: RainbowConfig,
}

impl IndicatorConfig {
    /// The values the indicator firmware ships with.
    pub const DEFAULT: Self = Self {
        brightness: 180,
        idle_color: BLUE,
        send_color: RED,
        off_color: BLACK,
        fade_ms: 2000,
        fade_interval_ms: 20,
        send_timeout_ms: Some(10_000),
        idle_entry: IdleEntry::Direct,
        gentle_dim_scale: 32,
        send_style: SendStyle::Rainbow,
        rainbow: RainbowConfig {
            start_hue: 0,
            hue_step: 4,
            spread: 5,
            shimmer: 16,
            interval_ms: 15,
        },
    };

    /// Overrides the global brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Overrides the Idle color.
    #[must_use]
    pub const fn with_idle_color(mut self, color: PixelColor) -> Self {
        self.idle_color = color;
        self
    }

    /// Overrides the solid Send color.
    #[must_use]
    pub const fn with_send_color(mut self, color: PixelColor) -> Self {
        self.send_color = color;
        self
    }

    /// Overrides the Idle fade duration.
    #[must_use]
    pub const fn with_fade_ms(mut self, fade_ms: u32) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    /// Overrides the Send auto-timeout. `None` keeps Send until the next command.
    #[must_use]
    pub const fn with_send_timeout_ms(mut self, timeout: Option<u32>) -> Self {
        self.send_timeout_ms = timeout;
        self
    }

    /// Selects how Idle is entered.
    #[must_use]
    pub const fn with_idle_entry(mut self, entry: IdleEntry) -> Self {
        self.idle_entry = entry;
        self
    }

    /// Selects what Send displays.
    #[must_use]
    pub const fn with_send_style(mut self, style: SendStyle) -> Self {
        self.send_style = style;
        self
    }

    /// Overrides the rainbow parameters.
    #[must_use]
    pub const fn with_rainbow(mut self, rainbow: RainbowConfig) -> Self {
        self.rainbow = rainbow;
        self
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
