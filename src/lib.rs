#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Indicator`**: Owns the strip, the serial link and the clock; call `start` once, then `tick` in your main loop (or just `run`)
//! - **`StateMachine`**: Tracks `LogicalState` (Idle/Send/Off) and decides how each transition animates
//! - **`Animator`**: Computes frames for the active `AnimationState` (solid, fade, rainbow) with its own render rate limiting
//! - **`Command`**: One decoded serial byte (`R`, `B`/`I`, `O`, or unrecognized)
//! - **`StatusLine`**: Fixed-format line written back on every transition or ignored byte
//! - **`FrameBuffer`**: One `PixelColor` per pixel, always fully populated
//! - **`StripRenderer`**: Trait to implement for your strip (or use `SmartLedsRenderer`)
//! - **`SerialLink`**: Trait to implement for your UART (or use `IoSerial`)
//! - **`TimeSource`**: Trait to implement for your millisecond clock
//!
//! Pixels are `Srgb<u8>`. Fades blend in 8-bit integer math; the rainbow is
//! generated in HSV and converted through `palette`.

#[macro_use]
mod fmt;

pub mod animation;
pub mod color;
pub mod command;
pub mod config;
pub mod frame;
pub mod indicator;
pub mod renderer;
pub mod serial;
pub mod state;
pub mod time;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use animation::{AnimationState, Animator};
pub use color::{BLACK, BLUE, GREEN, PixelColor, RED, WHITE};
pub use command::{Command, decode};
pub use config::{DEFAULT_PIXEL_COUNT, IdleEntry, IndicatorConfig, RainbowConfig, SendStyle};
pub use frame::FrameBuffer;
pub use indicator::{Indicator, IndicatorError, IndicatorResult};
pub use renderer::{SmartLedsRenderer, StripRenderer};
pub use serial::{IoSerial, SerialLink};
pub use state::{LogicalState, StateMachine, StatusLine};
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
