//! The Idle/Send/Off state machine and its status lines.

use core::fmt::{self, Write};

use heapless::String;

use crate::animation::Animator;
use crate::color::dim_video;
use crate::command::Command;
use crate::config::{IdleEntry, IndicatorConfig, SendStyle};
use crate::time::{TimeInstant, elapsed_millis};

/// Capacity of a formatted status line.
pub const STATUS_LINE_CAPACITY: usize = 16;

/// What the indicator is signalling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LogicalState {
    /// Waiting; steady Idle color.
    Idle,
    /// Data is being sent; rainbow (or Send color).
    Send,
    /// Strip dark.
    Off,
}

/// One line of status output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLine {
    /// Hardware initialised (`READY`).
    Ready,
    /// A transition into the given state (`STATE:...`).
    State(LogicalState),
    /// An input byte that is not a command (`IGNORED:<char>`).
    Ignored(u8),
}

impl StatusLine {
    /// True for lines that report a transition.
    pub fn is_transition(&self) -> bool {
        matches!(self, StatusLine::State(_))
    }

    /// Formats the line without a terminator.
    pub fn to_line(&self) -> String<STATUS_LINE_CAPACITY> {
        let mut line = String::new();
        // Longest line is "IGNORED:" plus one char, well within capacity.
        let _ = write!(line, "{self}");
        line
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLine::Ready => f.write_str("READY"),
            StatusLine::State(LogicalState::Idle) => f.write_str("STATE:IDLE"),
            StatusLine::State(LogicalState::Send) => f.write_str("STATE:SEND"),
            StatusLine::State(LogicalState::Off) => f.write_str("STATE:OFF"),
            StatusLine::Ignored(byte) => {
                write!(f, "IGNORED:{}", char::from(byte.to_ascii_uppercase()))
            }
        }
    }
}

/// Owns the logical state and decides how each transition animates.
///
/// Every transition is driven by a [`Command`]. Repeating a command re-runs
/// its entry behavior: a second `R` restarts the rainbow, a second `B`
/// restarts the fade.
pub struct StateMachine<I: TimeInstant> {
    state: LogicalState,
    send_started: Option<I>,
    config: IndicatorConfig,
}

impl<I: TimeInstant> StateMachine<I> {
    /// Creates a machine in Idle. Call [`boot`](Self::boot) before use.
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            state: LogicalState::Idle,
            send_started: None,
            config,
        }
    }

    /// Enters Idle immediately, without a fade.
    ///
    /// The animator's frame must be rendered afterwards.
    pub fn boot<const N: usize>(&mut self, animator: &mut Animator<I, N>) -> StatusLine {
        self.state = LogicalState::Idle;
        self.send_started = None;
        animator.set_solid(self.config.idle_color);
        debug!("boot: idle");
        StatusLine::State(LogicalState::Idle)
    }

    /// Applies `command` at `now`.
    ///
    /// For transitions the animator's frame has changed and must be rendered
    /// right away. [`Command::Unrecognized`] leaves everything untouched.
    pub fn transition<const N: usize>(
        &mut self,
        command: Command,
        now: I,
        animator: &mut Animator<I, N>,
    ) -> StatusLine {
        let previous = self.state;
        match command {
            Command::StartSend => {
                self.state = LogicalState::Send;
                self.send_started = Some(now);
                match self.config.send_style {
                    SendStyle::Rainbow => animator.start_rainbow(now),
                    SendStyle::Solid => animator.set_solid(self.config.send_color),
                };
            }
            Command::GoIdle => {
                self.state = LogicalState::Idle;
                self.send_started = None;
                let target = self.config.idle_color;
                let start = match self.config.idle_entry {
                    IdleEntry::Direct => animator.current_color(),
                    IdleEntry::Gentle => dim_video(target, self.config.gentle_dim_scale),
                };
                animator.begin_fade(start, target, now, self.config.fade_ms);
            }
            Command::PowerOff => {
                self.state = LogicalState::Off;
                self.send_started = None;
                animator.set_solid(self.config.off_color);
            }
            Command::Unrecognized(byte) => {
                debug!("ignored byte {=u8:#x}", byte);
                return StatusLine::Ignored(byte);
            }
        }

        debug!("transition {} -> {}", previous, self.state);
        StatusLine::State(self.state)
    }

    /// Returns [`Command::GoIdle`] once Send has lasted the configured timeout.
    pub fn poll_timeout(&self, now: I) -> Option<Command> {
        let timeout = self.config.send_timeout_ms?;
        let started = self.send_started?;
        if self.state == LogicalState::Send
            && elapsed_millis(now, started) >= u64::from(timeout)
        {
            Some(Command::GoIdle)
        } else {
            None
        }
    }

    /// The current logical state.
    pub fn state(&self) -> LogicalState {
        self.state
    }

    /// The configuration this machine was built with.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_match_the_protocol() {
        assert_eq!(StatusLine::Ready.to_line().as_str(), "READY");
        assert_eq!(
            StatusLine::State(LogicalState::Idle).to_line().as_str(),
            "STATE:IDLE"
        );
        assert_eq!(
            StatusLine::State(LogicalState::Send).to_line().as_str(),
            "STATE:SEND"
        );
        assert_eq!(
            StatusLine::State(LogicalState::Off).to_line().as_str(),
            "STATE:OFF"
        );
        assert_eq!(StatusLine::Ignored(b'x').to_line().as_str(), "IGNORED:X");
        assert_eq!(StatusLine::Ignored(b'7').to_line().as_str(), "IGNORED:7");
    }

    #[test]
    fn non_ascii_byte_still_fits() {
        let line = StatusLine::Ignored(0xFF).to_line();
        assert!(line.starts_with("IGNORED:"));
        assert_eq!(line.chars().count(), 9);
    }
}
