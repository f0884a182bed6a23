//! Decoding of single-byte serial commands.

/// A request decoded from one input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Enter Send (`R`).
    StartSend,
    /// Enter Idle (`B` or `I`).
    GoIdle,
    /// Enter Off (`O`).
    PowerOff,
    /// Any other byte. Reported, never acted on.
    Unrecognized(u8),
}

/// Decodes one raw byte, ignoring letter case.
///
/// Line terminators (`\n`, `\r`) decode to `None` and are silently dropped.
pub fn decode(byte: u8) -> Option<Command> {
    match byte.to_ascii_uppercase() {
        b'\n' | b'\r' => None,
        b'R' => Some(Command::StartSend),
        b'B' | b'I' => Some(Command::GoIdle),
        b'O' => Some(Command::PowerOff),
        _ => Some(Command::Unrecognized(byte)),
    }
}
