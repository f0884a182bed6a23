//! The serial link: command bytes in, status lines out.

use embedded_io::{ErrorType, Read, ReadReady, Write};

/// Trait for abstracting the serial transport.
///
/// Reads must never block: when no byte is buffered, return `Ok(None)`.
pub trait SerialLink {
    /// Transport error.
    type Error;

    /// Returns the next buffered byte, if any.
    fn read_byte_if_available(&mut self) -> Result<Option<u8>, Self::Error>;

    /// Writes `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// [`SerialLink`] over any `embedded-io` UART that can report read readiness.
///
/// Lines are terminated with `\r\n`.
pub struct IoSerial<T> {
    io: T,
}

impl<T> IoSerial<T> {
    /// Wraps a UART.
    pub fn new(io: T) -> Self {
        Self { io }
    }

    /// The wrapped UART.
    pub fn get_ref(&self) -> &T {
        &self.io
    }

    /// Releases the wrapped UART.
    pub fn into_inner(self) -> T {
        self.io
    }
}

impl<T> SerialLink for IoSerial<T>
where
    T: Read + ReadReady + Write,
{
    type Error = <T as ErrorType>::Error;

    fn read_byte_if_available(&mut self) -> Result<Option<u8>, Self::Error> {
        if !self.io.read_ready()? {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        let count = self.io.read(&mut byte)?;
        Ok((count > 0).then_some(byte[0]))
    }

    fn write_line(&mut self, line: &str) -> Result<(), Self::Error> {
        self.io.write_all(line.as_bytes())?;
        self.io.write_all(b"\r\n")
    }
}
