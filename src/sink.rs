//! Character-output sink contract and printable values.
//!
//! The facade never talks to a UART directly: firmware supplies a
//! [`DebugSink`] implementation (typically a thin wrapper over the board's
//! serial peripheral) and the port forwards [`Printable`] values to it.

use core::fmt;

/// Baud rate the sink is initialized at by `debug_begin!`.
pub const DEBUG_BAUD: u32 = 9_600;

/// A printable debug value.
///
/// Closed set of the value shapes debug statements emit: text, a single
/// character, or a decimal integer. `From` conversions cover the common
/// widths so call sites can pass values directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Printable<'a> {
    /// Text, emitted verbatim.
    Str(&'a str),
    /// Single character.
    Char(char),
    /// Signed integer, emitted in decimal.
    Int(i32),
    /// Unsigned integer, emitted in decimal.
    Uint(u32),
}

impl<'a> From<&'a str> for Printable<'a> {
    fn from(s: &'a str) -> Self { Self::Str(s) }
}

impl From<char> for Printable<'_> {
    fn from(c: char) -> Self { Self::Char(c) }
}

impl From<i32> for Printable<'_> {
    fn from(v: i32) -> Self { Self::Int(v) }
}

impl From<i16> for Printable<'_> {
    fn from(v: i16) -> Self { Self::Int(v as i32) }
}

impl From<i8> for Printable<'_> {
    fn from(v: i8) -> Self { Self::Int(v as i32) }
}

impl From<u32> for Printable<'_> {
    fn from(v: u32) -> Self { Self::Uint(v) }
}

impl From<u16> for Printable<'_> {
    fn from(v: u16) -> Self { Self::Uint(v as u32) }
}

impl From<u8> for Printable<'_> {
    fn from(v: u8) -> Self { Self::Uint(v as u32) }
}

impl fmt::Display for Printable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Char(c) => write!(f, "{c}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

/// Character-output sink the debug port writes through.
///
/// Implementations wrap whatever byte pipe the board exposes (hardware
/// UART, USB CDC, RTT). Writes are infallible by contract: a sink that can
/// fail should drop the write rather than surface an error into debug-only
/// code paths.
pub trait DebugSink {
    /// Bring the sink up at the given baud rate.
    ///
    /// May be called more than once; re-initialization must be safe.
    fn init(
        &mut self,
        baud: u32,
    );

    /// Emit one value, no terminator.
    fn write(
        &mut self,
        value: Printable<'_>,
    );

    /// Emit one value followed by CR+LF.
    fn write_line(
        &mut self,
        value: Printable<'_>,
    ) {
        self.write(value);
        self.write(Printable::Str("\r\n"));
    }
}
