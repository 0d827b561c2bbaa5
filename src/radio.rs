//! Radio diagnostics reporting.
//!
//! The nRF24 driver owns its register map; the debug facade only asks it to
//! render a report. [`RadioDiagnostics`] is the seam between the two:
//! `debug_radio!(port, radio)` hands the port's sink to the radio, and the
//! radio writes whatever register/state lines it considers useful.

use core::fmt::Write;

use heapless::String;

use crate::sink::{DebugSink, Printable};

/// `NAME\t = 0xHH` with the longest register names in use.
const REG_LINE_LEN: usize = 24;

/// A peripheral that can dump its register/state details to a debug sink.
pub trait RadioDiagnostics {
    /// Write a human-readable register/state report, one line per entry.
    fn dump_details<S: DebugSink>(
        &self,
        sink: &mut S,
    );
}

/// Write one `NAME\t = 0xHH` register line.
///
/// Helper for [`RadioDiagnostics`] implementors so all dumps share the
/// same shape.
pub fn write_register<S: DebugSink>(
    sink: &mut S,
    name: &str,
    value: u8,
) {
    let mut line: String<REG_LINE_LEN> = String::new();
    let _ = write!(line, "{name}\t = 0x{value:02x}");
    sink.write_line(Printable::Str(line.as_str()));
}
