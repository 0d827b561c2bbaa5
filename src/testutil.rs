//! Host-side test doubles for the sink and delay collaborators.

use embedded_hal::delay::DelayNs;

use crate::sink::{DebugSink, Printable};

/// Sink that records everything written to it as a string.
pub struct CaptureSink {
    /// Captured output.
    pub out: String,
    /// Number of times `init` was called.
    pub inits: usize,
    /// Baud rate passed to the most recent `init`.
    pub baud: u32,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            inits: 0,
            baud: 0,
        }
    }
}

impl DebugSink for CaptureSink {
    fn init(
        &mut self,
        baud: u32,
    ) {
        self.inits += 1;
        self.baud = baud;
    }

    fn write(
        &mut self,
        value: Printable<'_>,
    ) {
        use std::fmt::Write;
        let _ = write!(self.out, "{value}");
    }
}

/// Delay that records requested time instead of sleeping.
pub struct RecordingDelay {
    /// Total delay requested, in nanoseconds.
    pub total_ns: u64,
    /// Number of individual delay calls.
    pub calls: usize,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self {
            total_ns: 0,
            calls: 0,
        }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}
