//! The debug port: one explicitly owned handle over the sink and delay
//! collaborators.
//!
//! Firmware constructs the port once at boot and keeps it for the life of
//! the process. All operations here perform real output; build mode
//! selection lives in the `debug_*!` macros, which either forward to
//! these methods or discard their arguments. A build without the `debug`
//! feature never calls into this module, so the whole port is eligible
//! for dead code elimination.

use embedded_hal::delay::DelayNs;

#[cfg(feature = "clock")]
use crate::clock::CalendarTime;
#[cfg(feature = "radio-diag")]
use crate::radio::RadioDiagnostics;
use crate::sink::{DEBUG_BAUD, DebugSink, Printable};

/// Debug output port over a character sink and a blocking delay.
pub struct DebugPort<S, D> {
    sink: S,
    delay: D,
}

impl<S, D> DebugPort<S, D>
where
    S: DebugSink,
    D: DelayNs,
{
    /// Create a port from its collaborators. Call [`begin`](Self::begin)
    /// before the first write.
    pub const fn new(
        sink: S,
        delay: D,
    ) -> Self {
        Self { sink, delay }
    }

    /// Initialize the sink at [`DEBUG_BAUD`].
    ///
    /// Safe to call multiple times; re-initialization is delegated to the
    /// sink.
    pub fn begin(&mut self) { self.sink.init(DEBUG_BAUD); }

    /// Emit one value, no terminator.
    pub fn print<'a>(
        &mut self,
        value: impl Into<Printable<'a>>,
    ) {
        self.sink.write(value.into());
    }

    /// Emit one value followed by a line terminator.
    pub fn println<'a>(
        &mut self,
        value: impl Into<Printable<'a>>,
    ) {
        self.sink.write_line(value.into());
    }

    /// Emit a bare line terminator.
    pub fn newline(&mut self) { self.sink.write_line(Printable::Str("")); }

    /// Block for the given number of milliseconds.
    pub fn wait(
        &mut self,
        ms: u32,
    ) {
        self.delay.delay_ms(ms);
    }

    /// Tear the port down and recover its collaborators.
    pub fn release(self) -> (S, D) { (self.sink, self.delay) }

    /// Ask the radio to dump its register/state report to the sink.
    #[cfg(feature = "radio-diag")]
    pub fn radio_details<R: RadioDiagnostics>(
        &mut self,
        radio: &R,
    ) {
        radio.dump_details(&mut self.sink);
    }

    /// Emit `YYYY-MM-DD` for the given timestamp, no terminator.
    #[cfg(feature = "clock")]
    pub fn print_date(
        &mut self,
        t: impl Into<CalendarTime>,
    ) {
        let s = t.into().date_str();
        self.sink.write(Printable::Str(s.as_str()));
    }

    /// Emit `HH:MM:SS` for the given timestamp, no terminator.
    #[cfg(feature = "clock")]
    pub fn print_time(
        &mut self,
        t: impl Into<CalendarTime>,
    ) {
        let s = t.into().time_str();
        self.sink.write(Printable::Str(s.as_str()));
    }

    /// Emit date, a single space, then time, in that order.
    #[cfg(feature = "clock")]
    pub fn print_datetime(
        &mut self,
        t: impl Into<CalendarTime>,
    ) {
        let t = t.into();
        self.print_date(t);
        self.print(' ');
        self.print_time(t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{CaptureSink, RecordingDelay};

    fn port() -> DebugPort<CaptureSink, RecordingDelay> {
        DebugPort::new(CaptureSink::new(), RecordingDelay::new())
    }

    #[test]
    fn test_begin_initializes_sink_at_debug_baud() {
        let mut dbg = port();
        dbg.begin();
        let (sink, _) = dbg.release();
        assert_eq!(sink.inits, 1);
        assert_eq!(sink.baud, 9600);
    }

    #[test]
    fn test_begin_twice_reinitializes() {
        let mut dbg = port();
        dbg.begin();
        dbg.begin();
        let (sink, _) = dbg.release();
        assert_eq!(sink.inits, 2);
        assert_eq!(sink.baud, 9600);
    }

    #[test]
    fn test_print_forwards_values_verbatim() {
        let mut dbg = port();
        dbg.print("temp: ");
        dbg.print(-12i32);
        dbg.print('C');
        let (sink, _) = dbg.release();
        assert_eq!(sink.out, "temp: -12C");
    }

    #[test]
    fn test_println_terminates_line() {
        let mut dbg = port();
        dbg.println("rx ok");
        dbg.newline();
        let (sink, _) = dbg.release();
        assert_eq!(sink.out, "rx ok\r\n\r\n");
    }

    #[test]
    fn test_wait_requests_exact_delay() {
        let mut dbg = port();
        dbg.wait(25);
        let (_, delay) = dbg.release();
        assert!(delay.calls >= 1);
        assert_eq!(delay.total_ns, 25_000_000);
    }

    #[test]
    fn test_wait_zero_ms() {
        let mut dbg = port();
        dbg.wait(0);
        let (_, delay) = dbg.release();
        assert_eq!(delay.total_ns, 0);
    }

    #[cfg(feature = "radio-diag")]
    #[test]
    fn test_radio_details_dumps_through_sink() {
        use crate::radio::{RadioDiagnostics, write_register};

        struct FakeRadio;

        impl RadioDiagnostics for FakeRadio {
            fn dump_details<S: crate::sink::DebugSink>(
                &self,
                sink: &mut S,
            ) {
                write_register(sink, "STATUS", 0x0e);
            }
        }

        let mut dbg = port();
        dbg.radio_details(&FakeRadio);
        let (sink, _) = dbg.release();
        assert_eq!(sink.out, "STATUS\t = 0x0e\r\n");
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_print_date_from_unix_seconds() {
        let mut dbg = port();
        dbg.print_date(1_709_769_600u32); // 2024-03-07
        let (sink, _) = dbg.release();
        assert_eq!(sink.out, "2024-03-07");
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_print_datetime_is_date_space_time() {
        let t = 1_732_320_000u32 + 23 * 3600 + 59 * 60 + 59; // 2024-11-23 23:59:59
        let mut dbg = port();
        dbg.print_datetime(t);
        let (sink, _) = dbg.release();
        assert_eq!(sink.out, "2024-11-23 23:59:59");
    }
}
