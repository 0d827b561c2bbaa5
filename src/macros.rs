//! The `debug_*!` facade macros.
//!
//! Every macro takes the [`DebugPort`](crate::DebugPort) as its first
//! argument. With the `debug` feature enabled the macros forward to the
//! port; without it they expand to a block that evaluates and discards
//! their arguments, so argument side effects (and `unused_mut` warnings)
//! are identical in both build modes while the disabled build emits no
//! output, takes no delay, and never touches the sink.
//!
//! `debug_radio!` exists only with the `radio-diag` feature, and the
//! calendar macros only with `clock`, in either build mode. Referencing
//! them without the capability is a compile error, so debug-only code can
//! never silently depend on facilities a release configuration lacks.
//!
//! # Usage
//!
//! ```ignore
//! let mut dbg = DebugPort::new(uart_sink, delay);
//! debug_begin!(dbg);
//! debug_print!(dbg, "last sync: ");
//! debug_datetime!(dbg, now);
//! debug_println!(dbg);
//! debug_radio!(dbg, radio);
//! debug_delay!(dbg, 100);
//! ```

/// Initialize the debug sink at [`DEBUG_BAUD`](crate::DEBUG_BAUD).
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_begin {
    ($port:expr) => {
        $port.begin()
    };
}

/// Emit one value, no terminator.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_print {
    ($port:expr, $value:expr) => {
        $port.print($value)
    };
}

/// Emit one value followed by a line terminator, or a bare terminator
/// when called without a value.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_println {
    ($port:expr) => {
        $port.newline()
    };
    ($port:expr, $value:expr) => {
        $port.println($value)
    };
}

/// Block for the given number of milliseconds. Debug-only pacing: the
/// delay vanishes together with the output when `debug` is off.
#[cfg(feature = "debug")]
#[macro_export]
macro_rules! debug_delay {
    ($port:expr, $ms:expr) => {
        $port.wait($ms)
    };
}

/// Dump the radio's register/state report through the debug sink.
#[cfg(all(feature = "debug", feature = "radio-diag"))]
#[macro_export]
macro_rules! debug_radio {
    ($port:expr, $radio:expr) => {
        $port.radio_details(&$radio)
    };
}

/// Emit `YYYY-MM-DD` for a timestamp, no terminator.
#[cfg(all(feature = "debug", feature = "clock"))]
#[macro_export]
macro_rules! debug_date {
    ($port:expr, $t:expr) => {
        $port.print_date($t)
    };
}

/// Emit `HH:MM:SS` for a timestamp, no terminator.
#[cfg(all(feature = "debug", feature = "clock"))]
#[macro_export]
macro_rules! debug_time {
    ($port:expr, $t:expr) => {
        $port.print_time($t)
    };
}

/// Emit date, a single space, then time.
#[cfg(all(feature = "debug", feature = "clock"))]
#[macro_export]
macro_rules! debug_datetime {
    ($port:expr, $t:expr) => {
        $port.print_datetime($t)
    };
}

// No-op definitions. Arguments are evaluated and discarded so disabling
// debug output never changes observable program behavior.

/// No-op without the `debug` feature.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_begin {
    ($port:expr) => {{
        let _ = &mut $port;
    }};
}

/// No-op without the `debug` feature; the value is still evaluated.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_print {
    ($port:expr, $value:expr) => {{
        let _ = &mut $port;
        let _ = $value;
    }};
}

/// No-op without the `debug` feature; the value is still evaluated.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_println {
    ($port:expr) => {{
        let _ = &mut $port;
    }};
    ($port:expr, $value:expr) => {{
        let _ = &mut $port;
        let _ = $value;
    }};
}

/// No-op without the `debug` feature: no delay is taken.
#[cfg(not(feature = "debug"))]
#[macro_export]
macro_rules! debug_delay {
    ($port:expr, $ms:expr) => {{
        let _ = &mut $port;
        let _ = $ms;
    }};
}

/// No-op without the `debug` feature.
#[cfg(all(not(feature = "debug"), feature = "radio-diag"))]
#[macro_export]
macro_rules! debug_radio {
    ($port:expr, $radio:expr) => {{
        let _ = &mut $port;
        let _ = &$radio;
    }};
}

/// No-op without the `debug` feature; the timestamp is still evaluated.
#[cfg(all(not(feature = "debug"), feature = "clock"))]
#[macro_export]
macro_rules! debug_date {
    ($port:expr, $t:expr) => {{
        let _ = &mut $port;
        let _ = $t;
    }};
}

/// No-op without the `debug` feature; the timestamp is still evaluated.
#[cfg(all(not(feature = "debug"), feature = "clock"))]
#[macro_export]
macro_rules! debug_time {
    ($port:expr, $t:expr) => {{
        let _ = &mut $port;
        let _ = $t;
    }};
}

/// No-op without the `debug` feature; the timestamp is still evaluated.
#[cfg(all(not(feature = "debug"), feature = "clock"))]
#[macro_export]
macro_rules! debug_datetime {
    ($port:expr, $t:expr) => {{
        let _ = &mut $port;
        let _ = $t;
    }};
}
