//! Compile-time switched serial debug output for nRF24 sensor nodes.
//!
//! The `debug_*!` macros forward to a [`DebugPort`] when the `debug` feature
//! is enabled and expand to evaluate-and-discard no-ops when it is not, so
//! release builds carry no output code, no formatting, and no delays while
//! call sites stay untouched.
//!
//! # Features
//!
//! - `debug`: enables real output. Without it every macro is a no-op that still
//!   evaluates its arguments, so disabling debug output never changes
//!   program behavior.
//! - `clock`: calendar output (`debug_date!`, `debug_time!`,
//!   `debug_datetime!`).
//! - `radio-diag`: radio register dumps (`debug_radio!`).
//! - `defmt`: `defmt::Format` derives on public types.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib                       # no-op facade + core modules
//! cargo test --lib --features debug      # active facade
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while firmware builds remain `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod port;
pub mod sink;

#[cfg(feature = "clock")]
pub mod clock;
#[cfg(feature = "radio-diag")]
pub mod radio;

mod macros;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export at top level so firmware can `use node_debug::DebugPort;`
// without spelling out the module paths.
pub use port::DebugPort;
pub use sink::{DEBUG_BAUD, DebugSink, Printable};

#[cfg(feature = "clock")]
pub use clock::CalendarTime;
#[cfg(feature = "radio-diag")]
pub use radio::RadioDiagnostics;
