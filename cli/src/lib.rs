//! Host crate for the joke collection pipeline.
//!
//! # Design
//! Everything with real I/O lives here: the blocking HTTP transport plugged
//! into `jokes_core`, CSV sheet persistence, environment configuration and
//! the process-wide logger. The binary in `main.rs` wires these together
//! and owns the run's lifecycle; the core stays free of I/O concerns.

pub mod config;
pub mod logging;
pub mod sheet;
pub mod transport;
