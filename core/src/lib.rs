//! Synchronous collection pipeline for the joke API.
//!
//! # Overview
//! Fetches the API's category listing, then one random joke per category,
//! assembling the successes into normalized `JokeRecord`s ready for a
//! tabular sheet. One blocking call at a time, single attempt per call.
//!
//! # Design
//! - `ApiClient` performs I/O only through an injected `HttpTransport`, so
//!   the whole pipeline runs against canned responses in tests and against
//!   a real blocking transport in the host binary.
//! - Hard failures (transport faults, error statuses, unparseable bodies)
//!   are typed `ApiError`s and abort the run; a category that merely yields
//!   no usable joke is `None`, absorbed by the `Collector`.
//! - Logging goes through the `log` facade; installing a logger is the
//!   host's job.

pub mod client;
pub mod collector;
pub mod error;
pub mod http;
pub mod types;

pub use client::ApiClient;
pub use collector::Collector;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
pub use types::{to_rows, JokeRecord, COLUMNS, PLACEHOLDER};
