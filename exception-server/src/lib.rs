//! Exception server
//!
//! A small HTTP server that answers a fixed set of paths with error chains
//! rendered the same way every time, so HTTP clients can be tested against
//! known error shapes.
//!
//! - [`chain`] builds and renders error chains.
//! - [`scenario`] holds the static path → outcome → status table.
//! - [`routes`] dispatches requests to scenarios and encodes responses.
//! - [`recovery`] turns handler panics into `500` responses.
//! - [`server`] assembles the router and runs it.

pub mod chain;
pub mod cmd;
pub mod config;
pub mod error;
pub mod recovery;
pub mod routes;
pub mod scenario;
pub mod server;
pub mod signal;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use error::Error;
