//! HTTP adapter for a skill [`Dispatcher`](skillroute_routing::Dispatcher).
//!
//! Parses the JSON request body into an event, dispatches it, and maps
//! dispatch errors onto HTTP status codes with an [`ErrorShape`] body.
//!
//! [`ErrorShape`]: skillroute_protocol::ErrorShape

pub mod server;
pub mod telemetry;

pub use {
    server::{build_app, serve},
    telemetry::init_telemetry,
};
