//! Metric names for skillroute.
//!
//! Consumers record through the `metrics` facade macros re-exported here,
//! behind their own `metrics` feature. Nothing is exported until the host
//! installs a recorder.
//!
//! ```rust,ignore
//! use skillroute_metrics::{counter, dispatch, labels};
//!
//! counter!(dispatch::REQUESTS_TOTAL, labels::KIND => "IntentRequest").increment(1);
//! ```

mod definitions;

pub use definitions::*;

pub use metrics::{counter, histogram};
