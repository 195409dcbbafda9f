//! Metric name and label definitions.

/// Dispatcher metrics
pub mod dispatch {
    /// Total number of events dispatched
    pub const REQUESTS_TOTAL: &str = "skillroute_dispatch_requests_total";
    /// Events that matched a route
    pub const MATCHED_TOTAL: &str = "skillroute_dispatch_matched_total";
    /// Events no route accepted
    pub const NOT_FOUND_TOTAL: &str = "skillroute_dispatch_not_found_total";
    /// Handler or slot errors surfaced by dispatch
    pub const ERRORS_TOTAL: &str = "skillroute_dispatch_errors_total";
    /// Time from first predicate to final outcome, in seconds
    pub const DURATION_SECONDS: &str = "skillroute_dispatch_duration_seconds";
}

/// Common label keys
pub mod labels {
    pub const KIND: &str = "kind";
    pub const ROUTE: &str = "route";
    pub const ERROR_TYPE: &str = "error_type";
}
