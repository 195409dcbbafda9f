use std::sync::Arc;

use {
    skillroute_protocol::Event,
    tracing::{debug, info, warn},
};

#[cfg(feature = "metrics")]
use skillroute_metrics::{counter, dispatch as dispatch_metrics, histogram, labels};

use crate::{
    Error, Result,
    handler::{Handler, Outcome},
};

/// Ordered list of routes. The first route returning [`Outcome::Matched`]
/// answers the event.
pub struct Dispatcher<R> {
    routes: Vec<Arc<dyn Handler<R>>>,
}

impl<R: Send + 'static> Dispatcher<R> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn from_routes(routes: Vec<Arc<dyn Handler<R>>>) -> Self {
        Self { routes }
    }

    /// Append a route. Routes are tried in insertion order.
    pub fn route<H>(mut self, handler: H) -> Self
    where
        H: Handler<R> + 'static,
    {
        self.routes.push(Arc::new(handler));
        self
    }

    pub fn push(&mut self, handler: Arc<dyn Handler<R>>) {
        self.routes.push(handler);
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Offer the event to each route in order.
    ///
    /// Each route is awaited to completion before the next one is looked
    /// at, so a slow early route still wins over a fast later one. Routes
    /// after the winner never run. Errors from a route abort the scan and
    /// are returned unchanged; running out of routes yields
    /// [`Error::NotFound`].
    pub async fn dispatch(&self, event: &Event) -> Result<R> {
        #[cfg(feature = "metrics")]
        let start = std::time::Instant::now();

        #[cfg(feature = "metrics")]
        counter!(
            dispatch_metrics::REQUESTS_TOTAL,
            labels::KIND => event.kind().as_str()
        )
        .increment(1);

        debug!(
            kind = %event.kind(),
            intent = event.intent_name().unwrap_or("-"),
            routes = self.routes.len(),
            "dispatching event"
        );

        for (index, route) in self.routes.iter().enumerate() {
            match route.handle(event).await {
                Ok(Outcome::Matched(response)) => {
                    info!(kind = %event.kind(), route = index, "route matched");

                    #[cfg(feature = "metrics")]
                    {
                        counter!(
                            dispatch_metrics::MATCHED_TOTAL,
                            labels::KIND => event.kind().as_str(),
                            labels::ROUTE => index.to_string()
                        )
                        .increment(1);
                        histogram!(dispatch_metrics::DURATION_SECONDS)
                            .record(start.elapsed().as_secs_f64());
                    }

                    return Ok(response);
                },
                Ok(Outcome::Skipped) => {},
                Err(e) => {
                    warn!(kind = %event.kind(), route = index, error = %e, "route failed");

                    #[cfg(feature = "metrics")]
                    counter!(
                        dispatch_metrics::ERRORS_TOTAL,
                        labels::ERROR_TYPE => e.code()
                    )
                    .increment(1);

                    return Err(e);
                },
            }
        }

        info!(
            kind = %event.kind(),
            intent = event.intent_name().unwrap_or("-"),
            "no route matched"
        );

        #[cfg(feature = "metrics")]
        counter!(
            dispatch_metrics::NOT_FOUND_TOTAL,
            labels::KIND => event.kind().as_str()
        )
        .increment(1);

        Err(Error::NotFound)
    }
}

impl<R: Send + 'static> Default for Dispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}
