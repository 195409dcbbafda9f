//! Route skill events to the first handler that accepts them.
//!
//! A [`Dispatcher`] holds an ordered list of handlers. Each handler is usually a
//! [`Guarded`] pair: a [`Predicate`] checked first, and the inner handler run
//! only when it matches. Dispatch walks the list in order, awaiting each
//! handler before looking at the next, and stops at the first
//! [`Outcome::Matched`].
//!
//! ```rust,ignore
//! let dispatcher = Dispatcher::new()
//!     .route(intent("Stop", handler_fn(|_| async { Ok(Outcome::Matched("bye")) })))
//!     .route(launch(handler_fn(|_| async { Ok(Outcome::Matched("hi")) })));
//! let reply = dispatcher.dispatch(&event).await?;
//! ```

pub mod dispatcher;
pub mod error;
pub mod guard;
pub mod handler;
pub mod predicate;
pub mod slots;

pub use {
    dispatcher::Dispatcher,
    error::{Error, Result},
    guard::{Guarded, guard, intent, launch, session_ended},
    handler::{FnHandler, Handler, Outcome, handler_fn},
    predicate::{Predicate, RequestMatcher},
    slots::{SlotHandler, with_slots, with_slots_policy},
};
