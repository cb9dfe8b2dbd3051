//! Domain primitives for notification aggregation.
//!
//! Purpose: let business rules report violations as values that accumulate
//! per request, without coupling rule code to any concrete store or to the
//! boundary that eventually inspects the result. Keep types immutable and
//! document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Notification — one rejected condition (code + message).
//! - NotificationSink — two-method capability trait (`report`, `drain`).
//! - NotificationCollector — request-scoped ordered store of notifications.
//! - Dispatcher — routes `raise(code, message)` into a borrowed sink.

pub mod dispatcher;
pub mod notification;

pub use self::dispatcher::Dispatcher;
pub use self::notification::{Notification, NotificationCollector, NotificationSink};
