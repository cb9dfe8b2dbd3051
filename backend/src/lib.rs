//! Backend library modules.
//!
//! This crate is the notification aggregation and response-mapping layer of
//! the backend: domain rules report violations as values rather than raising
//! errors, a request-scoped collector accumulates them, and the boundary maps
//! the final collector state plus the raw operation outcome into a single
//! standardized result envelope. Routing, persistence, and presentation live
//! elsewhere and only consume what is defined here.

pub mod api;
pub mod domain;

pub use api::{Envelope, ResponseMapper};
pub use domain::{Dispatcher, Notification, NotificationCollector, NotificationSink};
