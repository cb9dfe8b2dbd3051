//! Outcome-to-envelope decision logic.
//!
//! After an operation runs, the boundary asks the [`ResponseMapper`] to fold
//! the request's final notification state and the raw outcome value into one
//! [`Envelope`]. The decision is pure: no I/O, no retries, exactly one
//! variant per boundary call. Rendering the envelope onto a transport lives
//! in [`crate::api::http`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::NotificationSink;

/// Field-error key under which accumulated domain notifications surface.
///
/// Kept as a single fixed key for compatibility with existing clients; the
/// per-record `code` is deliberately not surfaced here. Override per mapper
/// with [`ResponseMapper::with_error_key`].
pub const DOMAIN_NOTIFICATION_KEY: &str = "DomainNotification";

/// Field name → ordered list of messages, as produced by input validation or
/// by the notification collector.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Caller-supplied pointer to a freshly created resource.
///
/// Opaque to this layer: the boundary names a handler `action` and whatever
/// `route` values that handler needs, and the mapper passes both through
/// untouched on the creation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ResourceLocation {
    #[schema(example = "get_client")]
    action: String,
    route: Value,
}

impl ResourceLocation {
    /// Describe where the created resource can be fetched.
    pub fn new(action: impl Into<String>, route: Value) -> Self {
        Self {
            action: action.into(),
            route,
        }
    }

    /// Handler name the boundary resolves into a URL.
    pub fn action(&self) -> &str {
        self.action.as_str()
    }

    /// Route values for that handler.
    pub fn route(&self) -> &Value {
        &self.route
    }
}

/// Standardized result of one boundary call.
///
/// Exactly one variant is produced per call. `Created` is the success case
/// additionally tagged with the resource location supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// Operation succeeded and produced a value.
    Success {
        /// The raw outcome value.
        data: T,
    },
    /// Creation succeeded; `location` points at the new resource.
    Created {
        /// The created representation.
        data: T,
        /// Caller-supplied pointer to the created resource.
        location: ResourceLocation,
    },
    /// Operation succeeded with no content to return.
    SuccessEmpty,
    /// Validation passed but the requested entity does not exist.
    NotFound,
    /// Input validation failed or domain notifications were raised.
    ClientError {
        /// Field name → ordered messages.
        errors: FieldErrors,
    },
}

/// Folds collector state and raw outcomes into [`Envelope`]s.
///
/// Borrows the request's sink for its whole lifetime, mirroring how the
/// collector itself is scoped to the request. Each method reads the sink at
/// most once and decides immediately.
///
/// # Examples
/// ```
/// use backend::api::{Envelope, ResponseMapper};
/// use backend::domain::{Dispatcher, NotificationCollector};
///
/// let collector = NotificationCollector::new();
/// Dispatcher::new(&collector).raise("", "Client not found");
///
/// let mapper = ResponseMapper::new(&collector);
/// assert!(matches!(
///     mapper.single(Some("ignored")),
///     Envelope::ClientError { .. }
/// ));
/// ```
pub struct ResponseMapper<'a> {
    sink: &'a dyn NotificationSink,
    error_key: String,
}

impl<'a> ResponseMapper<'a> {
    /// Bind a mapper to the request's notification sink.
    pub fn new(sink: &'a dyn NotificationSink) -> Self {
        Self {
            sink,
            error_key: DOMAIN_NOTIFICATION_KEY.to_owned(),
        }
    }

    /// Override the field-error key domain notifications surface under.
    #[must_use]
    pub fn with_error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = key.into();
        self
    }

    /// Map a single-value read: notifications beat absence beats success.
    ///
    /// The error check runs first, so a request that both raised
    /// notifications and found nothing reports the notifications, not a
    /// missing entity.
    pub fn single<T>(&self, outcome: Option<T>) -> Envelope<T> {
        if let Some(errors) = self.domain_errors() {
            return Envelope::ClientError { errors };
        }
        match outcome {
            None => Envelope::NotFound,
            Some(data) => Envelope::Success { data },
        }
    }

    /// Map an update that returns no content.
    pub fn updated(&self) -> Envelope<()> {
        self.no_content()
    }

    /// Map a deletion that returns no content.
    pub fn deleted(&self) -> Envelope<()> {
        self.no_content()
    }

    /// Map a creation, threading `location` through on success.
    ///
    /// A creation that yields no representable resource degenerates to
    /// [`Envelope::SuccessEmpty`]; the location is dropped with it.
    pub fn created<T>(&self, location: ResourceLocation, outcome: Option<T>) -> Envelope<T> {
        if let Some(errors) = self.domain_errors() {
            return Envelope::ClientError { errors };
        }
        match outcome {
            None => Envelope::SuccessEmpty,
            Some(data) => Envelope::Created { data, location },
        }
    }

    /// Map a collection read: absent and empty both collapse to no content.
    ///
    /// This path does not consult the notification sink at all. The
    /// asymmetry with [`Self::single`] is part of the observable contract
    /// and is pinned by tests; do not reroute this through the error check.
    pub fn collection<T>(&self, outcome: Option<Vec<T>>) -> Envelope<Vec<T>> {
        match outcome {
            Some(items) if !items.is_empty() => Envelope::Success { data: items },
            _ => Envelope::SuccessEmpty,
        }
    }

    /// Map a single-value read on the absence-only channel.
    ///
    /// Like [`Self::collection`], this never consults the sink; it exists
    /// for reads that run no business rules at all.
    pub fn fetched<T>(&self, outcome: Option<T>) -> Envelope<T> {
        match outcome {
            None => Envelope::NotFound,
            Some(data) => Envelope::Success { data },
        }
    }

    /// Short-circuit input-shape validation failures to a client error.
    ///
    /// This is the parallel error channel for requests whose shape was
    /// rejected before business logic ran: the validator's own field map is
    /// passed through verbatim and the sink is never consulted. Boundaries
    /// must check input shape first and skip the operation entirely when it
    /// fails.
    pub fn invalid_input<T>(&self, errors: FieldErrors) -> Envelope<T> {
        warn!(fields = errors.len(), "request rejected by input validation");
        Envelope::ClientError { errors }
    }

    fn no_content(&self) -> Envelope<()> {
        match self.domain_errors() {
            Some(errors) => Envelope::ClientError { errors },
            None => Envelope::SuccessEmpty,
        }
    }

    fn domain_errors(&self) -> Option<FieldErrors> {
        let notifications = self.sink.drain();
        if notifications.is_empty() {
            return None;
        }
        warn!(
            count = notifications.len(),
            key = self.error_key.as_str(),
            "request resolved to client error"
        );
        let messages = notifications
            .iter()
            .map(|n| n.message().to_owned())
            .collect();
        let mut errors = FieldErrors::new();
        errors.insert(self.error_key.clone(), messages);
        Some(errors)
    }
}

impl std::fmt::Debug for ResponseMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseMapper")
            .field("error_key", &self.error_key)
            .finish_non_exhaustive()
    }
}
