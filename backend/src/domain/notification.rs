//! Domain notifications and their request-scoped collector.
//!
//! Business rules report violations as [`Notification`] values instead of
//! returning errors, so one request can surface several independent
//! violations in a single round trip. The [`NotificationCollector`] lives for
//! exactly one inbound request; concurrent requests never share one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single reported business-rule violation.
///
/// Immutable once created; equality is by value. The `code` classifies the
/// violation and may be empty for generic/unclassified errors. Multiple
/// notifications may carry the same code; creation order is preserved by the
/// collector.
///
/// # Examples
/// ```
/// use backend::domain::Notification;
///
/// let n = Notification::new("client.missing", "Client not found");
/// assert_eq!(n.code(), "client.missing");
/// assert_eq!(n.message(), "Client not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Notification {
    #[schema(example = "client.missing")]
    code: String,
    #[schema(example = "Client not found")]
    message: String,
}

impl Notification {
    /// Construct a notification. Empty codes and messages are accepted; an
    /// empty code marks the violation as unclassified.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Classification code, possibly empty.
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// Human-readable description of the rejected condition.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Write-and-snapshot capability handed to business logic and the boundary.
///
/// Rule code only ever needs `report`; the boundary only ever needs `drain`.
/// Keeping both on one small trait means neither side has to know the
/// concrete aggregator type.
///
/// `drain` returns an ordered snapshot and does **not** clear the underlying
/// store: once anything has been reported the request has failed validation
/// and stays failed for its remaining lifetime.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Accept one notification.
    fn report(&self, notification: Notification);

    /// Ordered snapshot of everything reported so far.
    fn drain(&self) -> Vec<Notification>;
}

/// Request-scoped accumulator of [`Notification`]s.
///
/// Created when a request starts and dropped when it ends; isolation between
/// concurrent requests comes from that scoping, not from cross-request
/// synchronization. The internal mutex exists so `append` stays sound if a
/// single request fans its validation out across tasks; within the common
/// sequential request it is uncontended.
///
/// # Examples
/// ```
/// use backend::domain::{Notification, NotificationCollector};
///
/// let collector = NotificationCollector::new();
/// assert!(!collector.has_notifications());
///
/// collector.append(Notification::new("", "name is required"));
/// assert!(collector.has_notifications());
/// assert_eq!(collector.all().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NotificationCollector {
    records: Mutex<Vec<Notification>>,
}

impl NotificationCollector {
    /// Create an empty collector for a new request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification to the end of the sequence.
    ///
    /// After the first append, [`Self::has_notifications`] is true for the
    /// rest of the request; nothing ever clears the sequence mid-request.
    pub fn append(&self, notification: Notification) {
        self.records().push(notification);
    }

    /// Ordered snapshot of every recorded notification.
    ///
    /// The returned vector is a copy; later appends do not show up in a
    /// snapshot a caller already holds.
    pub fn all(&self) -> Vec<Notification> {
        self.records().clone()
    }

    /// True iff at least one notification has been recorded.
    pub fn has_notifications(&self) -> bool {
        !self.records().is_empty()
    }

    fn records(&self) -> MutexGuard<'_, Vec<Notification>> {
        // A poisoned lock only means a writer panicked mid-push; the
        // sequence itself is still usable.
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl NotificationSink for NotificationCollector {
    fn report(&self, notification: Notification) {
        self.append(notification);
    }

    fn drain(&self) -> Vec<Notification> {
        self.all()
    }
}
