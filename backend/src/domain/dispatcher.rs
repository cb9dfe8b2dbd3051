//! Routing of raised notifications into the active collector.
//!
//! Rule code never holds the request's collector directly; it raises through
//! a [`Dispatcher`] borrowing a [`NotificationSink`]. The sink is passed in
//! explicitly wherever rules run, which keeps rule code unit-testable against
//! any sink implementation without an ambient registry.

use tracing::debug;

use super::notification::{Notification, NotificationSink};

/// Single write surface business logic has into the notification subsystem.
///
/// # Examples
/// ```
/// use backend::domain::{Dispatcher, NotificationCollector};
///
/// let collector = NotificationCollector::new();
/// let dispatcher = Dispatcher::new(&collector);
/// dispatcher.raise("", "Client not found");
/// assert!(collector.has_notifications());
/// ```
#[derive(Clone, Copy)]
pub struct Dispatcher<'a> {
    sink: &'a dyn NotificationSink,
}

impl<'a> Dispatcher<'a> {
    /// Bind a dispatcher to the sink for the current request.
    pub fn new(sink: &'a dyn NotificationSink) -> Self {
        Self { sink }
    }

    /// Report one rejected condition.
    ///
    /// Raising does not halt anything: execution continues and further calls
    /// accumulate. An empty `code` marks a generic/unclassified error. An
    /// empty `message` is accepted as-is and will surface as an empty entry
    /// in the eventual error payload.
    pub fn raise(&self, code: impl Into<String>, message: impl Into<String>) {
        let notification = Notification::new(code, message);
        debug!(
            code = notification.code(),
            message = notification.message(),
            "domain notification raised"
        );
        self.sink.report(notification);
    }

    /// Report a batch of upstream input errors as unclassified notifications.
    ///
    /// Used when a validation layer has already produced a flat list of
    /// messages; each becomes an empty-code notification in iteration order.
    pub fn raise_all<I>(&self, messages: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for message in messages {
            self.raise("", message);
        }
    }
}

impl std::fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
