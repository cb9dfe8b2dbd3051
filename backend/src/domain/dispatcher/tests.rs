//! Tests for notification dispatch.

use rstest::{fixture, rstest};

use super::*;
use crate::domain::notification::{MockNotificationSink, NotificationCollector};

#[fixture]
fn collector() -> NotificationCollector {
    NotificationCollector::new()
}

#[rstest]
fn raise_constructs_and_routes_the_record() {
    let mut sink = MockNotificationSink::new();
    sink.expect_report()
        .withf(|n| n.code() == "client.missing" && n.message() == "Client not found")
        .times(1)
        .return_const(());

    Dispatcher::new(&sink).raise("client.missing", "Client not found");
}

#[rstest]
fn raise_accepts_empty_code_and_empty_message() {
    let mut sink = MockNotificationSink::new();
    sink.expect_report()
        .withf(|n| n.code().is_empty() && n.message().is_empty())
        .times(1)
        .return_const(());

    Dispatcher::new(&sink).raise("", "");
}

#[rstest]
fn raised_records_accumulate_in_order(collector: NotificationCollector) {
    let dispatcher = Dispatcher::new(&collector);
    dispatcher.raise("a", "first");
    dispatcher.raise("b", "second");

    let all = collector.all();
    let codes: Vec<String> = all.iter().map(|n| n.code().to_owned()).collect();
    assert_eq!(codes, ["a", "b"]);
}

#[rstest]
fn raise_all_funnels_messages_with_empty_codes(collector: NotificationCollector) {
    Dispatcher::new(&collector).raise_all(["name is required", "email is malformed"]);

    let all = collector.all();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|n| n.code().is_empty()));
    let messages: Vec<String> = all.iter().map(|n| n.message().to_owned()).collect();
    assert_eq!(messages, ["name is required", "email is malformed"]);
}
