//! Tests for rendering envelopes onto HTTP responses.

use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::Responder;
use rstest::rstest;
use serde_json::{json, Value};

use super::*;
use crate::api::response::DOMAIN_NOTIFICATION_KEY;

async fn render<T: serde::Serialize>(envelope: Envelope<T>) -> (StatusCode, Value) {
    let request = TestRequest::default().to_http_request();
    let response = envelope.respond_to(&request);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("response body to bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body deserialises")
    };
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn success_renders_ok_with_wrapped_data() {
    let envelope = Envelope::Success {
        data: json!({ "id": 1, "name": "Acme" }),
    };

    let (status, body) = render(envelope).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "data": { "id": 1, "name": "Acme" } })
    );
}

#[rstest]
#[actix_web::test]
async fn created_renders_created_with_location_passthrough() {
    let envelope = Envelope::Created {
        data: json!({ "id": 42 }),
        location: ResourceLocation::new("get_client", json!({ "id": 42 })),
    };

    let (status, body) = render(envelope).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "id": 42 },
            "location": { "action": "get_client", "route": { "id": 42 } }
        })
    );
}

#[rstest]
#[actix_web::test]
async fn success_empty_renders_no_content_without_body() {
    let (status, body) = render(Envelope::<Value>::SuccessEmpty).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[actix_web::test]
async fn not_found_renders_not_found_without_body() {
    let (status, body) = render(Envelope::<Value>::NotFound).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[actix_web::test]
async fn client_error_renders_bad_request_with_validation_problem() {
    let mut errors = FieldErrors::new();
    errors.insert(
        DOMAIN_NOTIFICATION_KEY.to_owned(),
        vec!["A".to_owned(), "B".to_owned()],
    );

    let (status, body) = render(Envelope::<Value>::ClientError { errors }).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "title": "One or more validation errors occurred.",
            "status": 400,
            "errors": { "DomainNotification": ["A", "B"] }
        })
    );
}

#[rstest]
fn try_from_rejects_blank_title() {
    let dto = ValidationProblemDto {
        title: "   ".to_owned(),
        status: 400,
        errors: FieldErrors::new(),
    };

    let result = ValidationProblem::try_from(dto);
    assert!(matches!(result, Err(ValidationProblemError::EmptyTitle)));
}

#[rstest]
fn success_bodies_reject_unknown_fields() {
    let success: Result<SuccessBody<Value>, _> =
        serde_json::from_value(json!({ "success": true, "data": 1, "extra": true }));
    assert!(success.is_err());

    let created: Result<CreatedBody<Value>, _> = serde_json::from_value(json!({
        "success": true,
        "data": 1,
        "location": { "action": "get_client", "route": {} },
        "extra": true
    }));
    assert!(created.is_err());
}

#[rstest]
fn validation_problem_round_trips_through_serde() {
    let mut errors = FieldErrors::new();
    errors.insert("name".to_owned(), vec!["name is required".to_owned()]);
    let problem = ValidationProblem::new(errors);

    let value = serde_json::to_value(&problem).expect("problem serialises");
    let back: ValidationProblem = serde_json::from_value(value).expect("problem deserialises");
    assert_eq!(back, problem);
    assert_eq!(back.status(), 400);
    assert_eq!(back.title(), "One or more validation errors occurred.");
}
