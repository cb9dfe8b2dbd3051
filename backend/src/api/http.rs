//! HTTP rendering of result envelopes.
//!
//! Keep the mapper free of transport concerns by translating [`Envelope`]
//! variants into Actix responses here. Status conventions: `Success` → 200,
//! `Created` → 201, `SuccessEmpty` → 204, `NotFound` → 404, `ClientError` →
//! 400 with a validation-problem payload.

use actix_web::body::BoxBody;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::response::{Envelope, FieldErrors, ResourceLocation};

/// Body wrapper for successful responses carrying data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct SuccessBody<T> {
    #[schema(example = true)]
    success: bool,
    data: T,
}

impl<T> SuccessBody<T> {
    /// Wrap an outcome value for the wire.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Always true; present for client-side uniformity.
    pub fn success(&self) -> bool {
        self.success
    }

    /// The wrapped outcome value.
    pub fn data(&self) -> &T {
        &self.data
    }
}

/// Body wrapper for creation responses, carrying the resource pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct CreatedBody<T> {
    #[schema(example = true)]
    success: bool,
    data: T,
    location: ResourceLocation,
}

impl<T> CreatedBody<T> {
    /// Wrap a created representation and its location for the wire.
    pub fn new(data: T, location: ResourceLocation) -> Self {
        Self {
            success: true,
            data,
            location,
        }
    }

    /// The created representation.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Caller-supplied pointer to the created resource.
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }
}

/// Standard 400 payload for validation failures.
///
/// Shape-compatible with problem-details style payloads: a human title, the
/// numeric status, and the field → messages map.
///
/// ## Invariants
/// - `title` must be non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "ValidationProblemDto", into = "ValidationProblemDto")]
pub struct ValidationProblem {
    #[schema(example = "One or more validation errors occurred.")]
    title: String,
    #[schema(example = 400)]
    status: u16,
    errors: FieldErrors,
}

/// Validation failures raised when constructing a [`ValidationProblem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationProblemError {
    /// Title is empty after trimming whitespace.
    #[error("validation problem title must not be empty")]
    EmptyTitle,
}

impl ValidationProblem {
    /// Build the standard 400 payload around a field-error map.
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            title: "One or more validation errors occurred.".to_owned(),
            status: 400,
            errors,
        }
    }

    /// Fallible constructor used by serde conversions.
    pub fn try_new(
        title: impl Into<String>,
        status: u16,
        errors: FieldErrors,
    ) -> Result<Self, ValidationProblemError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationProblemError::EmptyTitle);
        }
        Ok(Self {
            title,
            status,
            errors,
        })
    }

    /// Human-readable summary line.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// HTTP status this payload accompanies.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Field name → ordered messages.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct ValidationProblemDto {
    title: String,
    status: u16,
    errors: FieldErrors,
}

impl From<ValidationProblem> for ValidationProblemDto {
    fn from(value: ValidationProblem) -> Self {
        Self {
            title: value.title,
            status: value.status,
            errors: value.errors,
        }
    }
}

impl TryFrom<ValidationProblemDto> for ValidationProblem {
    type Error = ValidationProblemError;

    fn try_from(value: ValidationProblemDto) -> Result<Self, Self::Error> {
        let ValidationProblemDto {
            title,
            status,
            errors,
        } = value;

        Self::try_new(title, status, errors)
    }
}

impl<T: Serialize> Responder for Envelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        match self {
            Envelope::Success { data } => HttpResponse::Ok().json(SuccessBody::new(data)),
            Envelope::Created { data, location } => {
                HttpResponse::Created().json(CreatedBody::new(data, location))
            }
            Envelope::SuccessEmpty => HttpResponse::NoContent().finish(),
            Envelope::NotFound => HttpResponse::NotFound().finish(),
            Envelope::ClientError { errors } => {
                HttpResponse::BadRequest().json(ValidationProblem::new(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests;
