//! Boundary-facing response mapping.
//!
//! The routing layer hands each finished operation to a [`ResponseMapper`],
//! which folds the request's notification state and the raw outcome into an
//! [`Envelope`]; `http` renders that envelope onto the transport.

pub mod http;
pub mod response;

pub use http::{CreatedBody, SuccessBody, ValidationProblem, ValidationProblemError};
pub use response::{
    DOMAIN_NOTIFICATION_KEY, Envelope, FieldErrors, ResourceLocation, ResponseMapper,
};
