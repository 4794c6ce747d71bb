//! Request extractors that front the check chains.
//!
//! Each extractor runs its chain before the handler is invoked and rejects
//! with a single 400 listing every failure. Bodies are read as raw bytes (no
//! content-type requirement); an absent body counts as an empty object.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::checks::{
    self, CREATE_CHECKS, FieldFailure, KEY_CHECKS, Location, REPLACE_CHECKS, run_checks,
};
use crate::models::{CreateProduct, ReplaceProduct};

/// The 400 body listing every failed check
#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub err: Vec<FieldFailure>,
}

/// Rejection carrying the collected check failures
#[derive(Debug)]
pub struct CheckFailures(pub Vec<FieldFailure>);

impl IntoResponse for CheckFailures {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse { err: self.0 }),
        )
            .into_response()
    }
}

/// Path id extractor for routes addressing one product
pub struct ProductKey(pub i32);

impl<S> FromRequestParts<S> for ProductKey
where
    S: Send + Sync,
{
    type Rejection = CheckFailures;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = raw_path_id(parts, state).await;
        let failures = run_checks(KEY_CHECKS, Some(&raw), &Value::Null);

        raw.parse().map(Self).map_err(|_| CheckFailures(failures))
    }
}

/// Creation body extractor: runs the creation chain, then coerces the DTO
#[derive(Debug)]
pub struct CreatePayload(pub CreateProduct);

impl<S> FromRequest<S> for CreatePayload
where
    S: Send + Sync,
{
    type Rejection = CheckFailures;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = body_json(req, state).await?;

        let failures = run_checks(CREATE_CHECKS, None, &body);
        if !failures.is_empty() {
            return Err(CheckFailures(failures));
        }

        Ok(Self(CreateProduct {
            name: coerced_text(&body, "name"),
            price: coerced_number(&body, "price"),
            availability: body
                .get("availability")
                .and_then(checks::as_flag)
                .unwrap_or(true),
        }))
    }
}

/// Replacement extractor: the id chain and the body chain run together so a
/// single response reports every failure across both locations
pub struct ReplacePayload(pub i32, pub ReplaceProduct);

impl<S> FromRequest<S> for ReplacePayload
where
    S: Send + Sync,
{
    type Rejection = CheckFailures;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, raw_body) = req.into_parts();
        let raw_id = raw_path_id(&mut parts, state).await;
        let body = body_json(Request::from_parts(parts, raw_body), state).await?;

        let failures = run_checks(REPLACE_CHECKS, Some(&raw_id), &body);
        if !failures.is_empty() {
            return Err(CheckFailures(failures));
        }

        Ok(Self(
            raw_id.parse().unwrap_or_default(),
            ReplaceProduct {
                name: coerced_text(&body, "name"),
                price: coerced_number(&body, "price"),
                availability: body
                    .get("availability")
                    .and_then(checks::as_flag)
                    .unwrap_or_default(),
            },
        ))
    }
}

/// Lenient body extractor for the availability patch.
///
/// No chain runs here. Field presence is checked in the handler after the
/// record lookup, so a missing record still answers 404.
pub struct AvailabilityBody(pub Option<bool>);

impl<S> FromRequest<S> for AvailabilityBody
where
    S: Send + Sync,
{
    type Rejection = CheckFailures;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = body_json(req, state).await?;

        Ok(Self(body.get("availability").and_then(checks::as_flag)))
    }
}

async fn raw_path_id<S: Send + Sync>(parts: &mut Parts, state: &S) -> String {
    match Path::<String>::from_request_parts(parts, state).await {
        Ok(Path(raw)) => raw,
        Err(_) => String::new(),
    }
}

async fn body_json<S: Send + Sync>(req: Request, state: &S) -> Result<Value, CheckFailures> {
    let bytes = Bytes::from_request(req, state)
        .await
        .map_err(|_| CheckFailures(vec![invalid_body_failure()]))?;

    if bytes.is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(&bytes).map_err(|_| CheckFailures(vec![invalid_body_failure()]))
}

fn invalid_body_failure() -> FieldFailure {
    FieldFailure {
        kind: "field",
        value: None,
        msg: "The request body is not valid JSON",
        path: "body",
        location: Location::Body,
    }
}

fn coerced_text(body: &Value, field: &str) -> String {
    body.get(field).and_then(checks::as_text).unwrap_or_default()
}

fn coerced_number(body: &Value, field: &str) -> f64 {
    body.get(field)
        .and_then(checks::as_number)
        .unwrap_or_default()
}
