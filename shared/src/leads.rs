use chrono::{SecondsFormat, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::error::LeadError;
use crate::forms::{self, FormKind, LeadSubmission};
use crate::responses::{error_response, json_response};
use crate::AppState;

/// Handle one form submission: validate, fetch a bearer token, append a row.
/// Validation failures return before any outbound call is made.
pub async fn submit_lead(
    state: &AppState,
    kind: FormKind,
    body: &Body,
) -> Result<Response<Body>, Error> {
    let raw = match parse_body(body) {
        Ok(raw) => raw,
        Err(err) => return error_response(&err),
    };

    let lead = match forms::validate(&raw, kind) {
        Ok(lead) => lead,
        Err(err) => return error_response(&err),
    };

    // Request-receipt time, first cell of the row.
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let row = lead.to_row(kind, &timestamp);

    match state.google.append_row(kind.range(), &row).await {
        Ok(()) => json_response(StatusCode::OK, serde_json::json!({"success": true})),
        Err(err) => error_response(&err),
    }
}

fn parse_body(body: &Body) -> Result<LeadSubmission, LeadError> {
    let body_str = match body {
        Body::Text(text) => text.as_str(),
        Body::Binary(bytes) => std::str::from_utf8(bytes).unwrap_or(""),
        Body::Empty => "",
    };

    serde_json::from_str(body_str)
        .map_err(|e| LeadError::Invalid(format!("Invalid request body: {}", e)))
}
