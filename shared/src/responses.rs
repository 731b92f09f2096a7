use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::error::LeadError;

/// Every response carries the CORS header so browser forms can post to us
/// from any origin.
pub fn json_response(
    status: StatusCode,
    body: serde_json::Value,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}

/// 200 with no body, answering a cross-origin preflight.
pub fn preflight() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Empty)
        .map_err(Box::new)?)
}

pub fn method_not_allowed() -> Result<Response<Body>, Error> {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        serde_json::json!({"error": "Method not allowed"}),
    )
}

/// Translate a domain failure into its wire response. Upstream detail goes to
/// the log; the caller only ever sees the client-safe message.
pub fn error_response(err: &LeadError) -> Result<Response<Body>, Error> {
    let status = err.status();
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("lead intake failed: {}", err);
    }
    json_response(status, serde_json::json!({"error": err.client_message()}))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_string(response: &Response<Body>) -> String {
        String::from_utf8(response.body().to_vec()).unwrap()
    }

    #[test]
    fn preflight_carries_cors_headers_and_no_body() {
        let response = preflight().unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Access-Control-Allow-Origin"],
            "*"
        );
        assert_eq!(
            response.headers()["Access-Control-Allow-Methods"],
            "POST, OPTIONS"
        );
        assert_eq!(
            response.headers()["Access-Control-Allow-Headers"],
            "Content-Type"
        );
        assert!(response.body().to_vec().is_empty());
    }

    #[test]
    fn method_not_allowed_is_405() {
        let response = method_not_allowed().unwrap();
        assert_eq!(response.status(), 405);
        assert_eq!(body_string(&response), r#"{"error":"Method not allowed"}"#);
    }

    #[test]
    fn validation_failure_echoes_the_message() {
        let response = error_response(&LeadError::Invalid("Invalid email".to_string())).unwrap();
        assert_eq!(response.status(), 400);
        assert_eq!(body_string(&response), r#"{"error":"Invalid email"}"#);
    }

    #[test]
    fn token_failure_is_a_generic_server_error() {
        let response =
            error_response(&LeadError::TokenExchange("400: invalid_grant".to_string())).unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(body_string(&response), r#"{"error":"Server error"}"#);
    }

    #[test]
    fn append_failure_reports_failed_to_save() {
        let response = error_response(&LeadError::Append("403: forbidden".to_string())).unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(body_string(&response), r#"{"error":"Failed to save lead"}"#);
    }
}
