use lambda_http::{http::Method, Body, Error, Request, Response};
use leadgate_shared::forms::FormKind;
use leadgate_shared::{leads, responses, AppState};
use std::sync::Arc;

/// Main Lambda handler - answers CORS preflight, enforces POST, and routes
/// the submission to the matching form variant.
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!("Lead intake invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        return responses::preflight();
    }

    if method != &Method::POST {
        return responses::method_not_allowed();
    }

    // The extended signup form posts to .../extended; every other POST is
    // the two-field short form.
    let kind = if path.ends_with("/extended") {
        FormKind::Extended
    } else {
        FormKind::Short
    };

    leads::submit_lead(&state, kind, event.body()).await
}
