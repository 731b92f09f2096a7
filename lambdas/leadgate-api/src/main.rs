use lambda_http::{run, service_fn, tracing, Error, Request};
use leadgate_shared::config::GoogleConfig;
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Read credentials and build the shared HTTP client once at startup
    let config = GoogleConfig::from_env()?;
    let state = leadgate_shared::AppState::new(config, reqwest::Client::new());

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
