use crate::adapters::NumbersApiClient;
use crate::config::CliConfig;
use crate::core::classifier::NumberClassifier;
use crate::core::FactProvider;
use crate::utils::error::{ClassifyError, Result};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    number: Option<String>,
}

pub fn router<F: FactProvider + 'static>(classifier: Arc<NumberClassifier<F>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/classify-number", get(classify_number::<F>))
        .layer(cors)
        .with_state(classifier)
}

async fn classify_number<F: FactProvider + 'static>(
    State(classifier): State<Arc<NumberClassifier<F>>>,
    Query(query): Query<ClassifyQuery>,
) -> Response {
    // A missing parameter behaves like an empty string and fails validation.
    let raw = query.number.unwrap_or_default();

    match classifier.classify(&raw).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(ClassifyError::InvalidNumber { raw }) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "number": raw, "error": true })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Classification failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn serve(config: &CliConfig) -> Result<()> {
    let facts = NumbersApiClient::new(
        &config.numbers_api_url,
        Duration::from_secs_f64(config.http_timeout_secs),
    )?;
    let classifier = Arc::new(NumberClassifier::new(facts));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Classify endpoint: http://{}/api/classify-number", addr);

    axum::serve(listener, router(classifier)).await?;

    Ok(())
}
