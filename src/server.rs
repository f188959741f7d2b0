use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{ApiAnalysisRequest, ApiDigestResponse, ApiSentimentRequest};
use symptom_insights::{analyze, analyze_sentiment, assistant_context, AnalysisReport, AnalyticsConfig, SentimentResult};

#[derive(Clone)]
struct AppState {
    config: Arc<AnalyticsConfig>,
}

type ApiError = (StatusCode, String);

pub async fn serve(args: crate::ServeArgs, config: AnalyticsConfig) -> Result<(), String> {
    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let state = AppState {
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/sentiment", post(sentiment_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/digest", post(digest_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await.map_err(|err| {
        format!("failed to bind server: {}", err)
    })?, app)
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| (StatusCode::BAD_REQUEST, rejection.body_text()))
}

async fn sentiment_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiSentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResult>, ApiError> {
    let request = decode(payload)?;
    let locale = request.locale(&state.config);
    let text = request.text.unwrap_or_default();
    Ok(Json(analyze_sentiment(&text, locale)))
}

async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiAnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let (entries, options) = decode(payload)?
        .into_parts(&state.config)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    Ok(Json(analyze(&entries, &options)))
}

async fn digest_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApiAnalysisRequest>, JsonRejection>,
) -> Result<Json<ApiDigestResponse>, ApiError> {
    let (entries, options) = decode(payload)?
        .into_parts(&state.config)
        .map_err(|err| (StatusCode::BAD_REQUEST, err))?;
    Ok(Json(ApiDigestResponse {
        digest: assistant_context(&entries, &options),
    }))
}
