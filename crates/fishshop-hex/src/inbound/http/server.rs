use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    serve, Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use super::{barcode, feedback, orders};
use crate::application::ShopServices;
use crate::errors::AppError;
use fishshop_types::ports::record_store::RecordStore;

#[derive(Clone)]
pub struct HttpServerConfig {
    pub port: String,
}

pub struct HttpServer<R>
where
    R: RecordStore,
{
    pub services: Arc<ShopServices<R>>,
    pub config: HttpServerConfig,
}

impl<R> HttpServer<R>
where
    R: RecordStore,
{
    pub async fn new(services: ShopServices<R>, config: HttpServerConfig) -> anyhow::Result<Self> {
        Ok(Self {
            services: Arc::new(services),
            config,
        })
    }

    /// Every resource route is mounted both at the root and under `/api`.
    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                let request_id = Uuid::new_v4();
                tracing::info_span!(
                    "http_request",
                    %request_id,
                    method = %request.method(),
                    uri
                )
            })
            .on_request(
                |request: &axum::extract::Request<_>, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        method = %request.method(),
                        uri = %request.uri(),
                        "request"
                    );
                },
            )
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &tracing::Span| {
                    tracing::info!(
                        parent: span,
                        status = %response.status(),
                        latency_ms = %latency.as_millis(),
                        "response"
                    );
                },
            );

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE]);

        let api = Router::new()
            .route(
                "/orders",
                get(orders::list_orders::<R>)
                    .post(orders::create_order::<R>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{id}",
                get(orders::get_order::<R>)
                    .patch(orders::update_order::<R>)
                    .delete(orders::delete_order::<R>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/feedback",
                get(feedback::list_feedback::<R>)
                    .post(feedback::create_feedback::<R>)
                    .fallback(method_not_allowed),
            )
            .route(
                "/feedback/{id}",
                delete(feedback::delete_feedback::<R>).fallback(method_not_allowed),
            )
            .route(
                "/barcode",
                get(barcode::list_barcodes::<R>).fallback(method_not_allowed),
            )
            .route(
                "/barcode/generate-qrcode",
                post(barcode::generate_qrcode::<R>).fallback(method_not_allowed),
            )
            .route(
                "/barcode/scan",
                post(barcode::scan::<R>).fallback(method_not_allowed),
            );

        Router::new()
            .route("/health", get(health))
            .merge(api.clone())
            .nest("/api", api)
            .fallback(not_found)
            .layer(cors)
            .layer(trace_layer)
            .with_state(self.services.clone())
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port).parse()?;
        tracing::info!("starting server on {}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}

async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}
