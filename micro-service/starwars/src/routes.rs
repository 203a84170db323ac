use crate::{
    handlers::graphql::{GRAPHQL_PATH, graphql_get, graphql_handler, health_check},
    schema::ApiSchema,
};
use axum::{
    Router,
    extract::Extension,
    http::{HeaderName, HeaderValue, Method},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use app_config::{AppConfig, CorsConfig};
use app_error::middleware_handling::error_handling_middleware;
use app_middleware::{logging_middleware, security_headers_middleware};

fn cors_layer(cors_config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        // "*" allows any origin, otherwise the exact list
        .allow_origin(if cors_config.allowed_origins.iter().any(|o| o == "*") {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(
                cors_config
                    .allowed_origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<HeaderValue>>(),
            )
        })
        .allow_methods(
            cors_config
                .allowed_methods
                .iter()
                .filter_map(|method| method.parse().ok())
                .collect::<Vec<Method>>(),
        )
        .allow_headers(
            cors_config
                .allowed_headers
                .iter()
                .filter_map(|header| header.parse().ok())
                .collect::<Vec<HeaderName>>(),
        )
}

pub fn create_routes(schema: ApiSchema, config: &AppConfig) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.security.cors));

    let app = Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_handler))
        .route("/health", get(health_check))
        .layer(Extension(schema));

    // Body limit sits inside the error handler so its 413 gets rewritten
    let app = app
        .layer(RequestBodyLimitLayer::new(config.server.body_limit))
        .layer(axum::middleware::from_fn(error_handling_middleware));

    let app = app
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(axum::middleware::from_fn(security_headers_middleware));

    app.layer(middleware_stack)
}
