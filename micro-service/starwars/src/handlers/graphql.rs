use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, rejection::GraphQLRejection};
use axum::{
    Json,
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

use crate::schema::ApiSchema;

/// Path serving both the GraphQL endpoint and the GraphiQL page
pub const GRAPHQL_PATH: &str = "/";

// Handler for GraphQL POST requests
pub async fn graphql_handler(schema: Extension<ApiSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

// GET without a `query` parameter opens GraphiQL, otherwise the query string
// is executed as a GraphQL request
pub async fn graphql_get(
    schema: Extension<ApiSchema>,
    RawQuery(params): RawQuery,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    if !has_query_param(params.as_deref()) {
        return graphql_playground().await.into_response();
    }

    match req {
        Ok(req) => GraphQLResponse::from(schema.execute(req.into_inner()).await).into_response(),
        Err(rejection) => rejection.into_response(),
    }
}

fn has_query_param(params: Option<&str>) -> bool {
    params
        .unwrap_or_default()
        .split('&')
        .any(|pair| pair.split('=').next() == Some("query"))
}

// Handler for the GraphiQL schema explorer
async fn graphql_playground() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
