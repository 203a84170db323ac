use async_graphql::{Request, Variables};
use axum::{
    body::Body,
    http::{self, StatusCode, header},
};
use serde_json::{Value, json};
use std::{sync::Arc, time::Duration};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use app_config::AppConfig;
use app_store::{MemoryPostStore, PostStore};
use app_utils::SwapiClient;

use crate::{
    routes::create_routes,
    schema::{ApiSchema, create_schema, export_sdl},
};

// Nothing listens here; used where no remote call is expected
const UNREACHABLE_SWAPI: &str = "http://127.0.0.1:9/api";

fn test_schema(base_url: &str) -> (ApiSchema, Arc<dyn PostStore>) {
    let store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    let swapi = SwapiClient::new(base_url, "json", Duration::from_secs(2)).unwrap();
    (create_schema(Arc::clone(&store), swapi), store)
}

async fn execute(schema: &ApiSchema, request: impl Into<Request>) -> Value {
    let response = schema.execute(request).await;
    serde_json::to_value(&response).unwrap()
}

async fn mount_people(server: &MockServer, search: &str, results: Value) {
    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .and(query_param("search", search))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": results.as_array().map(|r| r.len()).unwrap_or_default(),
            "next": null,
            "previous": null,
            "results": results
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn upsert_post_echoes_input() {
    let (schema, store) = test_schema(UNREACHABLE_SWAPI);

    let body = execute(
        &schema,
        r#"mutation { upsertPost(post: { id: "1", text: "hello" }) { id text } }"#,
    )
    .await;

    assert_eq!(body["data"]["upsertPost"], json!({ "id": "1", "text": "hello" }));
    assert!(body.get("errors").is_none());
    assert_eq!(store.get("1").as_deref(), Some("hello"));
}

#[tokio::test]
async fn upsert_post_with_variables_overwrites() {
    let (schema, _store) = test_schema(UNREACHABLE_SWAPI);
    let mutation = "mutation Upsert($post: PostInput!) { upsertPost(post: $post) { id text } }";

    for text in ["first", "second"] {
        let request = Request::new(mutation)
            .variables(Variables::from_json(json!({ "post": { "id": "42", "text": text } })));
        execute(&schema, request).await;
    }

    let body = execute(&schema, r#"{ post(id: "42") { id text } }"#).await;
    assert_eq!(body["data"]["post"], json!({ "id": "42", "text": "second" }));
}

#[tokio::test]
async fn missing_post_has_id_and_null_text() {
    let (schema, _store) = test_schema(UNREACHABLE_SWAPI);

    let body = execute(&schema, r#"{ post(id: "missing") { id text } }"#).await;

    assert!(body.get("errors").is_none());
    assert_eq!(body["data"]["post"], json!({ "id": "missing", "text": null }));
}

#[tokio::test]
async fn posts_lists_every_upsert() {
    let (schema, store) = test_schema(UNREACHABLE_SWAPI);
    store.upsert("a", "alpha");
    store.upsert("b", "beta");
    store.upsert("a", "alpha v2");

    let body = execute(&schema, "{ posts { id text } }").await;

    let posts = body["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.contains(&json!({ "id": "a", "text": "alpha v2" })));
    assert!(posts.contains(&json!({ "id": "b", "text": "beta" })));
}

#[tokio::test]
async fn upsert_requires_every_input_field() {
    let (schema, store) = test_schema(UNREACHABLE_SWAPI);

    let body = execute(&schema, r#"mutation { upsertPost(post: { id: "1" }) { id } }"#).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert!(store.get("1").is_none());
}

#[tokio::test]
async fn people_projects_remote_person() {
    let mock_server = MockServer::start().await;
    mount_people(
        &mock_server,
        "Luke",
        json!([{ "name": "Luke Skywalker", "height": "172", "mass": "77", "vehicles": [] }]),
    )
    .await;
    let (schema, _store) = test_schema(&format!("{}/api", mock_server.uri()));

    let body = execute(
        &schema,
        r#"{ people(name: "Luke") { name height mass vehicles { name } } }"#,
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(
        body["data"]["people"],
        json!([{ "name": "Luke Skywalker", "height": 172, "mass": 77, "vehicles": [] }])
    );
}

#[tokio::test]
async fn people_without_name_searches_with_empty_filter() {
    let mock_server = MockServer::start().await;
    mount_people(&mock_server, "", json!([{ "name": "C-3PO" }, { "name": "R2-D2" }])).await;
    let (schema, _store) = test_schema(&format!("{}/api", mock_server.uri()));

    let body = execute(&schema, "{ people { name } }").await;

    assert_eq!(
        body["data"]["people"],
        json!([{ "name": "C-3PO" }, { "name": "R2-D2" }])
    );
}

#[tokio::test]
async fn people_maps_renamed_and_malformed_fields() {
    let mock_server = MockServer::start().await;
    mount_people(
        &mock_server,
        "Jabba",
        json!([{
            "name": "Jabba Desilijic Tiure",
            "birth_year": "600BBY",
            "eye_color": "orange",
            "hair_color": "n/a",
            "skin_color": "green-tan, brown",
            "height": "175",
            "mass": "1,358",
            "created": "2014-12-10T17:11:31.638000Z",
            "edited": "2014-12-20T21:17:50.338000Z",
            "vehicles": []
        }]),
    )
    .await;
    let (schema, _store) = test_schema(&format!("{}/api", mock_server.uri()));

    let body = execute(
        &schema,
        r#"{ people(name: "Jabba") {
            birthYear eyeColor hairColor skinColor height mass created edited
        } }"#,
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(
        body["data"]["people"][0],
        json!({
            "birthYear": "600BBY",
            "eyeColor": "orange",
            "hairColor": "n/a",
            "skinColor": "green-tan, brown",
            "height": 175,
            "mass": null,
            "created": "2014-12-10T17:11:31.638000Z",
            "edited": "2014-12-20T21:17:50.338000Z"
        })
    );
}

#[tokio::test]
async fn vehicles_are_expanded_and_projected() {
    let mock_server = MockServer::start().await;
    let vehicle_url = format!("{}/api/vehicles/4/", mock_server.uri());
    mount_people(
        &mock_server,
        "Han",
        json!([{ "name": "Han Solo", "vehicles": [vehicle_url] }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/4/"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Sand Crawler",
            "model": "Digger Crawler",
            "manufacturer": "Corellian Engineering Corporation, Subpro",
            "cost_in_credits": "150000",
            "length": "36.8 ",
            "max_atmosphering_speed": "30",
            "crew": "46",
            "passengers": "30",
            "cargo_capacity": "50000",
            "consumables": "2 months",
            "vehicle_class": "wheeled"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let (schema, _store) = test_schema(&format!("{}/api", mock_server.uri()));

    let body = execute(
        &schema,
        r#"{ people(name: "Han") { vehicles {
            name model vehicleClass cargoCapacity consumablesDuration costInCredits
            crew length manufacturers maxAtmospheringSpeed maxPassengers
        } } }"#,
    )
    .await;

    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
    assert_eq!(
        body["data"]["people"][0]["vehicles"],
        json!([{
            "name": "Sand Crawler",
            "model": "Digger Crawler",
            "vehicleClass": "wheeled",
            "cargoCapacity": 50000,
            "consumablesDuration": "2 months",
            "costInCredits": 150000,
            "crew": "46",
            "length": 36.8,
            "manufacturers": ["Corellian Engineering Corporation", " Subpro"],
            "maxAtmospheringSpeed": 30,
            "maxPassengers": 30
        }])
    );
}

#[tokio::test]
async fn remote_failure_is_a_field_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/people/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    let (schema, store) = test_schema(&format!("{}/api", mock_server.uri()));
    store.upsert("1", "still here");

    let body = execute(&schema, r#"{ people(name: "Luke") { name } posts { id text } }"#).await;

    let data = body["data"].as_object().unwrap();
    assert!(data.contains_key("people"));
    assert_eq!(data["people"], Value::Null);
    assert_eq!(data["posts"], json!([{ "id": "1", "text": "still here" }]));
    assert_eq!(body["errors"][0]["path"], json!(["people"]));
    assert_eq!(body["errors"][0]["extensions"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn failed_vehicle_expansion_only_nulls_vehicles() {
    let mock_server = MockServer::start().await;
    mount_people(
        &mock_server,
        "Leia",
        json!([{
            "name": "Leia Organa",
            "vehicles": [format!("{}/api/vehicles/30/", mock_server.uri())]
        }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/api/vehicles/30/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;
    let (schema, _store) = test_schema(&format!("{}/api", mock_server.uri()));

    let body = execute(&schema, r#"{ people(name: "Leia") { name vehicles { name } } }"#).await;

    assert_eq!(
        body["data"]["people"],
        json!([{ "name": "Leia Organa", "vehicles": null }])
    );
    assert_eq!(body["errors"][0]["path"], json!(["people", 0, "vehicles"]));
    assert_eq!(body["errors"][0]["extensions"]["code"], "UPSTREAM_ERROR");
}

#[test]
fn sdl_exposes_public_contract() {
    let sdl = export_sdl();

    assert!(sdl.contains("people(name: String): [Person!]"));
    assert!(sdl.contains("post(id: ID!): Post"));
    assert!(sdl.contains("posts: [Post!]!"));
    assert!(sdl.contains("upsertPost(post: PostInput!): Post!"));
    assert!(sdl.contains("input PostInput"));
    assert!(sdl.contains("manufacturers: [String!]"));
    assert!(sdl.contains("length: Float"));
}

#[tokio::test]
async fn router_serves_graphiql_and_graphql_on_root() {
    let (schema, _store) = test_schema(UNREACHABLE_SWAPI);
    let app = create_routes(schema, &AppConfig::default());

    let response = app
        .clone()
        .oneshot(http::Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let page = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&page).contains("graphiql"));

    let request = http::Request::builder()
        .uri("/")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "query": r#"mutation { upsertPost(post: { id: "7", text: "seven" }) { id text } }"# })
                .to_string(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json_response: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json_response["data"]["upsertPost"],
        json!({ "id": "7", "text": "seven" })
    );
}

#[tokio::test]
async fn router_executes_get_queries_on_root() {
    let (schema, store) = test_schema(UNREACHABLE_SWAPI);
    store.upsert("3", "three");
    let app = create_routes(schema, &AppConfig::default());

    let request = http::Request::builder()
        .uri("/?query=%7Bposts%7Bid%20text%7D%7D")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/")
    );

    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json_response: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json_response["data"]["posts"],
        json!([{ "id": "3", "text": "three" }])
    );
}

#[tokio::test]
async fn router_health_check() {
    let (schema, _store) = test_schema(UNREACHABLE_SWAPI);
    let app = create_routes(schema, &AppConfig::default());

    let response = app
        .oneshot(
            http::Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
