//! Catalog sources against real transports: an in-process HTTP server and
//! files on disk.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use cafe_world_integration_tests::{drinks_json, fixture_drinks, fixture_shops, shops_json};
use cafe_world_storefront::catalog::{
    Catalog, CatalogError, CatalogSource, FileCatalog, HttpCatalog,
};
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

const TOKEN: &str = "test-catalog-token";

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn catalog_router() -> Router {
    Router::new()
        .route("/shops", get(|| async { Json(shops_json()) }))
        .route("/drinks", get(|| async { Json(drinks_json()) }))
}

fn client(base: &Url, token: Option<&str>) -> HttpCatalog {
    HttpCatalog::new(base, token.map(SecretString::from), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_http_catalog_loads_shops_and_drinks() {
    let base = serve(catalog_router()).await;
    let catalog = Catalog::load(&client(&base, None)).await.unwrap();

    assert_eq!(catalog.shops, fixture_shops());
    assert_eq!(catalog.drinks, fixture_drinks());
}

#[tokio::test]
async fn test_http_catalog_sends_bearer_token() {
    async fn drinks(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
        let expected = format!("Bearer {TOKEN}");
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some(value) if value == expected => Ok(Json(drinks_json())),
            _ => Err(StatusCode::UNAUTHORIZED),
        }
    }

    let base = serve(Router::new().route("/drinks", get(drinks))).await;

    let drinks = client(&base, Some(TOKEN)).fetch_drinks().await.unwrap();
    assert_eq!(drinks.len(), 3);

    let err = client(&base, None).fetch_drinks().await.unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_http_catalog_accepts_keyed_objects() {
    let router = Router::new().route(
        "/shops",
        get(|| async {
            Json(json!({
                "-b": {"id": 2, "name": "Night Owl"},
                "-a": {"id": 1, "name": "Bean There", "isAvailable": true}
            }))
        }),
    );
    let base = serve(router).await;

    let shops = client(&base, None).fetch_shops().await.unwrap();
    let names: Vec<&str> = shops.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Bean There", "Night Owl"]);
}

#[tokio::test]
async fn test_http_catalog_missing_route_is_status_error() {
    let base = serve(Router::new()).await;
    let err = client(&base, None).fetch_shops().await.unwrap_err();
    match err {
        CatalogError::Status { endpoint, status } => {
            assert_eq!(status, 404);
            assert!(endpoint.ends_with("/shops"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_catalog_rejects_negative_price() {
    let router = Router::new().route(
        "/drinks",
        get(|| async { Json(json!([{"id": 1, "name": "Refund", "price": -2, "image": ""}])) }),
    );
    let base = serve(router).await;

    let err = client(&base, None).fetch_drinks().await.unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[tokio::test]
async fn test_file_catalog_matches_http_catalog() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("shops.json"), shops_json().to_string()).unwrap();
    std::fs::write(dir.path().join("drinks.json"), drinks_json().to_string()).unwrap();

    let catalog = Catalog::load(&FileCatalog::new(dir.path())).await.unwrap();
    assert_eq!(catalog.shops, fixture_shops());
    assert_eq!(catalog.drinks, fixture_drinks());
}
