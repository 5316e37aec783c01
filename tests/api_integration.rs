//! In-process tests of the HTTP surface.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};

use product_filter::config::AppConfig;

mod common;

fn filter_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/filter")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

fn ids(json: &Value) -> Vec<u64> {
    json["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_filter_appliances_over_five_hundred() {
    let (status, _, json) = common::send(
        common::test_app(),
        filter_request(json!({"category": "家电", "price": "500元以上", "shipping": "是"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![1, 7, 10]);
    assert_eq!(json["matched_count"], 3);
    assert_eq!(json["total_count"], 10);
    assert_eq!(json["expression"], "家电 ∩ 500元以上 ∩ shipping:是");
    assert_eq!(json["products"][0]["name"], "冰箱");
    assert_eq!(json["products"][0]["price"], 2999);
    assert_eq!(json["products"][1]["name"], "洗衣机");
    assert_eq!(json["products"][2]["name"], "微波炉");
    assert_eq!(json["products"][2]["price"], 699);
}

#[tokio::test]
async fn test_filter_cheap_food() {
    let (status, _, json) = common::send(
        common::test_app(),
        filter_request(json!({"category": "食品", "price": "0-100元", "shipping": "是"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![4, 9]);
    assert_eq!(json["matched_count"], 2);
}

#[tokio::test]
async fn test_field_order_does_not_matter() {
    let body = r#"{"shipping": "否", "price": "100-500元", "category": "服装"}"#;
    let request = Request::builder()
        .method("POST")
        .uri("/filter")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let (status, _, json) = common::send(common::test_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), vec![5, 8]);
}

#[tokio::test]
async fn test_unknown_label_is_client_error() {
    let (status, _, json) = common::send(
        common::test_app(),
        filter_request(json!({"category": "家电", "price": "999", "shipping": "是"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "unknown_label");
    assert_eq!(json["message"], "unknown price label \"999\"");
    assert!(json.get("products").is_none());
}

#[tokio::test]
async fn test_missing_field_is_client_error() {
    let (status, _, json) = common::send(
        common::test_app(),
        filter_request(json!({"category": "家电", "price": "0-100元"})),
    )
    .await;

    assert!(status.is_client_error());
    assert_eq!(json["error"], "invalid_body");
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/filter")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, _, json) = common::send(common::test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "invalid_body");
}

#[tokio::test]
async fn test_missing_content_type_is_client_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/filter")
        .body(Body::from(r#"{"category": "家电", "price": "0-100元", "shipping": "是"}"#))
        .unwrap();

    let (status, _, json) = common::send(common::test_app(), request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["error"], "invalid_body");
}

#[tokio::test]
async fn test_statistics() {
    let (status, _, json) = common::send(common::test_app(), get("/statistics")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "category_count": {"家电": 4, "服装": 3, "食品": 3},
            "price_count": {"0-100元": 3, "100-500元": 4, "500元以上": 3},
            "total_count": 10,
        })
    );
}

#[tokio::test]
async fn test_statistics_sums_match_total() {
    let (_, _, json) = common::send(common::test_app(), get("/statistics")).await;
    let total = json["total_count"].as_u64().unwrap();

    for key in ["category_count", "price_count"] {
        let sum: u64 = json[key]
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum();
        assert_eq!(sum, total, "{key} should sum to total_count");
    }
}

#[tokio::test]
async fn test_products_listing() {
    let (status, _, json) = common::send(common::test_app(), get("/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&json), (1..=10).collect::<Vec<_>>());
    assert_eq!(json["total_count"], 10);
    assert_eq!(json["products"][2]["category"], "服装");
    assert_eq!(json["products"][2]["free_shipping"], false);
}

#[tokio::test]
async fn test_health_check() {
    let (status, _, json) = common::send(common::test_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["total_count"], 10);
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, json) = common::send(common::test_app(), get("/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn test_request_id_generated() {
    let (_, headers, _) = common::send(common::test_app(), get("/health")).await;

    let id = headers
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated() {
    let request = Request::builder()
        .uri("/statistics")
        .header("x-request-id", "client-42")
        .body(Body::empty())
        .unwrap();

    let (_, headers, _) = common::send(common::test_app(), request).await;
    assert_eq!(headers.get("x-request-id").unwrap(), "client-42");
}

#[tokio::test]
async fn test_wrong_method_is_json_error() {
    let (status, _, json) = common::send(common::test_app(), get("/filter")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["error"], "method_not_allowed");
    assert_eq!(json["message"], "method GET not allowed for /filter");
}

fn small_body_app() -> axum::Router {
    let mut config = AppConfig::default();
    config.security.max_body_size = 16;
    common::test_app_with(config)
}

#[tokio::test]
async fn test_oversized_body_with_length_is_json_error() {
    let body = json!({"category": "家电", "price": "500元以上", "shipping": "是"}).to_string();
    let request = Request::builder()
        .method("POST")
        .uri("/filter")
        .header("Content-Type", "application/json")
        .header("Content-Length", body.len())
        .body(Body::from(body))
        .unwrap();

    let (status, headers, json) = common::send(small_body_app(), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"], "payload_too_large");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_oversized_streamed_body_is_json_error() {
    let request = filter_request(json!({"category": "家电", "price": "500元以上", "shipping": "是"}));

    let (status, _, json) = common::send(small_body_app(), request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(json["error"].is_string());
}
