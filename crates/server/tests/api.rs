//! Integration tests for the cart/checkout API.
//!
//! Each test builds the real router over an in-memory `SQLite` pool and
//! drives it with `tower::ServiceExt::oneshot`, asserting on status codes
//! and JSON bodies.

#![allow(clippy::unwrap_used)]

use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use minicart_server::config::ServerConfig;
use minicart_server::state::AppState;
use minicart_server::{app, db};

/// Build the application over a fresh in-memory database with two known
/// products: Widget ($10.00, id 1) and Gadget ($5.00, id 2).
async fn test_app() -> Router {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::init_schema(&pool).await.unwrap();
    insert_product(&pool, "Widget", 10.0).await;
    insert_product(&pool, "Gadget", 5.0).await;

    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
    };

    app(AppState::new(config, pool))
}

async fn insert_product(pool: &SqlitePool, name: &str, price: f64) {
    sqlx::query("INSERT INTO products (name, price, image, description) VALUES (?, ?, ?, ?)")
        .bind(name)
        .bind(price)
        .bind("https://example.com/image.jpg")
        .bind("A test product")
        .execute(pool)
        .await
        .unwrap();
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send a request and return the status code plus parsed JSON body.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app().await;
    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn products_lists_catalog_in_id_order() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/products")).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["name"], "Widget");
    assert_eq!(products[0]["price"], 10.0);
    assert_eq!(products[1]["name"], "Gadget");
}

#[tokio::test]
async fn empty_cart_has_no_items_and_zero_total() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/cart")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total"], 0.0);
}

#[tokio::test]
async fn repeated_adds_merge_into_one_line() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item added to cart");

    let (status, body) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart updated successfully");

    let (_, cart) = send(&app, get("/cart")).await;
    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["subtotal"], 30.0);
    assert_eq!(cart["total"], 30.0);
}

#[tokio::test]
async fn add_without_product_id_is_rejected() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        json_request("POST", "/cart", &json!({"quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Product ID is required");
}

#[tokio::test]
async fn add_unknown_product_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 999})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
async fn add_defaults_quantity_to_one() {
    let app = test_app().await;
    send(&app, json_request("POST", "/cart", &json!({"productId": 2}))).await;

    let (_, cart) = send(&app, get("/cart")).await;
    assert_eq!(cart["items"][0]["quantity"], 1);
    assert_eq!(cart["total"], 5.0);
}

#[tokio::test]
async fn cart_total_sums_all_lines() {
    let app = test_app().await;
    // Widget x2 at $10 plus Gadget x1 at $5
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 2})),
    )
    .await;
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 2, "quantity": 1})),
    )
    .await;

    let (status, cart) = send(&app, get("/cart")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["items"].as_array().unwrap().len(), 2);
    assert_eq!(cart["total"], 25.0);
}

#[tokio::test]
async fn update_replaces_quantity() {
    let app = test_app().await;
    let (_, added) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 2})),
    )
    .await;
    let id = added["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/cart/{id}"), &json!({"quantity": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cart item updated");

    let (_, cart) = send(&app, get("/cart")).await;
    assert_eq!(cart["items"][0]["quantity"], 5);
    assert_eq!(cart["total"], 50.0);
}

#[tokio::test]
async fn update_rejects_quantity_below_one() {
    let app = test_app().await;
    let (_, added) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 2})),
    )
    .await;
    let id = added["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/cart/{id}"), &json!({"quantity": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Valid quantity is required");

    // Stored quantity is unchanged
    let (_, cart) = send(&app, get("/cart")).await;
    assert_eq!(cart["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn update_unknown_item_is_not_found() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        json_request("PUT", "/cart/999", &json!({"quantity": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cart item not found");
}

#[tokio::test]
async fn delete_removes_only_the_named_line() {
    let app = test_app().await;
    let (_, added) = send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 1})),
    )
    .await;
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 2, "quantity": 1})),
    )
    .await;
    let id = added["id"].as_i64().unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/cart/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item removed from cart");

    let (_, cart) = send(&app, get("/cart")).await;
    let items = cart["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Gadget");
}

#[tokio::test]
async fn delete_unknown_item_leaves_cart_untouched() {
    let app = test_app().await;
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 1})),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri("/cart/999")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cart item not found");

    let (_, cart) = send(&app, get("/cart")).await;
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn checkout_with_empty_cart_is_rejected_before_any_write() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/checkout",
            &json!({
                "cartItems": [],
                "customerInfo": {"name": "Ada", "email": "ada@example.com"}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cart is empty");

    // No order was created
    let (_, orders) = send(&app, get("/orders")).await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_without_customer_name_or_email_is_rejected() {
    let app = test_app().await;
    let items = json!([{"id": 1, "quantity": 1, "price": 10.0}]);

    for customer in [
        json!({}),
        json!({"name": "Ada"}),
        json!({"email": "ada@example.com"}),
        json!({"name": "", "email": "ada@example.com"}),
    ] {
        let (status, body) = send(
            &app,
            json_request(
                "POST",
                "/checkout",
                &json!({"cartItems": items.clone(), "customerInfo": customer}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Customer name and email are required");
    }
}

#[tokio::test]
async fn checkout_returns_receipt_and_empties_cart() {
    let app = test_app().await;
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 1, "quantity": 2})),
    )
    .await;
    send(
        &app,
        json_request("POST", "/cart", &json!({"productId": 2, "quantity": 1})),
    )
    .await;

    // Checkout with the snapshot the client would have fetched from GET /cart
    let (_, cart) = send(&app, get("/cart")).await;
    let (status, receipt) = send(
        &app,
        json_request(
            "POST",
            "/checkout",
            &json!({
                "cartItems": cart["items"].clone(),
                "customerInfo": {"name": "Ada Lovelace", "email": "ada@example.com"}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["total"], 25.0);
    assert_eq!(receipt["status"], "completed");
    assert!(!receipt["id"].as_str().unwrap().is_empty());
    assert_eq!(receipt["customerInfo"]["name"], "Ada Lovelace");
    // The item snapshot is echoed back, including fields the server ignores
    let items = receipt["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Widget");

    // Cart is empty afterwards
    let (_, cart) = send(&app, get("/cart")).await;
    assert!(cart["items"].as_array().unwrap().is_empty());
    assert_eq!(cart["total"], 0.0);

    // Exactly one order exists with the matching total
    let (_, orders) = send(&app, get("/orders")).await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["total"], 25.0);
    assert_eq!(orders[0]["customer_name"], "Ada Lovelace");
    assert_eq!(orders[0]["id"], receipt["id"]);
}

#[tokio::test]
async fn checkout_total_uses_client_supplied_prices() {
    // The total is summed from the request snapshot, not re-read from the
    // store. A client sending a different price gets it honored.
    let app = test_app().await;
    let (status, receipt) = send(
        &app,
        json_request(
            "POST",
            "/checkout",
            &json!({
                "cartItems": [{"quantity": 3, "price": 1.11}],
                "customerInfo": {"name": "Ada", "email": "ada@example.com"}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(receipt["total"], 3.33);
}

#[tokio::test]
async fn orders_are_listed_newest_first() {
    let app = test_app().await;

    for (quantity, price) in [(1, 10.0), (2, 10.0)] {
        let (status, _) = send(
            &app,
            json_request(
                "POST",
                "/checkout",
                &json!({
                    "cartItems": [{"quantity": quantity, "price": price}],
                    "customerInfo": {"name": "Ada", "email": "ada@example.com"}
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, orders) = send(&app, get("/orders")).await;
    let orders = orders.as_array().unwrap();
    assert_eq!(orders.len(), 2);
    // The second checkout (total 20) is newest
    assert_eq!(orders[0]["total"], 20.0);
    assert_eq!(orders[1]["total"], 10.0);
}
