// tests/api.rs

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use smartims_backend::{
    common::clock::FixedClock,
    config::{AppConfig, AppState},
    routes,
};

fn app() -> Router {
    let today = NaiveDate::from_ymd_opt(2024, 8, 19).unwrap();
    routes::app(AppState::with_clock(AppConfig::default(), Arc::new(FixedClock(today))))
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, token, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    (status, bytes)
}

async fn login(app: &Router, body: Value) -> String {
    let (status, json) = send(app, Method::POST, "/api/session/login", None, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    json["token"].as_str().unwrap().to_string()
}

async fn owner(app: &Router) -> String {
    login(app, json!({})).await
}

#[tokio::test]
async fn health_is_public() {
    let (status, bytes) = send_raw(&app(), Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"OK");
}

#[tokio::test]
async fn protected_routes_need_a_session() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/inventory/items", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/orders", Some("not-a-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_authorization_is_unauthorized() {
    let app = app();
    for value in ["Basic dXNlcjpwYXNz", "Bearer", "garbage"] {
        let request = Request::builder()
            .uri("/api/orders")
            .header(header::AUTHORIZATION, value)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "Authorization: {}", value);
    }
}

#[tokio::test]
async fn session_cap_from_config_evicts_the_oldest_login() {
    let mut config = AppConfig::default();
    config.session_limits.max_sessions = 1;
    let today = NaiveDate::from_ymd_opt(2024, 8, 19).unwrap();
    let app = routes::app(AppState::with_clock(config, Arc::new(FixedClock(today))));

    let first = owner(&app).await;
    let second = owner(&app).await;

    let (status, _) = send(&app, Method::GET, "/api/session", Some(&first), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&app, Method::GET, "/api/session", Some(&second), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn logout_invalidates_the_token() {
    let app = app();
    let token = owner(&app).await;

    let (status, session) = send(&app, Method::GET, "/api/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["displayName"], "Store Owner");

    let (status, _) = send(&app, Method::POST, "/api/session/logout", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, "/api/session", Some(&token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_capability_is_forbidden() {
    let app = app();
    let token = login(
        &app,
        json!({ "displayName": "Clerk", "capabilities": ["inventory:read", "orders:read"] }),
    )
    .await;

    let (status, _) = send(&app, Method::GET, "/api/inventory/items", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let draft = json!({ "name": "Tea", "category": "Groceries", "quantity": 5, "unit": "pieces", "price": 10 });
    let (status, _) = send(&app, Method::POST, "/api/inventory/items", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, Method::GET, "/api/settings", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, nav) = send(&app, Method::GET, "/api/navigation?current=/orders/ORD-001", Some(&token), None).await;
    let routes = nav["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["url"], "/inventory");
    assert_eq!(routes[1]["active"], true);
}

#[tokio::test]
async fn created_items_show_derived_status() {
    let app = app();
    let token = owner(&app).await;

    let cases = [
        (json!({ "name": "Salt", "category": "Groceries", "quantity": 0, "unit": "kg", "price": 20 }), "out-of-stock"),
        (json!({ "name": "Sugar", "category": "Groceries", "quantity": 10, "unit": "kg", "price": 45 }), "low-stock"),
        (
            json!({ "name": "Milk", "category": "Groceries", "quantity": 50, "unit": "liters", "price": 60, "expiryDate": "2024-08-29" }),
            "expiring-soon",
        ),
    ];
    for (draft, expected) in cases {
        let (status, item) = send(&app, Method::POST, "/api/inventory/items", Some(&token), Some(draft)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item["status"], expected);
    }

    let (_, items) = send(&app, Method::GET, "/api/inventory/items", Some(&token), None).await;
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[7]["name"], "Milk");
}

#[tokio::test]
async fn invalid_draft_reports_first_rule_and_stores_nothing() {
    let app = app();
    let token = owner(&app).await;

    let draft = json!({ "name": "  ", "quantity": -1, "unit": "kg", "price": 5 });
    let (status, body) = send(&app, Method::POST, "/api/inventory/items", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Informe o nome do item.");

    let (_, items) = send(&app, Method::GET, "/api/inventory/items", Some(&token), None).await;
    assert_eq!(items.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn filters_combine_and_all_is_a_no_op() {
    let app = app();
    let token = owner(&app).await;

    let (_, all) = send(&app, Method::GET, "/api/inventory/items?category=all&status=all", Some(&token), None).await;
    assert_eq!(all.as_array().unwrap().len(), 5);

    let (_, rice) = send(&app, Method::GET, "/api/inventory/items?q=RICE", Some(&token), None).await;
    assert_eq!(rice.as_array().unwrap().len(), 1);
    assert_eq!(rice[0]["name"], "Basmati Rice");

    let (_, pending) = send(&app, Method::GET, "/api/orders?status=pending", Some(&token), None).await;
    assert!(pending.as_array().unwrap().iter().all(|o| o["status"] == "pending"));

    let (status, _) = send(&app, Method::GET, "/api/orders?status=shipped", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_totals_come_from_line_items() {
    let app = app();
    let token = owner(&app).await;

    let draft = json!({
        "customerName": "Kavya Rao",
        "items": [
            { "name": "Rice", "quantity": 2, "price": 50 },
            { "name": "Ghee", "quantity": 1, "price": 100 }
        ],
        "paymentMethod": "UPI",
        "notes": "deixar na portaria"
    });
    let (status, order) = send(&app, Method::POST, "/api/orders", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["id"], "ORD-005");
    assert_eq!(order["itemCount"], 2);
    assert_eq!(order["total"], 200.0);
    assert_eq!(order["status"], "pending");
    assert_eq!(order["date"], "2024-08-19");

    let (_, orders) = send(&app, Method::GET, "/api/orders", Some(&token), None).await;
    assert_eq!(orders[0]["id"], "ORD-005");
}

#[tokio::test]
async fn oversized_order_total_is_rejected() {
    let app = app();
    let token = owner(&app).await;

    let draft = json!({
        "customerName": "Kavya Rao",
        "items": [{ "name": "Gold", "quantity": 1_000_000, "price": 1e26 }],
        "paymentMethod": "Cash"
    });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "O total do pedido excede o limite.");

    let (_, orders) = send(&app, Method::GET, "/api/orders", Some(&token), None).await;
    assert_eq!(orders.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn order_without_line_items_is_rejected() {
    let app = app();
    let token = owner(&app).await;

    let draft = json!({ "customerName": "Kavya Rao", "items": [], "paymentMethod": "Cash" });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Adicione pelo menos um item ao pedido.");
}

#[tokio::test]
async fn delete_requires_confirmation() {
    let app = app();
    let token = owner(&app).await;

    let (status, _) = send(&app, Method::DELETE, "/api/orders/ORD-002", Some(&token), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, orders) = send(&app, Method::GET, "/api/orders", Some(&token), None).await;
    assert_eq!(orders.as_array().unwrap().len(), 4);

    let (status, _) = send(&app, Method::DELETE, "/api/orders/ORD-002?confirm=true", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, orders) = send(&app, Method::GET, "/api/orders", Some(&token), None).await;
    let ids: Vec<&str> = orders.as_array().unwrap().iter().map(|o| o["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ORD-001", "ORD-003", "ORD-004"]);

    let (status, _) = send(&app, Method::GET, "/api/orders/ORD-002", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn edit_replaces_only_the_target() {
    let app = app();
    let token = owner(&app).await;
    let (_, before) = send(&app, Method::GET, "/api/inventory/items", Some(&token), None).await;

    let draft = json!({ "name": "Wheat Flour", "category": "Groceries", "quantity": 40, "unit": "kg", "price": 45 });
    let (status, item) = send(&app, Method::PUT, "/api/inventory/items/2", Some(&token), Some(draft)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["status"], "in-stock");

    let (_, after) = send(&app, Method::GET, "/api/inventory/items", Some(&token), None).await;
    let (before, after) = (before.as_array().unwrap(), after.as_array().unwrap());
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after) {
        if old["id"] != "2" {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn form_intents_follow_query_flags() {
    let app = app();
    let token = owner(&app).await;

    let (_, add) = send(&app, Method::GET, "/api/inventory/draft?add=true", Some(&token), None).await;
    assert_eq!(add["open"], true);
    assert_eq!(add["editingId"], Value::Null);

    let (_, edit) = send(&app, Method::GET, "/api/inventory/draft?edit=1", Some(&token), None).await;
    assert_eq!(edit["editingId"], "1");
    assert_eq!(edit["draft"]["name"], "Basmati Rice");

    let (_, unknown) = send(&app, Method::GET, "/api/inventory/draft?edit=999", Some(&token), None).await;
    assert_eq!(unknown["open"], false);

    let (_, order) = send(&app, Method::GET, "/api/orders/draft?edit=ORD-001", Some(&token), None).await;
    assert_eq!(order["lineItemsAvailable"], false);
    assert_eq!(order["draft"]["items"], json!([]));

    let (_, closed) = send(&app, Method::GET, "/api/orders/draft", Some(&token), None).await;
    assert_eq!(closed["open"], false);
}

#[tokio::test]
async fn report_download_is_an_attachment() {
    let app = app();
    let token = owner(&app).await;

    let request = Request::builder()
        .uri("/api/reports/Total%20Revenue/download")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"total_revenue_report.txt\""
    );
    assert!(response.headers()[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/plain"));

    let (status, _) = send(&app, Method::GET, "/api/reports/unknown/download", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sidebar_toggle_flips_the_session_flag() {
    let app = app();
    let token = owner(&app).await;

    let (_, nav) = send(&app, Method::GET, "/api/navigation?current=/", Some(&token), None).await;
    assert_eq!(nav["sidebarCollapsed"], false);
    assert_eq!(nav["routes"].as_array().unwrap().len(), 7);
    assert_eq!(nav["routes"][0]["active"], true);

    let (_, nav) = send(&app, Method::POST, "/api/navigation/sidebar/toggle", Some(&token), None).await;
    assert_eq!(nav["sidebarCollapsed"], true);
}

#[tokio::test]
async fn alerts_can_be_marked_read() {
    let app = app();
    let token = owner(&app).await;

    let (_, before) = send(&app, Method::GET, "/api/alerts/summary", Some(&token), None).await;
    let (status, alert) = send(&app, Method::POST, "/api/alerts/1/read", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alert["isRead"], true);

    let (_, after) = send(&app, Method::GET, "/api/alerts/summary", Some(&token), None).await;
    assert_eq!(after["unread"].as_u64().unwrap() + 1, before["unread"].as_u64().unwrap());
}

#[tokio::test]
async fn dashboard_and_settings_round_out_the_shell() {
    let app = app();
    let token = owner(&app).await;

    let (status, dashboard) = send(&app, Method::GET, "/api/dashboard?period=monthly", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["period"], "monthly");
    assert!(!dashboard["recentActivity"].as_array().unwrap().is_empty());

    let (_, mut settings) = send(&app, Method::GET, "/api/settings", Some(&token), None).await;
    assert_eq!(settings["theme"], "system");
    settings["theme"] = json!("dark");
    let (status, saved) = send(&app, Method::PUT, "/api/settings", Some(&token), Some(settings)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["theme"], "dark");
}
