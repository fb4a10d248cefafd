mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::{json, Value};

#[tokio::test]
async fn list_orders_returns_fixed_dataset() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/orders", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content type: {}",
        content_type
    );

    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body,
        json!([
            { "orderId": "O101", "item": "Laptop", "userId": 1 },
            { "orderId": "O102", "item": "Monitor", "userId": 2 }
        ])
    );
}

#[tokio::test]
async fn list_orders_is_idempotent() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let first: Value = client
        .get(format!("{}/orders", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let second: Value = client
        .get(format!("{}/orders", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_list_orders_return_identical_results() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let url = format!("{}/orders", app.address);

    let (a, b, c, d) = tokio::join!(
        client.get(&url).send(),
        client.get(&url).send(),
        client.get(&url).send(),
        client.get(&url).send(),
    );

    let mut bodies = Vec::new();
    for response in [a, b, c, d] {
        let response = response.expect("Failed to execute request");
        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.expect("Failed to parse JSON");
        bodies.push(body);
    }

    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}
