use std::collections::HashSet;

use gosvg_api::config::ApiConfig;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(config: ApiConfig) -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = gosvg_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn default() -> Self {
        Self::spawn(ApiConfig::default()).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn submit_trip(
    client: &reqwest::Client,
    base_url: &str,
    driver_id: &str,
    amount: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{}/transactions", base_url))
        .json(&json!({ "driverId": driver_id, "vehicleId": "van-22", "amount": amount }))
        .send()
        .await
        .unwrap()
}

async fn get_json(client: &reqwest::Client, url: String) -> serde_json::Value {
    let res = client.get(url).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    let body = get_json(&client, format!("{}/health", srv.base_url)).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn simulated_rides_then_cash_out() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    for amount in [300, 400, 500] {
        let res = submit_trip(&client, &srv.base_url, "driver-1", json!(amount)).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    // Earnings today come from the ledger.
    let earnings = get_json(
        &client,
        format!("{}/drivers/driver-1/earnings-today", srv.base_url),
    )
    .await;
    assert_eq!(earnings["status"], "ok");
    assert_eq!(earnings["driverId"], "driver-1");
    assert_eq!(earnings["currency"], "XCD");
    assert_eq!(earnings["totalCents"], 1200);
    assert_eq!(earnings["total"], 12.0);
    assert_eq!(earnings["count"], 3);

    // The wallet was credited by the same submissions.
    let body = get_json(&client, format!("{}/drivers/driver-1/wallet", srv.base_url)).await;
    assert_eq!(body["wallet"]["availableCents"], 1200);
    assert_eq!(body["wallet"]["totalEarnedCents"], 1200);
    assert!(body["wallet"].get("lastPayoutAt").is_none());

    let res = client
        .post(format!("{}/drivers/driver-1/payouts", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let paid: serde_json::Value = res.json().await.unwrap();
    assert_eq!(paid["wallet"]["availableCents"], 0);
    assert_eq!(paid["wallet"]["totalPaidOutCents"], 1200);
    assert_eq!(paid["wallet"]["totalEarnedCents"], 1200);
    let stamped = paid["wallet"]["lastPayoutAt"].as_str().unwrap().to_string();

    // A second payout has nothing to move and changes nothing.
    let res = client
        .post(format!("{}/drivers/driver-1/payouts", srv.base_url))
        .send()
        .await
        .unwrap();
    let again: serde_json::Value = res.json().await.unwrap();
    assert_eq!(again["wallet"], paid["wallet"]);
    assert_eq!(again["wallet"]["lastPayoutAt"], stamped.as_str());

    // Payouts do not rewrite trip history.
    let earnings = get_json(
        &client,
        format!("{}/drivers/driver-1/earnings-today", srv.base_url),
    )
    .await;
    assert_eq!(earnings["totalCents"], 1200);
}

#[tokio::test]
async fn unknown_driver_reads_as_zero() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    let body = get_json(&client, format!("{}/drivers/nobody/wallet", srv.base_url)).await;
    assert_eq!(
        body["wallet"],
        json!({
            "driverId": "nobody",
            "currency": "XCD",
            "availableCents": 0,
            "totalEarnedCents": 0,
            "totalPaidOutCents": 0,
        })
    );

    let earnings = get_json(
        &client,
        format!("{}/drivers/nobody/earnings-today", srv.base_url),
    )
    .await;
    assert_eq!(earnings["count"], 0);
    assert_eq!(earnings["totalCents"], 0);
}

#[tokio::test]
async fn invalid_submissions_change_nothing() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    for bad in [json!(-50), json!(12.5), json!("300")] {
        let res = submit_trip(&client, &srv.base_url, "driver-1", bad.clone()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "amount {bad}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_amount");
    }

    let res = client
        .post(format!("{}/transactions", srv.base_url))
        .json(&json!({ "vehicleId": "van-22", "amount": 300 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_identifier");

    let listed = get_json(
        &client,
        format!("{}/drivers/driver-1/transactions", srv.base_url),
    )
    .await;
    assert_eq!(listed["items"], json!([]));

    let wallet = get_json(&client, format!("{}/drivers/driver-1/wallet", srv.base_url)).await;
    assert_eq!(wallet["wallet"]["totalEarnedCents"], 0);
}

#[tokio::test]
async fn concurrent_submissions_get_unique_ids() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..40u64 {
        let client = client.clone();
        let base_url = srv.base_url.clone();
        tasks.push(tokio::spawn(async move {
            let driver = format!("driver-{}", i % 4);
            let res = submit_trip(&client, &base_url, &driver, json!(100)).await;
            assert_eq!(res.status(), StatusCode::CREATED);
            let body: serde_json::Value = res.json().await.unwrap();
            body["transaction"]["id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap());
    }
    assert_eq!(ids.len(), 40);

    let listed = get_json(
        &client,
        format!("{}/drivers/driver-0/transactions", srv.base_url),
    )
    .await;
    let items = listed["items"].as_array().unwrap();
    assert_eq!(items.len(), 10);

    // Ledger order is id order.
    let seqs: Vec<u64> = items
        .iter()
        .map(|tx| tx["id"].as_str().unwrap().parse().unwrap())
        .collect();
    let mut sorted = seqs.clone();
    sorted.sort();
    assert_eq!(seqs, sorted);

    let wallet = get_json(&client, format!("{}/drivers/driver-0/wallet", srv.base_url)).await;
    assert_eq!(wallet["wallet"]["availableCents"], 1000);
}

#[tokio::test]
async fn crediting_can_be_disabled() {
    let config = ApiConfig {
        credit_on_submit: false,
        ..ApiConfig::default()
    };
    let srv = TestServer::spawn(config).await;
    let client = reqwest::Client::new();

    let res = submit_trip(&client, &srv.base_url, "driver-1", json!(300)).await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let wallet = get_json(&client, format!("{}/drivers/driver-1/wallet", srv.base_url)).await;
    assert_eq!(wallet["wallet"]["availableCents"], 0);

    let earnings = get_json(
        &client,
        format!("{}/drivers/driver-1/earnings-today", srv.base_url),
    )
    .await;
    assert_eq!(earnings["totalCents"], 300);
}

#[tokio::test]
async fn passenger_id_is_optional_and_echoed() {
    let srv = TestServer::default().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/transactions", srv.base_url))
        .json(&json!({
            "driverId": "driver-1",
            "vehicleId": "van-22",
            "amount": 250,
            "passengerId": "rider-9",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["transaction"]["passengerId"], "rider-9");
    assert!(body["transaction"]["createdAt"].as_str().is_some());

    let res = submit_trip(&client, &srv.base_url, "driver-1", json!(100)).await;
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["transaction"].get("passengerId").is_none());
}
