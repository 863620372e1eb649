use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = caravel_api::app::build_app();
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
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn post(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    body: serde_json::Value,
) -> reqwest::Response {
    client
        .post(format!("{base_url}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

async fn put(
    client: &reqwest::Client,
    base_url: &str,
    path: &str,
    body: serde_json::Value,
) -> reqwest::Response {
    client
        .put(format!("{base_url}{path}"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

/// Seed a company named C1 and a customer "Acme Corp" registered with it.
/// Returns (company_id, partner_id).
async fn seed_company_and_customer(client: &reqwest::Client, base_url: &str) -> (String, String) {
    let res = post(client, base_url, "/companies", json!({"name": "C1"})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let company: serde_json::Value = res.json().await.unwrap();
    let company_id = company["id"].as_str().unwrap().to_string();

    let res = post(
        client,
        base_url,
        "/partners",
        json!({
            "full_name": "Acme Corp",
            "kind": "customer",
            "company_ids": [company_id],
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let partner: serde_json::Value = res.json().await.unwrap();
    let partner_id = partner["id"].as_str().unwrap().to_string();

    (company_id, partner_id)
}

#[tokio::test]
async fn health_endpoint_answers() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_sale_order_defaults_to_draft() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = post(
        &client,
        &srv.base_url,
        "/sale-orders",
        json!({"client_partner_id": partner_id, "company_id": company_id}),
    )
    .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    assert_eq!(order["status"], "draft");
    assert_eq!(order["company_id"], company_id.as_str());
    assert_eq!(order["client_partner_id"], partner_id.as_str());
    assert_eq!(order["in_ati"], false);
}

#[tokio::test]
async fn partner_outside_the_domain_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, _) = seed_company_and_customer(&client, &srv.base_url).await;

    // A customer of no company: not in C1's eligible set.
    let res = post(
        &client,
        &srv.base_url,
        "/partners",
        json!({"full_name": "Globex", "kind": "customer"}),
    )
    .await;
    let stranger: serde_json::Value = res.json().await.unwrap();

    let res = post(
        &client,
        &srv.base_url,
        "/sale-orders",
        json!({"client_partner_id": stranger["id"], "company_id": company_id}),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "inconsistency");
}

#[tokio::test]
async fn locked_ati_policy_rejects_the_flag_but_not_the_default() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = put(
        &client,
        &srv.base_url,
        &format!("/companies/{company_id}/sale-config"),
        json!({"tax_inclusion": "ati_always"}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    // Explicit override: rejected.
    let res = post(
        &client,
        &srv.base_url,
        "/sale-orders",
        json!({
            "client_partner_id": partner_id,
            "company_id": company_id,
            "in_ati": true,
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["message"], "ATI change not allowed");

    // Flag omitted: the policy default applies.
    let res = post(
        &client,
        &srv.base_url,
        "/sale-orders",
        json!({"client_partner_id": partner_id, "company_id": company_id}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    assert_eq!(order["in_ati"], true);
}

#[tokio::test]
async fn status_lifecycle_finalize_then_confirm() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = post(
        &client,
        &srv.base_url,
        "/sale-orders",
        json!({"client_partner_id": partner_id, "company_id": company_id}),
    )
    .await;
    let order: serde_json::Value = res.json().await.unwrap();
    let order_id = order["id"].as_str().unwrap();

    let res = put(
        &client,
        &srv.base_url,
        "/sale-orders/status",
        json!({"sale_order_id": order_id, "status": "finalized_quotation"}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["status"], "finalized_quotation");

    let res = put(
        &client,
        &srv.base_url,
        "/sale-orders/status",
        json!({"sale_order_id": order_id, "status": "confirmed"}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    assert_eq!(updated["status"], "confirmed");

    // Finalizing a confirmed order fails and leaves it confirmed.
    let res = put(
        &client,
        &srv.base_url,
        "/sale-orders/status",
        json!({"sale_order_id": order_id, "status": "finalized_quotation"}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .get(format!("{}/sale-orders/{}", srv.base_url, order_id))
        .send()
        .await
        .unwrap();
    let current: serde_json::Value = res.json().await.unwrap();
    assert_eq!(current["status"], "confirmed");
}

#[tokio::test]
async fn cart_checkout_creates_the_order_and_empties_the_cart() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = post(
        &client,
        &srv.base_url,
        "/carts",
        json!({
            "company_id": company_id,
            "client_partner_id": partner_id,
            "lines": [
                {"label": "Widget", "quantity": 2, "unit_price": 500},
                {"label": "Gadget", "quantity": 1, "unit_price": 250},
            ],
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let cart: serde_json::Value = res.json().await.unwrap();
    let cart_id = cart["id"].as_str().unwrap();
    assert_eq!(cart["total"], 1250);

    let res = put(
        &client,
        &srv.base_url,
        &format!("/carts/{cart_id}/validate"),
        json!({}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order: serde_json::Value = res.json().await.unwrap();
    assert_eq!(order["total_amount"], 1250);
    assert_eq!(order["client_partner_id"], partner_id.as_str());

    let res = client
        .get(format!("{}/carts/{}", srv.base_url, cart_id))
        .send()
        .await
        .unwrap();
    let emptied: serde_json::Value = res.json().await.unwrap();
    assert_eq!(emptied["total"], 0);
    assert!(emptied["lines"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn cart_with_unrepresentable_total_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = post(
        &client,
        &srv.base_url,
        "/carts",
        json!({
            "company_id": company_id,
            "client_partner_id": partner_id,
            "lines": [{"label": "Bulk", "quantity": u64::MAX, "unit_price": 2}],
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn confirmed_order_accrues_loyalty_points_when_enabled() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let (company_id, partner_id) = seed_company_and_customer(&client, &srv.base_url).await;

    let res = put(
        &client,
        &srv.base_url,
        "/app-config",
        json!({"loyalty_enabled": true}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    // Checkout gives the order a non-zero total to accrue from.
    let res = post(
        &client,
        &srv.base_url,
        "/carts",
        json!({
            "company_id": company_id,
            "client_partner_id": partner_id,
            "lines": [{"label": "Widget", "quantity": 1, "unit_price": 2500}],
        }),
    )
    .await;
    let cart: serde_json::Value = res.json().await.unwrap();
    let cart_id = cart["id"].as_str().unwrap();

    let res = put(
        &client,
        &srv.base_url,
        &format!("/carts/{cart_id}/validate"),
        json!({}),
    )
    .await;
    let order: serde_json::Value = res.json().await.unwrap();
    let order_id = order["id"].as_str().unwrap();

    let res = put(
        &client,
        &srv.base_url,
        "/sale-orders/status",
        json!({"sale_order_id": order_id, "status": "confirmed"}),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/partners/{}/loyalty", srv.base_url, partner_id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let loyalty: serde_json::Value = res.json().await.unwrap();
    assert_eq!(loyalty["points"], 25);
}

#[tokio::test]
async fn timesheet_creation_runs_the_save_pipeline() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // 2023-01-09 through 2023-01-15 holds five weekdays.
    let res = post(
        &client,
        &srv.base_url,
        "/timesheets",
        json!({
            "employee_contact_name": "P0048 - Axelor",
            "from_date": "2023-01-09",
            "to_date": "2023-01-15",
        }),
    )
    .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let timesheet: serde_json::Value = res.json().await.unwrap();

    assert_eq!(
        timesheet["full_name"],
        "P0048 - Axelor 09/01/2023-15/01/2023"
    );
    assert_eq!(timesheet["lines"].as_array().unwrap().len(), 5);
    assert_eq!(timesheet["lines"][0]["full_name"], "09/01/2023");
    assert_eq!(timesheet["period_total"], 0);
}

#[tokio::test]
async fn unknown_ids_answer_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let ghost = uuid::Uuid::now_v7();
    let res = client
        .get(format!("{}/sale-orders/{}", srv.base_url, ghost))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/sale-orders/not-a-uuid", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
