use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::build_app;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?)
    }

    async fn post_ok(&self, path: &str, body: Value) -> anyhow::Result<Value> {
        let res = self.post(path, body).await?;
        assert_eq!(res.status(), HttpStatusCode::OK, "POST {path}");
        Ok(res.json().await?)
    }
}

/// Fresh in-memory database and router on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    let app = build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

async fn seed_company(app: &TestApp, name: &str, unified_number: &str, company_type: &str) -> anyhow::Result<i64> {
    let body = app
        .post_ok(
            "/companies",
            json!({"name": name, "commercial_number": format!("CR-{unified_number}"), "unified_number": unified_number, "type": company_type}),
        )
        .await?;
    Ok(body["id"].as_i64().unwrap_or_default())
}

async fn seed_employee(app: &TestApp, name: &str, national_id: &str, company_id: i64) -> anyhow::Result<i64> {
    let body = app
        .post_ok(
            "/company_employees",
            json!({"name": name, "national_id": national_id, "job_number": format!("J-{national_id}"),
                   "nationality": "SA", "phone": "0500000000", "company_id": company_id}),
        )
        .await?;
    Ok(body["id"].as_i64().unwrap_or_default())
}

#[tokio::test]
async fn health_and_banner() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/health").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");

    let body = app.get("/").await?.json::<Value>().await?;
    assert!(body["message"].as_str().is_some());

    let res = app.get("/openapi.json").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn company_create_list_and_lookup() -> anyhow::Result<()> {
    let app = start_server().await?;
    seed_company(&app, "Acme Sales", "7001", "sales").await?;
    seed_company(&app, "Fixit", "7002", "installation").await?;

    let body = app.get("/companies?type=sales").await?.json::<Value>().await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["name"], "Acme Sales");
    assert_eq!(body["data"][0]["type"], "sales");

    let body = app.get("/companies_installation").await?.json::<Value>().await?;
    assert_eq!(body["data"][0]["unified_number"], "7002");

    let res = app.get("/companies/7002").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "Fixit");
    assert_eq!(body["commercial_number"], "CR-7002");

    let res = app.get("/companies/0000").await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn company_type_is_validated() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app
        .post("/companies", json!({"name": "W", "commercial_number": "1", "unified_number": "2", "type": "wholesale"}))
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);

    assert_eq!(app.get("/companies").await?.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(app.get("/companies?type=wholesale").await?.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(app.get("/company_employees?company_type=wholesale").await?.status(), HttpStatusCode::BAD_REQUEST);

    // nothing was stored
    assert_eq!(app.get("/companies?type=sales").await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn pagination_and_empty_results() -> anyhow::Result<()> {
    let app = start_server().await?;
    assert_eq!(app.get("/companies_sales").await?.status(), HttpStatusCode::NOT_FOUND);

    for i in 0..3 {
        seed_company(&app, &format!("Co {i}"), &format!("U{i}"), "sales").await?;
    }
    let body = app.get("/companies_sales?skip=1&limit=1").await?.json::<Value>().await?;
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["name"], "Co 1");

    let res = app.get("/companies_sales?skip=10").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"], json!([]));

    assert_eq!(app.get("/companies_sales?skip=-1").await?.status(), HttpStatusCode::BAD_REQUEST);

    let res = app.get("/companies_sales?skip=18446744073709551615").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"], json!([]));

    let res = app.get("/companies_sales?limit=18446744073709551615").await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(3));
    Ok(())
}

#[tokio::test]
async fn malformed_path_ids_get_json_errors() -> anyhow::Result<()> {
    let app = start_server().await?;
    for path in ["/company_employees/abc", "/suspended_beneficiaries/abc"] {
        let res = app.get(path).await?;
        assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST, "{path}");
        let body = res.json::<Value>().await?;
        assert_eq!(body["error"], "Validation Error");
        assert!(body["detail"].as_str().is_some());
    }
    Ok(())
}

#[tokio::test]
async fn employees_search_and_conflicts() -> anyhow::Result<()> {
    let app = start_server().await?;
    let sales = seed_company(&app, "Sales Co", "S1", "sales").await?;
    let install = seed_company(&app, "Install Co", "I1", "installation").await?;
    let ahmad = seed_employee(&app, "Ahmad", "1001", sales).await?;
    seed_employee(&app, "Lina", "1002", install).await?;

    for term in ["ahm", "AHM", "ahmad"] {
        let body = app.get(&format!("/company_employees?search={term}")).await?.json::<Value>().await?;
        assert_eq!(body["total"], 1, "term {term}");
        assert_eq!(body["data"][0]["id"], ahmad);
    }

    let body = app.get("/company_employees?company_type=installation").await?.json::<Value>().await?;
    assert_eq!(body["data"][0]["name"], "Lina");

    let body = app.get(&format!("/company_employees/{ahmad}")).await?.json::<Value>().await?;
    assert_eq!(body["national_id"], "1001");
    assert_eq!(body["company_id"], sales);

    let dup = json!({"name": "Other", "national_id": "1001", "job_number": "X", "nationality": "SA", "phone": "0", "company_id": sales});
    assert_eq!(app.post("/company_employees", dup).await?.status(), HttpStatusCode::CONFLICT);

    let orphan = json!({"name": "Ghost", "national_id": "9999", "job_number": "X", "nationality": "SA", "phone": "0", "company_id": 4242});
    assert_eq!(app.post("/company_employees", orphan).await?.status(), HttpStatusCode::CONFLICT);

    let body = app.get(&format!("/company_employees?company_id={sales}")).await?.json::<Value>().await?;
    assert_eq!(body["total"], 1);

    assert_eq!(app.get("/company_employees/777").await?.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(
        app.post("/company_employees", json!({"name": "no fields"})).await?.status(),
        HttpStatusCode::BAD_REQUEST
    );
    Ok(())
}

#[tokio::test]
async fn suspended_employees_nest_employee_and_company() -> anyhow::Result<()> {
    let app = start_server().await?;
    let company = seed_company(&app, "Fixit", "I1", "installation").await?;
    let employee = seed_employee(&app, "Omar", "3003", company).await?;

    let body = app
        .post_ok("/suspended_employees", json!({"employee_id": employee, "suspended_at": "2024-02-10"}))
        .await?;
    assert_eq!(body["suspended_at"], "2024-02-10");
    assert_eq!(body["employee"]["name"], "Omar");
    assert_eq!(body["employee"]["company"]["name"], "Fixit");

    let body = app.get("/suspended_employees?company_type=installation&search=omar").await?.json::<Value>().await?;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["employee"]["company"]["id"], company);

    assert_eq!(app.get("/suspended_employees?company_type=sales").await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn beneficiaries_and_suspensions() -> anyhow::Result<()> {
    let app = start_server().await?;
    let ben = app
        .post_ok("/beneficiaries", json!({"name": "Sara", "national_id": "5005", "phone": "0559", "nationality": "SA"}))
        .await?;
    let ben_id = ben["id"].as_i64().unwrap_or_default();

    let dup = json!({"name": "Other", "national_id": "5005", "phone": "1", "nationality": "SA"});
    assert_eq!(app.post("/beneficiaries", dup).await?.status(), HttpStatusCode::CONFLICT);

    let body = app.get("/beneficiaries/5005").await?.json::<Value>().await?;
    assert_eq!(body["name"], "Sara");
    assert_eq!(app.get("/beneficiaries/0").await?.status(), HttpStatusCode::NOT_FOUND);

    let mut first_id = 0;
    for date in ["2024-01-01", "2024-03-01", "2024-02-01"] {
        let row = app.post_ok("/suspended_beneficiaries", json!({"beneficiary_id": ben_id, "suspended_at": date})).await?;
        if first_id == 0 {
            first_id = row["id"].as_i64().unwrap_or_default();
        }
    }

    let body = app.get("/suspended_beneficiaries").await?.json::<Value>().await?;
    assert_eq!(body["total"], 3);
    let dates: Vec<_> = body["data"].as_array().into_iter().flatten().map(|r| r["suspended_at"].clone()).collect();
    assert_eq!(dates, vec![json!("2024-03-01"), json!("2024-02-01"), json!("2024-01-01")]);
    assert_eq!(body["data"][0]["beneficiary"]["national_id"], "5005");

    let body = app.get(&format!("/suspended_beneficiaries/{first_id}")).await?.json::<Value>().await?;
    assert_eq!(body["suspended_at"], "2024-01-01");
    assert_eq!(app.get("/suspended_beneficiaries/999").await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn providers_and_assignments() -> anyhow::Result<()> {
    let app = start_server().await?;
    let body = app.get("/service_providers").await?.json::<Value>().await?;
    assert_eq!(body, json!([]));

    let company = seed_company(&app, "Fixit", "I1", "installation").await?;
    let employee = seed_employee(&app, "Omar", "3003", company).await?;
    let provider = app
        .post_ok("/service_providers", json!({"name": "Fast Fix", "code": "FF", "company_id": company}))
        .await?;

    let body = app
        .post_ok(
            "/employee_service_provider",
            json!({"employee_id": employee, "provider_id": provider["id"], "assigned_at": "2024-05-05"}),
        )
        .await?;
    assert_eq!(body["assigned_at"], "2024-05-05");

    let body = app.get("/employee_service_provider").await?.json::<Value>().await?;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["provider_id"], provider["id"]);
    Ok(())
}
