use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::GatewayClient;
use crate::domain::models::CustomerProfile;
use crate::domain::models::LoginRequest;
use crate::domain::models::RegisterRequest;

#[tokio::test]
async fn it_registers_a_customer() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/customers/register")
        .match_body(Matcher::Json(json!({
            "email": "ada@example.com",
            "name": "Ada",
            "phone": "555-0100",
            "password": "hunter2",
        })))
        .with_status(201)
        .with_body(r#"{"id": "c1", "email": "ada@example.com", "name": "Ada", "phone": "555-0100"}"#)
        .create();

    let client = GatewayClient::with_url(server.url());
    let customer = client
        .register(&RegisterRequest {
            email: "ada@example.com".to_string(),
            name: "Ada".to_string(),
            phone: "555-0100".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;

    assert_eq!(customer.id, "c1");
    assert_eq!(customer.name, "Ada");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_logs_in() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/customers/login")
        .with_status(200)
        .with_body(r#"{"message": "Login successful", "customer_id": "c1"}"#)
        .create();

    let client = GatewayClient::with_url(server.url());
    let res = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await?;

    assert_eq!(res.customer_id, "c1");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_reports_bad_credentials() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/customers/login")
        .with_status(401)
        .with_body(r#"{"detail": "Invalid credentials"}"#)
        .create();

    let client = GatewayClient::with_url(server.url());
    let res = client
        .login(&LoginRequest {
            email: "ada@example.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;

    assert_eq!(
        res.unwrap_err().to_string(),
        "Incorrect email or password"
    );
    mock.assert();
}

#[tokio::test]
async fn it_gets_and_updates_a_customer() -> Result<()> {
    let mut server = mockito::Server::new();
    let get_mock = server
        .mock("GET", "/customers/c1")
        .with_status(200)
        .with_body(r#"{"_id": "c1", "email": "ada@example.com", "name": "Ada"}"#)
        .create();
    let put_mock = server
        .mock("PUT", "/customers/c1")
        .match_body(Matcher::Json(json!({
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "phone": "555-0101",
        })))
        .with_status(200)
        .with_body(
            r#"{"id": "c1", "email": "ada@example.com", "name": "Ada Lovelace", "phone": "555-0101"}"#,
        )
        .create();

    let client = GatewayClient::with_url(server.url());

    let customer = client.get_customer("c1").await?;
    assert_eq!(customer.name, "Ada");

    let updated = client
        .update_customer(
            "c1",
            &CustomerProfile {
                email: "ada@example.com".to_string(),
                name: "Ada Lovelace".to_string(),
                phone: "555-0101".to_string(),
            },
        )
        .await?;
    assert_eq!(updated.name, "Ada Lovelace");

    get_mock.assert();
    put_mock.assert();

    return Ok(());
}
