use anyhow::Result;
use mockito::Matcher;
use serde_json::json;

use super::GatewayClient;
use crate::domain::models::SeatStatus;

#[tokio::test]
async fn it_lists_seats_for_a_showtime() -> Result<()> {
    let body = r#"[
        {"id": "s1", "showtime_id": "st1", "seat_number": "A1", "status": "available", "price": 100000.0},
        {"id": "s2", "showtime_id": "st1", "seat_number": "A2", "status": "booked"}
    ]"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/seats/showtime/st1")
        .with_status(200)
        .with_body(body)
        .create();

    let client = GatewayClient::with_url(server.url());
    let seats = client.seats_for_showtime("st1").await?;

    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].seat_number, "A1");
    assert!(seats[0].status.is_selectable());
    assert_eq!(seats[0].price, Some(100_000.0));
    assert_eq!(seats[1].status, SeatStatus::Booked);
    assert_eq!(seats[1].price, None);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_accepts_available_seats() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/seats/check")
        .match_body(Matcher::Json(json!({
            "showtime_id": "st1",
            "seats": ["A1", "A2"],
        })))
        .with_status(200)
        .with_body(r#"{"available": true}"#)
        .create();

    let client = GatewayClient::with_url(server.url());
    client
        .check_seats("st1", &["A1".to_string(), "A2".to_string()])
        .await?;

    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_reports_a_conflict_on_client_error() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/seats/check")
        .with_status(400)
        .with_body(r#"{"detail": "Seats not available"}"#)
        .create();

    let client = GatewayClient::with_url(server.url());
    let res = client.check_seats("st1", &["A1".to_string()]).await;

    assert!(res
        .unwrap_err()
        .to_string()
        .contains("no longer available"));
    mock.assert();
}
