use anyhow::Result;

use super::GatewayClient;

#[tokio::test]
async fn it_lists_movies() -> Result<()> {
    let body = r#"[
        {"id": "m1", "title": "Blade Sprinter", "genre": "scifi", "duration": 117, "rating": 8.1},
        {"id": "m2", "title": "The Long Intermission", "genre": "drama"}
    ]"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/movies")
        .with_status(200)
        .with_body(body)
        .create();

    let client = GatewayClient::with_url(server.url());
    let movies = client.list_movies().await?;

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "Blade Sprinter");
    assert_eq!(movies[0].duration, 117);
    assert_eq!(movies[1].rating, 0.0);
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_gets_a_movie_by_legacy_identifier() -> Result<()> {
    let body = r#"{"_id": "m1", "title": "Blade Sprinter"}"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/movies/m1")
        .with_status(200)
        .with_body(body)
        .create();

    let client = GatewayClient::with_url(server.url());
    let movie = client.get_movie("m1").await?;

    assert_eq!(movie.id, "m1");
    assert_eq!(movie.title, "Blade Sprinter");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_lists_showtimes_for_a_movie() -> Result<()> {
    let body = r#"[
        {"id": "st1", "movie_id": "m1", "time": "2024-06-01T19:30:00", "theater": "Hall 1", "price": 100000.0}
    ]"#;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/showtimes/movie/m1")
        .with_status(200)
        .with_body(body)
        .create();

    let client = GatewayClient::with_url(server.url());
    let showtimes = client.showtimes_for_movie("m1").await?;

    assert_eq!(showtimes.len(), 1);
    assert_eq!(showtimes[0].theater, "Hall 1");
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_propagates_server_errors() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/movies").with_status(500).create();

    let client = GatewayClient::with_url(server.url());
    let res = client.list_movies().await;

    assert!(res.is_err());
    mock.assert();
}
