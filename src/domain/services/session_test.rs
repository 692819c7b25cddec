use anyhow::Result;
use tempfile::tempdir;

use super::SessionStore;

#[tokio::test]
async fn it_round_trips_a_session() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.yaml"));

    assert!(store.load().await?.is_none());

    let saved = store.save("c1").await?;
    assert_eq!(saved.customer_id, "c1");
    assert_eq!(saved.room(), "customer_c1");

    let loaded = store.load().await?.unwrap();
    assert_eq!(loaded, saved);

    return Ok(());
}

#[tokio::test]
async fn it_replaces_the_previous_identifier() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.yaml"));

    store.save("c1").await?;
    store.save("c2").await?;

    let loaded = store.load().await?.unwrap();
    assert_eq!(loaded.customer_id, "c2");

    return Ok(());
}

#[tokio::test]
async fn it_rejects_an_empty_identifier() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.yaml"));

    assert!(store.save("").await.is_err());
    assert!(store.load().await?.is_none());

    return Ok(());
}

#[tokio::test]
async fn it_clears_idempotently() -> Result<()> {
    let dir = tempdir()?;
    let store = SessionStore::new(dir.path().join("session.yaml"));

    store.save("c1").await?;
    store.clear().await?;
    store.clear().await?;

    assert!(store.load().await?.is_none());

    return Ok(());
}
