use anyhow::Result;
use async_trait::async_trait;

use super::Envelope;

pub type ConnectionBox = Box<dyn Connection>;

/// Opens realtime connections. The websocket implementation lives in
/// infrastructure; tests script their own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Opens a connection for the given customer, passing the identifier as
    /// the correlation key the backend uses to route events to this session.
    async fn connect(&self, customer_id: &str) -> Result<ConnectionBox>;
}

#[async_trait]
pub trait Connection: Send {
    async fn send(&mut self, envelope: Envelope) -> Result<()>;

    /// Next inbound envelope. `Ok(None)` means the server closed the stream.
    async fn recv(&mut self) -> Result<Option<Envelope>>;

    async fn close(&mut self) -> Result<()>;
}
