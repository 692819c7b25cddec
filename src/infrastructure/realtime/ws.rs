use anyhow::Result;
use async_trait::async_trait;
use futures::SinkExt;
use futures::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Connection;
use crate::domain::models::ConnectionBox;
use crate::domain::models::Envelope;
use crate::domain::models::Transport;

pub struct WsTransport {
    pub url: String,
}

impl Default for WsTransport {
    fn default() -> WsTransport {
        return WsTransport {
            url: Config::get(ConfigKey::SocketURL),
        };
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn connect(&self, customer_id: &str) -> Result<ConnectionBox> {
        let url = format!("{url}/socket?customer_id={customer_id}", url = self.url);
        let (stream, _) = tokio_tungstenite::connect_async(&url).await?;

        tracing::debug!(customer_id = customer_id, "Realtime connection opened");
        return Ok(Box::new(WsConnection { stream }));
    }
}

struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl Connection for WsConnection {
    async fn send(&mut self, envelope: Envelope) -> Result<()> {
        let payload = serde_json::to_string(&envelope)?;
        self.stream.send(Message::Text(payload)).await?;

        return Ok(());
    }

    async fn recv(&mut self) -> Result<Option<Envelope>> {
        while let Some(frame) = self.stream.next().await {
            match frame? {
                Message::Text(payload) => match serde_json::from_str::<Envelope>(&payload) {
                    Ok(envelope) => {
                        return Ok(Some(envelope));
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "Dropping frame that is not an envelope");
                    }
                },
                Message::Close(_) => {
                    return Ok(None);
                }
                // Pings are answered by tungstenite itself.
                _ => {}
            }
        }

        return Ok(None);
    }

    async fn close(&mut self) -> Result<()> {
        if let Err(err) = self.stream.close(None).await {
            tracing::debug!(error = ?err, "Realtime connection was already closed");
        }

        return Ok(());
    }
}
