#[cfg(test)]
#[path = "channel_test.rs"]
mod tests;

use std::cmp;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChannelEvent;
use crate::domain::models::ConnectionBox;
use crate::domain::models::ConnectionState;
use crate::domain::models::Envelope;
use crate::domain::models::Session;
use crate::domain::models::Transport;

#[derive(Debug, Clone, Copy)]
pub struct ChannelOptions {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for ChannelOptions {
    fn default() -> ChannelOptions {
        let max_attempts = Config::get(ConfigKey::ReconnectAttempts)
            .parse::<u32>()
            .unwrap_or(5);
        let base_delay = Config::get(ConfigKey::ReconnectDelay)
            .parse::<u64>()
            .unwrap_or(1000);
        let max_delay = Config::get(ConfigKey::ReconnectDelayMax)
            .parse::<u64>()
            .unwrap_or(5000);

        return ChannelOptions {
            max_attempts,
            base_delay: Duration::from_millis(base_delay),
            max_delay: Duration::from_millis(max_delay),
        };
    }
}

/// Handle for pushing frames out through the live connection. Sends are
/// dropped while the channel is anything but connected.
#[derive(Clone)]
pub struct ChannelEmitter {
    tx: mpsc::UnboundedSender<Envelope>,
    status: watch::Receiver<ConnectionState>,
}

impl ChannelEmitter {
    pub fn emit(&self, envelope: Envelope) -> bool {
        if !self.status.borrow().is_connected() {
            return false;
        }

        return self.tx.send(envelope).is_ok();
    }
}

/// Owns the one realtime connection for a signed-in session: connect,
/// bounded reconnect, room re-join, event dispatch, teardown.
pub struct RealtimeChannel {
    transport: Arc<dyn Transport>,
    options: ChannelOptions,
    events_tx: mpsc::UnboundedSender<ChannelEvent>,
    state_tx: watch::Sender<ConnectionState>,
    outbound_tx: mpsc::UnboundedSender<Envelope>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RealtimeChannel {
    pub fn new(
        transport: Arc<dyn Transport>,
        events_tx: mpsc::UnboundedSender<ChannelEvent>,
        options: ChannelOptions,
    ) -> RealtimeChannel {
        let (state_tx, _) = watch::channel(ConnectionState::Disconnected);
        // Placeholder sender until the first establish; its receiver is gone,
        // so emits before then are dropped.
        let (outbound_tx, _) = mpsc::unbounded_channel();

        return RealtimeChannel {
            transport,
            options,
            events_tx,
            state_tx,
            outbound_tx,
            cancel: CancellationToken::new(),
            task: None,
        };
    }

    pub fn status(&self) -> ConnectionState {
        return *self.state_tx.borrow();
    }

    pub fn watch_status(&self) -> watch::Receiver<ConnectionState> {
        return self.state_tx.subscribe();
    }

    pub fn is_active(&self) -> bool {
        return self.task.as_ref().is_some_and(|task| return !task.is_finished());
    }

    /// Emitter bound to the current connection attempt. Fetch it after
    /// establish; one from a previous establish goes stale.
    pub fn emitter(&self) -> ChannelEmitter {
        return ChannelEmitter {
            tx: self.outbound_tx.clone(),
            status: self.state_tx.subscribe(),
        };
    }

    /// Opens the connection for the given session. Without a customer
    /// identifier this is silently a no-op, as is calling it while a
    /// connection task is already live.
    pub fn establish(&mut self, session: &Session) {
        if session.customer_id.is_empty() {
            tracing::debug!("No customer identifier, skipping realtime connect");
            return;
        }
        if self.is_active() {
            tracing::debug!("Realtime channel already established");
            return;
        }

        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        self.outbound_tx = outbound_tx;
        self.cancel = CancellationToken::new();

        let task = tokio::spawn(run_connection(
            self.transport.clone(),
            session.clone(),
            self.options,
            self.state_tx.clone(),
            self.events_tx.clone(),
            outbound_rx,
            self.cancel.clone(),
        ));
        self.task = Some(task);
    }

    /// Tears the connection down and resets status. Idempotent; pending
    /// reconnect timers are aborted and late events are suppressed.
    pub fn teardown(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }

        self.state_tx.send_replace(ConnectionState::Disconnected);
    }

    pub fn emit(&self, envelope: Envelope) -> bool {
        if !self.status().is_connected() {
            return false;
        }

        return self.outbound_tx.send(envelope).is_ok();
    }
}

impl Drop for RealtimeChannel {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

enum PumpEnd {
    Cancelled,
    SubscriberGone,
    ConnectionLost,
}

enum Step {
    Cancelled,
    Outbound(Option<Envelope>),
    Inbound(anyhow::Result<Option<Envelope>>),
}

async fn run_connection(
    transport: Arc<dyn Transport>,
    session: Session,
    options: ChannelOptions,
    state_tx: watch::Sender<ConnectionState>,
    events_tx: mpsc::UnboundedSender<ChannelEvent>,
    mut outbound_rx: mpsc::UnboundedReceiver<Envelope>,
    cancel: CancellationToken,
) {
    let room = session.room();
    let mut attempts: u32 = 0;

    loop {
        if cancel.is_cancelled() {
            state_tx.send_replace(ConnectionState::Disconnected);
            return;
        }

        state_tx.send_replace(ConnectionState::Connecting);
        let connected = tokio::select! {
            res = transport.connect(&session.customer_id) => Some(res),
            _ = cancel.cancelled() => None,
        };
        let Some(connected) = connected else {
            state_tx.send_replace(ConnectionState::Disconnected);
            return;
        };

        match connected {
            Ok(mut conn) => {
                attempts = 0;
                state_tx.send_replace(ConnectionState::Connected);

                // Room membership does not survive a reconnect; re-assert it
                // on every transition into connected.
                if let Err(err) = conn.send(Envelope::join_room(&room)).await {
                    tracing::error!(error = ?err, room = room, "Failed to join room");
                } else {
                    match pump(conn, &events_tx, &mut outbound_rx, &cancel).await {
                        PumpEnd::Cancelled => {
                            state_tx.send_replace(ConnectionState::Disconnected);
                            return;
                        }
                        PumpEnd::SubscriberGone => {
                            tracing::debug!("Event subscriber dropped, closing channel");
                            state_tx.send_replace(ConnectionState::Disconnected);
                            return;
                        }
                        PumpEnd::ConnectionLost => {}
                    }
                }
            }
            Err(err) => {
                tracing::error!(error = ?err, "Realtime connect failed");
            }
        }

        if cancel.is_cancelled() {
            state_tx.send_replace(ConnectionState::Disconnected);
            return;
        }

        attempts += 1;
        if attempts > options.max_attempts {
            tracing::error!(
                attempts = attempts - 1,
                "Reconnect attempts exhausted, giving up"
            );
            state_tx.send_replace(ConnectionState::Failed);
            return;
        }

        state_tx.send_replace(ConnectionState::Reconnecting(attempts));
        let delay = cmp::min(options.base_delay * attempts, options.max_delay);
        tokio::select! {
            _ = time::sleep(delay) => {}
            _ = cancel.cancelled() => {
                state_tx.send_replace(ConnectionState::Disconnected);
                return;
            }
        }
    }
}

async fn pump(
    mut conn: ConnectionBox,
    events_tx: &mpsc::UnboundedSender<ChannelEvent>,
    outbound_rx: &mut mpsc::UnboundedReceiver<Envelope>,
    cancel: &CancellationToken,
) -> PumpEnd {
    let mut outbound_open = true;

    loop {
        let step = tokio::select! {
            _ = cancel.cancelled() => Step::Cancelled,
            envelope = outbound_rx.recv(), if outbound_open => Step::Outbound(envelope),
            inbound = conn.recv() => Step::Inbound(inbound),
        };

        match step {
            Step::Cancelled => {
                let _ = conn.close().await;
                return PumpEnd::Cancelled;
            }
            Step::Outbound(Some(envelope)) => {
                if let Err(err) = conn.send(envelope).await {
                    tracing::error!(error = ?err, "Failed to send frame");
                    return PumpEnd::ConnectionLost;
                }
            }
            Step::Outbound(None) => {
                outbound_open = false;
            }
            Step::Inbound(Ok(Some(envelope))) => {
                // A frame that raced teardown must not reach the subscriber.
                if cancel.is_cancelled() {
                    let _ = conn.close().await;
                    return PumpEnd::Cancelled;
                }

                if let Some(event) = ChannelEvent::parse(&envelope) {
                    if events_tx.send(event).is_err() {
                        let _ = conn.close().await;
                        return PumpEnd::SubscriberGone;
                    }
                } else {
                    tracing::debug!(event = envelope.event, "Ignoring unhandled event");
                }
            }
            Step::Inbound(Ok(None)) => {
                tracing::debug!("Server closed the realtime stream");
                return PumpEnd::ConnectionLost;
            }
            Step::Inbound(Err(err)) => {
                tracing::error!(error = ?err, "Realtime stream error");
                return PumpEnd::ConnectionLost;
            }
        }
    }
}
