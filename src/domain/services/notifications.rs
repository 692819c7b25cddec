#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;

use std::collections::HashSet;

use anyhow::Result;

use crate::domain::models::ChannelEvent;
use crate::domain::models::Envelope;
use crate::domain::models::Notification;
use crate::domain::models::NotificationStatus;
use crate::domain::services::ChannelEmitter;
use crate::infrastructure::gateway::GatewayClient;

/// The one consistent view of this session's notifications, fed by the
/// initial fetch, the unread batch pushed after a room join, and individual
/// pushes. Merging is a union by identifier, so the three streams can arrive
/// in any order and any number of times.
#[derive(Default)]
pub struct NotificationSync {
    items: Vec<Notification>,
    // Identifiers read locally; a stale unread copy of one of these arriving
    // later must not flip it back.
    locally_read: HashSet<String>,
}

impl NotificationSync {
    pub fn new() -> NotificationSync {
        return NotificationSync::default();
    }

    pub fn items(&self) -> &[Notification] {
        return &self.items;
    }

    /// Derived from the list on every call, never tracked separately.
    pub fn unread_count(&self) -> usize {
        return self
            .items
            .iter()
            .filter(|item| return item.status.is_unread())
            .count();
    }

    /// Folds one notification in. Returns true when the list changed.
    pub fn merge(&mut self, mut incoming: Notification) -> bool {
        if self.locally_read.contains(&incoming.id) {
            incoming.status = NotificationStatus::Read;
        }

        if let Some(existing) = self.items.iter_mut().find(|item| return item.id == incoming.id) {
            if incoming.status == NotificationStatus::Read
                && existing.status != NotificationStatus::Read
            {
                existing.status = NotificationStatus::Read;
                return true;
            }
            return false;
        }

        self.items.push(incoming);
        return true;
    }

    pub fn merge_all(&mut self, batch: Vec<Notification>) -> usize {
        let mut changed = 0;
        for notification in batch {
            if self.merge(notification) {
                changed += 1;
            }
        }

        return changed;
    }

    /// Returns true when the item existed and was still unread.
    pub fn mark_read(&mut self, notification_id: &str) -> bool {
        self.locally_read.insert(notification_id.to_string());

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| return item.id == notification_id)
        {
            if item.status != NotificationStatus::Read {
                item.status = NotificationStatus::Read;
                return true;
            }
        }

        return false;
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.locally_read.clear();
    }
}

/// Notification state plus its IO: the REST fetch, channel events, and the
/// read acknowledgement fan-out. Views read; only this type mutates.
pub struct Notifications {
    client: GatewayClient,
    sync: NotificationSync,
    emitter: Option<ChannelEmitter>,
}

impl Default for Notifications {
    fn default() -> Notifications {
        return Notifications::new(GatewayClient::default());
    }
}

impl Notifications {
    pub fn new(client: GatewayClient) -> Notifications {
        return Notifications {
            client,
            sync: NotificationSync::new(),
            emitter: None,
        };
    }

    pub fn attach_emitter(&mut self, emitter: ChannelEmitter) {
        self.emitter = Some(emitter);
    }

    pub fn detach_emitter(&mut self) {
        self.emitter = None;
    }

    pub fn items(&self) -> &[Notification] {
        return self.sync.items();
    }

    pub fn unread_count(&self) -> usize {
        return self.sync.unread_count();
    }

    /// Initial or reconnect-time fetch of the customer's history. Returns how
    /// many list entries changed.
    pub async fn refresh(&mut self, customer_id: &str) -> Result<usize> {
        let fetched = self.client.notifications_for_customer(customer_id).await?;
        return Ok(self.sync.merge_all(fetched));
    }

    /// Applies one channel event. Returns true when the list changed.
    pub fn handle_event(&mut self, event: ChannelEvent) -> bool {
        match event {
            ChannelEvent::UnreadBatch(batch) => {
                return self.sync.merge_all(batch) > 0;
            }
            ChannelEvent::NewNotification(notification) => {
                return self.sync.merge(notification);
            }
            ChannelEvent::NotificationMarkedRead { notification_id } => {
                // Echo from another session of the same customer; no REST
                // call and no re-emit, just converge.
                return self.sync.mark_read(&notification_id);
            }
            ChannelEvent::ServerError { message } => {
                tracing::warn!(message = message, "Realtime server error");
                return false;
            }
            ChannelEvent::Welcome | ChannelEvent::RoomJoined { .. } => {
                return false;
            }
        }
    }

    /// Optimistically marks the item read, persists it, then lets other live
    /// sessions know. The local update stays even when persistence fails;
    /// the error is surfaced to the caller and nothing is fanned out, so
    /// other sessions never converge ahead of the backend.
    pub async fn mark_as_read(&mut self, notification_id: &str) -> Result<()> {
        self.sync.mark_read(notification_id);

        self.client.mark_notification_read(notification_id).await?;

        if let Some(emitter) = &self.emitter {
            emitter.emit(Envelope::mark_read(notification_id));
        }

        return Ok(());
    }

    /// Drops all state, for logout.
    pub fn clear(&mut self) {
        self.sync.clear();
    }
}
