#[cfg(test)]
#[path = "event_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

use super::Notification;

/// Wire frame for the realtime channel: `{"event": <name>, "data": <payload>}`.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn new(event: &str, data: serde_json::Value) -> Envelope {
        return Envelope {
            event: event.to_string(),
            data,
        };
    }

    pub fn join_room(room: &str) -> Envelope {
        return Envelope::new("join_room", serde_json::json!({ "room": room }));
    }

    pub fn mark_read(notification_id: &str) -> Envelope {
        return Envelope::new(
            "mark_read",
            serde_json::json!({ "notification_id": notification_id }),
        );
    }
}

/// Inbound channel traffic after decoding. Unknown events are dropped at the
/// parse step rather than surfaced.
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelEvent {
    Welcome,
    RoomJoined { room: String },
    UnreadBatch(Vec<Notification>),
    NewNotification(Notification),
    NotificationMarkedRead { notification_id: String },
    ServerError { message: String },
}

impl ChannelEvent {
    pub fn parse(envelope: &Envelope) -> Option<ChannelEvent> {
        match envelope.event.as_str() {
            "welcome" => {
                return Some(ChannelEvent::Welcome);
            }
            "room_joined" => {
                let room = envelope.data["room"].as_str().unwrap_or_default().to_string();
                return Some(ChannelEvent::RoomJoined { room });
            }
            "unread_notifications" => {
                let batch = serde_json::from_value::<Vec<Notification>>(envelope.data.clone());
                match batch {
                    Ok(notifications) => {
                        return Some(ChannelEvent::UnreadBatch(notifications));
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "Dropping malformed unread batch");
                        return None;
                    }
                }
            }
            "new_notification" => {
                let notification = serde_json::from_value::<Notification>(envelope.data.clone());
                match notification {
                    Ok(notification) => {
                        return Some(ChannelEvent::NewNotification(notification));
                    }
                    Err(err) => {
                        tracing::warn!(error = ?err, "Dropping malformed notification");
                        return None;
                    }
                }
            }
            "notification_marked_read" => {
                let notification_id = envelope.data["notification_id"]
                    .as_str()
                    .unwrap_or_default()
                    .to_string();
                if notification_id.is_empty() {
                    return None;
                }
                return Some(ChannelEvent::NotificationMarkedRead { notification_id });
            }
            "error" => {
                let message = envelope.data["message"]
                    .as_str()
                    .unwrap_or("Unknown server error")
                    .to_string();
                return Some(ChannelEvent::ServerError { message });
            }
            _ => {
                return None;
            }
        }
    }
}
