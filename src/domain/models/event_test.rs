use anyhow::Result;

use super::ChannelEvent;
use super::Envelope;
use crate::domain::models::NotificationStatus;

#[test]
fn it_builds_outbound_envelopes() {
    let join = Envelope::join_room("customer_c1");
    assert_eq!(join.event, "join_room");
    assert_eq!(join.data["room"], "customer_c1");

    let mark = Envelope::mark_read("n1");
    assert_eq!(mark.event, "mark_read");
    assert_eq!(mark.data["notification_id"], "n1");
}

#[test]
fn it_parses_an_unread_batch() -> Result<()> {
    let envelope: Envelope = serde_json::from_str(
        r#"{
            "event": "unread_notifications",
            "data": [
                {"id": "n1", "content": "one", "status": "unread"},
                {"id": "n2", "content": "two", "status": "pending"}
            ]
        }"#,
    )?;

    match ChannelEvent::parse(&envelope) {
        Some(ChannelEvent::UnreadBatch(batch)) => {
            assert_eq!(batch.len(), 2);
            assert_eq!(batch[1].status, NotificationStatus::Unread);
        }
        other => panic!("Expected unread batch, got {other:?}"),
    }

    return Ok(());
}

#[test]
fn it_parses_a_new_notification() -> Result<()> {
    let envelope: Envelope = serde_json::from_str(
        r#"{"event": "new_notification", "data": {"id": "n3", "content": "Payment done"}}"#,
    )?;

    match ChannelEvent::parse(&envelope) {
        Some(ChannelEvent::NewNotification(notification)) => {
            assert_eq!(notification.id, "n3");
        }
        other => panic!("Expected notification, got {other:?}"),
    }

    return Ok(());
}

#[test]
fn it_parses_marked_read_and_errors() {
    let marked = Envelope::new(
        "notification_marked_read",
        serde_json::json!({"notification_id": "n4"}),
    );
    assert_eq!(
        ChannelEvent::parse(&marked),
        Some(ChannelEvent::NotificationMarkedRead {
            notification_id: "n4".to_string()
        })
    );

    let error = Envelope::new("error", serde_json::json!({"message": "Missing customer_id"}));
    assert_eq!(
        ChannelEvent::parse(&error),
        Some(ChannelEvent::ServerError {
            message: "Missing customer_id".to_string()
        })
    );
}

#[test]
fn it_drops_unknown_and_malformed_events() {
    let unknown = Envelope::new("echo", serde_json::json!({"anything": true}));
    assert_eq!(ChannelEvent::parse(&unknown), None);

    let malformed = Envelope::new("new_notification", serde_json::json!("not an object"));
    assert_eq!(ChannelEvent::parse(&malformed), None);

    let missing_id = Envelope::new("notification_marked_read", serde_json::json!({}));
    assert_eq!(ChannelEvent::parse(&missing_id), None);
}
