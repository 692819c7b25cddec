use std::fmt;

/// Channel health as a tagged value rather than an ad hoc status string, so
/// consumers can match exhaustively.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Reconnecting(u32),
    /// Reconnect attempts exhausted. Terminal until a manual establish.
    Failed,
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        return *self == ConnectionState::Connected;
    }

    pub fn is_failed(&self) -> bool {
        return *self == ConnectionState::Failed;
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Disconnected => return write!(f, "disconnected"),
            ConnectionState::Connecting => return write!(f, "connecting"),
            ConnectionState::Connected => return write!(f, "connected"),
            ConnectionState::Reconnecting(attempt) => {
                return write!(f, "reconnecting ({attempt})")
            }
            ConnectionState::Failed => return write!(f, "reconnect failed"),
        }
    }
}
