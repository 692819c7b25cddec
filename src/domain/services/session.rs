#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Session;

/// Durable session state. A present file means signed in; a missing file
/// means signed out. At most one identifier is stored at a time.
pub struct SessionStore {
    pub path: path::PathBuf,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        return SessionStore::new(path::PathBuf::from(Config::get(ConfigKey::SessionFile)));
    }
}

impl SessionStore {
    pub fn new(path: path::PathBuf) -> SessionStore {
        return SessionStore { path };
    }

    pub async fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&self.path).await?;
        let session: Session = serde_yaml::from_str(&payload)?;

        return Ok(Some(session));
    }

    /// Writes the session, replacing any previous identifier.
    pub async fn save(&self, customer_id: &str) -> Result<Session> {
        if customer_id.is_empty() {
            bail!("Cannot store a session without a customer identifier");
        }

        let session = Session::new(customer_id);
        let payload = serde_yaml::to_string(&session)?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(&self.path).await?;
        file.write_all(payload.as_bytes()).await?;

        return Ok(session);
    }

    /// Removes the stored session. A second call, or a call with nothing
    /// stored, has no effect.
    pub async fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.path).await?;
        return Ok(());
    }
}
