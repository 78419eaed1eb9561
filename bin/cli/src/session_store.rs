use std::{fs, path::PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// On-disk home of the bearer token, under the platform config directory.
/// The token is stored as the service issued it; expiry is the service's
/// call and shows up as a 401 on the next request.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open_default() -> Result<Self, CliError> {
        let proj_dirs =
            ProjectDirs::from("", "", "SatsDash").ok_or(CliError::MissingConfigDir)?;
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(Self {
            path: config_dir.join("session.json"),
        })
    }

    pub const fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Option<String>, CliError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let stored: StoredSession = serde_json::from_str(&raw)
            .map_err(|e| CliError::Input(format!("Corrupt session file: {e}")))?;
        Ok(Some(stored.token))
    }

    pub fn save(&self, token: &str) -> Result<(), CliError> {
        let json = serde_json::to_string_pretty(&StoredSession {
            token: token.to_string(),
        })
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), CliError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
