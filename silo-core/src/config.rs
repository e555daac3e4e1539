use crate::{Result, SiloError};
use anyhow::Context;
use std::{fmt, fs, path::Path};

/// Well-known resource path connection providers read by default.
pub const DEFAULT_CONFIG_PATH: &str = "persistence.properties";

/// Connection settings read from a properties file. Read-only after load;
/// providers re-load it on every connection acquisition.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub driver: String,
    pub url: String,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| {
            format!(
                "Could not read connection properties at `{}`",
                path.display()
            )
        })?;
        Self::parse(&text)
    }

    /// Java-style properties: `key=value` or `key: value`, one per line,
    /// `#`/`!` comments. Unknown keys are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut driver = None;
        let mut url = None;
        let mut user = None;
        let mut password = None;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let Some((key, value)) = line.split_once(['=', ':']) else {
                continue;
            };
            let value = value.trim().to_owned();
            match key.trim() {
                "driver" => driver = Some(value),
                "url" => url = Some(value),
                "user" => user = Some(value),
                "password" => password = Some(value),
                _ => {}
            }
        }
        Ok(Self {
            driver: driver.ok_or(SiloError::MissingConfigKey("driver"))?,
            url: url.ok_or(SiloError::MissingConfigKey("url"))?,
            user: user.ok_or(SiloError::MissingConfigKey("user"))?,
            password: password.ok_or(SiloError::MissingConfigKey("password"))?,
        })
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The password stays out of logs
        f.debug_struct("ConnectionConfig")
            .field("driver", &self.driver)
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
