//! Client configuration: endpoint, credentials and timeouts.

use std::time::Duration;

use reqwest::Url;

use crate::error::WalletError;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8070/json_rpc";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the client needs to reach one wallet daemon.
///
/// Built once and read-only afterwards; the password is sent with every
/// request.
#[derive(Clone)]
pub struct ClientConfig {
    pub url: String,
    pub password: String,
    /// Upper bound on a whole request, connect through body read.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), WalletError> {
        parse_endpoint(&self.url)?;
        if self.timeout.is_zero() || self.connect_timeout.is_zero() {
            return Err(WalletError::InvalidConfig(
                "timeouts must be greater than zero".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_owned(),
            password: String::new(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

fn parse_endpoint(url: &str) -> Result<Url, WalletError> {
    let parsed = Url::parse(url).map_err(|e| {
        WalletError::InvalidConfig(format!("invalid rpc url `{url}`: expected HTTP(S) URL ({e})"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(WalletError::InvalidConfig(format!(
            "unsupported rpc url scheme `{other}`; expected http or https"
        ))),
    }
}
