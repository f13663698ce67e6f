/// Broad class of a [`WalletError`], for callers that only need to decide
/// between retrying, reporting, or fixing their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a usable HTTP response.
    Transport,
    /// The daemon answered, but not in the shape the method expects.
    Decode,
    /// The daemon answered with a JSON-RPC `error` envelope.
    Daemon,
    /// The call was rejected locally before any request was made.
    Usage,
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed: daemon answered HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("invalid {method} response: {message}")]
    Decode { method: &'static str, message: String },

    #[error("wallet daemon returned an empty address list")]
    NoAddresses,

    #[error("response with error: {message}")]
    Daemon { code: Option<i64>, message: String },

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) | Self::HttpStatus { .. } => ErrorKind::Transport,
            Self::Decode { .. } | Self::NoAddresses => ErrorKind::Decode,
            Self::Daemon { .. } => ErrorKind::Daemon,
            Self::InvalidAmount(_) | Self::InvalidConfig(_) => ErrorKind::Usage,
        }
    }

    /// The daemon-supplied message, if this error came from an `error` envelope.
    pub fn daemon_message(&self) -> Option<&str> {
        match self {
            Self::Daemon { message, .. } => Some(message),
            _ => None,
        }
    }

    pub(crate) fn decode(method: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            method,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        let status = WalletError::HttpStatus {
            status: 502,
            body: String::new(),
        };
        assert_eq!(status.kind(), ErrorKind::Transport);
        assert_eq!(WalletError::NoAddresses.kind(), ErrorKind::Decode);
        assert_eq!(
            WalletError::decode("getStatus", "missing field").kind(),
            ErrorKind::Decode
        );
        assert_eq!(
            WalletError::InvalidAmount("NaN".into()).kind(),
            ErrorKind::Usage
        );
    }

    #[test]
    fn daemon_message_only_for_daemon_errors() {
        let err = WalletError::Daemon {
            code: Some(7),
            message: "Wrong amount".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Daemon);
        assert_eq!(err.daemon_message(), Some("Wrong amount"));
        assert_eq!(WalletError::NoAddresses.daemon_message(), None);
    }

    #[test]
    fn decode_display_names_method() {
        let err = WalletError::decode("getViewKey", "missing field `viewSecretKey`");
        assert_eq!(
            err.to_string(),
            "invalid getViewKey response: missing field `viewSecretKey`"
        );
    }
}
