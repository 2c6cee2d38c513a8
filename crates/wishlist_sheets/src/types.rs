use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SheetError {
    pub kind: FailureKind,
    pub message: String,
}

impl SheetError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidCredential,
    Auth,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidCredential => write!(f, "invalid credential"),
            FailureKind::Auth => write!(f, "authorization failed"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "unexpected response"),
        }
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> SheetError {
    if err.is_timeout() {
        return SheetError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SheetError::new(FailureKind::Decode, err.to_string());
    }
    SheetError::new(FailureKind::Network, err.to_string())
}
