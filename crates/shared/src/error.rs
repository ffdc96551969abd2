use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Http,
    TransportOrParse,
}

impl FetchErrorKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::TransportOrParse => "transport_or_parse",
        }
    }
}

/// Failure of a single user list fetch.
///
/// The detail carried here is for diagnostics only; the UI maps every variant to one
/// generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("unexpected HTTP status {status}")]
    Http { status: u16 },
    #[error("transport failure: {detail}")]
    Transport { detail: String },
    #[error("malformed user list: {detail}")]
    Parse { detail: String },
}

impl FetchError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse {
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Http { .. } => FetchErrorKind::Http,
            Self::Transport { .. } | Self::Parse { .. } => FetchErrorKind::TransportOrParse,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}
