//! Error taxonomy for Synapse requests and HTTP status classification.

use reqwest::StatusCode;

use crate::http::ApiResponse;

/// Number of body characters shown when an error is displayed.
const BODY_SNIPPET_CHARS: usize = 200;

/// Errors raised while building, sending, or interpreting a Synapse request.
#[derive(Debug)]
pub enum SynapseError {
    /// A required argument was absent or malformed.
    InvalidArgument(String),
    /// HTTP 400
    BadRequest { status: u16, body: String },
    /// HTTP 401
    Unauthorized { status: u16, body: String },
    /// HTTP 403
    Forbidden { status: u16, body: String },
    /// HTTP 404
    NotFound { status: u16, body: String },
    /// HTTP 409
    Conflict { status: u16, body: String },
    /// HTTP 5xx
    ServerError { status: u16, body: String },
    /// Any other non-2xx status.
    UnknownClientError { status: u16, body: String },
    /// The body was declared JSON but did not parse.
    Parse {
        source: serde_json::Error,
        body: String,
    },
    /// The transport failed before a response was available.
    Transport(reqwest::Error),
}

impl SynapseError {
    /// HTTP status code carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            SynapseError::BadRequest { status, .. }
            | SynapseError::Unauthorized { status, .. }
            | SynapseError::Forbidden { status, .. }
            | SynapseError::NotFound { status, .. }
            | SynapseError::Conflict { status, .. }
            | SynapseError::ServerError { status, .. }
            | SynapseError::UnknownClientError { status, .. } => Some(*status),
            SynapseError::Transport(e) => e.status().map(|s| s.as_u16()),
            SynapseError::InvalidArgument(_) | SynapseError::Parse { .. } => None,
        }
    }

    /// Raw response body carried by the error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            SynapseError::BadRequest { body, .. }
            | SynapseError::Unauthorized { body, .. }
            | SynapseError::Forbidden { body, .. }
            | SynapseError::NotFound { body, .. }
            | SynapseError::Conflict { body, .. }
            | SynapseError::ServerError { body, .. }
            | SynapseError::UnknownClientError { body, .. }
            | SynapseError::Parse { body, .. } => Some(body),
            SynapseError::InvalidArgument(_) | SynapseError::Transport(_) => None,
        }
    }
}

impl std::fmt::Display for SynapseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynapseError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            SynapseError::BadRequest { status, body } => {
                write!(f, "Bad request (HTTP {}): {}", status, snippet(body))
            }
            SynapseError::Unauthorized { status, body } => {
                write!(
                    f,
                    "Unauthorized (HTTP {}): {}. Check your SYNAPSE_AUTH_TOKEN.",
                    status,
                    snippet(body)
                )
            }
            SynapseError::Forbidden { status, body } => {
                write!(
                    f,
                    "Access forbidden (HTTP {}): {}. You may lack permission on this resource.",
                    status,
                    snippet(body)
                )
            }
            SynapseError::NotFound { status, body } => {
                write!(f, "Not found (HTTP {}): {}", status, snippet(body))
            }
            SynapseError::Conflict { status, body } => {
                write!(f, "Conflict (HTTP {}): {}", status, snippet(body))
            }
            SynapseError::ServerError { status, body } => {
                write!(f, "Server error (HTTP {}): {}", status, snippet(body))
            }
            SynapseError::UnknownClientError { status, body } => {
                write!(f, "Unexpected response (HTTP {}): {}", status, snippet(body))
            }
            SynapseError::Parse { source, body } => {
                write!(
                    f,
                    "Failed to parse JSON response ({}): {}",
                    source,
                    snippet(body)
                )
            }
            SynapseError::Transport(e) => write!(f, "Request failed: {}", e),
        }
    }
}

impl std::error::Error for SynapseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SynapseError::Parse { source, .. } => Some(source),
            SynapseError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SynapseError {
    fn from(e: reqwest::Error) -> Self {
        SynapseError::Transport(e)
    }
}

fn snippet(body: &str) -> String {
    if body.chars().count() <= BODY_SNIPPET_CHARS {
        body.to_string()
    } else {
        let head: String = body.chars().take(BODY_SNIPPET_CHARS).collect();
        format!("{}...", head)
    }
}

/// Maps a non-2xx status to its error kind. Returns `None` for success.
pub fn classify_status(status: StatusCode, body: &str) -> Option<SynapseError> {
    if status.is_success() {
        return None;
    }

    let code = status.as_u16();
    let body = body.to_string();
    let err = match status {
        StatusCode::BAD_REQUEST => SynapseError::BadRequest { status: code, body },
        StatusCode::UNAUTHORIZED => SynapseError::Unauthorized { status: code, body },
        StatusCode::FORBIDDEN => SynapseError::Forbidden { status: code, body },
        StatusCode::NOT_FOUND => SynapseError::NotFound { status: code, body },
        StatusCode::CONFLICT => SynapseError::Conflict { status: code, body },
        s if s.is_server_error() => SynapseError::ServerError { status: code, body },
        _ => SynapseError::UnknownClientError { status: code, body },
    };
    Some(err)
}

/// Fails with the matching [`SynapseError`] when the response status is not 2xx.
pub fn check_status_code(response: &ApiResponse) -> Result<(), SynapseError> {
    match classify_status(response.status, &response.body) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
