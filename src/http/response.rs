//! Response handling: status classification and content-type dispatch.

use log::debug;
use reqwest::{StatusCode, header::HeaderMap};
use serde::Serialize;

use crate::constants::{CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE};
use crate::error::{SynapseError, check_status_code};

/// A fully read HTTP response.
///
/// The body is read up front so that both error classification and
/// content-type dispatch work on plain data.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Reads the status, headers and body text of a transport response.
    pub async fn read(response: reqwest::Response) -> Result<Self, SynapseError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Normalized content type: lowercased and trimmed.
    pub fn content_type(&self) -> Option<String> {
        self.headers
            .get(CONTENT_TYPE_HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).trim().to_lowercase())
    }
}

/// Body of a successful response.
///
/// Serializes as the bare JSON value or string so bodies can be forwarded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// Parsed JSON document.
    Json(serde_json::Value),
    /// Raw body text.
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }
}

/// Converts a response into its body, or into the error its status implies.
///
/// Failure statuses are reported before the content type is looked at.
#[tracing::instrument(skip(response), fields(status = %response.status))]
pub fn handle_response(response: ApiResponse) -> Result<ResponseBody, SynapseError> {
    check_status_code(&response)?;

    match response.content_type() {
        Some(content_type) if content_type.starts_with(JSON_CONTENT_TYPE) => {
            debug!("Parsing {} byte JSON body", response.body.len());
            match serde_json::from_str(&response.body) {
                Ok(value) => Ok(ResponseBody::Json(value)),
                Err(source) => Err(SynapseError::Parse {
                    source,
                    body: response.body,
                }),
            }
        }
        _ => Ok(ResponseBody::Text(response.body)),
    }
}
