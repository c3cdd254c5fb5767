//! Authenticated transport sessions.

use log::debug;
use reqwest::{
    Client, RequestBuilder,
    header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::constants::user_agent;
use crate::error::SynapseError;

/// A transport session carrying the Synapse client headers.
///
/// Sessions are cheap to build and are not meant to be kept: every request
/// gets a fresh one.
#[derive(Debug)]
pub struct Session {
    client: Client,
}

impl Session {
    /// Starts a GET request for the given URL.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }
}

/// Builds a session that sends the client `User-Agent` and the bearer token.
///
/// `profile` is carried for credential selection and does not change the
/// headers.
#[tracing::instrument(skip(auth_token))]
pub fn create_session(auth_token: &str, profile: Option<&str>) -> Result<Session, SynapseError> {
    let mut headers = HeaderMap::new();

    let agent = HeaderValue::from_str(&user_agent()).map_err(|_| {
        SynapseError::InvalidArgument("client user agent is not a valid header value".to_string())
    })?;
    headers.insert(USER_AGENT, agent);

    let mut auth_value =
        HeaderValue::from_str(&format!("Bearer {}", auth_token)).map_err(|_| {
            SynapseError::InvalidArgument(
                "auth_token contains characters not allowed in a header".to_string(),
            )
        })?;
    auth_value.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth_value);

    debug!(
        "Creating session (profile: {}) with token {}",
        profile.unwrap_or("default"),
        mask_token(auth_token)
    );

    let client = Client::builder().default_headers(headers).build()?;

    Ok(Session { client })
}

/// Masked form of a token that is safe to log.
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
