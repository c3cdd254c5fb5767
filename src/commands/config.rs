use std::time::Duration;

use anyhow::{Result, bail};
use log::debug;

use crate::{client::RequestOptions, client::SynapseClient, constants::AUTH_TOKEN_ENV};

/// Settings for a command run, gathered from flags and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub auth_token: String,
    pub profile: Option<String>,
    pub server_url: Option<String>,
    pub options: RequestOptions,
}

impl Config {
    pub fn new(
        auth_token: Option<String>,
        profile: Option<String>,
        server_url: Option<String>,
        timeout_secs: Option<u64>,
        query: Vec<(String, String)>,
    ) -> Result<Self> {
        let auth_token = match auth_token {
            Some(token) if !token.trim().is_empty() => token,
            _ => bail!(
                "No auth token provided. Set {} or pass --auth-token.",
                AUTH_TOKEN_ENV
            ),
        };

        let server_url = server_url.filter(|url| !url.is_empty());
        if let Some(url) = &server_url {
            debug!("Using server URL {}", url);
        }

        Ok(Self {
            auth_token,
            profile,
            server_url,
            options: RequestOptions {
                timeout: timeout_secs.map(Duration::from_secs),
                query,
                headers: Vec::new(),
            },
        })
    }

    pub fn client(&self) -> SynapseClient {
        let client = SynapseClient::new(self.auth_token.clone());
        match &self.profile {
            Some(profile) => client.with_profile(profile.clone()),
            None => client,
        }
    }
}

/// Parses a `KEY=VALUE` query argument.
pub fn parse_query_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Invalid query parameter '{}'. Expected KEY=VALUE.", s)),
    }
}
