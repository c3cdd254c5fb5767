//! Fixed values shared by the client and the command-line front end.

/// Default Synapse repository service endpoint.
pub const DEFAULT_REPO_ENDPOINT: &str = "https://repo-prod.prod.sagebase.org/repo/v1";

/// Response header carrying the media type of the body.
pub const CONTENT_TYPE_HEADER: &str = "content-type";

/// Media type prefix that marks a body as JSON.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Product name sent at the front of the `User-Agent` header.
pub const CLIENT_NAME: &str = "py-synapse";

/// Client version, fixed at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Agent token for the HTTP transport. reqwest sends no agent of its own.
pub const TRANSPORT_USER_AGENT: &str = "reqwest/0.12";

/// Environment variable holding the bearer token.
pub const AUTH_TOKEN_ENV: &str = "SYNAPSE_AUTH_TOKEN";

/// Environment variable holding the credential profile name.
pub const PROFILE_ENV: &str = "SYNAPSE_PROFILE";

/// Environment variable overriding the repository endpoint.
pub const SERVER_URL_ENV: &str = "SYNAPSE_SERVER_URL";

/// Full `User-Agent` value sent with every request.
pub fn user_agent() -> String {
    format!("{}/{} {}", CLIENT_NAME, VERSION, TRANSPORT_USER_AGENT)
}
