//! Request URL construction.

use crate::error::SynapseError;

/// Joins a server URL and an endpoint path into the request URL.
///
/// The endpoint path must be a bare path such as `/entity/syn123`. Anything a
/// URI parser would split off (scheme, authority, `;params`, query, fragment)
/// makes the path invalid. The result is a literal concatenation: no slash
/// normalization and no percent-encoding.
#[tracing::instrument]
pub fn build_url(server_url: &str, endpoint_path: &str) -> Result<String, SynapseError> {
    if server_url.is_empty() || endpoint_path.is_empty() {
        return Err(SynapseError::InvalidArgument(
            "server_url and endpoint_path are required.".to_string(),
        ));
    }
    if path_component(endpoint_path) != endpoint_path {
        return Err(SynapseError::InvalidArgument(format!(
            "Incorrect format for endpoint_path: {}",
            endpoint_path
        )));
    }
    Ok(format!("{}{}", server_url, endpoint_path))
}

/// Extracts the path component of a URI reference.
fn path_component(uri: &str) -> &str {
    // Leading C0 controls and spaces are discarded by URI parsers.
    let mut rest = uri.trim_start_matches(|c: char| c <= ' ');
    if rest.contains(['\t', '\r', '\n']) {
        return "";
    }

    if let Some(idx) = rest.find(':') {
        let scheme = &rest[..idx];
        if is_scheme(scheme) {
            rest = &rest[idx + 1..];
        }
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        rest = &after[end..];
    }

    if let Some(idx) = rest.find('#') {
        rest = &rest[..idx];
    }
    if let Some(idx) = rest.find('?') {
        rest = &rest[..idx];
    }

    // Parameters attach to the last segment only
    let last_segment = rest.rfind('/').map_or(0, |i| i + 1);
    if let Some(idx) = rest[last_segment..].find(';') {
        rest = &rest[..last_segment + idx];
    }

    rest
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
