use std::io::Write;

use anyhow::{Context, Result};
use log::debug;

use crate::{
    client::{GetRequest, SynapseApi},
    http::ResponseBody,
};

pub mod config;

use config::Config;

/// Fetch a resource and print its body.
#[tracing::instrument(skip(config))]
pub async fn get(endpoint_path: &str, config: Config) -> Result<()> {
    let client = config.client();
    let mut stdout = std::io::stdout();
    run_get(&client, endpoint_path, &config, &mut stdout).await
}

#[tracing::instrument(skip(api, config, out))]
pub async fn run_get<A: SynapseApi, W: Write>(
    api: &A,
    endpoint_path: &str,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    let request = GetRequest {
        endpoint_path: endpoint_path.to_string(),
        server_url: config.server_url.clone(),
        options: config.options.clone(),
    };
    debug!("Requesting {}", endpoint_path);

    let body = api
        .get(&request)
        .await
        .with_context(|| format!("GET {} failed", endpoint_path))?;

    let rendered = render(&body)?;
    writeln!(out, "{}", rendered).context("Failed to write response")?;
    Ok(())
}

/// JSON is pretty-printed, text is passed through unchanged.
pub fn render(body: &ResponseBody) -> Result<String> {
    match body {
        ResponseBody::Json(value) => {
            serde_json::to_string_pretty(value).context("Failed to format JSON response")
        }
        ResponseBody::Text(text) => Ok(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockSynapseApi;
    use crate::error::SynapseError;
    use serde_json::json;

    fn test_config() -> Config {
        Config::new(
            Some("token".to_string()),
            None,
            Some("http://localhost".to_string()),
            None,
            vec![],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_get_prints_json() {
        let mut api = MockSynapseApi::new();
        api.expect_get()
            .withf(|req| {
                req.endpoint_path == "/entity/syn123"
                    && req.server_url.as_deref() == Some("http://localhost")
            })
            .times(1)
            .returning(|_| Ok(ResponseBody::Json(json!({"id": "syn123"}))));

        let mut out = Vec::new();
        run_get(&api, "/entity/syn123", &test_config(), &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "{\n  \"id\": \"syn123\"\n}\n");
    }

    #[tokio::test]
    async fn test_run_get_prints_text() {
        let mut api = MockSynapseApi::new();
        api.expect_get()
            .returning(|_| Ok(ResponseBody::Text("some text".to_string())));

        let mut out = Vec::new();
        run_get(&api, "/version", &test_config(), &mut out)
            .await
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "some text\n");
    }

    #[tokio::test]
    async fn test_run_get_propagates_typed_error() {
        let mut api = MockSynapseApi::new();
        api.expect_get().returning(|_| {
            Err(SynapseError::Forbidden {
                status: 403,
                body: "no access".to_string(),
            })
        });

        let mut out = Vec::new();
        let err = run_get(&api, "/entity/syn1", &test_config(), &mut out)
            .await
            .unwrap_err();

        assert!(out.is_empty());
        assert!(err.to_string().contains("GET /entity/syn1 failed"));
        let typed = err.downcast_ref::<SynapseError>().unwrap();
        assert_eq!(typed.status(), Some(403));
    }

    #[test]
    fn test_render_json_array() {
        let rendered = render(&ResponseBody::Json(json!([1, 2]))).unwrap();
        assert_eq!(rendered, "[\n  1,\n  2\n]");
    }
}
