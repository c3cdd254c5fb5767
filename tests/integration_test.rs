use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use predicates::prelude::*;

fn synapse_cmd() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("synapse"));
    cmd.env_remove("SYNAPSE_AUTH_TOKEN")
        .env_remove("SYNAPSE_SERVER_URL")
        .env_remove("SYNAPSE_PROFILE");
    cmd
}

#[test]
fn test_get_json_entity() {
    let mut server = Server::new();
    let url = format!("{}/repo/v1", server.url());

    let mock = server
        .mock("GET", "/repo/v1/entity/syn123")
        .match_header("Authorization", "Bearer test-token")
        .match_header("User-Agent", Matcher::Regex(r"^py-synapse/\S+ reqwest/".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json;charset=UTF-8")
        .with_body(r#"{"id": "syn123", "name": "project"}"#)
        .create();

    synapse_cmd()
        .env("SYNAPSE_AUTH_TOKEN", "test-token")
        .arg("get")
        .arg("/entity/syn123")
        .arg("--server-url")
        .arg(&url)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "syn123""#))
        .stdout(predicate::str::contains(r#""name": "project""#));

    mock.assert();
}

#[test]
fn test_get_plain_text() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/version")
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body("some text")
        .create();

    synapse_cmd()
        .args(["--auth-token", "tok", "get", "/version", "--server-url", url.as_str()])
        .assert()
        .success()
        .stdout("some text\n");
}

#[test]
fn test_get_with_query() {
    let mut server = Server::new();
    let url = server.url();

    let mock = server
        .mock("GET", "/entity/syn1/children")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .create();

    synapse_cmd()
        .env("SYNAPSE_AUTH_TOKEN", "tok")
        .env("SYNAPSE_SERVER_URL", &url)
        .args(["get", "/entity/syn1/children", "-q", "limit=10", "-q", "offset=0"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_get_not_found_fails() {
    let mut server = Server::new();
    let url = server.url();

    let _mock = server
        .mock("GET", "/entity/syn0")
        .with_status(404)
        .with_body(r#"{"reason": "Entity syn0 does not exist"}"#)
        .create();

    synapse_cmd()
        .env("SYNAPSE_AUTH_TOKEN", "tok")
        .args(["get", "/entity/syn0", "--server-url", url.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found (HTTP 404)"))
        .stderr(predicate::str::contains("syn0 does not exist"));
}

#[test]
fn test_get_invalid_path_fails() {
    synapse_cmd()
        .env("SYNAPSE_AUTH_TOKEN", "tok")
        .args(["get", "http:/path.com/path", "--server-url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect format for endpoint_path"));
}

#[test]
fn test_get_without_token_fails() {
    synapse_cmd()
        .args(["get", "/entity/syn1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SYNAPSE_AUTH_TOKEN"));
}
