use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/api/records/1.0/search/";

/// Endpoint URL of a mock server.
pub fn endpoint(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}{}", server.address().port(), SEARCH_PATH)
}

/// Base command for the CLI binary, isolated from the caller's environment.
fn command(args: &[&str], endpoint: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_citytable"));
    cmd.args(args);
    cmd.env("CITYTABLE_ENDPOINT", endpoint);
    cmd.env_remove("CITYTABLE_DATASET");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run the CLI binary against the given endpoint.
pub fn run_cli(args: &[&str], endpoint: &str) -> Output {
    command(args, endpoint)
        .output()
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], endpoint: &str) -> String {
    let output = run_cli(args, endpoint);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI feeding `input` on stdin.
pub fn run_cli_with_input(args: &[&str], endpoint: &str, input: &str) -> Output {
    let mut child = command(args, endpoint)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for CLI")
}

pub fn city(name: &str, country: &str, geoname_id: u64) -> Value {
    json!({
        "fields": {
            "name": name,
            "cou_name_en": country,
            "timezone": "Europe/London",
            "geoname_id": geoname_id.to_string()
        }
    })
}

pub fn letters(n: usize) -> Vec<String> {
    ('A'..='Z').take(n).map(String::from).collect()
}

/// Serve `records` for the page starting at `start`.
pub async fn mount_page(server: &MockServer, start: u32, records: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("rows", "20"))
        .and(query_param("start", start.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": records })))
        .mount(server)
        .await;
}

/// Serve pages of single-letter city names.
pub async fn mount_letters(server: &MockServer, start: u32, n: usize) {
    let records = letters(n)
        .iter()
        .enumerate()
        .map(|(i, name)| city(name, "Nowhere", 100 + i as u64))
        .collect();
    mount_page(server, start, records).await;
}
