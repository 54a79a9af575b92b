//! Binary-level tests for the non-interactive surface

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("storefront-autocomplete").unwrap()
}

/// Empty config file so the user's own config never leaks into a test
fn empty_config() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

fn serve_once(content_type: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        loop {
            let mut header = String::new();
            if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            content_type,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        request_line.trim_end().to_string()
    });
    (format!("http://{}", addr), handle)
}

#[test]
fn test_help_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--lookup"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--debounce-ms"));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_lookup_prints_one_row_per_suggestion() {
    let (base_url, server) = serve_once(
        "application/json",
        r#"{"suggestions":[{"name":"Shoe","brand":"Acme"},{"name":"Shirt","brand":"Beta"}]}"#,
    );
    let config = empty_config();

    cmd()
        .args(["--config", config.path().to_str().unwrap()])
        .args(["--base-url", &base_url, "--lookup", "sh"])
        .assert()
        .success()
        .stdout("Shoe (Acme)\nShirt (Beta)\n");

    assert_eq!(
        server.join().unwrap(),
        "GET /store/autocomplete/?q=sh HTTP/1.1"
    );
}

#[test]
fn test_lookup_short_query_makes_no_request() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let config = empty_config();

    cmd()
        .args(["--config", config.path().to_str().unwrap()])
        .args(["--base-url", &base_url, "--lookup", "a"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        listener.accept().unwrap_err().kind(),
        std::io::ErrorKind::WouldBlock
    );
}

#[test]
fn test_lookup_failure_is_silent() {
    let (base_url, server) = serve_once("text/html", "<html>oops</html>");
    let config = empty_config();

    cmd()
        .args(["--config", config.path().to_str().unwrap()])
        .args(["--base-url", &base_url, "--lookup", "sh"])
        .assert()
        .success()
        .stdout("");

    server.join().unwrap();
}

#[test]
fn test_invalid_base_url_fails() {
    let config = empty_config();

    cmd()
        .args(["--config", config.path().to_str().unwrap()])
        .args(["--base-url", "not a url", "--lookup", "sh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}
