/// Tests for the HTTP client against a one-shot local server
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use vultr::api::{VultrApi, VultrClient};
use vultr::config::Settings;
use vultr::error::CliError;
use vultr::models::ServerOptions;

/// Answers a single request with `status` and `body`; the handle yields the raw request.
fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        request
    });
    (format!("http://{}/v1", addr), handle)
}

fn read_request(stream: &mut impl Read) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        data.extend_from_slice(&buf[..n]);
        let text = String::from_utf8_lossy(&data);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .find_map(|l| {
                    let (name, value) = l.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            if data.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

fn client(base_url: String) -> VultrClient {
    VultrClient::new(&Settings {
        api_key: "EXAMPLEKEY".into(),
        api_base_url: base_url,
        verbose: false,
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_servers_sends_api_key() {
    let body = r#"{"576965": {"SUBID": "576965", "label": "web1", "status": "active", "vcpu_count": "1"}}"#;
    let (base_url, handle) = serve_once("200 OK", body);

    let servers = client(base_url).get_servers().await.unwrap();
    let request = handle.join().unwrap();

    assert!(request.starts_with("GET /v1/server/list "));
    assert!(request.to_lowercase().contains("api-key: examplekey"));
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].name, "web1");
    assert_eq!(servers[0].vcpus, 1);
}

#[tokio::test]
async fn test_get_server_passes_subid() {
    let (base_url, handle) = serve_once("200 OK", "[]");

    let server = client(base_url).get_server("576965").await.unwrap();
    let request = handle.join().unwrap();

    assert!(request.starts_with("GET /v1/server/list?SUBID=576965 "));
    assert!(!server.is_found());
}

#[tokio::test]
async fn test_create_posts_form() {
    let (base_url, handle) = serve_once("200 OK", r#"{"SUBID": "1312965"}"#);
    let options = ServerOptions {
        ipv6: true,
        ..ServerOptions::default()
    };

    let server = client(base_url)
        .create_server("web1", 9, 201, 215, &options)
        .await
        .unwrap();
    let request = handle.join().unwrap();

    assert!(request.starts_with("POST /v1/server/create "));
    assert!(request.contains("DCID=9&VPSPLANID=201&OSID=215&label=web1&enable_ipv6=yes"));
    assert_eq!(server.id, "1312965");
    assert_eq!(server.name, "web1");
    assert_eq!((server.region_id, server.plan_id), (9, 201));
}

#[tokio::test]
async fn test_action_accepts_empty_body() {
    let (base_url, handle) = serve_once("200 OK", "");

    client(base_url).halt_server("576965").await.unwrap();
    let request = handle.join().unwrap();

    assert!(request.starts_with("POST /v1/server/halt "));
    assert!(request.ends_with("SUBID=576965"));
}

#[tokio::test]
async fn test_error_status_becomes_api_error() {
    let (base_url, handle) = serve_once("412 Precondition Failed", "Unable to destroy server: Server is locked\n");

    let err = client(base_url).delete_server("576965").await.unwrap_err();
    handle.join().unwrap();

    match err {
        CliError::Api { status, message } => {
            assert_eq!(status, 412);
            assert_eq!(message, "Unable to destroy server: Server is locked");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let (base_url, handle) = serve_once("200 OK", "<html>maintenance</html>");

    let err = client(base_url).get_servers().await.unwrap_err();
    handle.join().unwrap();

    assert!(matches!(err, CliError::Decode(_)));
}
