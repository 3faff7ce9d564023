//! HTTP transport tests against a one-shot local server.

#![cfg(feature = "http")]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use seltext_backend::{BackendError, Endpoint, HttpTransport, Transport};

/// A request as seen by the server.
struct Captured {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

/// Serve exactly one request with `status_line`, returning the base URL and
/// a receiver for the captured request.
fn one_shot_server(status_line: &'static str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();
        let mut headers = Vec::new();
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
            }
        }
        let len: usize = headers
            .iter()
            .find(|(name, _)| name == "content-length")
            .map(|(_, value)| value.parse().unwrap())
            .unwrap_or(0);
        let mut body = vec![0u8; len];
        reader.read_exact(&mut body).unwrap();

        let mut stream = stream;
        write!(
            stream,
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}"
        )
        .unwrap();
        stream.flush().unwrap();

        tx.send(Captured {
            request_line: request_line.trim_end().to_string(),
            headers,
            body: String::from_utf8(body).unwrap(),
        })
        .unwrap();
    });
    (format!("http://{addr}"), rx)
}

#[test]
fn posts_selection_as_plain_utf8() {
    let (base, rx) = one_shot_server("HTTP/1.1 200 OK");
    let transport = HttpTransport::new(base, Some(Duration::from_secs(5))).unwrap();

    transport
        .send(Endpoint::Selection, "Báo cáo thường niên")
        .unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(captured.request_line, "POST /save-text HTTP/1.1");
    let content_type = captured
        .headers
        .iter()
        .find(|(name, _)| name == "content-type")
        .map(|(_, value)| value.as_str());
    assert_eq!(content_type, Some("text/plain; charset=utf-8"));
    assert_eq!(captured.body, "Báo cáo thường niên");
}

#[test]
fn full_document_goes_to_its_own_path() {
    let (base, rx) = one_shot_server("HTTP/1.1 200 OK");
    let transport = HttpTransport::new(base, Some(Duration::from_secs(5))).unwrap();

    transport
        .send(Endpoint::FullDocument, "--- Page 1 ---\nHello")
        .unwrap();

    let captured = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(captured.request_line, "POST /save-full-pdf HTTP/1.1");
    assert_eq!(captured.body, "--- Page 1 ---\nHello");
}

#[test]
fn non_success_status_is_an_error() {
    let (base, _rx) = one_shot_server("HTTP/1.1 500 Internal Server Error");
    let transport = HttpTransport::new(base, Some(Duration::from_secs(5))).unwrap();

    let err = transport.send(Endpoint::Selection, "some text").unwrap_err();
    assert!(matches!(err, BackendError::Status(500)));
}

#[test]
fn unreachable_server_is_transport_error() {
    // Bind and drop to obtain a port nothing listens on.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let transport = HttpTransport::new(
        format!("http://127.0.0.1:{port}"),
        Some(Duration::from_secs(2)),
    )
    .unwrap();

    let err = transport.send(Endpoint::Selection, "some text").unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)));
}
