//! End-to-end tests against a real listening socket.

use std::fs;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

use fileserver::config::Config;
use fileserver::server::listener::{ACCEPT_BACKOFF, serve};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn start(cfg: Config) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, Arc::new(cfg)));
    addr
}

async fn request(addr: SocketAddr, line: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(line).await.unwrap();
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    out
}

fn site() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("index.html"), "<p>index</p>").unwrap();
    let big: Vec<u8> = (0..200_000u32).map(|i| (i % 97) as u8).collect();
    fs::write(tmp.path().join("shared.bin"), big).unwrap();
    tmp
}

#[tokio::test]
async fn test_serves_default_file_over_tcp() {
    let tmp = site();
    let addr = start(Config::new(0, "index.html", tmp.path())).await;

    let raw = request(addr, b"GET / HTTP/1.1\r\n").await;

    assert_eq!(
        raw,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 12\r\n\r\n<p>index</p>".to_vec()
    );
}

#[tokio::test]
async fn test_empty_connection_does_not_stop_acceptor() {
    let tmp = site();
    let addr = start(Config::new(0, "index.html", tmp.path())).await;

    // Connect and hang up without sending anything.
    let mut silent = TcpStream::connect(addr).await.unwrap();
    silent.shutdown().await.unwrap();
    let mut out = Vec::new();
    silent.read_to_end(&mut out).await.unwrap();
    assert!(out.is_empty());

    assert!(request(addr, b"GET /missing HTTP/1.1\r\n").await.is_empty());

    let raw = request(addr, b"GET / HTTP/1.1\r\n").await;
    assert!(raw.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_for_same_file() {
    let tmp = site();
    let expected_body = fs::read(tmp.path().join("shared.bin")).unwrap();
    let addr = start(Config::new(0, "index.html", tmp.path())).await;

    let clients: Vec<_> = (0..16)
        .map(|_| tokio::spawn(request(addr, b"GET /shared.bin HTTP/1.1\r\n")))
        .collect();

    let mut responses = Vec::new();
    for client in clients {
        responses.push(client.await.unwrap());
    }

    let first = &responses[0];
    let header_end = first.windows(4).position(|w| w == b"\r\n\r\n").unwrap() + 4;
    assert_eq!(&first[header_end..], &expected_body[..]);
    for raw in &responses {
        assert_eq!(raw, first);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_admission_limit_still_serves_everyone() {
    let tmp = site();
    let mut cfg = Config::new(0, "index.html", tmp.path());
    cfg.max_connections = NonZeroUsize::new(1);
    let addr = start(cfg).await;

    let clients: Vec<_> = (0..6)
        .map(|_| tokio::spawn(request(addr, b"GET /index.html HTTP/1.1\r\n")))
        .collect();

    for client in clients {
        let raw = client.await.unwrap();
        assert!(raw.ends_with(b"<p>index</p>"));
    }
}

#[test]
fn test_accept_backoff_is_short_but_nonzero() {
    assert!(!ACCEPT_BACKOFF.is_zero());
    assert!(ACCEPT_BACKOFF <= std::time::Duration::from_secs(1));
}
