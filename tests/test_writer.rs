use fileserver::http::response::Response;
use fileserver::http::writer::{ResponseWriter, serialize_response};

#[test]
fn test_serialize_ok_response() {
    let response = Response::file("text/html", b"<h1>hi</h1>".to_vec());
    let bytes = serialize_response(&response);

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 11\r\n\r\n<h1>hi</h1>"[..]
    );
}

#[test]
fn test_serialize_not_found_has_no_content_type() {
    let bytes = serialize_response(&Response::not_found());

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 404 Not Found\r\nContent-Length: 13\r\n\r\n404 Not Found"[..]
    );
}

#[test]
fn test_serialize_binary_body_untouched() {
    let body: Vec<u8> = (0..=255).collect();
    let bytes = serialize_response(&Response::file("application/octet-stream", body.clone()));

    assert!(bytes.ends_with(&body));
    assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
}

#[tokio::test]
async fn test_write_to_stream_writes_everything() {
    let response = Response::file("text/css", b"body { margin: 0 }".to_vec());
    let expected = serialize_response(&response);

    let mut out: Vec<u8> = Vec::new();
    let mut writer = ResponseWriter::new(&response);
    writer.write_to_stream(&mut out).await.unwrap();

    assert_eq!(writer.written(), expected.len());
    assert_eq!(out, expected.to_vec());
}

#[tokio::test]
async fn test_write_to_closed_stream_fails() {
    let body = vec![b'x'; 256 * 1024];
    let response = Response::file("application/octet-stream", body);

    let (client, mut server) = tokio::io::duplex(1024);
    drop(client);

    let mut writer = ResponseWriter::new(&response);
    assert!(writer.write_to_stream(&mut server).await.is_err());
    assert!(writer.written() < 256 * 1024);
}
