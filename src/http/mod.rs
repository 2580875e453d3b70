//! HTTP protocol implementation.
//!
//! Just enough HTTP/1.1 to serve files: one request line in, one response out,
//! then the connection is closed.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Parses the request line
//! - **`request`**: Method and request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file suffixes
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitRequestLine │ ← Read one line
//!        └──────┬───────────┘
//!               │ method + path        (nothing / empty path → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │      Parsed      │ ← Resolve path on disk
//!        └──────┬───────────┘
//!               │ file exists          (missing → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │     Resolved     │ ← GET/HEAD → 200, anything else → 404
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Responding    │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use fileserver::config::Config;
//! use fileserver::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(Config::new(8080, "index.html", std::env::current_dir()?));
//!     let listener = TcpListener::bind(config.listen_addr()).await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let config = Arc::clone(&config);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, config);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
