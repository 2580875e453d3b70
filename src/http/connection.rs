use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::config::Config;
use crate::files::{self, ResolvedFile};
use crate::http::mime::content_type_for;
use crate::http::parser::{MAX_REQUEST_LINE, parse_request_line};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Handles exactly one request on one accepted stream, then closes it.
pub struct Connection<S> {
    stream: BufReader<S>,
    config: Arc<Config>,
    buffer: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitRequestLine,
    Parsed(Request),
    Resolved(Request, ResolvedFile),
    Responding(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, config: Arc<Config>) -> Self {
        Self {
            stream: BufReader::new(stream),
            config,
            buffer: Vec::with_capacity(1024),
            state: ConnectionState::AwaitRequestLine,
        }
    }

    /// Drives the state machine to `Closed`.
    ///
    /// Malformed requests and missing files end the connection without a
    /// single byte written. I/O errors abort this connection only.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::AwaitRequestLine => match self.read_request().await? {
                    Some(req) => ConnectionState::Parsed(req),
                    None => ConnectionState::Closed,
                },

                ConnectionState::Parsed(req) => match self.resolve(&req).await {
                    Some(file) => ConnectionState::Resolved(req, file),
                    None => ConnectionState::Closed,
                },

                ConnectionState::Resolved(req, file) => {
                    let response = Self::handle_request(&req, &file).await?;
                    ConnectionState::Responding(ResponseWriter::new(&response))
                }

                ConnectionState::Responding(mut writer) => {
                    writer.write_to_stream(self.stream.get_mut()).await?;
                    debug!(bytes = writer.written(), "Response sent");
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        // No keep-alive: whatever happened, the peer sees EOF next.
        if let Err(e) = self.stream.get_mut().shutdown().await {
            debug!(error = %e, "Shutdown failed");
        }
        Ok(())
    }

    /// Reads one line. Header lines after it are left unread.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        self.buffer.clear();

        let n = (&mut self.stream)
            .take(MAX_REQUEST_LINE as u64)
            .read_until(b'\n', &mut self.buffer)
            .await
            .context("reading request line")?;

        if n == 0 {
            debug!("Client closed before sending a request line");
            return Ok(None);
        }

        info!("Request: {}", String::from_utf8_lossy(&self.buffer).trim_end());

        match parse_request_line(&self.buffer) {
            Ok(req) => Ok(Some(req)),
            Err(e) => {
                info!(error = ?e, "Malformed request line");
                Ok(None)
            }
        }
    }

    async fn resolve(&self, req: &Request) -> Option<ResolvedFile> {
        match files::resolve(&req.path, &self.config).await {
            Ok(file) if file.exists => Some(file),
            Ok(_) => {
                info!("File {} does not exist", req.path);
                None
            }
            Err(e) => {
                info!(error = ?e, "Path is empty");
                None
            }
        }
    }

    /// GET and HEAD get the file (HEAD keeps the body); anything else gets 404.
    async fn handle_request(req: &Request, file: &ResolvedFile) -> anyhow::Result<Response> {
        if !req.method.is_retrieval() {
            info!(method = %req.method, path = %req.path, "Sent 404 Not Found");
            return Ok(Response::not_found());
        }

        let body = tokio::fs::read(&file.absolute_path)
            .await
            .with_context(|| format!("reading {}", file.absolute_path.display()))?;

        let content_type = content_type_for(&file.file_name());
        debug!(
            method = %req.method,
            path = %file.absolute_path.display(),
            content_type,
            len = body.len(),
            "Serving file"
        );

        Ok(Response::file(content_type, body))
    }
}
