use crate::http::request::{Method, Request};

/// Longest request line accepted, terminator included.
pub const MAX_REQUEST_LINE: usize = 8 * 1024;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace before the line terminator.
    EmptyLine,
    /// A method without a path.
    MissingPath,
    /// The line is not valid UTF-8.
    InvalidEncoding,
    /// The line did not end within `MAX_REQUEST_LINE` bytes.
    TooLong,
}

/// Parses a single request line, with or without its CRLF/LF terminator.
///
/// Tokens are split on whitespace: method, path, then an optional version.
/// Anything after the third token is ignored.
pub fn parse_request_line(line: &[u8]) -> Result<Request, ParseError> {
    if line.len() > MAX_REQUEST_LINE
        || (line.len() == MAX_REQUEST_LINE && !line.ends_with(b"\n"))
    {
        return Err(ParseError::TooLong);
    }

    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidEncoding)?;
    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ParseError::EmptyLine)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;
    let version = parts.next().map(str::to_string);

    Ok(Request {
        method: Method::from(method),
        path: path.to_string(),
        version,
    })
}
