use std::fmt;

/// HTTP request methods.
///
/// Only `GET` and `HEAD` retrieve files. Every other token, known or not, is
/// kept so the connection can answer it with 404.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Served exactly like GET, body included
    HEAD,
    POST,
    PUT,
    DELETE,
    OPTIONS,
    PATCH,
    /// Any other token, kept verbatim
    Extension(String),
}

impl Method {
    /// Returns true for the methods that are answered with file content.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, Method::GET | Method::HEAD)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Extension(other) => other,
        }
    }
}

impl From<&str> for Method {
    /// Case-sensitive, as HTTP methods are.
    ///
    /// ```
    /// # use fileserver::http::request::Method;
    /// assert_eq!(Method::from("GET"), Method::GET);
    /// assert_eq!(Method::from("get"), Method::Extension("get".to_string()));
    /// ```
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Extension(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request as far as this server reads it: the request line only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, HEAD, ...)
    pub method: Method,
    /// The raw request path (e.g. "/index.html"), never empty
    pub path: String,
    /// Third token of the request line, if any (typically "HTTP/1.1")
    pub version: Option<String>,
}
