//! fileserver - a minimal HTTP/1.1 file server
//!
//! Reads one request line per connection, maps the path onto the working
//! directory and answers with the file, a 404, or nothing at all.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
