//! Listening socket and per-connection dispatch.

pub mod listener;
