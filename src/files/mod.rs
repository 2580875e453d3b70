//! Mapping request paths onto the local filesystem.
//!
//! Paths are resolved relative to the configured base directory and
//! canonicalized before use. A [`ServingRoot`] decides whether the canonical
//! target may be served at all.

pub mod resolver;
pub mod root;

pub use resolver::{ResolveError, ResolvedFile, resolve};
pub use root::ServingRoot;
