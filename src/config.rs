use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::files::root::ServingRoot;

/// File served for `/` when none is given on the command line.
pub const DEFAULT_FILE: &str = "index.html";

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "fileserver")]
#[command(about = "Serves files from the working directory over HTTP/1.1")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    pub port: u16,

    /// File served for requests to `/`
    pub file: Option<String>,

    /// Refuse to serve files outside the working directory
    #[arg(long, env = "FILESERVER_CONFINE")]
    pub confine: bool,

    /// Maximum number of connections handled at once (unlimited when unset)
    #[arg(long = "max-connections", env = "FILESERVER_MAX_CONNECTIONS")]
    pub max_connections: Option<NonZeroUsize>,
}

/// Immutable server configuration, built once at startup and shared
/// read-only with every connection.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub default_file: String,
    /// Directory request paths are resolved against.
    pub base_dir: PathBuf,
    pub root: ServingRoot,
    pub max_connections: Option<NonZeroUsize>,
}

impl Config {
    /// Parses the process arguments. Exits the process on invalid input.
    pub fn load() -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("reading working directory")?;
        Self::from_args(Args::parse(), cwd)
    }

    pub fn from_args(args: Args, base_dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let base_dir = base_dir.into();

        let default_file = match args.file {
            Some(file) if !file.is_empty() => {
                info!("Using file as root: {}", file);
                file
            }
            _ => {
                info!("Using default file: {}", DEFAULT_FILE);
                DEFAULT_FILE.to_string()
            }
        };

        let root = if args.confine {
            let root = ServingRoot::confined_to(&base_dir)
                .with_context(|| format!("confining to {}", base_dir.display()))?;
            info!("Serving root confined to {}", base_dir.display());
            root
        } else {
            ServingRoot::Unrestricted
        };

        Ok(Self {
            port: args.port,
            default_file,
            base_dir,
            root,
            max_connections: args.max_connections,
        })
    }

    /// Unrestricted configuration rooted at `base_dir`.
    pub fn new(port: u16, default_file: impl Into<String>, base_dir: impl AsRef<Path>) -> Self {
        Self {
            port,
            default_file: default_file.into(),
            base_dir: base_dir.as_ref().to_path_buf(),
            root: ServingRoot::Unrestricted,
            max_connections: None,
        }
    }

    pub fn with_root(mut self, root: ServingRoot) -> Self {
        self.root = root;
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
