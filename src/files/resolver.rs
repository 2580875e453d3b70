use std::path::PathBuf;

use tracing::warn;

use crate::config::Config;

/// Outcome of mapping a request path onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Canonical path when canonicalization succeeded, the joined path otherwise.
    pub absolute_path: PathBuf,
    /// True only for a readable regular file the serving root permits.
    pub exists: bool,
    pub size_bytes: u64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// The request carried no path at all.
    EmptyPath,
}

impl ResolvedFile {
    fn missing(path: PathBuf) -> Self {
        Self {
            absolute_path: path,
            exists: false,
            size_bytes: 0,
        }
    }

    /// Name used for content-type classification.
    pub fn file_name(&self) -> String {
        self.absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Resolves `request_path` against the configured base directory.
///
/// `/` maps to the default file. Any other path loses its leading `/` and is
/// joined onto the base directory, then canonicalized. The default file is
/// chosen by the operator, so the serving root only applies to request paths.
pub async fn resolve(request_path: &str, config: &Config) -> Result<ResolvedFile, ResolveError> {
    if request_path.is_empty() {
        return Err(ResolveError::EmptyPath);
    }

    let (joined, is_default) = if request_path == "/" {
        (config.base_dir.join(&config.default_file), true)
    } else {
        let relative = request_path.strip_prefix('/').unwrap_or(request_path);
        (config.base_dir.join(relative), false)
    };

    let canonical = match tokio::fs::canonicalize(&joined).await {
        Ok(path) => path,
        Err(_) => return Ok(ResolvedFile::missing(joined)),
    };

    if !is_default && !config.root.permits(&canonical) {
        warn!(path = %canonical.display(), "Refusing path outside serving root");
        return Ok(ResolvedFile::missing(canonical));
    }

    let size_bytes = match tokio::fs::metadata(&canonical).await {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return Ok(ResolvedFile::missing(canonical)),
    };

    // Permission bits alone don't say whether this process may read it.
    if tokio::fs::File::open(&canonical).await.is_err() {
        return Ok(ResolvedFile::missing(canonical));
    }

    Ok(ResolvedFile {
        absolute_path: canonical,
        exists: true,
        size_bytes,
    })
}
