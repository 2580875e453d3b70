use std::path::{Path, PathBuf};

/// Boundary applied to canonical paths before they are served.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ServingRoot {
    /// Any readable file may be served, including ones reached through `..`.
    #[default]
    Unrestricted,
    /// Only files below this canonical directory may be served.
    Confined(PathBuf),
}

impl ServingRoot {
    /// Confines serving to `dir`, which must exist.
    pub fn confined_to(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(ServingRoot::Confined(std::fs::canonicalize(dir)?))
    }

    /// Whether `canonical` may be served. Expects an already canonical path.
    pub fn permits(&self, canonical: &Path) -> bool {
        match self {
            ServingRoot::Unrestricted => true,
            ServingRoot::Confined(root) => canonical.starts_with(root),
        }
    }
}
