// ============================================================================
// error.rs — Error type shared by the library and the CLI
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot remove {}: {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid icon size {0} (must be between 1 and 4096 pixels)")]
    InvalidSize(u32),

    #[error("no icon sizes requested")]
    NoSizes,

    #[error("config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Aggregate of per-size failures collected in keep-going mode.
    #[error("{} icon(s) failed: {}", failed.len(), describe_failures(failed))]
    Partial { failed: Vec<(u32, String)> },
}

fn describe_failures(failed: &[(u32, String)]) -> String {
    failed
        .iter()
        .map(|(size, msg)| format!("{}px ({})", size, msg))
        .collect::<Vec<_>>()
        .join(", ")
}
