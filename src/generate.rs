// ============================================================================
// generate.rs — Writes the icon set to an output directory, and cleans it up
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{IconError, Result};
use crate::render::{check_size, IconRenderer};

pub const DEFAULT_OUTPUT_DIR: &str = "extension/images";
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// File name for the icon of the given size, e.g. `icon48.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
    /// Continue with the remaining sizes after a failure instead of stopping.
    pub keep_going: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            keep_going: false,
        }
    }
}

impl GenerateOptions {
    /// Built-in defaults overridden by whatever the config file sets.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        let out = &config.output;
        Self {
            output_dir: out.dir.clone().unwrap_or(defaults.output_dir),
            sizes: out.sizes.clone().unwrap_or(defaults.sizes),
            keep_going: out.keep_going.unwrap_or(defaults.keep_going),
        }
    }

    /// Command-line values over config values over built-in defaults.
    /// An empty `sizes` or `None` directory means "not given on the command line".
    pub fn resolve(config: &Config, out_dir: Option<PathBuf>, sizes: Vec<u32>, keep_going: bool) -> Self {
        let mut opts = Self::from_config(config);
        if let Some(dir) = out_dir {
            opts.output_dir = dir;
        }
        if !sizes.is_empty() {
            opts.sizes = sizes;
        }
        opts.keep_going |= keep_going;
        opts
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(IconError::NoSizes);
        }
        self.sizes.iter().try_for_each(|&size| check_size(size))
    }

    pub fn icon_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(icon_file_name(size))
    }
}

/// Progress notifications emitted while generating.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateEvent {
    DirectoryReady(PathBuf),
    Generated {
        path: PathBuf,
        size: u32,
        scale: f32,
        stroke: u32,
    },
    Failed {
        path: PathBuf,
        size: u32,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateReport {
    pub icons: Vec<GeneratedIcon>,
}

/// Creates the output directory and renders one `icon<N>.png` per size, in
/// order. Stops at the first failure unless `keep_going` is set, in which case
/// every size is attempted and the failures are returned together.
pub fn generate_icons<F>(
    options: &GenerateOptions,
    renderer: &IconRenderer,
    mut on_event: F,
) -> Result<GenerateReport>
where
    F: FnMut(&GenerateEvent),
{
    options.validate()?;

    fs::create_dir_all(&options.output_dir).map_err(|source| IconError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;
    on_event(&GenerateEvent::DirectoryReady(options.output_dir.clone()));

    let mut report = GenerateReport::default();
    let mut failed = Vec::new();

    for &size in &options.sizes {
        let path = options.icon_path(size);
        match renderer.render(size, &path) {
            Ok(stats) => {
                on_event(&GenerateEvent::Generated {
                    path: path.clone(),
                    size,
                    scale: stats.scale,
                    stroke: stats.stroke,
                });
                report.icons.push(GeneratedIcon { path, size });
            }
            Err(e) => {
                on_event(&GenerateEvent::Failed {
                    path,
                    size,
                    error: e.to_string(),
                });
                if !options.keep_going {
                    return Err(e);
                }
                failed.push((size, e.to_string()));
            }
        }
    }

    if !failed.is_empty() {
        return Err(IconError::Partial { failed });
    }
    Ok(report)
}

/// Deletes `icon<N>.png` for each size. Missing files are skipped and the
/// directory itself is kept. Returns the paths that were removed.
pub fn clean_icons(output_dir: &Path, sizes: &[u32]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for &size in sizes {
        let path = output_dir.join(icon_file_name(size));
        match fs::remove_file(&path) {
            Ok(()) => removed.push(path),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(IconError::Remove { path, source }),
        }
    }
    Ok(removed)
}
