// ============================================================================
// lib.rs — Library API (shared by the CLI and the tests)
// ============================================================================

pub mod config;
pub mod design;
pub mod error;
pub mod generate;
pub mod options;
pub mod raster;
pub mod render;

pub use config::Config;
pub use design::{IconDesign, Scale};
pub use error::{IconError, Result};
pub use generate::{
    clean_icons, generate_icons, icon_file_name, GenerateEvent, GenerateOptions, GenerateReport,
    DEFAULT_OUTPUT_DIR, DEFAULT_SIZES,
};
pub use raster::Canvas;
pub use render::{IconRenderer, RenderStats, MAX_ICON_SIZE};

use std::path::Path;

/// Renders the default icon at `size` into `path`. The parent directory must exist.
pub fn render_icon(size: u32, path: &Path) -> Result<RenderStats> {
    IconRenderer::default().render(size, path)
}

