// ============================================================================
// render.rs — Draws the icon design at a target size and writes it as PNG
// ============================================================================

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::design::{IconDesign, Scale};
use crate::error::{IconError, Result};
use crate::raster::Canvas;

/// Largest side length accepted; keeps the RGBA buffer well inside memory.
pub const MAX_ICON_SIZE: u32 = 4096;

/// Parameters a render actually used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    pub size: u32,
    pub scale: f32,
    pub stroke: u32,
}

pub fn check_size(size: u32) -> Result<()> {
    if size == 0 || size > MAX_ICON_SIZE {
        return Err(IconError::InvalidSize(size));
    }
    Ok(())
}

/// Renders one [`IconDesign`] at arbitrary square sizes. Holds no per-render
/// state; every call draws on a fresh canvas.
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    design: IconDesign,
}

impl IconRenderer {
    /// Draws the design on a transparent `size x size` canvas.
    pub fn render_image(&self, size: u32) -> Result<RgbaImage> {
        self.draw(size).map(|(image, _)| image)
    }

    fn draw(&self, size: u32) -> Result<(RgbaImage, RenderStats)> {
        check_size(size)?;
        let scale = Scale::for_size(size);
        let shapes = self.design.scaled(scale);
        let mut canvas = Canvas::new(size, size);
        canvas.rounded_rect(&shapes.frame);
        canvas.line(&shapes.separator);
        for button in &shapes.buttons {
            canvas.circle(button);
        }
        let stats = RenderStats {
            size,
            scale: scale.factor(),
            stroke: shapes.frame.outline_width as u32,
        };
        Ok((canvas.into_image(), stats))
    }

    /// PNG-encoded bytes of the icon at `size`.
    pub fn encode_png(&self, size: u32) -> Result<Vec<u8>> {
        let image = self.render_image(size)?;
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|source| IconError::Write {
                path: "<memory>".into(),
                source,
            })?;
        Ok(bytes)
    }

    /// Renders at `size` and writes a PNG to `path`, replacing any existing file.
    /// The parent directory must already exist.
    pub fn render(&self, size: u32, path: &Path) -> Result<RenderStats> {
        let (image, stats) = self.draw(size)?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| IconError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(stats)
    }
}
