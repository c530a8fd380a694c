// ============================================================================
// raster.rs — Aliased RGBA canvas with the three primitives the icon needs
// ============================================================================

use image::RgbaImage;

use crate::design::{Circle, Color, Line, Point, RoundedRect, TRANSPARENT};

/// Pixel buffer drawn into before encoding. Shapes overwrite what is below
/// them; there is no anti-aliasing and no blending.
///
/// Pixel `(x, y)` is sampled at the integer point `(x, y)`, so a closed shape
/// spanning `x0..=x1` covers the columns `ceil(x0)..=floor(x1)`.
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Colour at `(x, y)`; panics when out of bounds.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Color {
        *self.pixels.get_pixel(x, y)
    }

    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Filled rounded rectangle with an outline drawn inward from its edge.
    pub fn rounded_rect(&mut self, rect: &RoundedRect) {
        let outer = RoundedBox::new(rect.min, rect.max, rect.radius);
        let w = rect.outline_width.max(0.0);
        let inner = RoundedBox::new(
            Point::new(rect.min.x + w, rect.min.y + w),
            Point::new(rect.max.x - w, rect.max.y - w),
            (rect.radius - w).max(0.0),
        );
        self.fill_where(rect.min, rect.max, |p| {
            if !outer.contains(p) {
                None
            } else if w > 0.0 && !inner.contains(p) {
                Some(rect.outline)
            } else {
                Some(rect.fill)
            }
        });
    }

    /// Straight line with butt ends, `line.width` pixels across.
    pub fn line(&mut self, line: &Line) {
        let (dx, dy) = (line.to.x - line.from.x, line.to.y - line.from.y);
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return;
        }
        let len = len_sq.sqrt();
        let half = line.width / 2.0;
        // Bounding box of the stroke, padded by half the width on every side.
        let min = Point::new(line.from.x.min(line.to.x) - half, line.from.y.min(line.to.y) - half);
        let max = Point::new(line.from.x.max(line.to.x) + half, line.from.y.max(line.to.y) + half);
        self.fill_where(min, max, |p| {
            let (px, py) = (p.x - line.from.x, p.y - line.from.y);
            let t = (px * dx + py * dy) / len_sq;
            if !(0.0..=1.0).contains(&t) {
                return None;
            }
            // Signed distance from the centre line, half-open so a w-wide
            // axis-aligned stroke covers exactly w rows.
            let d = (py * dx - px * dy) / len;
            (d >= -half && d < half).then_some(line.color)
        });
    }

    pub fn circle(&mut self, circle: &Circle) {
        self.ellipse(circle.center, circle.radius, circle.radius, circle.fill);
    }

    /// Filled axis-aligned ellipse.
    pub fn ellipse(&mut self, center: Point, rx: f32, ry: f32, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let min = Point::new(center.x - rx, center.y - ry);
        let max = Point::new(center.x + rx, center.y + ry);
        self.fill_where(min, max, |p| {
            let nx = (p.x - center.x) / rx;
            let ny = (p.y - center.y) / ry;
            (nx * nx + ny * ny <= 1.0).then_some(color)
        });
    }

    /// Visits every in-canvas pixel inside `min..=max` and paints the colour
    /// `shade` returns for it, if any.
    fn fill_where<F>(&mut self, min: Point, max: Point, shade: F)
    where
        F: Fn(Point) -> Option<Color>,
    {
        let Some((x0, x1)) = clip_span(min.x, max.x, self.width()) else { return };
        let Some((y0, y1)) = clip_span(min.y, max.y, self.height()) else { return };
        for y in y0..=y1 {
            for x in x0..=x1 {
                if let Some(color) = shade(Point::new(x as f32, y as f32)) {
                    self.pixels.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Pixel indices covered by the closed interval `lo..=hi`, clipped to `0..len`.
fn clip_span(lo: f32, hi: f32, len: u32) -> Option<(u32, u32)> {
    if len == 0 || !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let start = lo.ceil().max(0.0);
    let end = hi.floor().min((len - 1) as f32);
    if start > end {
        return None;
    }
    Some((start as u32, end as u32))
}

/// Closed rounded box used for point membership tests.
struct RoundedBox {
    min: Point,
    max: Point,
    radius: f32,
}

impl RoundedBox {
    fn new(min: Point, max: Point, radius: f32) -> Self {
        let half_side = ((max.x - min.x).min(max.y - min.y) / 2.0).max(0.0);
        Self {
            min,
            max,
            radius: radius.clamp(0.0, half_side),
        }
    }

    fn contains(&self, p: Point) -> bool {
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return false;
        }
        if self.radius == 0.0 {
            return true;
        }
        // Nearest point of the core rectangle (the box shrunk by the radius).
        let cx = p.x.clamp(self.min.x + self.radius, self.max.x - self.radius);
        let cy = p.y.clamp(self.min.y + self.radius, self.max.y - self.radius);
        let (dx, dy) = (p.x - cx, p.y - cy);
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
