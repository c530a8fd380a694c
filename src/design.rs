// ============================================================================
// design.rs — The fixed browser-window glyph, in 32x32 reference units
// ============================================================================

use image::Rgba;

/// Side length of the reference coordinate space every shape is expressed in.
pub const REFERENCE_SIZE: f32 = 32.0;

/// Stroke width (reference units) shared by the outline and the separator.
pub const BASE_STROKE: f32 = 2.0;

pub type Color = Rgba<u8>;

pub const ORANGE: Color = Rgba([0xFF, 0x9F, 0x1C, 0xFF]);
pub const BLACK: Color = Rgba([0x00, 0x00, 0x00, 0xFF]);
pub const TRANSPARENT: Color = Rgba([0x00, 0x00, 0x00, 0x00]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub min: Point,
    pub max: Point,
    pub radius: f32,
    pub fill: Color,
    pub outline: Color,
    /// Reference units before scaling, whole pixels after.
    pub outline_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
    pub fill: Color,
}

/// Scale factor between a target pixel size and the reference space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factor: f32,
}

impl Scale {
    pub fn for_size(size: u32) -> Self {
        Self {
            factor: size as f32 / REFERENCE_SIZE,
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub fn apply(&self, value: f32) -> f32 {
        value * self.factor
    }

    pub fn point(&self, p: Point) -> Point {
        Point::new(self.apply(p.x), self.apply(p.y))
    }

    /// Stroke width in whole pixels; never thinner than one pixel.
    pub fn stroke(&self, base: f32) -> u32 {
        (self.apply(base).round() as u32).max(1)
    }
}

/// The browser-window glyph: window frame, title-bar separator, two buttons.
/// Shapes are drawn in field order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconDesign {
    pub frame: RoundedRect,
    pub separator: Line,
    pub buttons: [Circle; 2],
}

impl IconDesign {
    pub const fn browser_window() -> Self {
        Self {
            frame: RoundedRect {
                min: Point::new(3.0, 6.0),
                max: Point::new(29.0, 26.0),
                radius: 2.0,
                fill: ORANGE,
                outline: BLACK,
                outline_width: BASE_STROKE,
            },
            separator: Line {
                from: Point::new(3.0, 12.0),
                to: Point::new(29.0, 12.0),
                color: BLACK,
                width: BASE_STROKE,
            },
            buttons: [
                Circle {
                    center: Point::new(7.0, 9.0),
                    radius: 1.5,
                    fill: BLACK,
                },
                Circle {
                    center: Point::new(11.0, 9.0),
                    radius: 1.5,
                    fill: BLACK,
                },
            ],
        }
    }

    /// Returns the design mapped into pixel space for `scale`.
    /// Stroke widths become whole pixels; `self` is left untouched.
    pub fn scaled(&self, scale: Scale) -> IconDesign {
        let frame = RoundedRect {
            min: scale.point(self.frame.min),
            max: scale.point(self.frame.max),
            radius: scale.apply(self.frame.radius),
            outline_width: scale.stroke(self.frame.outline_width) as f32,
            ..self.frame
        };
        let separator = Line {
            from: scale.point(self.separator.from),
            to: scale.point(self.separator.to),
            width: scale.stroke(self.separator.width) as f32,
            ..self.separator
        };
        let buttons = self.buttons.map(|c| Circle {
            center: scale.point(c.center),
            radius: scale.apply(c.radius),
            ..c
        });
        IconDesign {
            frame,
            separator,
            buttons,
        }
    }
}

impl Default for IconDesign {
    fn default() -> Self {
        Self::browser_window()
    }
}
