//! Plane geometry shared by the catalog, the renderers and the paginator.
//!
//! All frames are y-down: the origin is the top-left corner of whatever is
//! being drawn (a symbol frame, a package outline, a cell or a page). The
//! PDF backend is the only place that flips to the y-up PDF user space.
//!
//! Sheet coordinates are PostScript points (1/72 in). Package outlines are
//! authored in millimetres and symbol frames in abstract units; both reach
//! the sheet only through a [`FitTransform`].

pub mod primitives;

pub use primitives::{
    point_on_circle, Drawing, Font, Primitive, Shape, Stroke, Style, TextRun, ASCENT, DESCENT,
};

use serde::{Deserialize, Serialize};

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Points per millimetre.
pub const POINTS_PER_MM: f64 = POINTS_PER_INCH / 25.4;

/// Tolerance used when comparing derived coordinates.
pub const EPSILON: f64 = 1e-6;

/// Converts millimetres to points.
#[must_use]
pub fn mm(value: f64) -> f64 {
    value * POINTS_PER_MM
}

/// Converts inches to points.
#[must_use]
pub fn inch(value: f64) -> f64 {
    value * POINTS_PER_INCH
}

/// A 2D point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate (grows downwards).
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation towards `other`, `t = 0` is `self`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            (other.x - self.x).mul_add(t, self.x),
            (other.y - self.y).mul_add(t, self.y),
        )
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (never negative for rectangles built through this API).
    pub width: f64,
    /// Height (never negative for rectangles built through this API).
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Creates a rectangle centred on `centre`.
    #[must_use]
    pub fn centred(centre: Point, width: f64, height: f64) -> Self {
        Self::new(
            centre.x - width / 2.0,
            centre.y - height / 2.0,
            width,
            height,
        )
    }

    /// Creates the smallest rectangle spanning two corner points.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Centre point.
    #[must_use]
    pub fn centre(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Size of the rectangle.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// A rectangle smaller than twice the inset collapses onto its centre
    /// line instead of turning inside out.
    #[must_use]
    pub fn inset(&self, amount: f64) -> Self {
        let dx = amount.min(self.width / 2.0);
        let dy = amount.min(self.height / 2.0);
        Self::new(
            self.x + dx,
            self.y + dy,
            2.0f64.mul_add(-dx, self.width),
            2.0f64.mul_add(-dy, self.height),
        )
    }

    /// Grows the rectangle by `amount` on every side.
    #[must_use]
    pub fn outset(&self, amount: f64) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            2.0f64.mul_add(amount, self.width),
            2.0f64.mul_add(amount, self.height),
        )
    }

    /// Returns the rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest rectangle containing both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(x, y, right - x, bottom - y)
    }

    /// Whether `other` lies entirely inside `self`, within `tolerance`.
    #[must_use]
    pub fn contains_rect(&self, other: &Self, tolerance: f64) -> bool {
        other.x >= self.x - tolerance
            && other.y >= self.y - tolerance
            && other.right() <= self.right() + tolerance
            && other.bottom() <= self.bottom() + tolerance
    }

    /// Whether the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right() - EPSILON
            && other.x < self.right() - EPSILON
            && self.y < other.bottom() - EPSILON
            && other.y < self.bottom() - EPSILON
    }
}

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Mid grey used for alignment guides.
    pub const GUIDE: Self = Self::rgb(0.6, 0.6, 0.6);

    /// Creates a colour from RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a colour from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // components are at most 255
    pub fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as f32 / 255.0,
            ((value >> 8) & 0xFF) as f32 / 255.0,
            (value & 0xFF) as f32 / 255.0,
        )
    }
}

/// Uniform scale-and-centre mapping from a local frame into a target box.
///
/// The same factor is applied on both axes, so aspect ratios survive the
/// mapping. The source is centred along whichever axis has slack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    scale: f64,
    source_origin: Point,
    target_origin: Point,
}

impl FitTransform {
    /// Builds the transform placing `source` inside `target`.
    ///
    /// Returns `None` when either rectangle is degenerate.
    #[must_use]
    pub fn fit(source: Rect, target: Rect) -> Option<Self> {
        if !source.size().is_positive() || !target.size().is_positive() {
            return None;
        }

        let scale = (target.width / source.width).min(target.height / source.height);
        let used_w = source.width * scale;
        let used_h = source.height * scale;

        Some(Self {
            scale,
            source_origin: Point::new(source.x, source.y),
            target_origin: Point::new(
                target.x + (target.width - used_w) / 2.0,
                target.y + (target.height - used_h) / 2.0,
            ),
        })
    }

    /// The uniform scale factor.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a local point into target coordinates.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.source_origin.x).mul_add(self.scale, self.target_origin.x),
            (p.y - self.source_origin.y).mul_add(self.scale, self.target_origin.y),
        )
    }

    /// Maps a local length into target units.
    #[must_use]
    pub fn length(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// Maps a local rectangle into target coordinates.
    #[must_use]
    pub fn rect(&self, r: Rect) -> Rect {
        let origin = self.apply(Point::new(r.x, r.y));
        Rect::new(origin.x, origin.y, r.width * self.scale, r.height * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_collapses_instead_of_inverting() {
        let r = Rect::new(0.0, 0.0, 4.0, 10.0).inset(3.0);
        assert!((r.width - 0.0).abs() < EPSILON);
        assert!((r.height - 4.0).abs() < EPSILON);
        assert!((r.x - 2.0).abs() < EPSILON);
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Rect::new(9.0, 9.0, 5.0, 5.0)));
    }

    #[test]
    fn fit_is_uniform_and_centred() {
        let source = Rect::new(0.0, 0.0, 2.0, 1.0);
        let target = Rect::new(10.0, 10.0, 100.0, 100.0);
        let t = FitTransform::fit(source, target).unwrap();

        assert!((t.scale() - 50.0).abs() < EPSILON);
        let top_left = t.apply(Point::new(0.0, 0.0));
        let bottom_right = t.apply(Point::new(2.0, 1.0));
        assert!((top_left.x - 10.0).abs() < EPSILON);
        assert!((top_left.y - 35.0).abs() < EPSILON);
        assert!((bottom_right.x - 110.0).abs() < EPSILON);
        assert!((bottom_right.y - 85.0).abs() < EPSILON);
    }

    #[test]
    fn fit_rejects_degenerate_boxes() {
        let source = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(FitTransform::fit(source, Rect::new(0.0, 0.0, 0.0, 5.0)).is_none());
        assert!(FitTransform::fit(Rect::default(), source).is_none());
    }

    #[test]
    fn unit_conversions() {
        assert!((mm(25.4) - 72.0).abs() < EPSILON);
        assert!((inch(0.5) - 36.0).abs() < EPSILON);
    }

    #[test]
    fn hex_colour() {
        let c = Color::hex(0xFF_80_00);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!(c.b.abs() < f32::EPSILON);
    }
}
