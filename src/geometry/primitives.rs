//! Drawing primitives emitted by the renderers and consumed by backends.

use super::{Color, FitTransform, Point, Rect};

/// Stroke settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Line colour.
    pub color: Color,
    /// Line width in the units of the frame the primitive lives in.
    pub width: f64,
}

/// Paint applied to a shape: an optional stroke and an optional fill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Outline, if any.
    pub stroke: Option<Stroke>,
    /// Interior fill, if any.
    pub fill: Option<Color>,
}

impl Style {
    /// Stroke only.
    #[must_use]
    pub const fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke: Some(Stroke { color, width }),
            fill: None,
        }
    }

    /// Fill only.
    #[must_use]
    pub const fn filled(color: Color) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
        }
    }

    /// Fill with an outline.
    #[must_use]
    pub const fn filled_stroked(fill: Color, stroke: Color, width: f64) -> Self {
        Self {
            stroke: Some(Stroke {
                color: stroke,
                width,
            }),
            fill: Some(fill),
        }
    }

    /// Half the stroke width, or zero when unstroked.
    #[must_use]
    pub fn half_stroke(&self) -> f64 {
        self.stroke.map_or(0.0, |s| s.width / 2.0)
    }

    /// Returns the style with its stroke width replaced.
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        if let Some(stroke) = self.stroke.as_mut() {
            stroke.width = width;
        }
        self
    }
}

/// Geometric shape of a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A straight segment.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
    },
    /// An open or closed sequence of segments.
    Polyline {
        /// Vertices in drawing order.
        points: Vec<Point>,
        /// Whether the last vertex joins back to the first.
        closed: bool,
    },
    /// A full circle.
    Circle {
        /// Centre.
        centre: Point,
        /// Radius.
        radius: f64,
    },
    /// A circular arc. Angles are in degrees, measured in the y-down frame,
    /// so positive sweeps run clockwise on screen.
    Arc {
        /// Centre.
        centre: Point,
        /// Radius.
        radius: f64,
        /// Start angle in degrees.
        start: f64,
        /// Signed sweep in degrees.
        sweep: f64,
    },
    /// An axis-aligned rectangle with optional rounded corners.
    Rect {
        /// The rectangle.
        rect: Rect,
        /// Corner radius, zero for sharp corners.
        corner_radius: f64,
    },
}

impl Shape {
    /// Geometric bounds, ignoring stroke width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Line { from, to } => Rect::from_corners(*from, *to),
            Self::Polyline { points, .. } => bounds_of(points.iter().copied()),
            Self::Circle { centre, radius } => Rect::centred(*centre, radius * 2.0, radius * 2.0),
            Self::Arc {
                centre,
                radius,
                start,
                sweep,
            } => bounds_of(arc_extremes(*centre, *radius, *start, *sweep)),
            Self::Rect { rect, .. } => *rect,
        }
    }

    /// Maps the shape through a fit transform.
    #[must_use]
    pub fn transform(&self, t: &FitTransform) -> Self {
        match self {
            Self::Line { from, to } => Self::Line {
                from: t.apply(*from),
                to: t.apply(*to),
            },
            Self::Polyline { points, closed } => Self::Polyline {
                points: points.iter().map(|p| t.apply(*p)).collect(),
                closed: *closed,
            },
            Self::Circle { centre, radius } => Self::Circle {
                centre: t.apply(*centre),
                radius: t.length(*radius),
            },
            Self::Arc {
                centre,
                radius,
                start,
                sweep,
            } => Self::Arc {
                centre: t.apply(*centre),
                radius: t.length(*radius),
                start: *start,
                sweep: *sweep,
            },
            Self::Rect {
                rect,
                corner_radius,
            } => Self::Rect {
                rect: t.rect(*rect),
                corner_radius: t.length(*corner_radius),
            },
        }
    }

    /// Returns the shape moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        match self {
            Self::Line { from, to } => Self::Line {
                from: from.offset(dx, dy),
                to: to.offset(dx, dy),
            },
            Self::Polyline { points, closed } => Self::Polyline {
                points: points.iter().map(|p| p.offset(dx, dy)).collect(),
                closed: *closed,
            },
            Self::Circle { centre, radius } => Self::Circle {
                centre: centre.offset(dx, dy),
                radius: *radius,
            },
            Self::Arc {
                centre,
                radius,
                start,
                sweep,
            } => Self::Arc {
                centre: centre.offset(dx, dy),
                radius: *radius,
                start: *start,
                sweep: *sweep,
            },
            Self::Rect {
                rect,
                corner_radius,
            } => Self::Rect {
                rect: rect.translate(dx, dy),
                corner_radius: *corner_radius,
            },
        }
    }
}

/// A styled shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// What to draw.
    pub shape: Shape,
    /// How to paint it.
    pub style: Style,
}

impl Primitive {
    /// Creates a new primitive.
    #[must_use]
    pub const fn new(shape: Shape, style: Style) -> Self {
        Self { shape, style }
    }

    /// Bounds including half the stroke width on every side.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.shape.bounds().outset(self.style.half_stroke())
    }

    /// Returns the primitive moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.shape.translate(dx, dy), self.style)
    }
}

/// Built-in PDF font faces used for label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
    /// Symbol, for Greek letters.
    Symbol,
}

/// Fraction of the font size above the baseline.
pub const ASCENT: f64 = 0.8;

/// Fraction of the font size below the baseline.
pub const DESCENT: f64 = 0.2;

/// A single line of text placed at an absolute baseline origin.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Left end of the baseline.
    pub origin: Point,
    /// Font size in points.
    pub size: f64,
    /// Face.
    pub font: Font,
    /// Measured advance width of `text` at `size`.
    pub width: f64,
    /// Text content.
    pub text: String,
}

impl TextRun {
    /// Box from ascent to descent over the measured width.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin.x,
            self.size.mul_add(-ASCENT, self.origin.y),
            self.width,
            self.size * (ASCENT + DESCENT),
        )
    }

    /// Returns the run moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            origin: self.origin.offset(dx, dy),
            ..self.clone()
        }
    }
}

/// An ordered list of shapes and text runs in one coordinate frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawing {
    /// Shapes, painted in order.
    pub primitives: Vec<Primitive>,
    /// Text, painted after all shapes.
    pub texts: Vec<TextRun>,
}

impl Drawing {
    /// Creates an empty drawing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primitives: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.texts.is_empty()
    }

    /// Returns the drawing moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            primitives: self.primitives.iter().map(|p| p.translate(dx, dy)).collect(),
            texts: self.texts.iter().map(|t| t.translate(dx, dy)).collect(),
        }
    }

    /// Bounds of everything drawn, or `None` for an empty drawing.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.primitives
            .iter()
            .map(Primitive::bounds)
            .chain(self.texts.iter().map(TextRun::bounds))
            .reduce(|a, b| a.union(&b))
    }
}

fn bounds_of(points: impl IntoIterator<Item = Point>) -> Rect {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return Rect::default();
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in iter {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Point on a circle at `angle` degrees in the y-down frame.
#[must_use]
pub fn point_on_circle(centre: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    Point::new(radius.mul_add(cos, centre.x), radius.mul_add(sin, centre.y))
}

/// Arc end points plus every axis crossing inside the sweep.
fn arc_extremes(centre: Point, radius: f64, start: f64, sweep: f64) -> Vec<Point> {
    let (lo, hi) = if sweep >= 0.0 {
        (start, start + sweep)
    } else {
        (start + sweep, start)
    };

    let mut points = vec![
        point_on_circle(centre, radius, lo),
        point_on_circle(centre, radius, hi),
    ];
    let mut quadrant = (lo / 90.0).ceil() * 90.0;
    while quadrant < hi {
        points.push(point_on_circle(centre, radius, quadrant));
        quadrant += 90.0;
    }
    points
}
