//! Renderers placing catalog geometry and text into absolute boxes.
//!
//! Every renderer follows the same contract: the source is mapped into the
//! target with a uniform scale, centred along the axis with slack, and every
//! emitted primitive (stroke included) stays inside the target.
//!
//! Stroke widths are nominal point sizes and are not scaled with the
//! geometry. They are capped relative to the target's short side, and the
//! target is inset by half the widest stroke before fitting, so a stroke can
//! never spill over the edge.

pub mod cell;
pub mod markup;
pub mod package;
pub mod symbol;
pub mod text;

pub use cell::{CellCompositor, CellFlags, CellLayout, CellRegions, ComposedCell};
pub use markup::{parse_line, Script, Span};
pub use package::{render_package, PackageFlags, PackageMarks};
pub use symbol::render_symbol;
pub use text::{FittedText, TextBlockComposer, TextStyle};

use crate::geometry::{FitTransform, Primitive, Rect};

/// Largest stroke width as a share of the target's short side.
const MAX_STROKE_SHARE: f64 = 0.1;

/// Stroke width of guide frames drawn with `draw_outlines`.
pub const GUIDE_STROKE: f64 = 0.25;

/// A fit of a source frame into a target box, with the stroke cap applied.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StrokedFit {
    transform: FitTransform,
    stroke_cap: f64,
}

impl StrokedFit {
    /// Fits `source` into `target`, reserving room for strokes up to
    /// `max_stroke` wide.
    ///
    /// Returns `None` for degenerate rectangles.
    pub(crate) fn new(source: Rect, target: Rect, max_stroke: f64) -> Option<Self> {
        if !target.size().is_positive() || !target.x.is_finite() || !target.y.is_finite() {
            return None;
        }
        let stroke_cap = max_stroke.min(target.width.min(target.height) * MAX_STROKE_SHARE);
        let inner = target.inset(stroke_cap / 2.0);
        let transform = FitTransform::fit(source, inner)?;
        Some(Self {
            transform,
            stroke_cap,
        })
    }

    /// The underlying geometric transform.
    pub(crate) const fn transform(&self) -> &FitTransform {
        &self.transform
    }

    /// Widest stroke allowed in the target.
    pub(crate) const fn stroke_cap(&self) -> f64 {
        self.stroke_cap
    }

    /// Maps a source-frame primitive into the target.
    pub(crate) fn place(&self, primitive: &Primitive) -> Primitive {
        let style = match primitive.style.stroke {
            Some(stroke) => primitive
                .style
                .with_stroke_width(stroke.width.min(self.stroke_cap)),
            None => primitive.style,
        };
        Primitive::new(primitive.shape.transform(&self.transform), style)
    }
}

/// A thin guide frame just inside `target`.
#[must_use]
pub fn guide_frame(target: Rect) -> Option<Primitive> {
    use crate::geometry::{Color, Shape, Style};

    if !target.size().is_positive() {
        return None;
    }
    let width = GUIDE_STROKE.min(target.width.min(target.height) * MAX_STROKE_SHARE);
    Some(Primitive::new(
        Shape::Rect {
            rect: target.inset(width / 2.0),
            corner_radius: 0.0,
        },
        Style::stroked(Color::GUIDE, width),
    ))
}
