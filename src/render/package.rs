//! Package Renderer.
//!
//! Leads, tab and holes are scaled with the same transform as the body, so
//! lead-to-body proportions stay those of the physical outline. The variant
//! only picks colours.
//!
//! Pin names sit just beyond the free end of their lead. Room for them is
//! taken from the sides of the box the leads point to before the outline is
//! fitted; when the names cannot be set without colliding, the outline is
//! drawn without them.

use bitflags::bitflags;
use tracing::debug;

use super::text::text_width;
use super::{guide_frame, StrokedFit};
use crate::device::BandColour;
use crate::geometry::{
    Color, Drawing, Font, Point, Primitive, Rect, Shape, Style, TextRun, ASCENT, DESCENT, EPSILON,
};
use crate::library::{BodyShape, Lead, LeadKind, PackageGeometry, PackageVariant, TabFinish};

/// Outline stroke for bodies, tabs and holes, in points.
const OUTLINE_STROKE: f64 = 0.6;

const LEAD_COLOR: Color = Color::rgb(0.55, 0.55, 0.55);
const PAD_COLOR: Color = Color::rgb(0.75, 0.75, 0.72);
const TAB_COLOR: Color = Color::rgb(0.82, 0.82, 0.84);

/// Pin name size as a share of the box's short side.
const PIN_LABEL_SHARE: f64 = 0.18;
/// Largest pin name size, in points.
const PIN_LABEL_MAX_SIZE: f64 = 6.0;
/// Smallest readable pin name size, in points.
const PIN_LABEL_MIN_SIZE: f64 = 2.5;
/// Size reduction per attempt when names collide.
const PIN_LABEL_SHRINK: f64 = 0.8;
/// Gap between a lead end and its name, as a share of the size.
const PIN_LABEL_GAP: f64 = 0.3;
/// Smallest share of each box dimension left to the outline.
const PIN_LABEL_MIN_OUTLINE: f64 = 0.5;

bitflags! {
    /// Style switches for one package drawing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PackageFlags: u8 {
        /// Stroke the silhouette without fills.
        const OUTLINE_ONLY = 1;
        /// Draw the cathode band or polarity stripe.
        const POLARITY_MARK = 1 << 1;
        /// Draw resistor colour bands on the body.
        const COLOUR_BANDS = 1 << 2;
        /// Frame the target box with a guide line.
        const GUIDE = 1 << 3;
        /// Name each lead.
        const PIN_LABELS = 1 << 4;
    }
}

/// Per-label details drawn over the outline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageMarks<'a> {
    /// Resistor colour bands, drawn with [`PackageFlags::COLOUR_BANDS`].
    pub bands: &'a [BandColour],
    /// Pin names in lead order, drawn with [`PackageFlags::PIN_LABELS`].
    pub pins: &'a [String],
}

/// Draws `package` into `target`, uniformly scaled and centred.
///
/// Bands are only used on a rectangular body. Pin names beyond the lead
/// count are ignored and blank names skipped. A target with no area yields
/// an empty drawing.
#[must_use]
pub fn render_package(
    package: &PackageGeometry,
    variant: &PackageVariant,
    target: Rect,
    flags: PackageFlags,
    marks: PackageMarks<'_>,
) -> Drawing {
    let mut drawing = Drawing::new();
    if !target.size().is_positive() {
        return drawing;
    }
    if flags.contains(PackageFlags::GUIDE) {
        drawing.primitives.extend(guide_frame(target));
    }

    let named = flags.contains(PackageFlags::PIN_LABELS)
        && marks.pins.iter().any(|p| !p.trim().is_empty());
    let placed = if named {
        let placed = place_pin_labels(package, target, marks.pins);
        if placed.is_none() {
            debug!(package = package.id, "No room for pin names");
        }
        placed
    } else {
        None
    };

    let (fit, texts) = match placed {
        Some(placed) => placed,
        None => match StrokedFit::new(package.bounds(), target, OUTLINE_STROKE) {
            Some(fit) => (fit, Vec::new()),
            None => return drawing,
        },
    };
    drawing
        .primitives
        .extend(outline(package, variant, &fit, flags, marks.bands));
    drawing.texts = texts;
    drawing
}

/// Body, leads, tab, markings and holes through `fit`.
fn outline(
    package: &PackageGeometry,
    variant: &PackageVariant,
    fit: &StrokedFit,
    flags: PackageFlags,
    bands: &[BandColour],
) -> Vec<Primitive> {
    let outline_only = flags.contains(PackageFlags::OUTLINE_ONLY);
    let material = variant.material_for(package);
    let stroke = OUTLINE_STROKE.min(fit.stroke_cap());

    let paint = |fill: Color| {
        if outline_only {
            Style::stroked(Color::BLACK, stroke)
        } else {
            Style::filled_stroked(fill, Color::BLACK, stroke)
        }
    };

    let mut out = Vec::new();
    for lead in &package.leads {
        let (shape, fill) = match lead.kind {
            LeadKind::Wire => (rect_shape(lead.rect), LEAD_COLOR),
            LeadKind::Pad => (rect_shape(lead.rect), PAD_COLOR),
            LeadKind::Pin => (
                Shape::Circle {
                    centre: lead.rect.centre(),
                    radius: lead.rect.width.min(lead.rect.height) / 2.0,
                },
                LEAD_COLOR,
            ),
        };
        let style = if outline_only {
            Style::stroked(Color::BLACK, stroke)
        } else {
            Style::filled(fill)
        };
        out.push(fit.place(&Primitive::new(shape, style)));
    }

    if let Some(tab) = package.tab {
        let fill = match variant.tab_finish_for(package) {
            TabFinish::Metallic => TAB_COLOR,
            TabFinish::Insulated => material.body_color(),
        };
        out.push(fit.place(&Primitive::new(rect_shape(tab), paint(fill))));
    }

    out.push(fit.place(&Primitive::new(
        package.body.to_shape(),
        paint(material.body_color()),
    )));

    if !outline_only {
        if flags.contains(PackageFlags::POLARITY_MARK) {
            if let Some(mark) = package.marking {
                out.push(fit.place(&Primitive::new(
                    rect_shape(mark),
                    Style::filled(material.band_color()),
                )));
            }
        }
        if flags.contains(PackageFlags::COLOUR_BANDS) {
            out.extend(
                colour_bands(&package.body, bands)
                    .into_iter()
                    .map(|p| fit.place(&p)),
            );
        }
    }

    for hole in &package.holes {
        let shape = Shape::Circle {
            centre: hole.centre,
            radius: hole.radius,
        };
        out.push(fit.place(&Primitive::new(shape, paint(Color::WHITE))));
    }

    out
}

/// Side of the body a lead leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

fn lead_side(body: Rect, lead: &Lead) -> Side {
    let (c, b) = (lead.rect.centre(), body.centre());
    let dx = (c.x - b.x) / body.width.max(EPSILON);
    let dy = (c.y - b.y) / body.height.max(EPSILON);
    if dx.abs() >= dy.abs() {
        if dx < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    } else if dy < 0.0 {
        Side::Top
    } else {
        Side::Bottom
    }
}

/// A named lead and the side its name goes on.
type NamedLead<'a> = (&'a Lead, Side, &'a str);

/// Fits the outline beside room for the pin names, shrinking the names
/// until they fit without colliding.
fn place_pin_labels(
    package: &PackageGeometry,
    target: Rect,
    pins: &[String],
) -> Option<(StrokedFit, Vec<TextRun>)> {
    let body = package.body.to_shape().bounds();
    let named: Vec<NamedLead<'_>> = package
        .leads
        .iter()
        .zip(pins)
        .map(|(lead, name)| (lead, name.trim()))
        .filter(|(_, name)| !name.is_empty())
        .map(|(lead, name)| (lead, lead_side(body, lead), name))
        .collect();

    let mut size = (target.width.min(target.height) * PIN_LABEL_SHARE).min(PIN_LABEL_MAX_SIZE);
    while size >= PIN_LABEL_MIN_SIZE {
        if let Some(placed) = set_pin_labels(package, target, &named, size) {
            return Some(placed);
        }
        size *= PIN_LABEL_SHRINK;
    }
    None
}

/// One attempt at `size`. Every name is kept inside `target`.
fn set_pin_labels(
    package: &PackageGeometry,
    target: Rect,
    named: &[NamedLead<'_>],
    size: f64,
) -> Option<(StrokedFit, Vec<TextRun>)> {
    let gap = size * PIN_LABEL_GAP;
    let height = size * (ASCENT + DESCENT);
    let widths: Vec<f64> = named
        .iter()
        .map(|(_, _, name)| text_width(name, Font::Regular, size))
        .collect();
    if height > target.height || widths.iter().any(|&w| w > target.width) {
        return None;
    }

    let across = |side: Side| {
        named
            .iter()
            .zip(&widths)
            .filter(|((_, s, _), _)| *s == side)
            .map(|(_, &w)| w + gap)
            .fold(0.0, f64::max)
    };
    let along = |side: Side| {
        if named.iter().any(|(_, s, _)| *s == side) {
            height + gap
        } else {
            0.0
        }
    };
    let (left, right) = (across(Side::Left), across(Side::Right));
    let (top, bottom) = (along(Side::Top), along(Side::Bottom));
    let inner = Rect::new(
        target.x + left,
        target.y + top,
        target.width - left - right,
        target.height - top - bottom,
    );
    if inner.width < target.width * PIN_LABEL_MIN_OUTLINE
        || inner.height < target.height * PIN_LABEL_MIN_OUTLINE
    {
        return None;
    }
    let fit = StrokedFit::new(package.bounds(), inner, OUTLINE_STROKE)?;

    let mut texts: Vec<TextRun> = Vec::with_capacity(named.len());
    for (&(lead, side, name), &width) in named.iter().zip(&widths) {
        let end = fit.transform().rect(lead.rect);
        let centre = end.centre();
        // baseline that centres the ink box on the lead
        let level = size.mul_add((ASCENT - DESCENT) / 2.0, centre.y);
        let (x, baseline) = match side {
            Side::Left => (end.x - gap - width, level),
            Side::Right => (end.right() + gap, level),
            Side::Top => (centre.x - width / 2.0, size.mul_add(-DESCENT, end.y - gap)),
            Side::Bottom => (centre.x - width / 2.0, size.mul_add(ASCENT, end.bottom() + gap)),
        };
        let run = TextRun {
            origin: Point::new(
                x.max(target.x).min(target.right() - width),
                baseline
                    .max(size.mul_add(ASCENT, target.y))
                    .min(size.mul_add(-DESCENT, target.bottom())),
            ),
            size,
            font: Font::Regular,
            width,
            text: name.to_string(),
        };
        if texts.iter().any(|t| t.bounds().overlaps(&run.bounds())) {
            return None;
        }
        texts.push(run);
    }
    Some((fit, texts))
}

const fn rect_shape(rect: Rect) -> Shape {
    Shape::Rect {
        rect,
        corner_radius: 0.0,
    }
}

/// Evenly spaced value bands with the tolerance band set apart on the right.
#[allow(clippy::cast_precision_loss)] // at most five bands
fn colour_bands(body: &BodyShape, bands: &[BandColour]) -> Vec<Primitive> {
    let BodyShape::Rect { rect, corner_radius } = body else {
        return Vec::new();
    };
    let Some((tolerance, digits)) = bands.split_last() else {
        return Vec::new();
    };

    // keep bands clear of the rounded ends
    let start = rect.x + corner_radius.min(rect.width * 0.15);
    let band_w = rect.width * 0.08;
    let pitch = rect.width * 0.14;

    let band = |x: f64, colour: BandColour| {
        Primitive::new(
            rect_shape(Rect::new(x, rect.y, band_w, rect.height)),
            Style::filled(colour.color()),
        )
    };

    if digits.is_empty() {
        return vec![band(rect.centre().x - band_w / 2.0, *tolerance)];
    }

    let mut out: Vec<Primitive> = digits
        .iter()
        .enumerate()
        .map(|(i, &c)| band(pitch.mul_add(i as f64, start), c))
        .collect();
    let tolerance_x = rect.right() - (start - rect.x) - band_w;
    out.push(band(tolerance_x, *tolerance));
    out
}
