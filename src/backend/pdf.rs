//! PDF backend.
//!
//! One PDF page per sheet page, drawn with the standard Helvetica and Symbol
//! faces so no font program is embedded. Text is encoded as WinAnsi, Greek
//! letters in the Symbol face's built-in encoding. Curves become
//! cubic Béziers. Output carries no timestamps, so the same sheet always
//! produces the same bytes.

use encoding_rs::WINDOWS_1252;
use pdf_writer::types::{LineCapStyle, LineJoinStyle};
use pdf_writer::{Content, Name, Pdf, Rect as PdfRect, Ref, Str, TextStr};
use tracing::debug;

use super::{DocumentInfo, SheetBackend};
use crate::error::BackendError;
use crate::geometry::{point_on_circle, Color, Drawing, Font, Point, Primitive, Rect, Shape, Style, TextRun};
use crate::layout::Sheet;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");
const SYMBOL_FONT: Name<'static> = Name(b"F3");

/// Largest sweep drawn as one Bézier segment, in degrees.
const MAX_SEGMENT_SWEEP: f64 = 90.0;

/// Writes sheets as PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfBackend;

impl PdfBackend {
    /// Creates the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SheetBackend for PdfBackend {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)] // page counts are small
    fn write_sheet(&self, sheet: &Sheet, info: &DocumentInfo) -> Result<Vec<u8>, BackendError> {
        let page_size = sheet.page_size();
        let page_width = page_size.width as f32;
        let page_height = page_size.height as f32;

        let mut pdf = Pdf::new();
        let mut next_id = 1;
        let mut alloc = || {
            let id = Ref::new(next_id);
            next_id += 1;
            id
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let regular_id = alloc();
        let bold_id = alloc();
        let symbol_id = alloc();
        let page_ids: Vec<(Ref, Ref)> = sheet.pages.iter().map(|_| (alloc(), alloc())).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().map(|(page, _)| *page))
            .count(page_ids.len() as i32);
        pdf.document_info(info_id)
            .title(TextStr(&info.title))
            .producer(TextStr(&info.producer));
        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(symbol_id).base_font(Name(b"Symbol"));

        for (page, &(page_id, content_id)) in sheet.pages.iter().zip(&page_ids) {
            let drawing = page.drawing();
            check_finite(&drawing, page.number)?;

            {
                let mut writer = pdf.page(page_id);
                writer
                    .media_box(PdfRect::new(0.0, 0.0, page_width, page_height))
                    .parent(pages_id)
                    .contents(content_id);
                writer
                    .resources()
                    .fonts()
                    .pair(REGULAR_FONT, regular_id)
                    .pair(BOLD_FONT, bold_id)
                    .pair(SYMBOL_FONT, symbol_id);
            }

            let content = PageCanvas::new(page_height).draw(&drawing);
            debug!(
                page = page.number,
                cells = page.cells.len(),
                bytes = content.len(),
                "Encoded page"
            );
            pdf.stream(content_id, &content);
        }

        Ok(pdf.finish())
    }
}

/// Rejects pages whose geometry would produce invalid numbers.
fn check_finite(drawing: &Drawing, page: usize) -> Result<(), BackendError> {
    let fail = |what: &str| BackendError::Serialize {
        page,
        message: format!("non-finite {what} coordinates"),
    };

    for primitive in &drawing.primitives {
        if !(shape_is_finite(&primitive.shape) && style_is_finite(&primitive.style)) {
            return Err(fail("shape"));
        }
    }
    for run in &drawing.texts {
        if !(run.origin.is_finite() && run.size.is_finite()) {
            return Err(fail("text"));
        }
    }
    Ok(())
}

fn shape_is_finite(shape: &Shape) -> bool {
    match shape {
        Shape::Line { from, to } => from.is_finite() && to.is_finite(),
        Shape::Polyline { points, .. } => points.iter().all(|p| p.is_finite()),
        Shape::Circle { centre, radius } => centre.is_finite() && radius.is_finite(),
        Shape::Arc {
            centre,
            radius,
            start,
            sweep,
        } => centre.is_finite() && radius.is_finite() && start.is_finite() && sweep.is_finite(),
        Shape::Rect {
            rect,
            corner_radius,
        } => [rect.x, rect.y, rect.width, rect.height, *corner_radius]
            .iter()
            .all(|v| v.is_finite()),
    }
}

fn style_is_finite(style: &Style) -> bool {
    style.stroke.map_or(true, |s| s.width.is_finite())
}

/// Draws one page into a content stream, flipping y.
struct PageCanvas {
    content: Content,
    page_height: f32,
}

impl PageCanvas {
    fn new(page_height: f32) -> Self {
        let mut content = Content::new();
        content.set_line_join(LineJoinStyle::RoundJoin);
        content.set_line_cap(LineCapStyle::RoundCap);
        Self {
            content,
            page_height,
        }
    }

    fn draw(mut self, drawing: &Drawing) -> Vec<u8> {
        for primitive in &drawing.primitives {
            self.primitive(primitive);
        }
        for run in &drawing.texts {
            self.text(run);
        }
        self.content.finish()
    }

    #[allow(clippy::cast_possible_truncation)] // page coordinates fit f32
    fn pt(&self, p: Point) -> (f32, f32) {
        (p.x as f32, self.page_height - p.y as f32)
    }

    fn move_to(&mut self, p: Point) {
        let (x, y) = self.pt(p);
        self.content.move_to(x, y);
    }

    fn line_to(&mut self, p: Point) {
        let (x, y) = self.pt(p);
        self.content.line_to(x, y);
    }

    fn curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        let (x1, y1) = self.pt(c1);
        let (x2, y2) = self.pt(c2);
        let (x3, y3) = self.pt(to);
        self.content.cubic_to(x1, y1, x2, y2, x3, y3);
    }

    /// Appends an arc starting at the current point.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // at most a few segments
    fn arc_to(&mut self, centre: Point, radius: f64, start: f64, sweep: f64) {
        let segments = (sweep.abs() / MAX_SEGMENT_SWEEP).ceil().max(1.0) as usize;
        #[allow(clippy::cast_precision_loss)]
        let step = sweep / segments as f64;
        let handle = radius * 4.0 / 3.0 * (step.to_radians() / 4.0).tan();

        let mut angle = start;
        for _ in 0..segments {
            let next = angle + step;
            let (s0, c0) = angle.to_radians().sin_cos();
            let (s1, c1) = next.to_radians().sin_cos();
            let from = point_on_circle(centre, radius, angle);
            let to = point_on_circle(centre, radius, next);
            self.curve_to(
                Point::new(handle.mul_add(-s0, from.x), handle.mul_add(c0, from.y)),
                Point::new(handle.mul_add(s1, to.x), handle.mul_add(-c1, to.y)),
                to,
            );
            angle = next;
        }
    }

    fn rect_path(&mut self, rect: Rect, corner_radius: f64) {
        let r = corner_radius.min(rect.width / 2.0).min(rect.height / 2.0);
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());
        if r <= 0.0 {
            self.move_to(Point::new(left, top));
            self.line_to(Point::new(right, top));
            self.line_to(Point::new(right, bottom));
            self.line_to(Point::new(left, bottom));
        } else {
            self.move_to(Point::new(left + r, top));
            self.line_to(Point::new(right - r, top));
            self.arc_to(Point::new(right - r, top + r), r, -90.0, 90.0);
            self.line_to(Point::new(right, bottom - r));
            self.arc_to(Point::new(right - r, bottom - r), r, 0.0, 90.0);
            self.line_to(Point::new(left + r, bottom));
            self.arc_to(Point::new(left + r, bottom - r), r, 90.0, 90.0);
            self.line_to(Point::new(left, top + r));
            self.arc_to(Point::new(left + r, top + r), r, 180.0, 90.0);
        }
        self.content.close_path();
    }

    fn primitive(&mut self, primitive: &Primitive) {
        let style = &primitive.style;
        if style.stroke.is_none() && style.fill.is_none() {
            return;
        }

        self.content.save_state();
        if let Some(fill) = style.fill {
            let Color { r, g, b } = fill;
            self.content.set_fill_rgb(r, g, b);
        }
        if let Some(stroke) = style.stroke {
            let Color { r, g, b } = stroke.color;
            self.content.set_stroke_rgb(r, g, b);
            #[allow(clippy::cast_possible_truncation)]
            self.content.set_line_width(stroke.width as f32);
        }

        match &primitive.shape {
            Shape::Line { from, to } => {
                self.move_to(*from);
                self.line_to(*to);
            }
            Shape::Polyline { points, closed } => {
                let mut iter = points.iter();
                if let Some(first) = iter.next() {
                    self.move_to(*first);
                    for p in iter {
                        self.line_to(*p);
                    }
                    if *closed {
                        self.content.close_path();
                    }
                }
            }
            Shape::Circle { centre, radius } => {
                self.move_to(point_on_circle(*centre, *radius, 0.0));
                self.arc_to(*centre, *radius, 0.0, 360.0);
                self.content.close_path();
            }
            Shape::Arc {
                centre,
                radius,
                start,
                sweep,
            } => {
                self.move_to(point_on_circle(*centre, *radius, *start));
                self.arc_to(*centre, *radius, *start, *sweep);
            }
            Shape::Rect {
                rect,
                corner_radius,
            } => self.rect_path(*rect, *corner_radius),
        }

        match (style.fill.is_some(), style.stroke.is_some()) {
            (true, true) => self.content.fill_nonzero_and_stroke(),
            (true, false) => self.content.fill_nonzero(),
            _ => self.content.stroke(),
        };
        self.content.restore_state();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn text(&mut self, run: &TextRun) {
        let (font, bytes) = match run.font {
            Font::Regular => (REGULAR_FONT, encode_winansi(&run.text)),
            Font::Bold => (BOLD_FONT, encode_winansi(&run.text)),
            Font::Symbol => (SYMBOL_FONT, encode_symbol(&run.text)),
        };
        let (x, y) = self.pt(run.origin);

        self.content.save_state();
        self.content.set_fill_rgb(0.0, 0.0, 0.0);
        self.content
            .begin_text()
            .set_font(font, run.size as f32)
            .next_line(x, y)
            .show(Str(&bytes))
            .end_text();
        self.content.restore_state();
    }
}

/// Encodes text for the WinAnsi standard fonts; characters outside the
/// code page become `?`.
#[must_use]
pub fn encode_winansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let (bytes, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if had_errors {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Encodes Greek letters for the Symbol face; anything else becomes `?`.
#[must_use]
pub fn encode_symbol(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            SYMBOL_CODES
                .iter()
                .find(|(greek, _)| *greek == c)
                .map_or(b'?', |(_, code)| *code)
        })
        .collect()
}

/// Symbol encoding of the Greek alphabet.
const SYMBOL_CODES: [(char, u8); 48] = [
    ('\u{0391}', b'A'), ('\u{0392}', b'B'), ('\u{0393}', b'G'), ('\u{0394}', b'D'),
    ('\u{0395}', b'E'), ('\u{0396}', b'Z'), ('\u{0397}', b'H'), ('\u{0398}', b'Q'),
    ('\u{0399}', b'I'), ('\u{039A}', b'K'), ('\u{039B}', b'L'), ('\u{039C}', b'M'),
    ('\u{039D}', b'N'), ('\u{039E}', b'X'), ('\u{039F}', b'O'), ('\u{03A0}', b'P'),
    ('\u{03A1}', b'R'), ('\u{03A3}', b'S'), ('\u{03A4}', b'T'), ('\u{03A5}', b'U'),
    ('\u{03A6}', b'F'), ('\u{03A7}', b'C'), ('\u{03A8}', b'Y'), ('\u{03A9}', b'W'),
    ('\u{03B1}', b'a'), ('\u{03B2}', b'b'), ('\u{03B3}', b'g'), ('\u{03B4}', b'd'),
    ('\u{03B5}', b'e'), ('\u{03B6}', b'z'), ('\u{03B7}', b'h'), ('\u{03B8}', b'q'),
    ('\u{03B9}', b'i'), ('\u{03BA}', b'k'), ('\u{03BB}', b'l'), ('\u{03BC}', b'm'),
    ('\u{03BD}', b'n'), ('\u{03BE}', b'x'), ('\u{03BF}', b'o'), ('\u{03C0}', b'p'),
    ('\u{03C1}', b'r'), ('\u{03C2}', b'V'), ('\u{03C3}', b's'), ('\u{03C4}', b't'),
    ('\u{03C5}', b'u'), ('\u{03C6}', b'f'), ('\u{03C7}', b'c'), ('\u{03C8}', b'y'),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::layout::{LayoutTemplate, SheetPaginator};
    use crate::render::{CellRegions, ComposedCell};

    fn cell(size: Size, drawing: Drawing) -> ComposedCell {
        let region = Rect::from_size(size);
        ComposedCell {
            size,
            regions: CellRegions {
                symbol: region,
                package: region,
                text: region,
            },
            drawing,
            font_size: 7.0,
            dropped_lines: 0,
            elided_lines: 0,
        }
    }

    fn sample_drawing() -> Drawing {
        Drawing {
            primitives: vec![
                Primitive::new(
                    Shape::Rect {
                        rect: Rect::new(2.0, 2.0, 40.0, 20.0),
                        corner_radius: 3.0,
                    },
                    Style::stroked(Color::BLACK, 0.5),
                ),
                Primitive::new(
                    Shape::Circle {
                        centre: Point::new(60.0, 12.0),
                        radius: 5.0,
                    },
                    Style::filled_stroked(Color::WHITE, Color::BLACK, 0.5),
                ),
                Primitive::new(
                    Shape::Arc {
                        centre: Point::new(80.0, 12.0),
                        radius: 4.0,
                        start: 180.0,
                        sweep: -180.0,
                    },
                    Style::stroked(Color::BLACK, 0.5),
                ),
            ],
            texts: vec![TextRun {
                origin: Point::new(2.0, 40.0),
                size: 7.0,
                font: Font::Bold,
                width: 30.0,
                text: "10µF ±5%".to_string(),
            }],
        }
    }

    fn sheet(cells: usize) -> Sheet {
        let template = LayoutTemplate::named("EJ_RANGE_24").unwrap();
        let mut paginator = SheetPaginator::new(template.clone(), true);
        for i in 0..cells {
            paginator.push(cell(template.cell, sample_drawing()), i);
        }
        paginator.finish()
    }

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn one_pdf_page_per_sheet_page() {
        let bytes = PdfBackend::new()
            .write_sheet(&sheet(30), &DocumentInfo::new("Test"))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let pages = count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages");
        assert_eq!(pages, 2);
        assert!(count(&bytes, b"/Helvetica-Bold") >= 1);
    }

    #[test]
    fn output_is_deterministic() {
        let info = DocumentInfo::new("Drawer 3");
        let first = PdfBackend::new().write_sheet(&sheet(5), &info).unwrap();
        let second = PdfBackend::new().write_sheet(&sheet(5), &info).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn text_uses_both_faces() {
        let mut drawing = sample_drawing();
        drawing.texts.push(TextRun {
            origin: Point::new(2.0, 50.0),
            size: 6.0,
            font: Font::Regular,
            width: 20.0,
            text: "vr: 100V".to_string(),
        });
        let template = LayoutTemplate::named("EJ_RANGE_24").unwrap();
        let mut paginator = SheetPaginator::new(template.clone(), false);
        paginator.push(cell(template.cell, drawing), 0);

        let bytes = PdfBackend::new()
            .write_sheet(&paginator.finish(), &DocumentInfo::new("Test"))
            .unwrap();
        assert_eq!(count(&bytes, b" Tj"), 2);
        assert!(count(&bytes, b"/F1 6 Tf") == 1);
        assert!(count(&bytes, b"/F2 7 Tf") == 1);
    }

    #[test]
    fn winansi_replaces_unknown_characters() {
        assert_eq!(encode_winansi("10µF"), b"10\xB5F");
        assert_eq!(encode_winansi("±5%"), b"\xB15%");
        assert_eq!(encode_winansi("a\u{2192}b"), b"a?b");
        assert_eq!(encode_winansi("\u{2026}"), b"\x85");
    }

    #[test]
    fn greek_uses_the_symbol_encoding() {
        assert_eq!(encode_symbol("\u{03B2}\u{03A9}\u{03BB}"), b"bWl");
        assert_eq!(encode_symbol("x"), b"?");
    }

    #[test]
    fn symbol_runs_select_the_symbol_face() {
        let mut drawing = sample_drawing();
        drawing.texts.push(TextRun {
            origin: Point::new(2.0, 50.0),
            size: 6.0,
            font: Font::Symbol,
            width: 4.0,
            text: "\u{03C9}".to_string(),
        });
        let template = LayoutTemplate::named("EJ_RANGE_24").unwrap();
        let mut paginator = SheetPaginator::new(template.clone(), false);
        paginator.push(cell(template.cell, drawing), 0);

        let bytes = PdfBackend::new()
            .write_sheet(&paginator.finish(), &DocumentInfo::new("Test"))
            .unwrap();
        assert!(count(&bytes, b"/Symbol") >= 1);
        assert_eq!(count(&bytes, b"/F3 6 Tf"), 1);
        assert_eq!(count(&bytes, b"(w) Tj"), 1);
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let template = LayoutTemplate::named("AVERY_L7144").unwrap();
        let mut paginator = SheetPaginator::new(template.clone(), false);
        let broken = Drawing {
            primitives: vec![Primitive::new(
                Shape::Line {
                    from: Point::new(0.0, 0.0),
                    to: Point::new(f64::NAN, 1.0),
                },
                Style::stroked(Color::BLACK, 0.5),
            )],
            texts: Vec::new(),
        };
        paginator.push(cell(template.cell, broken), 0);

        let err = PdfBackend::new()
            .write_sheet(&paginator.finish(), &DocumentInfo::new("Test"))
            .unwrap_err();
        assert!(matches!(err, BackendError::Serialize { page: 1, .. }));
    }

    #[test]
    fn empty_sheet_is_a_single_blank_page() {
        let template = LayoutTemplate::named("AVERY_5260").unwrap();
        let bytes = PdfBackend::new()
            .write_sheet(&SheetPaginator::new(template, false).finish(), &DocumentInfo::new("Empty"))
            .unwrap();
        assert_eq!(count(&bytes, b"/Type /Page") - count(&bytes, b"/Type /Pages"), 1);
    }
}
