//! Text Block Composer and font metrics.
//!
//! Lines are set top-aligned and left-aligned with uniform leading. When the
//! block does not fit, the font shrinks step by step down to a floor; at the
//! floor, trailing lines are dropped and over-wide lines are elided. The fit
//! loop runs at most [`MAX_FIT_STEPS`] times and always reaches the floor
//! within that budget.
//!
//! Lines after the title are read as [markup](super::markup): scripts are
//! measured at their reduced size and offset baseline.

use super::markup::{collect_spans, parse_line, Script, Span};
use crate::geometry::{Font, Point, Rect, TextRun};

/// Upper bound on font-size reductions per block.
pub const MAX_FIT_STEPS: usize = 16;

const ELLIPSIS: char = '\u{2026}';

/// Tolerance for fit comparisons, in points.
const FIT_TOLERANCE: f64 = 1e-9;

/// Sizes and spacing for a text block, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Starting font size.
    pub base_size: f64,
    /// Smallest size the block may shrink to.
    pub min_size: f64,
    /// Reduction per fit step. Widened when the floor is more than
    /// [`MAX_FIT_STEPS`] steps away.
    pub step: f64,
    /// Baseline-to-baseline distance as a multiple of the size.
    pub leading: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            base_size: 7.0,
            min_size: 4.0,
            step: 0.5,
            leading: 1.2,
        }
    }
}

impl TextStyle {
    /// Size reduction per fit step, large enough to reach the floor within
    /// [`MAX_FIT_STEPS`] steps.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // small constant
    pub fn effective_step(&self) -> f64 {
        let span = (self.base_size - self.min_size).max(0.0);
        self.step.max(span / MAX_FIT_STEPS as f64)
    }
}

/// A laid-out text block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FittedText {
    /// Placed runs in line order; a marked-up line yields one run per span.
    pub runs: Vec<TextRun>,
    /// Font size of the lines.
    pub size: f64,
    /// How many times the size was reduced.
    pub reductions: usize,
    /// Lines placed.
    pub placed_lines: usize,
    /// Trailing lines left out.
    pub dropped_lines: usize,
    /// Lines shortened with an ellipsis.
    pub elided_lines: usize,
}

impl FittedText {
    /// Whether the first line could not be placed.
    #[must_use]
    pub const fn overflowed(&self, line_count: usize) -> bool {
        line_count > 0 && self.placed_lines == 0
    }

    /// Whether anything was dropped or shortened.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        self.dropped_lines > 0 || self.elided_lines > 0
    }
}

/// One input line split into spans.
#[derive(Debug)]
struct MarkedLine {
    spans: Vec<Span>,
    font: Font,
    /// Ink above and below the baseline, in units of the line size.
    ascent: f64,
    descent: f64,
}

impl MarkedLine {
    fn new(line: &str, title: bool) -> Self {
        let font = if title { Font::Bold } else { Font::Regular };
        let spans = parse_line(line.trim_end(), font, !title);
        let (ascent, descent) = extent(&spans);
        Self {
            spans,
            font,
            ascent,
            descent,
        }
    }

    fn width(&self, size: f64) -> f64 {
        spans_width(&self.spans, size)
    }
}

/// Vertical extent of a line, never less than a plain line.
fn extent(spans: &[Span]) -> (f64, f64) {
    spans
        .iter()
        .map(|s| s.script)
        .chain(std::iter::once(Script::Normal))
        .fold((0.0, 0.0), |(up, down), script| {
            (f64::max(up, script.ascent()), f64::max(down, script.descent()))
        })
}

/// Distance from the block top to the first baseline, and the block height.
#[allow(clippy::cast_precision_loss)] // line counts are tiny
fn block_extent(lines: &[MarkedLine], size: f64, leading: f64) -> (f64, f64) {
    let top = lines
        .iter()
        .enumerate()
        .map(|(i, l)| (l.ascent - i as f64 * leading) * size)
        .fold(0.0, f64::max);
    let bottom = lines
        .iter()
        .enumerate()
        .map(|(i, l)| top + (i as f64 * leading + l.descent) * size)
        .fold(0.0, f64::max);
    (top, bottom)
}

/// Lays out label lines in a region.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBlockComposer {
    style: TextStyle,
}

impl TextBlockComposer {
    /// Creates a composer with `style`.
    #[must_use]
    pub const fn new(style: TextStyle) -> Self {
        Self { style }
    }

    /// The style in use.
    #[must_use]
    pub const fn style(&self) -> &TextStyle {
        &self.style
    }

    /// Lays out `lines` in `region`. The first line is set bold and shown
    /// as written; the rest are read as markup.
    #[must_use]
    pub fn compose(&self, lines: &[String], region: Rect) -> FittedText {
        let style = &self.style;
        if lines.is_empty() || !region.size().is_positive() {
            return FittedText {
                size: style.base_size,
                dropped_lines: lines.len(),
                ..FittedText::default()
            };
        }

        let marked: Vec<MarkedLine> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| MarkedLine::new(l, i == 0))
            .collect();

        let step = style.effective_step();
        let mut size = style.base_size.max(style.min_size);
        let mut reductions = 0;
        for n in 1..=MAX_FIT_STEPS {
            let tall = block_extent(&marked, size, style.leading).1 > region.height + FIT_TOLERANCE;
            let wide = marked.iter().map(|l| l.width(size)).fold(0.0, f64::max)
                > region.width + FIT_TOLERANCE;
            if !(tall || wide) || size <= style.min_size {
                break;
            }
            size = if n == MAX_FIT_STEPS {
                style.min_size
            } else {
                (size - step).max(style.min_size)
            };
            reductions = n;
        }

        let visible = (1..=marked.len())
            .take_while(|&k| {
                block_extent(&marked[..k], size, style.leading).1 <= region.height + FIT_TOLERANCE
            })
            .last()
            .unwrap_or(0);
        let (top, _) = block_extent(&marked[..visible], size, style.leading);
        let line_h = size * style.leading;
        let mut runs = Vec::with_capacity(visible);
        let mut placed_lines = 0;
        let mut elided_lines = 0;

        for (i, line) in marked.iter().take(visible).enumerate() {
            let Some((spans, elided)) = fit_width(&line.spans, line.font, size, region.width) else {
                break;
            };
            elided_lines += usize::from(elided);
            #[allow(clippy::cast_precision_loss)] // line index
            let baseline = region.y + top + i as f64 * line_h;
            let mut x = region.x;
            for span in spans {
                let span_size = size * span.script.scale();
                let width = text_width(&span.text, span.font, span_size);
                runs.push(TextRun {
                    origin: Point::new(x, size.mul_add(span.script.shift(), baseline)),
                    size: span_size,
                    font: span.font,
                    width,
                    text: span.text,
                });
                x += width;
            }
            placed_lines += 1;
        }

        FittedText {
            dropped_lines: lines.len() - placed_lines,
            runs,
            size,
            reductions,
            placed_lines,
            elided_lines,
        }
    }
}

fn spans_width(spans: &[Span], size: f64) -> f64 {
    spans
        .iter()
        .map(|s| text_width(&s.text, s.font, size * s.script.scale()))
        .sum()
}

/// The spans as they are, or shortened with an ellipsis; `None` when not
/// even the ellipsis fits.
fn fit_width(spans: &[Span], font: Font, size: f64, width: f64) -> Option<(Vec<Span>, bool)> {
    if spans_width(spans, size) <= width + FIT_TOLERANCE {
        return Some((spans.to_vec(), false));
    }

    let mut chars: Vec<(char, Font, Script)> = spans
        .iter()
        .flat_map(|s| s.text.chars().map(move |c| (c, s.font, s.script)))
        .collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = collect_spans(
            chars
                .iter()
                .copied()
                .chain(std::iter::once((ELLIPSIS, font, Script::Normal))),
        );
        if spans_width(&candidate, size) <= width + FIT_TOLERANCE {
            return Some((candidate, true));
        }
    }
    None
}

/// Advance width of `text` in points.
#[must_use]
pub fn text_width(text: &str, font: Font, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, font))).sum();
    f64::from(units) * size / 1000.0
}

/// Helvetica advance width in 1/1000 em.
#[must_use]
pub fn char_width(c: char, font: Font) -> u16 {
    let regular = helvetica_width(c);
    match font {
        Font::Regular => regular,
        Font::Bold => HELVETICA_BOLD
            .iter()
            .find(|(ch, _)| *ch == c)
            .map_or(regular, |(_, w)| *w),
        Font::Symbol => SYMBOL_GREEK
            .iter()
            .find(|(ch, _)| *ch == c)
            .map_or(regular, |(_, w)| *w),
    }
}

/// Symbol-face widths of the Greek letters labels use.
const SYMBOL_GREEK: [(char, u16); 24] = [
    ('\u{0391}', 722), ('\u{0392}', 667), ('\u{0393}', 603), ('\u{0394}', 612),
    ('\u{0398}', 741), ('\u{039B}', 686), ('\u{03A0}', 768), ('\u{03A3}', 592),
    ('\u{03A6}', 763), ('\u{03A9}', 768), ('\u{03B1}', 631), ('\u{03B2}', 549),
    ('\u{03B3}', 411), ('\u{03B4}', 494), ('\u{03B5}', 439), ('\u{03B8}', 521),
    ('\u{03BB}', 549), ('\u{03BC}', 576), ('\u{03C0}', 549), ('\u{03C1}', 549),
    ('\u{03C3}', 603), ('\u{03C4}', 439), ('\u{03C6}', 521), ('\u{03C9}', 686),
];

/// Widths for the printable ASCII range, starting at the space.
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // sp to /
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // : to @
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [ to `
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // { to ~
];

/// Bold glyphs whose width differs from the regular face.
const HELVETICA_BOLD: [(char, u16); 40] = [
    ('!', 333), ('"', 474), ('&', 722), ('\'', 238), (':', 333), (';', 333),
    ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('E', 667), ('J', 556),
    ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('P', 667), ('R', 722),
    ('[', 333), (']', 333), ('^', 584), ('a', 556), ('b', 611), ('c', 556),
    ('d', 611), ('f', 333), ('g', 611), ('h', 611), ('i', 278), ('j', 278),
    ('k', 556), ('l', 278), ('m', 889), ('n', 611), ('o', 611), ('p', 611),
    ('q', 611), ('r', 389), ('u', 611), ('v', 556),
];

fn helvetica_width(c: char) -> u16 {
    let code = u32::from(c);
    if (32..127).contains(&code) {
        return HELVETICA_ASCII[(code - 32) as usize];
    }
    match c {
        '\u{2026}' | '\u{2030}' => 1000,
        '\u{00B1}' | '\u{00D7}' => 584,
        '\u{00B0}' => 400,
        '\u{00B5}' => 556,
        '\u{2013}' => 556,
        '\u{2014}' => 1000,
        _ => 556,
    }
}
