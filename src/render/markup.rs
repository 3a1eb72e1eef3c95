//! Inline markup for label lines.
//!
//! - `V_br`, `h_fe`: the alphanumeric run after `_` is a subscript
//! - `10^-3`, `m^2`: the run after `^` (with an optional sign) is a superscript
//! - `lambda`, `mu`, `Omega`: Greek names become glyphs when they stand alone
//!
//! Greek letters, typed or named, are set in the Symbol face; `mu` maps to
//! the micro sign, which Helvetica carries.

use crate::geometry::{Font, ASCENT, DESCENT};

/// Size of a sub- or superscript relative to the line.
pub const SCRIPT_SCALE: f64 = 0.7;

/// Subscript baseline drop, as a fraction of the script size.
const SUB_DROP: f64 = 0.35;

/// Superscript baseline rise, as a fraction of the script size.
const SUPER_RISE: f64 = 0.6;

const MICRO: char = '\u{00B5}';

/// Greek names recognised in marked-up lines.
const GREEK_NAMES: [(&str, char); 18] = [
    ("alpha", '\u{03B1}'),
    ("beta", '\u{03B2}'),
    ("gamma", '\u{03B3}'),
    ("delta", '\u{03B4}'),
    ("epsilon", '\u{03B5}'),
    ("theta", '\u{03B8}'),
    ("lambda", '\u{03BB}'),
    ("mu", MICRO),
    ("pi", '\u{03C0}'),
    ("rho", '\u{03C1}'),
    ("sigma", '\u{03C3}'),
    ("tau", '\u{03C4}'),
    ("phi", '\u{03C6}'),
    ("psi", '\u{03C8}'),
    ("omega", '\u{03C9}'),
    ("Delta", '\u{0394}'),
    ("Sigma", '\u{03A3}'),
    ("Omega", '\u{03A9}'),
];

/// Vertical placement of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// On the line baseline at full size.
    #[default]
    Normal,
    /// Lowered and reduced.
    Sub,
    /// Raised and reduced.
    Super,
}

impl Script {
    /// Size multiplier.
    #[must_use]
    pub const fn scale(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Sub | Self::Super => SCRIPT_SCALE,
        }
    }

    /// Baseline offset in y-down units of the line size.
    #[must_use]
    pub fn shift(self) -> f64 {
        match self {
            Self::Normal => 0.0,
            Self::Sub => SUB_DROP * SCRIPT_SCALE,
            Self::Super => -SUPER_RISE * SCRIPT_SCALE,
        }
    }

    /// Ink above the line baseline, in units of the line size.
    #[must_use]
    pub fn ascent(self) -> f64 {
        ASCENT * self.scale() - self.shift()
    }

    /// Ink below the line baseline, in units of the line size.
    #[must_use]
    pub fn descent(self) -> f64 {
        DESCENT * self.scale() + self.shift()
    }
}

/// A piece of a line sharing one face and placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    /// Face; Greek glyphs are always [`Font::Symbol`].
    pub font: Font,
    pub script: Script,
}

/// Splits `line` into spans set in `font`.
///
/// With `markup` off only typed Greek letters are split out; the title line
/// is a part number and is shown as written.
#[must_use]
pub fn parse_line(line: &str, font: Font, markup: bool) -> Vec<Span> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = SpanBuilder::default();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if markup {
            if let Some(script) = script_marker(c) {
                let run = script_run(&chars[i + 1..]);
                if run > 0 {
                    for &s in &chars[i + 1..=i + run] {
                        spans.push(s, font, script);
                    }
                    i += run + 1;
                    continue;
                }
            }
            if let Some((len, glyph)) = greek_name_at(&chars, i) {
                spans.push(glyph, font, Script::Normal);
                i += len;
                continue;
            }
        }
        spans.push(c, font, Script::Normal);
        i += 1;
    }
    spans.finish()
}

/// The characters of `spans` in order.
#[must_use]
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

const fn script_marker(c: char) -> Option<Script> {
    match c {
        '_' => Some(Script::Sub),
        '^' => Some(Script::Super),
        _ => None,
    }
}

/// Length of the script body: an optional sign then alphanumerics.
fn script_run(rest: &[char]) -> usize {
    let sign = usize::from(matches!(rest.first(), Some('-' | '+')));
    let body = rest[sign..]
        .iter()
        .take_while(|c| c.is_alphanumeric())
        .count();
    if body == 0 {
        0
    } else {
        sign + body
    }
}

/// A Greek name starting at `i` that is not part of a longer word.
fn greek_name_at(chars: &[char], i: usize) -> Option<(usize, char)> {
    if i > 0 && chars[i - 1].is_ascii_alphabetic() {
        return None;
    }
    GREEK_NAMES.iter().find_map(|(name, glyph)| {
        let len = name.chars().count();
        let candidate = chars.get(i..i + len)?;
        let matches = candidate.iter().copied().eq(name.chars());
        let open_after = !chars.get(i + len).is_some_and(char::is_ascii_lowercase);
        (matches && open_after).then_some((len, *glyph))
    })
}

/// Whether `c` is drawn from the Symbol face.
#[must_use]
pub const fn is_greek(c: char) -> bool {
    matches!(c, '\u{0391}'..='\u{03A9}' | '\u{03B1}'..='\u{03C9}')
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<Span>,
}

impl SpanBuilder {
    fn push(&mut self, c: char, font: Font, script: Script) {
        let (c, font) = match c {
            '\u{03BC}' => (MICRO, font),
            '\u{2126}' => ('\u{03A9}', Font::Symbol),
            c if is_greek(c) => (c, Font::Symbol),
            c => (c, font),
        };
        match self.spans.last_mut() {
            Some(last) if last.font == font && last.script == script => last.text.push(c),
            _ => self.spans.push(Span {
                text: c.to_string(),
                font,
                script,
            }),
        }
    }

    fn finish(self) -> Vec<Span> {
        self.spans
    }
}

/// Rebuilds spans from styled characters, merging neighbours.
pub(crate) fn collect_spans(chars: impl IntoIterator<Item = (char, Font, Script)>) -> Vec<Span> {
    let mut spans = SpanBuilder::default();
    for (c, font, script) in chars {
        spans.push(c, font, script);
    }
    spans.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<(&str, Font, Script)> {
        spans.iter().map(|s| (s.text.as_str(), s.font, s.script)).collect()
    }

    #[test]
    fn subscripts_take_the_alphanumeric_run() {
        let spans = parse_line("V_br: 100V", Font::Regular, true);
        assert_eq!(
            texts(&spans),
            [
                ("V", Font::Regular, Script::Normal),
                ("br", Font::Regular, Script::Sub),
                (": 100V", Font::Regular, Script::Normal),
            ]
        );
    }

    #[test]
    fn superscripts_keep_their_sign() {
        let spans = parse_line("10^-3 m^2", Font::Regular, true);
        assert_eq!(
            texts(&spans),
            [
                ("10", Font::Regular, Script::Normal),
                ("-3", Font::Regular, Script::Super),
                (" m", Font::Regular, Script::Normal),
                ("2", Font::Regular, Script::Super),
            ]
        );
    }

    #[test]
    fn bare_markers_stay_literal() {
        assert_eq!(plain_text(&parse_line("a_ b^", Font::Regular, true)), "a_ b^");
        assert_eq!(parse_line("a_ b^", Font::Regular, true).len(), 1);
    }

    #[test]
    fn greek_names_become_glyphs() {
        let spans = parse_line("lambda: 940nm", Font::Regular, true);
        assert_eq!(spans[0].text, "\u{03BB}");
        assert_eq!(spans[0].font, Font::Symbol);
        assert_eq!(spans[1].text, ": 940nm");

        assert_eq!(plain_text(&parse_line("10muA", Font::Regular, true)), "10\u{00B5}A");
        assert_eq!(plain_text(&parse_line("R 47Omega", Font::Regular, true)), "R 47\u{03A9}");
    }

    #[test]
    fn greek_names_inside_words_are_left_alone() {
        for word in ["alphanumeric", "mute", "Vmu", "spin"] {
            assert_eq!(plain_text(&parse_line(word, Font::Regular, true)), word);
        }
    }

    #[test]
    fn titles_are_not_marked_up() {
        let spans = parse_line("BC_547^B", Font::Bold, false);
        assert_eq!(texts(&spans), [("BC_547^B", Font::Bold, Script::Normal)]);
    }

    #[test]
    fn typed_greek_uses_the_symbol_face() {
        let spans = parse_line("10k\u{2126} \u{03BC}A \u{03B2}", Font::Regular, false);
        assert_eq!(
            texts(&spans),
            [
                ("10k", Font::Regular, Script::Normal),
                ("\u{03A9}", Font::Symbol, Script::Normal),
                (" \u{00B5}A ", Font::Regular, Script::Normal),
                ("\u{03B2}", Font::Symbol, Script::Normal),
            ]
        );
    }

    #[test]
    fn script_extents() {
        assert!((Script::Normal.ascent() - ASCENT).abs() < 1e-12);
        assert!(Script::Super.ascent() > ASCENT);
        assert!(Script::Sub.descent() > DESCENT);
        assert!(Script::Super.descent() < DESCENT);
    }
}
