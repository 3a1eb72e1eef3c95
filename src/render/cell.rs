//! Cell Compositor: splits a label cell into symbol, package and text
//! regions and fills each one.

use bitflags::bitflags;
use tracing::debug;

use super::guide_frame;
use super::package::{render_package, PackageFlags, PackageMarks};
use super::symbol::render_symbol;
use super::text::TextBlockComposer;
use crate::device::Label;
use crate::error::LabelError;
use crate::geometry::{Drawing, Rect, Size};

bitflags! {
    /// Sheet-wide drawing options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Frame cells and sub-regions for print alignment.
        const DRAW_OUTLINES = 1;
        /// Draw package bodies as outlines only.
        const OUTLINE_PACKAGES = 1 << 1;
        /// Name package leads.
        const PIN_LABELS = 1 << 2;
    }
}

/// Fixed proportions of a cell, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    /// Share of the long axis given to the symbol.
    pub symbol_share: f64,
    /// Share of the long axis given to the package.
    pub package_share: f64,
    /// Inset from the cell edge.
    pub margin: f64,
    /// Inset inside each sub-region.
    pub padding: f64,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            symbol_share: 0.3,
            package_share: 0.3,
            margin: 2.5,
            padding: 1.5,
        }
    }
}

/// The three sub-regions of a cell, in cell-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRegions {
    /// Symbol box.
    pub symbol: Rect,
    /// Package box.
    pub package: Rect,
    /// Text box.
    pub text: Rect,
}

impl CellRegions {
    /// The regions in painting order.
    #[must_use]
    pub const fn all(&self) -> [Rect; 3] {
        [self.symbol, self.package, self.text]
    }
}

impl CellLayout {
    /// Splits a cell of `size` left-to-right when it is wider than tall,
    /// top-to-bottom otherwise. The text gets whatever the symbol and
    /// package leave.
    #[must_use]
    pub fn regions(&self, size: Size) -> CellRegions {
        let content = Rect::from_size(size).inset(self.margin);
        let symbol_share = self.symbol_share.clamp(0.0, 1.0);
        let package_share = self.package_share.clamp(0.0, 1.0 - symbol_share);

        let [symbol, package, text] = if content.width >= content.height {
            let a = content.width * symbol_share;
            let b = content.width * package_share;
            [
                Rect::new(content.x, content.y, a, content.height),
                Rect::new(content.x + a, content.y, b, content.height),
                Rect::new(content.x + a + b, content.y, content.width - a - b, content.height),
            ]
        } else {
            let a = content.height * symbol_share;
            let b = content.height * package_share;
            [
                Rect::new(content.x, content.y, content.width, a),
                Rect::new(content.x, content.y + a, content.width, b),
                Rect::new(content.x, content.y + a + b, content.width, content.height - a - b),
            ]
        };

        CellRegions {
            symbol: symbol.inset(self.padding),
            package: package.inset(self.padding),
            text: text.inset(self.padding),
        }
    }
}

/// One composed label, in cell-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedCell {
    /// Cell size.
    pub size: Size,
    /// Where each part went.
    pub regions: CellRegions,
    /// Everything to paint.
    pub drawing: Drawing,
    /// Font size the text block settled on.
    pub font_size: f64,
    /// Trailing text lines that did not fit.
    pub dropped_lines: usize,
    /// Text lines shortened with an ellipsis.
    pub elided_lines: usize,
}

impl ComposedCell {
    /// Whether any text was dropped or shortened.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.dropped_lines > 0 || self.elided_lines > 0
    }
}

/// Composes labels into cells of one fixed size.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellCompositor {
    layout: CellLayout,
    text: TextBlockComposer,
    flags: CellFlags,
}

impl CellCompositor {
    /// Creates a compositor.
    #[must_use]
    pub const fn new(layout: CellLayout, text: TextBlockComposer, flags: CellFlags) -> Self {
        Self {
            layout,
            text,
            flags,
        }
    }

    /// The sheet-wide flags.
    #[must_use]
    pub const fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Composes `label` into a cell of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`LabelError::TextOverflow`] when not even the title line
    /// fits the text region at the smallest font size.
    pub fn compose(&self, label: &Label<'_>, size: Size) -> Result<ComposedCell, LabelError> {
        let regions = self.layout.regions(size);
        let fitted = self.text.compose(&label.lines, regions.text);
        if fitted.overflowed(label.lines.len()) {
            return Err(LabelError::TextOverflow {
                dropped_lines: fitted.dropped_lines,
            });
        }

        let outlines = self.flags.contains(CellFlags::DRAW_OUTLINES);
        let mut package_flags = PackageFlags::empty();
        package_flags.set(
            PackageFlags::OUTLINE_ONLY,
            self.flags.contains(CellFlags::OUTLINE_PACKAGES),
        );
        package_flags.set(PackageFlags::POLARITY_MARK, label.shows_polarity());
        package_flags.set(PackageFlags::COLOUR_BANDS, label.bands.is_some());
        package_flags.set(PackageFlags::GUIDE, outlines);
        package_flags.set(
            PackageFlags::PIN_LABELS,
            self.flags.contains(CellFlags::PIN_LABELS) && !label.pins.is_empty(),
        );

        let mut drawing = Drawing::new();
        drawing
            .primitives
            .extend(render_symbol(label.symbol, regions.symbol, outlines));
        let package = render_package(
            label.package,
            &label.variant,
            regions.package,
            package_flags,
            PackageMarks {
                bands: label.bands.as_deref().unwrap_or_default(),
                pins: &label.pins,
            },
        );
        drawing.primitives.extend(package.primitives);
        if outlines {
            drawing.primitives.extend(guide_frame(regions.text));
        }

        if fitted.reductions > 0 {
            debug!(
                title = label.title(),
                size = fitted.size,
                reductions = fitted.reductions,
                "Reduced label font size"
            );
        }

        drawing.texts = fitted.runs;
        drawing.texts.extend(package.texts);
        Ok(ComposedCell {
            size,
            regions,
            drawing,
            font_size: fitted.size,
            dropped_lines: fitted.dropped_lines,
            elided_lines: fitted.elided_lines,
        })
    }
}
