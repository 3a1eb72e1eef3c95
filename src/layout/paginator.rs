//! Sheet Paginator: places composed cells on a page grid.
//!
//! Slots are filled row-major, left to right and top to bottom. A new page
//! starts when the grid is full. Placement depends only on the order of
//! calls, so the same sequence always lands in the same slots.

use tracing::debug;

use super::LayoutTemplate;
use crate::geometry::{Color, Drawing, Point, Primitive, Shape, Size, Style};
use crate::render::{ComposedCell, GUIDE_STROKE};

/// A composed cell at its absolute page position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    /// Index of the label in the job's label list.
    pub label_index: usize,
    /// Slot on the page, row-major.
    pub slot: usize,
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub column: usize,
    /// Top-left corner on the page.
    pub origin: Point,
    /// The cell content, in cell-local coordinates.
    pub cell: ComposedCell,
}

impl PlacedCell {
    /// The cell content in page coordinates.
    #[must_use]
    pub fn drawing(&self) -> Drawing {
        self.cell.drawing.translate(self.origin.x, self.origin.y)
    }
}

/// One printed page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// One-based page number.
    pub number: usize,
    /// Placed cells in placement order.
    pub cells: Vec<PlacedCell>,
    /// Slot outlines, when alignment guides are on.
    pub guides: Vec<Primitive>,
}

impl Page {
    /// Everything on the page in page coordinates, guides first.
    #[must_use]
    pub fn drawing(&self) -> Drawing {
        let mut drawing = Drawing {
            primitives: self.guides.clone(),
            texts: Vec::new(),
        };
        for placed in &self.cells {
            let cell = placed.drawing();
            drawing.primitives.extend(cell.primitives);
            drawing.texts.extend(cell.texts);
        }
        drawing
    }
}

/// The finished document geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Template the pages were laid out with.
    pub template: LayoutTemplate,
    /// Pages in print order; never empty.
    pub pages: Vec<Page>,
}

impl Sheet {
    /// Page size shared by every page.
    #[must_use]
    pub const fn page_size(&self) -> Size {
        self.template.page
    }

    /// Number of placed cells across all pages.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.pages.iter().map(|p| p.cells.len()).sum()
    }
}

/// Incrementally fills pages from a template.
#[derive(Debug)]
pub struct SheetPaginator {
    template: LayoutTemplate,
    guides: bool,
    pages: Vec<Page>,
    next_slot: usize,
}

impl SheetPaginator {
    /// Starts an empty sheet. With `guides`, every page carries the outline
    /// of each grid slot.
    #[must_use]
    pub const fn new(template: LayoutTemplate, guides: bool) -> Self {
        Self {
            template,
            guides,
            pages: Vec::new(),
            next_slot: 0,
        }
    }

    /// The template in use.
    #[must_use]
    pub const fn template(&self) -> &LayoutTemplate {
        &self.template
    }

    /// Places `cell` in the next free slot.
    pub fn push(&mut self, cell: ComposedCell, label_index: usize) -> &PlacedCell {
        let slot_index = self.next_slot;
        self.next_slot += 1;

        let per_page = self.template.slots_per_page().max(1);
        let page_index = slot_index / per_page;
        self.ensure_pages(page_index + 1);

        let slot = slot_index % per_page;
        let columns = self.template.columns.max(1);
        let placed = PlacedCell {
            label_index,
            slot,
            row: slot / columns,
            column: slot % columns,
            origin: self.template.slot_origin(slot),
            cell,
        };
        debug!(
            label = label_index,
            page = page_index + 1,
            row = placed.row,
            column = placed.column,
            "Placed cell"
        );

        let cells = &mut self.pages[page_index].cells;
        cells.push(placed);
        &cells[cells.len() - 1]
    }

    /// Leaves the next slot empty.
    pub fn skip_slot(&mut self) {
        self.next_slot += 1;
    }

    /// Finishes the sheet. A sheet always has at least one page, and blank
    /// slots before the last placed cell keep their pages.
    #[must_use]
    pub fn finish(mut self) -> Sheet {
        let per_page = self.template.slots_per_page().max(1);
        let used_pages = self.next_slot.div_ceil(per_page).max(1);
        self.ensure_pages(used_pages);
        Sheet {
            template: self.template,
            pages: self.pages,
        }
    }

    fn ensure_pages(&mut self, count: usize) {
        while self.pages.len() < count {
            let number = self.pages.len() + 1;
            let guides = if self.guides { self.slot_guides() } else { Vec::new() };
            self.pages.push(Page {
                number,
                cells: Vec::new(),
                guides,
            });
        }
    }

    fn slot_guides(&self) -> Vec<Primitive> {
        let template = &self.template;
        (0..template.slots_per_page())
            .map(|slot| {
                let rect = template.slot_rect(slot);
                let inset = GUIDE_STROKE / 2.0;
                Primitive::new(
                    Shape::Rect {
                        rect: rect.inset(inset),
                        corner_radius: (template.corner_radius - inset).max(0.0),
                    },
                    Style::stroked(Color::GUIDE, GUIDE_STROKE),
                )
            })
            .collect()
    }
}
