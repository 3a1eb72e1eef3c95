//! Render Engine: drives a job from component specs to a finished sheet.
//!
//! The layout template is resolved first; a bad template aborts the run
//! before anything is drawn. After that, every label is resolved and
//! composed independently. A label that fails is left off the sheet and
//! reported, and the rest of the batch carries on.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend::{DocumentInfo, SheetBackend};
use crate::config::{JobConfig, RenderOptions};
use crate::device::{ComponentSpec, DeviceResolver};
use crate::error::{ConfigError, LabelError, RenderError};
use crate::geometry::Size;
use crate::layout::{Sheet, SheetPaginator};
use crate::library::Catalog;
use crate::render::{CellCompositor, CellFlags, CellLayout, ComposedCell, TextBlockComposer, TextStyle};

/// A label left off the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLabel {
    /// Position in the job's label list.
    pub index: usize,
    /// Why it was skipped.
    pub error: LabelError,
}

/// A label placed with some of its text cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelWarning {
    /// Position in the job's label list.
    pub index: usize,
    /// Title line of the label.
    pub title: String,
    /// Trailing lines left out.
    pub dropped_lines: usize,
    /// Lines shortened with an ellipsis.
    pub elided_lines: usize,
}

/// Outcome of a render run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    /// The laid-out pages.
    pub sheet: Sheet,
    /// Labels placed on the sheet.
    pub rendered: usize,
    /// Slots left blank on request.
    pub blank: usize,
    /// Labels left off, in input order.
    pub skipped: Vec<SkippedLabel>,
    /// Placed labels with truncated text, in input order.
    pub warnings: Vec<LabelWarning>,
}

impl RenderReport {
    /// Whether every label made it onto the sheet.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    /// A serialisable digest of the run.
    #[must_use]
    pub fn summary(&self) -> RenderSummary {
        RenderSummary {
            layout: self.sheet.template.name.clone(),
            pages: self.sheet.pages.len(),
            rendered: self.rendered,
            blank: self.blank,
            skipped: self
                .skipped
                .iter()
                .map(|s| SkippedSummary {
                    index: s.index,
                    reason: s.error.to_string(),
                })
                .collect(),
            warnings: self.warnings.clone(),
        }
    }
}

/// Run digest printed by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    /// Template name.
    pub layout: String,
    /// Page count.
    pub pages: usize,
    /// Labels placed.
    pub rendered: usize,
    /// Blank slots.
    pub blank: usize,
    /// Labels left off.
    pub skipped: Vec<SkippedSummary>,
    /// Truncation warnings.
    pub warnings: Vec<LabelWarning>,
}

/// A skipped label in a [`RenderSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSummary {
    /// Position in the job's label list.
    pub index: usize,
    /// Error message.
    pub reason: String,
}

/// Runs jobs against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct RenderEngine<'c> {
    catalog: &'c Catalog,
    cell_layout: CellLayout,
    text_style: TextStyle,
}

impl<'c> RenderEngine<'c> {
    /// Creates an engine with the default cell proportions and text style.
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            cell_layout: CellLayout::default(),
            text_style: TextStyle::default(),
        }
    }

    /// Replaces the cell proportions.
    #[must_use]
    pub const fn with_cell_layout(mut self, layout: CellLayout) -> Self {
        self.cell_layout = layout;
        self
    }

    /// Replaces the text style.
    #[must_use]
    pub const fn with_text_style(mut self, style: TextStyle) -> Self {
        self.text_style = style;
        self
    }

    /// Lays out every label of `job`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the layout template is unknown or does
    /// not fit its page. Per-label failures are reported in the result.
    pub fn render(&self, job: &JobConfig) -> Result<RenderReport, ConfigError> {
        let template = job.layout.template()?;
        let cell_size = template.cell;
        info!(
            layout = %template.name,
            labels = job.labels.len(),
            "Rendering sheet"
        );

        let compositor = CellCompositor::new(
            self.cell_layout,
            TextBlockComposer::new(self.text_style),
            cell_flags(job.options),
        );
        let resolver = DeviceResolver::new(self.catalog);
        let mut paginator = SheetPaginator::new(template, job.options.draw_outlines);

        let mut rendered = 0;
        let mut blank = 0;
        let mut skipped = Vec::new();
        let mut warnings = Vec::new();

        for (index, entry) in job.labels.iter().enumerate() {
            let Some(spec) = entry else {
                debug!(label = index, "Blank slot");
                paginator.skip_slot();
                blank += 1;
                continue;
            };

            match compose_label(&resolver, &compositor, spec, cell_size) {
                Ok((title, cell)) => {
                    if cell.is_truncated() {
                        warn!(
                            label = index,
                            title = %title,
                            dropped = cell.dropped_lines,
                            elided = cell.elided_lines,
                            "Label text truncated"
                        );
                        warnings.push(LabelWarning {
                            index,
                            title,
                            dropped_lines: cell.dropped_lines,
                            elided_lines: cell.elided_lines,
                        });
                    }
                    paginator.push(cell, index);
                    rendered += 1;
                }
                Err(error) => {
                    warn!(label = index, %error, "Skipping label");
                    skipped.push(SkippedLabel { index, error });
                }
            }
        }

        let sheet = paginator.finish();
        info!(
            pages = sheet.pages.len(),
            rendered,
            skipped = skipped.len(),
            "Sheet laid out"
        );

        Ok(RenderReport {
            sheet,
            rendered,
            blank,
            skipped,
            warnings,
        })
    }

    /// Lays out `job` and serialises the sheet with `backend`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] for a bad layout and
    /// [`RenderError::Backend`] when the document cannot be produced.
    pub fn render_to<B: SheetBackend + ?Sized>(
        &self,
        job: &JobConfig,
        backend: &B,
    ) -> Result<(RenderReport, Vec<u8>), RenderError> {
        let report = self.render(job)?;
        let bytes = backend.write_sheet(&report.sheet, &DocumentInfo::new(job.title.clone()))?;
        Ok((report, bytes))
    }
}

fn cell_flags(options: RenderOptions) -> CellFlags {
    let mut flags = CellFlags::empty();
    flags.set(CellFlags::DRAW_OUTLINES, options.draw_outlines);
    flags.set(CellFlags::OUTLINE_PACKAGES, options.outline_packages);
    flags.set(CellFlags::PIN_LABELS, options.pin_labels);
    flags
}

fn compose_label(
    resolver: &DeviceResolver<'_>,
    compositor: &CellCompositor,
    spec: &ComponentSpec,
    cell_size: Size,
) -> Result<(String, ComposedCell), LabelError> {
    let label = resolver.resolve(spec)?;
    let cell = compositor.compose(&label, cell_size)?;
    Ok((label.title().to_string(), cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PdfBackend;
    use crate::error::ResolveError;

    fn resistor(ohms: f64) -> Option<ComponentSpec> {
        Some(ComponentSpec::new("resistor").with_ohms(ohms))
    }

    #[test]
    fn failing_labels_are_skipped_and_reported() {
        let catalog = Catalog::builtin();
        let job = JobConfig::new(vec![
            resistor(4700.0),
            Some(
                ComponentSpec::new("diode")
                    .with_part_number("1N4148")
                    .with_package("DO-999"),
            ),
            Some(ComponentSpec::new("relay").with_part_number("G5V")),
            resistor(100.0),
        ]);

        let report = RenderEngine::new(&catalog).render(&job).unwrap();
        assert_eq!(report.rendered, 2);
        assert!(!report.is_complete());
        let indices: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, [1, 2]);
        assert!(matches!(
            report.skipped[0].error,
            LabelError::Resolve(ResolveError::UnknownPackage { .. })
        ));

        let cells = &report.sheet.pages[0].cells;
        assert_eq!(cells[0].label_index, 0);
        assert_eq!(cells[1].label_index, 3);
        // skipped labels do not hold a slot
        assert_eq!(cells[1].slot, 1);
    }

    #[test]
    fn blank_entries_hold_a_slot() {
        let catalog = Catalog::builtin();
        let job = JobConfig::new(vec![None, None, resistor(10.0)]);
        let report = RenderEngine::new(&catalog).render(&job).unwrap();
        assert_eq!(report.blank, 2);
        assert_eq!(report.sheet.pages[0].cells[0].slot, 2);
    }

    #[test]
    fn bad_layout_aborts_before_rendering() {
        let catalog = Catalog::builtin();
        let mut job = JobConfig::new(vec![resistor(10.0)]);
        job.layout = crate::config::LayoutSelector::Named("AVERY_0000".to_string());
        assert!(matches!(
            RenderEngine::new(&catalog).render(&job),
            Err(ConfigError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn outlines_option_adds_slot_guides() {
        let catalog = Catalog::builtin();
        let mut job = JobConfig::new(vec![resistor(47.0)]);
        let plain = RenderEngine::new(&catalog).render(&job).unwrap();
        assert!(plain.sheet.pages[0].guides.is_empty());

        job.options.draw_outlines = true;
        let guided = RenderEngine::new(&catalog).render(&job).unwrap();
        assert_eq!(guided.sheet.pages[0].guides.len(), 65);
    }

    #[test]
    fn tiny_text_style_overflows_every_label() {
        let catalog = Catalog::builtin();
        let style = TextStyle {
            base_size: 200.0,
            min_size: 200.0,
            step: 0.5,
            leading: 1.2,
        };
        let job = JobConfig::new(vec![resistor(4700.0)]);
        let report = RenderEngine::new(&catalog)
            .with_text_style(style)
            .render(&job)
            .unwrap();
        assert_eq!(report.rendered, 0);
        assert!(matches!(
            report.skipped[0].error,
            LabelError::TextOverflow { .. }
        ));
    }

    #[test]
    fn summary_lists_reasons() {
        let catalog = Catalog::builtin();
        let job = JobConfig::new(vec![Some(ComponentSpec::new("relay"))]);
        let summary = RenderEngine::new(&catalog).render(&job).unwrap().summary();
        assert_eq!(summary.layout, "AVERY_L7144");
        assert_eq!(summary.pages, 1);
        assert_eq!(summary.skipped[0].reason, "unknown component kind: relay");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["skipped"][0]["index"], 0);
    }

    #[test]
    fn render_to_produces_a_document() {
        let catalog = Catalog::builtin();
        let job = JobConfig::new(vec![resistor(220.0)]);
        let (report, bytes) = RenderEngine::new(&catalog)
            .render_to(&job, &PdfBackend::new())
            .unwrap();
        assert_eq!(report.rendered, 1);
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
