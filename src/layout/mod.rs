//! Sheet layout templates.
//!
//! A [`LayoutTemplate`] describes the label grid printed on one page. All
//! built-in templates are stored in points; custom templates in the job
//! document are written in millimetres and converted on load.

pub mod paginator;

pub use paginator::{Page, PlacedCell, Sheet, SheetPaginator};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::{inch, mm, Point, Rect, Size};

/// Slack allowed when checking that the grid fits on the page, in points.
const FIT_TOLERANCE: f64 = 1e-6;

/// Most labels a page grid may hold.
pub const MAX_SLOTS_PER_PAGE: usize = 1000;

/// Identifiers of the built-in templates.
pub const BUILTIN_TEMPLATES: [&str; 4] = ["AVERY_5260", "AVERY_L7157", "AVERY_L7144", "EJ_RANGE_24"];

/// Page grid for one label stock, in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTemplate {
    /// Template identifier.
    pub name: String,
    /// Page size.
    pub page: Size,
    /// Label size.
    pub cell: Size,
    /// Left edge of the first column.
    pub margin_left: f64,
    /// Top edge of the first row.
    pub margin_top: f64,
    /// Horizontal gap between columns.
    pub gutter_x: f64,
    /// Vertical gap between rows.
    pub gutter_y: f64,
    /// Labels per row.
    pub columns: usize,
    /// Rows per page.
    pub rows: usize,
    /// Corner radius of the die-cut labels.
    pub corner_radius: f64,
}

fn letter() -> Size {
    Size::new(inch(8.5), inch(11.0))
}

fn a4() -> Size {
    Size::new(mm(210.0), mm(297.0))
}

impl LayoutTemplate {
    /// Looks up a built-in template, ignoring case and separators.
    #[must_use]
    pub fn builtin(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_uppercase)
            .collect();

        let template = match key.as_str() {
            "AVERY5260" => Self {
                name: "AVERY_5260".to_string(),
                page: letter(),
                cell: Size::new(inch(2.625), inch(1.0)),
                margin_left: inch(0.1875),
                margin_top: inch(0.5),
                gutter_x: inch(0.125),
                gutter_y: 0.0,
                columns: 3,
                rows: 10,
                corner_radius: inch(0.1),
            },
            "AVERYL7157" => Self {
                name: "AVERY_L7157".to_string(),
                page: a4(),
                cell: Size::new(mm(64.0), mm(24.3)),
                margin_left: mm(6.4),
                margin_top: mm(14.1),
                gutter_x: mm(2.552),
                gutter_y: 0.0,
                columns: 3,
                rows: 11,
                corner_radius: mm(3.0),
            },
            "AVERYL7144" => Self {
                name: "AVERY_L7144".to_string(),
                page: a4(),
                cell: Size::new(mm(38.1), mm(21.2)),
                margin_left: mm(4.4),
                margin_top: mm(11.4),
                gutter_x: mm(2.4),
                gutter_y: 0.0,
                columns: 5,
                rows: 13,
                corner_radius: mm(3.0),
            },
            "EJRANGE24" => Self {
                name: "EJ_RANGE_24".to_string(),
                page: a4(),
                cell: Size::new(mm(63.5), mm(33.9)),
                margin_left: mm(6.5),
                margin_top: mm(13.2),
                gutter_x: mm(2.95),
                gutter_y: 0.0,
                columns: 3,
                rows: 8,
                corner_radius: mm(2.0),
            },
            _ => return None,
        };
        Some(template)
    }

    /// Looks up a built-in template and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLayout`] for an unknown identifier.
    pub fn named(name: &str) -> Result<Self, ConfigError> {
        let template = Self::builtin(name).ok_or_else(|| ConfigError::UnknownLayout {
            name: name.to_string(),
        })?;
        template.validate()?;
        Ok(template)
    }

    /// Labels per page.
    #[must_use]
    pub const fn slots_per_page(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Top-left corner of the slot at `index` on its page, row-major.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // grid indices are small
    pub fn slot_origin(&self, index: usize) -> Point {
        let per_page = self.slots_per_page().max(1);
        let slot = index % per_page;
        let columns = self.columns.max(1);
        let (row, column) = (slot / columns, slot % columns);
        Point::new(
            (self.cell.width + self.gutter_x).mul_add(column as f64, self.margin_left),
            (self.cell.height + self.gutter_y).mul_add(row as f64, self.margin_top),
        )
    }

    /// The slot at `index` on its page.
    #[must_use]
    pub fn slot_rect(&self, index: usize) -> Rect {
        let origin = self.slot_origin(index);
        Rect::new(origin.x, origin.y, self.cell.width, self.cell.height)
    }

    /// Checks the template against the physical page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] naming the first violated
    /// constraint.
    #[allow(clippy::cast_precision_loss)] // grid counts are small
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidLayout {
            name: self.name.clone(),
            message,
        };

        let dimensions = [
            ("page width", self.page.width),
            ("page height", self.page.height),
            ("cell width", self.cell.width),
            ("cell height", self.cell.height),
        ];
        for (what, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{what} must be positive, got {value}")));
            }
        }

        let offsets = [
            ("left margin", self.margin_left),
            ("top margin", self.margin_top),
            ("horizontal gutter", self.gutter_x),
            ("vertical gutter", self.gutter_y),
            ("corner radius", self.corner_radius),
        ];
        for (what, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!("{what} must not be negative, got {value}")));
            }
        }

        if self.columns == 0 || self.rows == 0 {
            return Err(invalid(format!(
                "grid must have at least one row and column, got {}x{}",
                self.columns, self.rows
            )));
        }

        let slots = self.columns.checked_mul(self.rows);
        if !slots.is_some_and(|n| n <= MAX_SLOTS_PER_PAGE) {
            return Err(invalid(format!(
                "grid of {}x{} exceeds {MAX_SLOTS_PER_PAGE} labels per page",
                self.columns, self.rows
            )));
        }

        let used_w = (self.columns - 1) as f64 * self.gutter_x
            + self.columns as f64 * self.cell.width
            + self.margin_left;
        if used_w > self.page.width + FIT_TOLERANCE {
            return Err(invalid(format!(
                "{} columns need {used_w:.2} pt but the page is {:.2} pt wide",
                self.columns, self.page.width
            )));
        }

        let used_h = (self.rows - 1) as f64 * self.gutter_y
            + self.rows as f64 * self.cell.height
            + self.margin_top;
        if used_h > self.page.height + FIT_TOLERANCE {
            return Err(invalid(format!(
                "{} rows need {used_h:.2} pt but the page is {:.2} pt tall",
                self.rows, self.page.height
            )));
        }

        Ok(())
    }
}

/// A template written inline in the job document, in millimetres.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CustomTemplate {
    /// Identifier used in messages.
    #[serde(default = "default_custom_name")]
    pub name: String,
    /// Page width.
    pub page_width: f64,
    /// Page height.
    pub page_height: f64,
    /// Label width.
    pub cell_width: f64,
    /// Label height.
    pub cell_height: f64,
    /// Left edge of the first column.
    pub margin_left: f64,
    /// Top edge of the first row.
    pub margin_top: f64,
    /// Gap between columns.
    #[serde(default)]
    pub gutter_x: f64,
    /// Gap between rows.
    #[serde(default)]
    pub gutter_y: f64,
    /// Labels per row.
    pub columns: usize,
    /// Rows per page.
    pub rows: usize,
    /// Label corner radius.
    #[serde(default)]
    pub corner_radius: f64,
}

fn default_custom_name() -> String {
    "CUSTOM".to_string()
}

impl CustomTemplate {
    /// Converts to a validated template in points.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] when the grid does not fit.
    pub fn to_template(&self) -> Result<LayoutTemplate, ConfigError> {
        let template = LayoutTemplate {
            name: self.name.clone(),
            page: Size::new(mm(self.page_width), mm(self.page_height)),
            cell: Size::new(mm(self.cell_width), mm(self.cell_height)),
            margin_left: mm(self.margin_left),
            margin_top: mm(self.margin_top),
            gutter_x: mm(self.gutter_x),
            gutter_y: mm(self.gutter_y),
            columns: self.columns,
            rows: self.rows,
            corner_radius: mm(self.corner_radius),
        };
        template.validate()?;
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_template_is_valid() {
        for name in BUILTIN_TEMPLATES {
            let template = LayoutTemplate::named(name).unwrap();
            assert_eq!(template.name, name);
            let last = template.slot_rect(template.slots_per_page() - 1);
            assert!(Rect::from_size(template.page).contains_rect(&last, 1e-6));
        }
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(LayoutTemplate::builtin("avery-5260").unwrap().name, "AVERY_5260");
        assert_eq!(LayoutTemplate::builtin("ej range 24").unwrap().rows, 8);
        assert!(matches!(
            LayoutTemplate::named("AVERY_0000"),
            Err(ConfigError::UnknownLayout { .. })
        ));
    }

    #[test]
    fn slots_fill_row_major() {
        let template = LayoutTemplate::named("AVERY_5260").unwrap();
        let first = template.slot_origin(0);
        let second = template.slot_origin(1);
        let fourth = template.slot_origin(3);
        assert!((first.x - 13.5).abs() < 1e-9);
        assert!((first.y - 36.0).abs() < 1e-9);
        assert!((second.x - first.x - inch(2.75)).abs() < 1e-9);
        assert!((second.y - first.y).abs() < 1e-9);
        assert!((fourth.x - first.x).abs() < 1e-9);
        assert!((fourth.y - first.y - inch(1.0)).abs() < 1e-9);
        // the grid restarts on the next page
        assert_eq!(template.slot_origin(30), first);
    }

    #[test]
    fn grid_wider_than_the_page_is_rejected() {
        let custom = CustomTemplate {
            name: "WIDE".to_string(),
            page_width: 210.0,
            page_height: 297.0,
            cell_width: 70.0,
            cell_height: 30.0,
            margin_left: 5.0,
            margin_top: 5.0,
            gutter_x: 2.0,
            gutter_y: 0.0,
            columns: 3,
            rows: 9,
            corner_radius: 0.0,
        };
        let err = custom.to_template().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLayout { .. }));
        assert!(err.to_string().contains("columns"));
    }

    #[test]
    fn degenerate_templates_are_rejected() {
        let mut template = LayoutTemplate::named("AVERY_L7144").unwrap();
        template.rows = 0;
        assert!(template.validate().is_err());

        let mut template = LayoutTemplate::named("AVERY_L7144").unwrap();
        template.cell.height = -1.0;
        assert!(template.validate().is_err());

        let mut template = LayoutTemplate::named("AVERY_L7144").unwrap();
        template.gutter_x = f64::NAN;
        assert!(template.validate().is_err());
    }

    #[test]
    fn oversized_grids_are_rejected() {
        let mut template = LayoutTemplate::named("AVERY_L7144").unwrap();
        template.cell = Size::new(1e-6, 1e-6);
        template.gutter_x = 0.0;
        template.gutter_y = 0.0;

        template.columns = usize::MAX / 2;
        template.rows = 3;
        assert!(matches!(
            template.validate(),
            Err(ConfigError::InvalidLayout { .. })
        ));
        assert_eq!(template.slots_per_page(), usize::MAX);

        template.columns = 100;
        template.rows = 11;
        let err = template.validate().unwrap_err();
        assert!(err.to_string().contains("1000"), "{err}");

        template.rows = 10;
        assert!(template.validate().is_ok());
    }

    #[test]
    fn custom_template_converts_millimetres() {
        let json = r#"{"page_width": 210, "page_height": 297, "cell_width": 100,
                       "cell_height": 40, "margin_left": 5, "margin_top": 10,
                       "gutter_x": 0, "columns": 2, "rows": 7}"#;
        let custom: CustomTemplate = serde_json::from_str(json).unwrap();
        let template = custom.to_template().unwrap();
        assert_eq!(template.name, "CUSTOM");
        assert!((template.cell.width - mm(100.0)).abs() < 1e-9);
        assert_eq!(template.slots_per_page(), 14);
    }
}
