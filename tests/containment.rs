//! Property tests: rendered geometry stays inside its box.
//!
//! Every catalog symbol and package, scaled into an arbitrary box, must keep
//! all of its ink (stroke included) inside that box, pin names included.
//! Cell sub-regions must stay inside the cell and never overlap.

use parts_labels::device::ResistorValue;
use parts_labels::geometry::{Primitive, Rect, Size, TextRun};
use parts_labels::library::{Catalog, PackageVariant};
use parts_labels::render::{
    render_package, render_symbol, CellLayout, PackageFlags, PackageMarks,
};
use proptest::prelude::*;

// ===================
// Strategies
// ===================

fn box_strategy() -> impl Strategy<Value = Rect> {
    (-500.0f64..500.0, -500.0f64..500.0, 0.5f64..400.0, 0.5f64..400.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn cell_strategy() -> impl Strategy<Value = Size> {
    (0.5f64..600.0, 0.5f64..600.0).prop_map(|(w, h)| Size::new(w, h))
}

fn flags_strategy() -> impl Strategy<Value = PackageFlags> {
    (0u8..32).prop_map(PackageFlags::from_bits_truncate)
}

// ===================
// Property Test Functions
// ===================

/// Tolerance scaled to the box, for accumulated floating-point error.
fn tolerance(target: Rect) -> f64 {
    1e-9 * (1.0 + target.x.abs().max(target.y.abs()) + target.width.max(target.height))
}

fn check_inside(target: Rect, prims: &[Primitive], what: &str) -> Result<(), TestCaseError> {
    for prim in prims {
        prop_assert!(
            target.contains_rect(&prim.bounds(), tolerance(target)),
            "{} draws {:?} outside {:?}",
            what,
            prim.bounds(),
            target
        );
    }
    Ok(())
}

fn check_texts_inside(target: Rect, texts: &[TextRun], what: &str) -> Result<(), TestCaseError> {
    for (i, run) in texts.iter().enumerate() {
        prop_assert!(
            target.contains_rect(&run.bounds(), tolerance(target)),
            "{} sets {:?} outside {:?}",
            what,
            run,
            target
        );
        for other in &texts[i + 1..] {
            prop_assert!(!run.bounds().overlaps(&other.bounds()), "{} names collide", what);
        }
    }
    Ok(())
}

/// Every symbol stays inside the box, with or without its guide frame.
fn check_symbols_contained(target: Rect, outline: bool) -> Result<(), TestCaseError> {
    for symbol in Catalog::shared().symbols() {
        let prims = render_symbol(symbol, target, outline);
        prop_assert!(!prims.is_empty());
        check_inside(target, &prims, &format!("{:?}", symbol.id))?;
    }
    Ok(())
}

/// Every package stays inside the box for every flag combination.
fn check_packages_contained(target: Rect, flags: PackageFlags) -> Result<(), TestCaseError> {
    let catalog = Catalog::shared();
    let bands = ResistorValue::from_ohms(4700.0)
        .ok()
        .and_then(|v| v.colour_bands())
        .unwrap_or_default();
    let variant = PackageVariant::default();
    for package in catalog.packages() {
        let pins: Vec<String> = (1..=package.pin_count())
            .map(|n| if n == 1 { "T1".to_string() } else { n.to_string() })
            .collect();
        let marks = PackageMarks {
            bands: &bands,
            pins: &pins,
        };
        let drawing = render_package(package, &variant, target, flags, marks);
        prop_assert!(!drawing.primitives.is_empty());
        check_inside(target, &drawing.primitives, &package.id)?;
        check_texts_inside(target, &drawing.texts, &package.id)?;
    }
    Ok(())
}

/// Sub-regions are inside the cell and pairwise disjoint.
fn check_regions(size: Size) -> Result<(), TestCaseError> {
    let cell = Rect::from_size(size);
    let regions = CellLayout::default().regions(size);
    let all = regions.all();
    for (i, a) in all.iter().enumerate() {
        prop_assert!(cell.contains_rect(a, 1e-9), "{:?} outside {:?}", a, cell);
        for b in &all[i + 1..] {
            prop_assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn symbols_stay_in_their_box(target in box_strategy(), outline in any::<bool>()) {
        check_symbols_contained(target, outline)?;
    }

    #[test]
    fn packages_stay_in_their_box(target in box_strategy(), flags in flags_strategy()) {
        check_packages_contained(target, flags)?;
    }

    #[test]
    fn cell_regions_never_overlap(size in cell_strategy()) {
        check_regions(size)?;
    }
}
