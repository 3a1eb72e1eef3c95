//! End-to-end tests: job document to laid-out sheet and PDF bytes.

use std::path::Path;

use parts_labels::config::parse_job;
use parts_labels::error::{ConfigError, LabelError, ResolveError};
use parts_labels::geometry::Rect;
use parts_labels::render::{TextBlockComposer, TextStyle};
use parts_labels::{Catalog, DeviceResolver, JobConfig, PdfBackend, RenderEngine, SheetBackend};

fn job(json: &str) -> JobConfig {
    parse_job(json, Path::new("test.json")).expect("job should parse")
}

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(ToString::to_string).collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn resistor_value_is_shown_with_si_prefix() {
    let job = job(r#"{"labels": [{"kind": "resistor", "value_ohms": 4700}]}"#);
    let spec = job.labels[0].as_ref().unwrap();

    let catalog = Catalog::builtin();
    let label = DeviceResolver::new(&catalog).resolve(spec).unwrap();
    assert_eq!(label.lines[0], "4.7k");
    assert_eq!(label.package.id, "0207");

    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.rendered, 1);
}

#[test]
fn unknown_package_skips_only_that_label() {
    let job = job(
        r#"{"labels": [
            {"kind": "resistor", "value_ohms": 100},
            {"kind": "diode", "part_number": "1N4148", "package": "DO-999"},
            {"kind": "diode", "part_number": "1N4148", "package": "DO-35"}
        ]}"#,
    );
    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();

    assert_eq!(report.rendered, 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(
        report.skipped[0].error,
        LabelError::Resolve(ResolveError::UnknownPackage {
            package: "DO-999".to_string()
        })
    );
    let placed: Vec<usize> = report.sheet.pages[0]
        .cells
        .iter()
        .map(|c| c.label_index)
        .collect();
    assert_eq!(placed, [0, 2]);
}

#[test]
fn diode_in_an_unknown_package_is_an_unknown_package() {
    let job = job(r#"{"labels": [{"kind": "diode", "package": "DO-999"}]}"#);
    let catalog = Catalog::builtin();
    let spec = job.labels[0].as_ref().unwrap();
    assert_eq!(
        DeviceResolver::new(&catalog).resolve(spec).unwrap_err(),
        ResolveError::UnknownPackage {
            package: "DO-999".to_string()
        }
    );

    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert_eq!(report.rendered, 0);
    assert!(matches!(
        report.skipped[0].error,
        LabelError::Resolve(ResolveError::UnknownPackage { .. })
    ));
}

#[test]
fn thirteen_labels_on_a_thirty_up_sheet() {
    let labels: Vec<String> = (0..13)
        .map(|i| format!(r#"{{"kind": "resistor", "value_ohms": {}}}"#, 100 + i))
        .collect();
    let json = format!(r#"{{"layout": "AVERY_5260", "labels": [{}]}}"#, labels.join(","));
    let job = job(&json);

    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert_eq!(report.sheet.pages.len(), 1);

    let template = &report.sheet.template;
    let cells = &report.sheet.pages[0].cells;
    assert_eq!(cells.len(), 13);
    for (i, cell) in cells.iter().enumerate() {
        assert_eq!(cell.slot, i);
        assert_eq!((cell.row, cell.column), (i / 3, i % 3));
        assert_eq!(cell.origin, template.slot_origin(i));
    }
}

#[test]
fn crowded_text_shrinks_before_truncating() {
    let composer = TextBlockComposer::new(TextStyle::default());
    let region = Rect::new(0.0, 0.0, 80.0, 30.0);
    let text = lines(&["1N4007", "vr: 1000V", "if: 1A", "ifsm: 30A", "vf: 1.1V", "trr: 2us"]);

    let fitted = composer.compose(&text, region);
    assert!(fitted.reductions >= 1);
    assert!(fitted.size < TextStyle::default().base_size);
    for run in &fitted.runs {
        assert!(region.contains_rect(&run.bounds(), 1e-9), "{run:?}");
    }
}

// =============================================================================
// Whole-sheet properties
// =============================================================================

#[test]
fn every_text_run_stays_in_its_region() {
    let job = job(
        r#"{"layout": "AVERY_L7144", "labels": [
            {"kind": "diode", "part_number": "1N4007", "package": "DO-41",
             "spec": {"vr": "1000V", "if": "1A", "ifsm": "30A", "vf": "1.1V",
                      "trr": "2us", "note": "general purpose rectifier, glass passivated"}},
            {"kind": "transistor", "subtype": "nmos", "part_number": "IRLZ44N",
             "package": "TO-220-AB", "spec": {"vds": "55V", "id": "47A"}},
            {"kind": "capacitor", "subtype": "electrolytic", "part_number": "EEU-FR1C101",
             "spec": {"c": "100uF", "v": "16V"}}
        ]}"#,
    );
    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert_eq!(report.rendered, 3);

    let mut pin_names = 0;
    for placed in &report.sheet.pages[0].cells {
        let regions = placed.cell.regions;
        for run in &placed.cell.drawing.texts {
            let bounds = run.bounds();
            if regions.package.contains_rect(&bounds, 1e-9) {
                pin_names += 1;
            } else {
                assert!(regions.text.contains_rect(&bounds, 1e-9), "{run:?} outside {regions:?}");
            }
        }
        let cell = Rect::from_size(placed.cell.size);
        for prim in &placed.cell.drawing.primitives {
            assert!(cell.contains_rect(&prim.bounds(), 1e-9));
        }
    }
    assert!(pin_names > 0);
}

#[test]
fn pin_names_follow_the_options_and_overrides() {
    let json = |options: &str| {
        format!(
            r#"{{"layout": "AVERY_L7157", "options": {options}, "labels": [
                {{"kind": "transistor", "part_number": "BC337", "package": "TO-92",
                  "spec": {{"pin_config": "c b e", "vce": "45V"}}}}
            ]}}"#
        )
    };
    let catalog = Catalog::builtin();
    let engine = RenderEngine::new(&catalog);

    let named = engine.render(&job(&json("{}"))).unwrap();
    let cell = &named.sheet.pages[0].cells[0].cell;
    let pins: Vec<&str> = cell
        .drawing
        .texts
        .iter()
        .filter(|t| cell.regions.package.contains_rect(&t.bounds(), 1e-9))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(pins, ["C", "B", "E"]);
    assert!(cell.drawing.texts.iter().all(|t| !t.text.contains("pin_config")));

    let bare = engine.render(&job(&json(r#"{"pin_labels": false}"#))).unwrap();
    let cell = &bare.sheet.pages[0].cells[0].cell;
    assert!(cell
        .drawing
        .texts
        .iter()
        .all(|t| cell.regions.text.contains_rect(&t.bounds(), 1e-9)));
}

#[test]
fn crowded_label_is_reported_as_truncated() {
    let job = job(
        r#"{"layout": "AVERY_L7144", "labels": [
            {"kind": "diode", "part_number": "1N4007",
             "spec": {"a": "1", "b": "2", "c": "3", "d": "4", "e": "5", "f": "6",
                      "g": "7", "h": "8", "i": "9", "j": "10", "k": "11", "l": "12"}}
        ]}"#,
    );
    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert_eq!(report.rendered, 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].title, "1N4007");
    assert!(report.warnings[0].dropped_lines > 0);
}

#[test]
fn blank_entries_leave_holes() {
    let job = job(
        r#"{"layout": "EJ_RANGE_24", "labels": [
            null, null, null,
            {"kind": "diode", "subtype": "led", "part_number": "L-53GD"}
        ]}"#,
    );
    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    let cell = &report.sheet.pages[0].cells[0];
    assert_eq!(report.blank, 3);
    assert_eq!((cell.row, cell.column), (1, 0));
}

#[test]
fn long_batches_spill_onto_more_pages() {
    let labels = vec![r#"{"kind": "resistor", "value_ohms": 1000}"#; 70].join(",");
    let job = job(&format!(r#"{{"layout": "AVERY_L7144", "labels": [{labels}]}}"#));
    let catalog = Catalog::builtin();
    let report = RenderEngine::new(&catalog).render(&job).unwrap();
    assert_eq!(report.sheet.pages.len(), 2);
    assert_eq!(report.sheet.pages[0].cells.len(), 65);
    assert_eq!(report.sheet.pages[1].cells.len(), 5);
}

#[test]
fn rerunning_a_job_gives_identical_bytes() {
    let json = r#"{"title": "Drawer 3", "layout": "AVERY_L7157",
        "options": {"draw_outlines": true},
        "labels": [
            {"kind": "resistor", "value_ohms": 2200000},
            {"kind": "diode", "subtype": "zener", "part_number": "BZX79C5V1",
             "package": "DO-35@glass", "spec": {"vz": "5.1V", "pd": "500mW"}},
            {"kind": "capacitor", "part_number": "K104", "spec": {"c": "100nF"}},
            {"kind": "active", "part_number": "NE555", "role": "timer"}
        ]}"#;
    let catalog = Catalog::builtin();
    let engine = RenderEngine::new(&catalog);
    let backend = PdfBackend::new();

    let (first_report, first) = engine.render_to(&job(json), &backend).unwrap();
    let (second_report, second) = engine.render_to(&job(json), &backend).unwrap();
    assert_eq!(first_report, second_report);
    assert_eq!(first, second);
    assert!(first.starts_with(b"%PDF-"));
}

#[test]
fn backend_trait_objects_work() {
    let job = job(r#"{"labels": [{"kind": "resistor", "value_ohms": 10}]}"#);
    let catalog = Catalog::builtin();
    let backend: Box<dyn SheetBackend> = Box::new(PdfBackend::new());
    let (_, bytes) = RenderEngine::new(&catalog)
        .render_to(&job, backend.as_ref())
        .unwrap();
    assert!(!bytes.is_empty());
}

// =============================================================================
// Fatal errors
// =============================================================================

#[test]
fn unknown_layout_is_fatal() {
    let err = parse_job(
        r#"{"layout": "AVERY_9999", "labels": []}"#,
        Path::new("test.json"),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLayout { .. }));
}

#[test]
fn oversized_custom_layout_is_fatal() {
    let err = parse_job(
        r#"{"layout": {"page_width": 100, "page_height": 100, "cell_width": 60,
                        "cell_height": 20, "margin_left": 5, "margin_top": 5,
                        "columns": 2, "rows": 3},
            "labels": []}"#,
        Path::new("test.json"),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLayout { .. }));
}

#[test]
fn malformed_document_is_fatal() {
    let err = parse_job(r#"{"labels": {"kind": "resistor"}}"#, Path::new("test.json")).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
