use serde_json::json;

use super::*;
use crate::foundation::core::Rgb8;
use crate::style::filters::FilterKind;

#[test]
fn empty_document_yields_defaults() {
    let cfg = StudioConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, StudioConfig::default());
    assert_eq!(cfg.default_complexity.get(), 5);
    assert_eq!(cfg.export.canvas.width, 3200);
    assert_eq!(cfg.export.canvas.height, 2400);
    assert_eq!(cfg.reveal.mid_increment, 0.8);
    assert_eq!(cfg.style.stroke_width, 6.0);
    assert_eq!(cfg.style.filter, FilterKind::None);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let doc = json!({
        "default_complexity": 9,
        "style": { "stroke_color": "#ff0000", "filter": "neon" },
        "reveal": { "tick_rate": { "num": 30, "den": 1 } },
        "export": { "file_stem": "Sketch" }
    });
    let cfg = StudioConfig::from_reader(doc.to_string().as_bytes()).unwrap();
    assert_eq!(cfg.default_complexity.get(), 9);
    assert_eq!(cfg.style.stroke_color, Rgb8::new(255, 0, 0));
    assert_eq!(cfg.style.background, Rgb8::new(255, 255, 255));
    assert_eq!(cfg.style.filter, FilterKind::Neon);
    assert_eq!(cfg.reveal.tick_rate.num, 30);
    assert_eq!(cfg.reveal.low_increment, 1.5);
    assert_eq!(cfg.export.file_stem, "Sketch");
    assert_eq!(cfg.export.canvas.width, 3200);
}

#[test]
fn invalid_values_are_rejected() {
    for doc in [
        json!({ "default_complexity": 0 }),
        json!({ "style": { "stroke_width": -1.0 } }),
        json!({ "style": { "filter": "chrome" } }),
        json!({ "export": { "canvas": { "width": 0, "height": 10 } } }),
        json!({ "export": { "file_stem": "a/b" } }),
        json!({ "fallback_dash_length": 0.0 }),
        json!({ "reveal": { "low_increment": 0.1 } }),
    ] {
        let err = StudioConfig::from_reader(doc.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, StudioError::Validation(_)), "{doc}");
    }
}

#[test]
fn from_path_reports_missing_file() {
    let err = StudioConfig::from_path("/nonexistent/lineflow.json").unwrap_err();
    assert!(err.to_string().contains("open studio config"));
}
