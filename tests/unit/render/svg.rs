use super::*;
use crate::foundation::core::Rgb8;
use crate::style::filters::FilterKind;

fn scene<'a>(path: Option<&'a PathArtifact>, style: &'a StyleConfig, progress: f64) -> Scene<'a> {
    Scene {
        path,
        style,
        progress,
        canvas: Canvas {
            width: 3200,
            height: 2400,
        },
        fallback_dash_length: 35_000.0,
    }
}

#[test]
fn complete_reveal_has_no_dash_and_round_joins() {
    let path = PathArtifact::new("M0 0 L1000 1000").unwrap();
    let style = StyleConfig::default();
    let svg = scene(Some(&path), &style, 100.0).to_svg();

    assert!(svg.contains(r#"d="M0 0 L1000 1000""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r#"stroke-linejoin="round""#));
    assert!(svg.contains(r##"stroke="#1e293b""##));
    assert!(svg.contains(r##"fill="#ffffff""##));
    assert!(!svg.contains("stroke-dasharray"));
    assert!(!svg.contains(r#"filter="url"#));
    // 1000-unit square centered in a 4:3 canvas.
    assert!(svg.contains("translate(400.0000 0.0000) scale(2.400000)"));
}

#[test]
fn partial_reveal_uses_measured_length() {
    let path = PathArtifact::new("M0 0 L0 1000").unwrap();
    let style = StyleConfig::default();
    let svg = scene(Some(&path), &style, 25.0).to_svg();
    assert!(svg.contains(r#"stroke-dasharray="1000.000""#));
    assert!(svg.contains(r#"stroke-dashoffset="750.000""#));
}

#[test]
fn unmeasurable_path_falls_back_to_dash_constant() {
    let path = PathArtifact::new("M0 0 L10").unwrap();
    let style = StyleConfig::default();
    let svg = scene(Some(&path), &style, 50.0).to_svg();
    assert!(svg.contains(r#"stroke-dasharray="35000.000""#));
    assert!(svg.contains(r#"stroke-dashoffset="17500.000""#));
}

#[test]
fn zero_progress_and_missing_path_draw_background_only() {
    let path = PathArtifact::new("M0 0 L1 1").unwrap();
    let style = StyleConfig::default();
    assert!(!scene(Some(&path), &style, 0.0).to_svg().contains("<path"));
    assert!(!scene(None, &style, 100.0).to_svg().contains("<path"));
}

#[test]
fn metal_uses_gradient_and_filter() {
    let path = PathArtifact::new("M0 0 L1 1").unwrap();
    let style = StyleConfig {
        filter: FilterKind::Metal,
        stroke_color: Rgb8::new(255, 0, 0),
        ..StyleConfig::default()
    };
    let svg = scene(Some(&path), &style, 100.0).to_svg();
    assert!(svg.contains(r#"stroke="url(#metal-gradient)""#));
    assert!(svg.contains(r#"filter="url(#metal-effect)""#));
    assert!(!svg.contains("#ff0000"));
}

#[test]
fn path_text_is_escaped() {
    let path = PathArtifact::new("M0 0 L1 1 <x&y>").unwrap();
    let style = StyleConfig::default();
    let svg = scene(Some(&path), &style, 100.0).to_svg();
    assert!(svg.contains("&lt;x&amp;y&gt;"));
}

#[test]
fn partial_reveal_with_filter_is_well_formed() {
    let path = PathArtifact::new("M100 500 C300 200 700 800 900 500").unwrap();
    let style = StyleConfig {
        filter: FilterKind::Neon,
        ..StyleConfig::default()
    };
    let svg = scene(Some(&path), &style, 50.0).to_svg();
    assert!(svg.starts_with("<svg ") && svg.ends_with("</svg>"));
    assert!(svg.contains(r#"filter="url(#neon-effect)""#));
    assert!(svg.contains("stroke-dashoffset"));
    assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
}
