use super::*;
use crate::path::artifact::PathArtifact;
use crate::render::svg::Scene;
use crate::style::config::StyleConfig;
use crate::foundation::core::Rgb8;

const SMALL: Canvas = Canvas {
    width: 100,
    height: 100,
};

fn frame_for(progress: f64) -> FrameRGBA {
    let path = PathArtifact::new("M0 500 L1000 500").unwrap();
    let style = StyleConfig {
        stroke_color: Rgb8::new(0, 0, 0),
        background: Rgb8::new(255, 255, 255),
        stroke_width: 40.0,
        ..StyleConfig::default()
    };
    let svg = Scene {
        path: Some(&path),
        style: &style,
        progress,
        canvas: SMALL,
        fallback_dash_length: 35_000.0,
    }
    .to_svg();
    rasterize_svg(&svg, SMALL).unwrap()
}

#[test]
fn background_fills_canvas() {
    let frame = frame_for(100.0);
    assert_eq!(frame.data.len(), 100 * 100 * 4);
    assert_eq!(frame.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(99, 99), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(100, 0), None);
}

#[test]
fn complete_reveal_draws_the_whole_stroke() {
    let frame = frame_for(100.0);
    for x in [10, 50, 90] {
        let [r, g, b, _] = frame.pixel(x, 50).unwrap();
        assert!(r < 32 && g < 32 && b < 32, "x={x} not inked");
    }
}

#[test]
fn partial_reveal_draws_only_the_head() {
    let frame = frame_for(40.0);
    let [r, _, _, _] = frame.pixel(20, 50).unwrap();
    assert!(r < 32);
    assert_eq!(frame.pixel(80, 50), Some([255, 255, 255, 255]));
}

#[test]
fn oversized_and_invalid_input_is_rejected() {
    let huge = Canvas {
        width: 20_000,
        height: 10,
    };
    assert!(rasterize_svg("<svg/>", huge).is_err());
    assert!(rasterize_svg("not svg", SMALL).is_err());
}

#[test]
fn into_rgba_image_demultiplies() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    let img = frame.into_rgba_image().unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [128, 0, 0, 128]);
}
