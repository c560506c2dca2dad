use super::*;

#[test]
fn complexity_range_is_enforced() {
    assert!(Complexity::new(0).is_err());
    assert!(Complexity::new(11).is_err());
    assert_eq!(Complexity::new(1).unwrap(), Complexity::MIN);
    assert_eq!(Complexity::new(10).unwrap(), Complexity::MAX);
    assert_eq!(Complexity::default().get(), 5);
    assert_eq!(Complexity::all().count(), 10);
}

#[test]
fn complexity_tiers_follow_level_bands() {
    let tiers: Vec<ComplexityTier> = Complexity::all().map(Complexity::tier).collect();
    assert_eq!(&tiers[0..4], &[ComplexityTier::Low; 4]);
    assert_eq!(&tiers[4..8], &[ComplexityTier::Mid; 4]);
    assert_eq!(&tiers[8..10], &[ComplexityTier::High; 2]);
}

#[test]
fn complexity_serde_rejects_out_of_range() {
    let c: Complexity = serde_json::from_value(serde_json::json!(7)).unwrap();
    assert_eq!(c.get(), 7);
    assert!(serde_json::from_value::<Complexity>(serde_json::json!(12)).is_err());
}

#[test]
fn fps_validation() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_secs() - 1.0 / 60.0).abs() < 1e-12);
}

#[test]
fn canvas_rejects_zero_dims() {
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 10,
            height: 10
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn rgb_hex_round_trip_and_short_form() {
    let c = Rgb8::from_hex("#1E293B").unwrap();
    assert_eq!(c, Rgb8::new(0x1e, 0x29, 0x3b));
    assert_eq!(c.to_hex(), "#1e293b");

    assert_eq!(Rgb8::from_hex("f00").unwrap(), Rgb8::new(255, 0, 0));
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#zzzzzz").is_err());

    let parsed: Rgb8 = serde_json::from_value(serde_json::json!("#ffffff")).unwrap();
    assert_eq!(parsed, Rgb8::new(255, 255, 255));
    assert_eq!(
        serde_json::to_value(parsed).unwrap(),
        serde_json::json!("#ffffff")
    );
}
