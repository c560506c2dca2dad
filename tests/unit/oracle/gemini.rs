use super::*;

#[test]
fn prompt_names_the_level_and_coordinate_space() {
    let p = complexity_prompt(Complexity::new(7).unwrap());
    assert!(p.contains("Level 7 out of 10"));
    assert!(p.contains("Coordinate system: 0 to 1000."));
    assert!(p.contains("Use 'M' only once"));
}

#[test]
fn request_body_carries_image_and_sampling() {
    let image = SourceImage::with_mime(b"abc".to_vec(), "image/png").unwrap();
    let body = request_body(&OracleConfig::default(), &image, Complexity::new(2).unwrap());

    assert_eq!(
        body.pointer("/contents/0/parts/0/inlineData/mimeType"),
        Some(&json!("image/png"))
    );
    assert_eq!(
        body.pointer("/contents/0/parts/0/inlineData/data"),
        Some(&json!("YWJj"))
    );
    let text = body
        .pointer("/contents/0/parts/1/text")
        .and_then(Value::as_str)
        .unwrap();
    assert!(text.contains("Level 2 out of 10"));
    assert_eq!(body.pointer("/generationConfig/temperature"), Some(&json!(0.2)));
    assert_eq!(body.pointer("/generationConfig/topP"), Some(&json!(0.8)));
}

#[test]
fn extract_text_joins_parts() {
    let payload = json!({
        "candidates": [{
            "content": { "parts": [ { "text": "M0 0 " }, { "text": "L10 10\n" } ] }
        }]
    });
    assert_eq!(extract_text(&payload).unwrap(), "M0 0 L10 10");
}

#[test]
fn extract_text_reports_missing_or_blocked_output() {
    let empty = json!({ "candidates": [] });
    assert!(matches!(
        extract_text(&empty).unwrap_err(),
        StudioError::Synthesis(_)
    ));

    let blank = json!({ "candidates": [{ "content": { "parts": [ { "text": "  " } ] } }] });
    assert!(matches!(
        extract_text(&blank).unwrap_err(),
        StudioError::Synthesis(_)
    ));

    let blocked = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
    let err = extract_text(&blocked).unwrap_err();
    assert!(err.to_string().contains("SAFETY"));
}

#[test]
fn config_validation_and_url() {
    assert!(OracleConfig::default().validate().is_ok());
    let bad = OracleConfig {
        top_p: 1.5,
        ..OracleConfig::default()
    };
    assert!(bad.validate().is_err());

    let oracle = GeminiOracle::new(
        OracleConfig {
            endpoint: "http://localhost:9/v1beta/".to_owned(),
            ..OracleConfig::default()
        },
        "key",
    )
    .unwrap();
    assert_eq!(
        oracle.url(),
        "http://localhost:9/v1beta/models/gemini-3-flash-preview:generateContent"
    );
}

#[test]
fn unreachable_service_is_a_transport_failure() {
    let oracle = GeminiOracle::new(
        OracleConfig {
            endpoint: "http://127.0.0.1:9".to_owned(),
            timeout_secs: 2,
            ..OracleConfig::default()
        },
        "key",
    )
    .unwrap();
    let image = SourceImage::with_mime(b"abc".to_vec(), "image/png").unwrap();
    let err = oracle.generate(&image, Complexity::DEFAULT).unwrap_err();
    assert!(matches!(err, StudioError::Transport(_)));
}
