use super::*;

#[test]
fn names_parse_back() {
    for kind in FilterKind::ALL {
        assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!("NEON".parse::<FilterKind>().unwrap(), FilterKind::Neon);
    assert!("chrome".parse::<FilterKind>().is_err());
}

#[test]
fn serde_uses_lowercase_names() {
    let k: FilterKind = serde_json::from_value(serde_json::json!("emboss")).unwrap();
    assert_eq!(k, FilterKind::Emboss);
    assert_eq!(
        serde_json::to_value(FilterKind::None).unwrap(),
        serde_json::json!("none")
    );
}

#[test]
fn every_effect_has_a_recipe() {
    for kind in FilterKind::ALL.into_iter().skip(1) {
        let id = format!("id=\"{}-effect\"", kind.name());
        assert!(FILTER_DEFS.contains(&id), "missing recipe for {kind}");
    }
    assert!(!FILTER_DEFS.contains("none-effect"));
    assert!(METAL_GRADIENT_DEF.contains(METAL_GRADIENT_ID));
}

#[test]
fn recipes_parse_as_svg() {
    let doc = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><defs>{FILTER_DEFS}{METAL_GRADIENT_DEF}</defs></svg>"#
    );
    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default());
    assert!(tree.is_ok());
}
