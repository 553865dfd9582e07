use selkie::{Config, EngineOptions, Error, FlowPasses};
use serde_json::json;

#[test]
fn empty_config_yields_defaults() {
    let options = EngineOptions::from_config(&Config::default()).unwrap();
    assert_eq!(options, EngineOptions::default());
    assert!(options.flow.eager_marking);
    assert_eq!(options.flow.passes, FlowPasses::Single);
    assert_eq!(options.bundle.spacing, 0.3);
}

#[test]
fn reads_every_known_key() {
    let config = Config::from_value(json!({
        "flow": { "eagerMarking": false, "passes": "untilStable" },
        "bundle": { "spacing": 0.5, "curveTension": 0.25, "deflate": 0.0 },
        "unrelated": { "ignored": true }
    }));
    let options = EngineOptions::from_config(&config).unwrap();
    assert!(!options.flow.eager_marking);
    assert_eq!(options.flow.passes, FlowPasses::UntilStable { max_passes: 16 });
    assert_eq!(options.bundle.spacing, 0.5);
    assert_eq!(options.bundle.curve_tension, 0.25);
    assert_eq!(options.bundle.deflate, 0.0);
}

#[test]
fn wrong_types_are_rejected() {
    for bad in [
        json!({ "flow": { "eagerMarking": "yes" } }),
        json!({ "flow": { "passes": "forever" } }),
        json!({ "flow": { "maxPasses": 0 } }),
        json!({ "flow": { "maxPasses": -2 } }),
        json!({ "bundle": { "spacing": "wide" } }),
    ] {
        let result = EngineOptions::from_config(&Config::from_value(bad.clone()));
        assert!(
            matches!(result, Err(Error::Config { .. })),
            "{bad} was accepted"
        );
    }
}

#[test]
fn parses_json_text() {
    let config = Config::from_json_str(r#"{"bundle": {"spacing": 1}}"#).unwrap();
    assert_eq!(config.get("bundle.spacing"), Some(&json!(1)));
    assert!(matches!(
        Config::from_json_str("[1, 2]"),
        Err(Error::Config { .. })
    ));
    assert!(matches!(
        Config::from_json_str("{"),
        Err(Error::Config { .. })
    ));
}

#[test]
fn bundle_spacing_must_be_positive() {
    for spacing in [json!(0), json!(-0.3)] {
        let config = Config::from_value(json!({ "bundle": { "spacing": spacing } }));
        let err = EngineOptions::from_config(&config).unwrap_err();
        assert!(
            err.to_string().contains("`bundle.spacing` must be positive"),
            "{err}"
        );
    }

    // Zero stays valid for the curve knobs.
    let config = Config::from_value(json!({ "bundle": { "curveTension": 0, "deflate": 0 } }));
    let options = EngineOptions::from_config(&config).unwrap();
    assert_eq!(options.bundle.curve_tension, 0.0);
}
