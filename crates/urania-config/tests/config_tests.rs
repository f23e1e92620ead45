use std::path::Path;
use urania::aspects::AspectKind;
use urania::{Body, ChartSettings, EphemerisTier, PolarPolicy};
use urania_config::{load_chart_settings, parse_chart_settings};

#[test]
fn test_full_chart_section() {
    let settings = parse_chart_settings(
        r#"
[chart]
house_system = "koch"
bodies = ["sun", "Moon", "north_node"]
polar_policy = "strict"
ephemeris = ["mean_motion"]
include_minor_aspects = true
"#,
    )
    .unwrap();

    assert_eq!(settings.house_system, "koch");
    assert_eq!(settings.bodies, vec![Body::Sun, Body::Moon, Body::NorthNode]);
    assert_eq!(settings.polar_policy, PolarPolicy::Strict);
    assert_eq!(settings.ephemeris, vec![EphemerisTier::MeanMotion]);
    assert_eq!(settings.aspects.definitions().len(), 10);
}

#[test]
fn test_partial_section_keeps_defaults() {
    let settings = parse_chart_settings("[chart]\nhouse_system = \"equal\"\n").unwrap();
    let defaults = ChartSettings::default();
    assert_eq!(settings.house_system, "equal");
    assert_eq!(settings.bodies, defaults.bodies);
    assert_eq!(settings.ephemeris, defaults.ephemeris);
    assert_eq!(settings.aspects, defaults.aspects);
}

#[test]
fn test_aspect_table_replaces_defaults() {
    let settings = parse_chart_settings(
        r#"
[[aspects]]
name = "quincunx"
orb = 2.5

[[aspects]]
name = "trine"
angle = 120.0
orb = 9.0
"#,
    )
    .unwrap();

    let kinds: Vec<AspectKind> = settings
        .aspects
        .definitions()
        .iter()
        .map(|d| d.kind)
        .collect();
    // Majors are moved ahead of minors
    assert_eq!(kinds, vec![AspectKind::Trine, AspectKind::Quincunx]);
}

#[test]
fn test_unknown_house_system_is_kept_for_the_engine() {
    // Resolution (and the warning) happens at chart time
    let settings = parse_chart_settings("[chart]\nhouse_system = \"topocentric\"\n").unwrap();
    assert_eq!(settings.house_system, "topocentric");
}

#[test]
fn test_invalid_values_are_rejected() {
    let cases = [
        "[chart]\nbodies = [\"chiron\"]\n",
        "[chart]\npolar_policy = \"lenient\"\n",
        "[chart]\nephemeris = [\"vsop87\"]\n",
        "[chart]\nephemeris = []\n",
        "[chart]\nhouse_sytem = \"equal\"\n",
        "[[aspects]]\nname = \"biquintile\"\norb = 1.0\n",
        "[[aspects]]\nname = \"trine\"\norb = -2.0\n",
        "[[aspects]]\nname = \"trine\"\nangle = 200.0\norb = 2.0\n",
        "not toml at all = = =",
    ];
    for text in cases {
        assert!(parse_chart_settings(text).is_err(), "accepted: {}", text);
    }
}

#[test]
fn test_error_mentions_the_bad_key() {
    let err = parse_chart_settings("[chart]\nbodies = [\"sun\", \"chiron\"]\n").unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("chart.bodies"), "{}", message);
    assert!(message.contains("chiron"), "{}", message);
}

#[test]
fn test_sample_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/chart.toml");
    let settings = load_chart_settings(Some(&path)).unwrap();
    assert_eq!(settings.house_system, "placidus");
    assert_eq!(settings.bodies.len(), 12);
    assert_eq!(settings.polar_policy, PolarPolicy::FallbackToEqual);
}

#[test]
fn test_missing_file() {
    let err = load_chart_settings(Some(Path::new("/nonexistent/chart.toml"))).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/chart.toml"));
}
