// Host-side tests for config defaults and string overrides.

use spider_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_positive() {
    assert!(AREA_PER_PARTICLE > 0.0);
    assert!(CONNECT_DISTANCE_SQ > 0.0);
    assert!(POINTER_RADIUS > 0.0);
    assert!(MIN_ALPHA > 0.0 && MIN_ALPHA <= 1.0);
    assert!(MAX_SPEED > 0.0);
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.area_per_particle, 7500.0);
    assert_eq!(cfg.connect_distance_sq, 20_000.0);
    assert_eq!(cfg.pointer_radius, 150.0);
    assert_eq!(cfg.line_width, 1.0);
    assert_eq!(cfg.rgb, [150, 150, 150]);
    assert_eq!(cfg.strategy, ConnectionStrategy::AllPairs);
}

#[test]
fn overrides_replace_values() {
    let (cfg, errors) = FieldConfig::from_overrides([
        ("pointer-radius", "200"),
        ("connect-distance-sq", " 10000 "),
        ("strategy", "Grid"),
    ]);
    assert!(errors.is_empty());
    assert_eq!(cfg.pointer_radius, 200.0);
    assert_eq!(cfg.connect_distance_sq, 10_000.0);
    assert_eq!(cfg.strategy, ConnectionStrategy::Grid);
}

#[test]
fn bad_overrides_are_reported_and_skipped() {
    let (cfg, errors) = FieldConfig::from_overrides([
        ("pointer-radius", "wide"),
        ("area-per-particle", "0"),
        ("line-width", "NaN"),
        ("colour", "red"),
        ("strategy", "quadtree"),
        ("max-speed", "0.5"),
    ]);
    assert_eq!(
        errors[0],
        ConfigError::InvalidNumber {
            key: "pointer-radius".into(),
            value: "wide".into()
        }
    );
    assert!(matches!(errors[1], ConfigError::NotPositive { .. }));
    assert!(matches!(errors[2], ConfigError::NotPositive { .. }));
    assert_eq!(errors[3], ConfigError::UnknownKey("colour".into()));
    assert_eq!(errors[4], ConfigError::UnknownStrategy("quadtree".into()));
    assert_eq!(errors.len(), 5);
    assert_eq!(cfg.pointer_radius, POINTER_RADIUS);
    assert_eq!(cfg.area_per_particle, AREA_PER_PARTICLE);
    assert_eq!(cfg.max_speed, 0.5);
}

#[test]
fn errors_render_readable_messages() {
    let e = ConfigError::UnknownKey("colour".into());
    assert_eq!(e.to_string(), "unknown config key `colour`");
}

#[test]
fn every_listed_key_is_accepted() {
    let mut cfg = FieldConfig::default();
    for key in FieldConfig::OVERRIDE_KEYS {
        let value = if key == "strategy" { "auto" } else { "3" };
        assert_eq!(cfg.apply_override(key, value), Ok(()), "key {key}");
    }
    assert_eq!(cfg.strategy, ConnectionStrategy::Auto);
    assert_eq!(cfg.area_per_particle, 3.0);
}
