use lattica::{GridConfig, GridErrorKind, HexAxial};
use validator::Validate;

#[test]
fn test_config_validation() {
    let config = GridConfig {
        max_coordinate: 0,         // invalid (empty bounding range)
        max_region_radius: 20_000, // invalid (too big)
    };

    let validation_errors = config.validate().unwrap_err();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["max_coordinate", "max_region_radius"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );

    // The crate surface folds the same failure into a matchable kind
    let error = config.check().unwrap_err();
    assert_eq!(error.kind(), GridErrorKind::DegenerateInput);
}

#[test]
fn test_custom_config_drives_validity() {
    let config = GridConfig {
        max_coordinate: 5,
        ..GridConfig::default()
    };
    assert!(config.check().is_ok());

    let inside = HexAxial::new(5, -5);
    let outside = HexAxial::new(6, 0);
    assert!(inside.is_valid_in(&config));
    assert!(!outside.is_valid_in(&config));
    // The same coordinate is fine under the default bounds
    assert!(outside.is_valid());
}
