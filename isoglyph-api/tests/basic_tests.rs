//! Basic tests for isoglyph-api

use isoglyph_api::{scan_text, Config, ConfigBuilder, Input, IsomorphScanner};

#[test]
fn scans_through_the_dto_layer() {
    let config = ConfigBuilder::default()
        .min_length(3)
        .max_length(5)
        .min_significance(2)
        .build()
        .unwrap();
    let scanner = IsomorphScanner::with_config(config).unwrap();

    let output = scanner.scan_text("aababxaabab").unwrap();
    assert_eq!(output.isomorphs.len(), 1);

    let isomorph = &output.isomorphs[0];
    assert_eq!(isomorph.canonical, "AABAB");
    assert_eq!(isomorph.length, 5);
    assert_eq!(isomorph.significance, 3);
    assert_eq!(isomorph.positions, vec![0, 6]);

    assert_eq!(output.metadata.total_symbols, 11);
    assert_eq!(output.metadata.lengths_scanned, 3);
    assert_eq!(output.metadata.patterns_found, 1);
}

#[test]
fn convenience_function_uses_the_defaults() {
    let output = scan_text("ababxababy").unwrap();
    assert_eq!(output.isomorphs.len(), 1);

    let isomorph = &output.isomorphs[0];
    assert_eq!(isomorph.canonical, "ABAB");
    assert_eq!(isomorph.length, 4);
    assert_eq!(isomorph.significance, 2);
    assert_eq!(isomorph.positions, vec![0, 5]);
}

#[test]
fn short_inputs_scan_to_empty_output() {
    let output = scan_text("ab").unwrap();
    assert!(output.isomorphs.is_empty());
    assert_eq!(output.metadata.lengths_scanned, 0);
    assert_eq!(output.metadata.patterns_found, 0);
}

#[test]
fn contradictory_bounds_fail_at_build() {
    let result = ConfigBuilder::default().min_length(5).max_length(3).build();
    assert!(matches!(result, Err(isoglyph_api::ApiError::Config(_))));
}

#[test]
fn invalid_utf8_surfaces_as_an_input_error() {
    let scanner = IsomorphScanner::new().unwrap();
    let result = scanner.scan(Input::from_bytes(vec![0xff, 0xfe, 0xfd]));
    assert!(matches!(result, Err(isoglyph_api::ApiError::Utf8(_))));
}

#[test]
fn reader_inputs_are_supported() {
    let scanner = IsomorphScanner::with_config(Config::exhaustive()).unwrap();
    let reader = std::io::Cursor::new(b"aabaab".to_vec());
    let output = scanner.scan(Input::from_reader(reader)).unwrap();
    assert!(output
        .isomorphs
        .iter()
        .any(|isomorph| isomorph.canonical == "AA" && isomorph.positions == vec![0, 3]));
}

#[cfg(feature = "serde")]
#[test]
fn output_round_trips_through_json() {
    let output = scan_text("ababxababy").unwrap();
    let json = serde_json::to_string(&output).unwrap();
    let back: isoglyph_api::Output = serde_json::from_str(&json).unwrap();
    assert_eq!(back.isomorphs, output.isomorphs);
    assert_eq!(back.metadata.total_symbols, output.metadata.total_symbols);
}
