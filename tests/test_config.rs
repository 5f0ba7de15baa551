//! Tests for run configuration and command construction

use std::path::{Path, PathBuf};

use chartconv::convert::{ConvertError, Mode, RunConfig, DEFAULT_LAYER};

fn positionals(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_enc_example_invocation() {
    let config =
        RunConfig::from_positionals(Mode::Enc, &positionals(&["./charts"]), false, None).unwrap();

    let invocation = config.invocation(Path::new("./charts/US1.000"));

    assert_eq!(
        invocation.to_string(),
        "ogr2ogr -f GeoJSON ./enc_output/LNDARE/US1.000.json ./charts/US1.000 LNDARE"
    );
}

#[test]
fn test_enc_defaults_layer() {
    let config =
        RunConfig::from_positionals(Mode::Enc, &positionals(&["./charts"]), false, None).unwrap();

    assert_eq!(config.layer_name.as_deref(), Some(DEFAULT_LAYER));
    assert_eq!(config.output_dir, PathBuf::from("./enc_output"));
    assert_eq!(config.layer_dir(), PathBuf::from("./enc_output/LNDARE"));
}

#[test]
fn test_enc_custom_layer() {
    let config = RunConfig::from_positionals(
        Mode::Enc,
        &positionals(&["./charts", "DEPARE"]),
        false,
        None,
    )
    .unwrap();

    assert_eq!(config.layer_name.as_deref(), Some("DEPARE"));
    assert_eq!(
        config.output_file(Path::new("./charts/sub/US5MA11M.000")),
        PathBuf::from("./enc_output/DEPARE/US5MA11M.000.json")
    );

    let invocation = config.invocation(Path::new("./charts/sub/US5MA11M.000"));
    assert_eq!(invocation.args.last().map(String::as_str), Some("DEPARE"));
}

#[test]
fn test_enc_simplify_prepends_tolerance() {
    let config =
        RunConfig::from_positionals(Mode::Enc, &positionals(&["./charts"]), true, None).unwrap();

    let invocation = config.invocation(Path::new("./charts/US1.000"));

    assert_eq!(invocation.program, "ogr2ogr");
    assert_eq!(
        invocation.args,
        vec![
            "-simplify",
            "0.125",
            "-f",
            "GeoJSON",
            "./enc_output/LNDARE/US1.000.json",
            "./charts/US1.000",
            "LNDARE",
        ]
    );
}

#[test]
fn test_shp_invocation() {
    let config =
        RunConfig::from_positionals(Mode::Shp, &positionals(&["./shapes"]), false, None).unwrap();

    let invocation = config.invocation(Path::new("./shapes/coast.shp"));

    assert_eq!(config.layer_name, None);
    assert_eq!(
        invocation.to_string(),
        "ogr2ogr -f GeoJSON ./shp_output/coast.shp.json ./shapes/coast.shp"
    );
}

#[test]
fn test_shp_simplify_from_flag_or_positional() {
    let from_flag =
        RunConfig::from_positionals(Mode::Shp, &positionals(&["./shapes"]), true, None).unwrap();
    let from_positional =
        RunConfig::from_positionals(Mode::Shp, &positionals(&["./shapes", "-s"]), false, None)
            .unwrap();

    assert!(from_flag.simplify);
    assert!(from_positional.simplify);

    let invocation = from_positional.invocation(Path::new("./shapes/coast.shp"));
    assert_eq!(
        invocation.to_string(),
        "ogr2ogr -simplify 0.125 -f GeoJSON ./shp_output/coast.shp.json ./shapes/coast.shp"
    );
}

#[test]
fn test_bsb_invocation_ignores_second_argument() {
    let config =
        RunConfig::from_positionals(Mode::Bsb, &positionals(&["./maps", "-x"]), false, None)
            .unwrap();

    let invocation = config.invocation(Path::new("./maps/12300_1.kap"));

    assert_eq!(config.root_dir, PathBuf::from("./maps"));
    assert!(!config.simplify);
    assert_eq!(
        invocation.to_string(),
        "gdal_polygonize.py ./maps/12300_1.kap -f GeoJSON ./bsb_output/12300_1.kap.json"
    );
}

#[test]
fn test_bsb_never_simplifies() {
    let config =
        RunConfig::from_positionals(Mode::Bsb, &positionals(&["./maps"]), true, None).unwrap();

    assert!(!config.simplify);
    let invocation = config.invocation(Path::new("./maps/a.kap"));
    assert!(!invocation.args.contains(&"-simplify".to_string()));
}

#[test]
fn test_argument_count_outside_bounds_is_usage_error() {
    for mode in [Mode::Enc, Mode::Bsb, Mode::Shp] {
        let none = RunConfig::from_positionals(mode, &[], false, None);
        assert!(
            matches!(none, Err(ConvertError::Usage { got: 0, .. })),
            "{} with no arguments should be a usage error",
            mode
        );

        let three = RunConfig::from_positionals(mode, &positionals(&["a", "b", "c"]), false, None);
        assert!(
            matches!(three, Err(ConvertError::Usage { got: 3, .. })),
            "{} with three arguments should be a usage error",
            mode
        );
    }
}

#[test]
fn test_output_dir_override() {
    let config = RunConfig::from_positionals(
        Mode::Enc,
        &positionals(&["./charts", "COALNE"]),
        false,
        Some(PathBuf::from("/tmp/out")),
    )
    .unwrap();

    assert_eq!(
        config.output_file(Path::new("./charts/US1.000")),
        PathBuf::from("/tmp/out/COALNE/US1.000.json")
    );
}
