//! Loading configuration from disk.

use std::io::Write;

use fancy::style::Rgb;
use fancy::{Config, ConfigError, Fancy, OutputMode, Role, Tag};

#[test]
fn loads_yaml_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(
        file,
        r##"
colors:
  brace: "#000"
  success: [0, 128, 0]
labels:
  success: OK
output: term
"##
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.palette.get(Role::Brace).foreground(), Some(Rgb(0, 0, 0)));
    assert_eq!(config.output, OutputMode::Term);

    let fancy = Fancy::new(config);
    assert_eq!(
        fancy.render_tag(Tag::Success),
        "\x1b[38;2;0;0;0m[\x1b[38;2;0;128;0mOK\x1b[38;2;0;0;0m] \x1b[0m"
    );
}

#[test]
fn parse_errors_carry_the_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "colors: [not, a, mapping").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    match err {
        ConfigError::Parse { path, .. } => assert_eq!(path.as_deref(), Some(file.path())),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Load { .. }));
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn invalid_color_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "colors:\n  numeric: '#12345'").unwrap();

    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidColor { ref role, .. } if role == "numeric"));
}
