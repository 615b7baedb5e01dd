//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [render]
        max_string_length = 30
        max_sequence_items = 4
        max_depth = 3
        max_line_length = 100

        [logging]
        level = "warn"
        color = false
        show_passes = true
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.render.max_string_length, 30);
    assert_eq!(config.render.max_sequence_items, 4);
    assert_eq!(config.render.max_depth, 3);
    assert_eq!(config.render.max_line_length, 100);
    assert_eq!(config.logging.level, "warn");
    assert!(!config.logging.color);
    assert!(config.logging.show_passes);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        render:
          max_string_length: 30
          max_sequence_items: 4
          max_depth: 3
          max_line_length: 100
        logging:
          level: warn
          color: false
          show_passes: true
    "#;

    let from_yaml = EngineConfig::from_yaml_str(yaml).unwrap();
    let from_toml = EngineConfig::from_toml_str(
        r#"
        [render]
        max_string_length = 30
        max_sequence_items = 4
        max_depth = 3
        max_line_length = 100

        [logging]
        level = "warn"
        color = false
        show_passes = true
    "#,
    )
    .unwrap();
    assert_eq!(from_yaml, from_toml);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        [render]
        max_sequence_items = 3
    "#,
    )
    .unwrap();

    assert_eq!(config.render.max_sequence_items, 3);
    assert_eq!(
        config.render.max_string_length,
        RenderConfig::DEFAULT_MAX_STRING_LENGTH
    );
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_empty_document_is_default() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_render(
            RenderConfig::default()
                .with_max_string_length(10)
                .with_max_sequence_items(2)
                .with_max_depth(1)
                .with_max_line_length(40),
        )
        .with_log_level("trace");

    assert_eq!(config.render.max_string_length, 10);
    assert_eq!(config.render.max_sequence_items, 2);
    assert_eq!(config.render.max_depth, 1);
    assert_eq!(config.render.max_line_length, 40);
    assert_eq!(config.logging.level, "trace");
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_limit_rejected() {
    let render = RenderConfig::default().with_max_sequence_items(0);
    let err = render.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("max_sequence_items"));
}

#[test]
fn test_unknown_log_level_rejected() {
    let config = EngineConfig::new().with_log_level("loud");
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn test_log_level_case_insensitive() {
    let config = EngineConfig::new().with_log_level("DEBUG");
    assert!(config.validate().is_ok());
}

#[test]
fn test_parsers_validate() {
    let yaml = EngineConfig::from_yaml_str("render:\n  max_sequence_items: 0\n");
    assert!(matches!(yaml, Err(ConfigError::Invalid(_))));

    let toml = EngineConfig::from_toml_str("[logging]\nlevel = \"loud\"\n");
    assert!(matches!(toml, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_invalid_toml_is_error() {
    let result = EngineConfig::from_toml_str("[render\nmax_depth = ");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = EngineConfig::load("/definitely/not/here/assertforge.toml");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_validates() {
    let dir = std::env::temp_dir().join(format!("assertforge-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad.toml");
    std::fs::write(&path, "[render]\nmax_depth = 0\n").unwrap();

    let result = EngineConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    let yaml_path = dir.join("bad.yaml");
    std::fs::write(&yaml_path, "render:\n  max_depth: 0\n").unwrap();
    let result = EngineConfig::load(&yaml_path);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    let good_path = dir.join("good.yml");
    std::fs::write(&good_path, "render:\n  max_depth: 3\n").unwrap();
    assert_eq!(EngineConfig::load(&good_path).unwrap().render.max_depth, 3);

    std::fs::remove_dir_all(&dir).unwrap();
}
