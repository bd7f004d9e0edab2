use atlas_kernel::config::{ConfigError, load_config};
use atlas_kernel::domain::config::ClientConfig;
use std::fs;

#[test]
fn loads_client_config_from_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("client.toml");
    fs::write(
        &path,
        r#"
[log]
json = true

[window]
title = "Atlas Travel"
"#,
    )?;

    let cfg: ClientConfig = load_config(Some(&path))?;
    assert!(cfg.log.json);
    assert_eq!(cfg.window.title, "Atlas Travel");
    assert_eq!(cfg.log.level, "info");
    Ok(())
}

#[test]
fn missing_file_is_reported_with_context() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let err = load_config::<ClientConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
    Ok(())
}
