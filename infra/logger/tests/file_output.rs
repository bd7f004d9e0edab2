use atlas_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;

#[test]
fn plain_file_is_prefixed_with_name_and_second_init_fails() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let logger = Logger::builder()
        .name("atlas-file")
        .console(false)
        .dir(tmp.path())
        .level(LevelFilter::WARN)
        .init()?;
    assert!(logger.writes_files());

    tracing::info!("below threshold");
    tracing::warn!(link = "/404/", "route fell through");

    let err = Logger::builder().name("atlas-again").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let file = fs::read_dir(tmp.path())?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.file_name().is_some_and(|n| n.to_string_lossy().starts_with("atlas-file")))
        .expect("rolling file named after the logger");

    let contents = fs::read_to_string(file)?;
    assert!(contents.contains("route fell through"));
    assert!(contents.contains("link=\"/404/\""));
    assert!(!contents.contains("below threshold"));
    assert!(!contents.contains('\u{1b}'), "file output carries no ANSI escapes");
    Ok(())
}
