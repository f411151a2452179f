use anyhow::Result;
use memo_gallery::infrastructure::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn given_config_file_when_loading_then_reads_values() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(
        &path,
        "[server]\nbase_url = \"http://memos.test/api/memos/\"\n\n[page]\ntitle = \"Moodboard\"\n",
    )?;

    // Act
    let config = Config::resolve(Some(&path))?;

    // Assert
    assert_eq!(config.server.base_url, "http://memos.test/api/memos/");
    assert_eq!(config.page.title, "Moodboard");
    Ok(())
}

#[test]
fn given_missing_explicit_file_when_resolving_then_fails() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("absent.toml");

    // Act
    let result = Config::resolve(Some(&path));

    // Assert
    let error = result.expect_err("Should fail for a missing file");
    assert!(error.to_string().contains("Config file not found"));
    Ok(())
}

#[test]
fn given_invalid_toml_when_loading_then_reports_parse_error() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[server\nbase_url = 1")?;

    // Act
    let result = Config::load(&path);

    // Assert
    let error = result.expect_err("Should fail to parse");
    assert!(error.to_string().contains("Failed to parse TOML config"));
    Ok(())
}

#[test]
fn given_partial_file_and_url_override_when_resolving_then_merges_sources() -> Result<()> {
    // Arrange
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[page]\ntitle = \"Moodboard\"\n")?;

    // Act
    let config = Config::resolve(Some(&path))?
        .with_base_url(Some("http://memos.test/memos/".to_string()));

    // Assert
    assert_eq!(config.page.title, "Moodboard");
    assert_eq!(config.server.base_url, "http://memos.test/memos/");
    Ok(())
}
