// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered pages to disk and hands them to the browser.
#[derive(Debug, Default)]
pub struct PageWriter {
    // Keep the last temp dir alive until the browser has read the page
    _temp_dir: Option<TempDir>,
}

impl PageWriter {
    pub fn new() -> Self {
        Self { _temp_dir: None }
    }

    pub fn write_to(&self, path: &Path, content: &str) -> Result<()> {
        File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?
            .write_all(content.as_bytes())
            .with_context(|| format!("Failed to write page to {}", path.display()))?;
        debug!(?path, "Page written");
        Ok(())
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("memo-gallery-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("gallery.html");
        self.write_to(&file_path, content)?;

        self._temp_dir = Some(temp_dir);
        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }

    /// Write to `output` if given, otherwise open a temporary copy in the browser.
    pub fn publish(&mut self, content: &str, output: Option<&Path>) -> Result<PathBuf> {
        match output {
            Some(path) => {
                self.write_to(path, content)?;
                Ok(path.to_path_buf())
            }
            None => {
                let path = self.create_temp_file(content)?;
                self.open_in_browser(&path)?;
                Ok(path)
            }
        }
    }
}
