// File: ./src/paths.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct AppPaths;

impl AppPaths {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("org", "agenda", "agenda").context("No home directory available")
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dir = Self::project_dirs()?.data_dir().to_path_buf();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        Ok(dir)
    }

    /// Where the event document is read from when neither the command line
    /// nor the config names one.
    pub fn default_events_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("events.json"))
    }

    pub fn log_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("agenda.log"))
    }
}
