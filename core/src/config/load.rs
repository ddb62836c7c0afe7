use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default tracelab data directory: ~/.tracelab
pub fn get_tracelab_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".tracelab"))
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.tracelab/config.toml (highest)
    let data_dir = get_tracelab_data_dir()?;
    let user_config = data_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg: AppConfig = if user_config.exists() {
        let s = std::fs::read_to_string(&user_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else if local_config.exists() {
        let s = std::fs::read_to_string(local_config)?;
        toml::from_str::<AppConfig>(&s)?
    } else {
        AppConfig::default()
    };

    // Update logging directory to use tracelab data directory if not set
    if cfg.logging.directory.is_none()
        || cfg
            .logging
            .directory
            .as_ref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(false)
    {
        let logs_dir = data_dir.join("logs");
        std::fs::create_dir_all(&logs_dir)?;
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    // Environment variable overrides (Priority 0: highest)
    if let Ok(v) = std::env::var("TRACELAB_HTTP_HOST") {
        if !v.trim().is_empty() {
            cfg.http_server.host = v;
        }
    }
    if let Ok(v) = std::env::var("TRACELAB_HTTP_PORT") {
        if let Ok(port) = v.trim().parse::<u16>() {
            cfg.http_server.port = port;
        }
    }

    Ok(cfg)
}
