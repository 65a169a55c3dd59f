use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Overrides `[site] public_url` when set and non-empty.
pub const PUBLIC_URL_ENV: &str = "SITE_PUBLIC_URL";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Absolute origin the sitemap entries are built on, without trailing slash.
    pub public_url: String,
    /// Built frontend bundle (Trunk output).
    pub dist_dir: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[site]
public_url = "http://localhost:3000"
dist_dir = "dist"
"#;

fn parse(contents: &str) -> anyhow::Result<Config> {
    toml::from_str(contents).context("invalid site configuration")
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// `SITE_PUBLIC_URL` is applied on top of whichever one was used.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = match config_next_to_exe() {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            parse(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            parse(DEFAULT_CONFIG)?
        }
    };

    if let Ok(public_url) = std::env::var(PUBLIC_URL_ENV) {
        apply_public_url_override(&mut config, &public_url);
    }
    Ok(config)
}

fn config_next_to_exe() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

fn apply_public_url_override(config: &mut Config, public_url: &str) {
    let public_url = public_url.trim();
    if !public_url.is_empty() {
        config.site.public_url = public_url.to_string();
    }
}

impl Config {
    pub fn public_url(&self) -> &str {
        self.site.public_url.trim_end_matches('/')
    }

    /// Resolves a relative `dist_dir` against the executable directory when
    /// it exists there, otherwise against the working directory.
    pub fn dist_dir(&self) -> PathBuf {
        let dist = Path::new(&self.site.dist_dir);
        if dist.is_absolute() {
            return dist.to_path_buf();
        }
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            let beside_exe = exe_dir.join(dist);
            if beside_exe.exists() {
                return beside_exe;
            }
        }
        dist.to_path_buf()
    }
}
