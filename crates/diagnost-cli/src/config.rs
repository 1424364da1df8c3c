//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level diagnost configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnostConfig {
    /// Directory searched for quiz TOML files.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Directory results and reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_quiz_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./diagnost-results")
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for DiagnostConfig {
    fn default() -> Self {
        Self {
            quiz_dir: default_quiz_dir(),
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

/// Expand `${VAR}` references from the environment. Unset variables expand
/// to nothing; an unterminated `${` is kept as written.
fn resolve_env_vars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &rest[start + 2..start + 2 + len];
        out.push_str(&std::env::var(name).unwrap_or_default());
        rest = &rest[start + 3 + len..];
    }
    out.push_str(rest);
    out
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `diagnost.toml` in the current directory
/// 2. `~/.config/diagnost/config.toml`
///
/// Environment variable overrides: `DIAGNOST_QUIZ_DIR`, `DIAGNOST_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<DiagnostConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("diagnost.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<DiagnostConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => DiagnostConfig::default(),
    };

    if let Ok(dir) = std::env::var("DIAGNOST_QUIZ_DIR") {
        config.quiz_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("DIAGNOST_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    config.quiz_dir = resolve_path(&config.quiz_dir);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("diagnost"))
}
