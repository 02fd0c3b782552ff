//! Configuration discovery and effective settings resolution.
//!
//! errdex reads an optional `errdex.toml|yaml|yml` from the tool root and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `logs`: `logs/msbuild.errors.log`, then `logs/msbuild.log`
//! - `errors_dir`: `errors`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::locate::{candidate_paths, DEFAULT_LOGS};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ERRORS_DIR: &str = "errors";
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `errdex.toml|yaml`.
pub struct ErrdexConfig {
    pub logs: Option<Vec<String>>,
    pub errors_dir: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration after applying precedence.
pub struct Effective {
    /// Candidate logs in preference order, already joined to `root`.
    pub candidates: Vec<PathBuf>,
    pub errors_dir: PathBuf,
    pub output: String,
}

/// Outcome of looking for a config file in the tool root.
#[derive(Debug)]
pub enum Loaded {
    Missing,
    Found(ErrdexConfig),
    Invalid { path: PathBuf, reason: String },
}

/// Load `ErrdexConfig` from `errdex.toml` or `errdex.yaml|yml` if present.
pub fn load_config(root: &Path) -> Loaded {
    let toml_path = root.join("errdex.toml");
    if toml_path.exists() {
        return match fs::read_to_string(&toml_path) {
            Ok(s) => match toml::from_str::<ErrdexConfig>(&s) {
                Ok(cfg) => Loaded::Found(cfg),
                Err(e) => Loaded::Invalid {
                    path: toml_path,
                    reason: e.to_string(),
                },
            },
            Err(e) => Loaded::Invalid {
                path: toml_path,
                reason: e.to_string(),
            },
        };
    }
    for yml in ["errdex.yaml", "errdex.yml"] {
        let p = root.join(yml);
        if p.exists() {
            return match fs::read_to_string(&p) {
                Ok(s) => match serde_yaml::from_str::<ErrdexConfig>(&s) {
                    Ok(cfg) => Loaded::Found(cfg),
                    Err(e) => Loaded::Invalid {
                        path: p,
                        reason: e.to_string(),
                    },
                },
                Err(e) => Loaded::Invalid {
                    path: p,
                    reason: e.to_string(),
                },
            };
        }
    }
    Loaded::Missing
}

/// Tool root: `--root` if given, else the current directory.
pub fn tool_root(cli_root: Option<&str>) -> PathBuf {
    PathBuf::from(cli_root.unwrap_or("."))
}

/// Resolve `Effective` by merging CLI flags, a loaded config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_logs: &[String],
    cli_errors_dir: Option<&str>,
    cli_output: Option<&str>,
    cfg: ErrdexConfig,
) -> Effective {
    let root = tool_root(cli_root);

    let candidates = if !cli_logs.is_empty() {
        candidate_paths(&root, cli_logs)
    } else if let Some(logs) = cfg.logs.filter(|l| !l.is_empty()) {
        candidate_paths(&root, logs.as_slice())
    } else {
        candidate_paths(&root, &DEFAULT_LOGS[..])
    };

    let errors_dir = root.join(
        cli_errors_dir
            .map(|s| s.to_string())
            .or(cfg.errors_dir)
            .unwrap_or_else(|| DEFAULT_ERRORS_DIR.to_string()),
    );

    let cfg_output = cfg.output.filter(|o| {
        let known = OUTPUT_MODES.contains(&o.as_str());
        if !known {
            tracing::warn!(output = %o, "unknown output mode in config; using human");
        }
        known
    });
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg_output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        candidates,
        errors_dir,
        output,
    }
}
