//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, AssetResult};

use super::types::{ColorMode, Config};
use crate::domain::value_objects::FailurePolicy;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "localx-assets.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from (`None` = built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AssetResult<Self> {
        load_with_warnings(path).map(|(config, _)| config)
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AssetResult<(Config, Vec<ConfigWarning>)> {
    let content =
        fs::read_to_string(path).map_err(|e| AssetError::io("read config", path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AssetError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run.
///
/// `explicit` (from `--config`) must exist. Otherwise the project file
/// `<project_root>/localx-assets.toml` is used, then the user file
/// `<config dir>/localx-assets/config.toml`, then built-in defaults. The
/// first file found wins. Environment overrides apply on top in every case.
pub fn load_layered(project_root: &Path, explicit: Option<&Path>) -> AssetResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    let mut loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// User config file: `<config dir>/localx-assets/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("localx-assets").join("config.toml"))
}

/// Apply environment variable overrides (LOCALX_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // LOCALX_TEMPLATES_DIR
    if let Some(dir) = get_env("LOCALX_TEMPLATES_DIR").filter(|v| !v.is_empty()) {
        config.templates.output_dir = PathBuf::from(dir);
    }

    // LOCALX_WORKSPACE
    if let Some(dir) = get_env("LOCALX_WORKSPACE").filter(|v| !v.is_empty()) {
        config.templates.workspace_root = Some(PathBuf::from(dir));
    }

    // LOCALX_ON_FAILURE
    if let Some(policy) = get_env("LOCALX_ON_FAILURE").and_then(|v| FailurePolicy::parse(&v)) {
        config.templates.on_failure = policy;
    }

    // LOCALX_PARALLEL
    if let Some(val) = get_env("LOCALX_PARALLEL") {
        let val = val.to_lowercase();
        config.templates.parallel = val != "false" && val != "0" && !val.is_empty();
    }

    // LOCALX_ICON_LABEL
    if let Some(label) = get_env("LOCALX_ICON_LABEL").filter(|v| !v.trim().is_empty()) {
        config.icons.label = label;
    }

    // LOCALX_ICON_FONT (tried before the configured list)
    if let Some(font) = get_env("LOCALX_ICON_FONT").filter(|v| !v.is_empty()) {
        config.icons.fonts.insert(0, PathBuf::from(font));
    }

    // LOCALX_COLOR
    if let Some(color) = get_env("LOCALX_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    config
}

/// Get XDG config directory, falling back to the platform default
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "templates",
        "output_dir",
        "workspace_root",
        "on_failure",
        "parallel",
        "only",
        "icons",
        "label",
        "sizes",
        "background",
        "foreground",
        "fonts",
        "png",
        "ico",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, &ac) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
