//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::MAX_PRECISION;
use crate::error::{ShapeError, ShapeResult};

use super::types::{Config, OutputFormat, Verbosity};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "shapes.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration together with where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the configuration was read from (None = built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShapeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShapeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    validate(&config, path)?;

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

fn validate(config: &Config, path: &Path) -> ShapeResult<()> {
    if let Some(precision) = config.output.precision {
        if precision > MAX_PRECISION {
            return Err(ShapeError::Config {
                file: path.to_path_buf(),
                message: format!(
                    "output.precision is {}, must be at most {}",
                    precision, MAX_PRECISION
                ),
            });
        }
    }
    Ok(())
}

/// Resolve configuration from file layers, then apply environment overrides.
///
/// An explicit path must exist and parse. Implicit files (project, user) are
/// skipped when they are missing or malformed.
pub fn load_layered(explicit: Option<&Path>, working_dir: &Path) -> ShapeResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(LoadedConfig {
            config: with_env_overrides(config),
            source: Some(path.to_path_buf()),
            warnings,
        });
    }

    let candidates = [
        Some(working_dir.join(PROJECT_CONFIG_FILE)),
        dirs::config_dir().map(|dir| dir.join("shapes").join("config.toml")),
    ];

    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        if let Ok((config, warnings)) = load_with_warnings(&path) {
            return Ok(LoadedConfig {
                config: with_env_overrides(config),
                source: Some(path),
                warnings,
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        source: None,
        warnings: Vec::new(),
    })
}

/// Apply environment variable overrides (SHAPES_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup. Unparseable values are ignored.
pub fn apply_env_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // SHAPES_FORMAT
    if let Some(format) = lookup("SHAPES_FORMAT") {
        match format.trim().to_lowercase().as_str() {
            "template" => config.output.format = OutputFormat::Template,
            "plain" => config.output.format = OutputFormat::Plain,
            _ => {}
        }
    }

    // SHAPES_PRECISION
    if let Some(precision) = lookup("SHAPES_PRECISION") {
        match precision.trim().parse::<u8>() {
            Ok(digits) if digits <= MAX_PRECISION => config.output.precision = Some(digits),
            _ => {}
        }
    }

    // SHAPES_VERBOSITY
    if let Some(verbosity) = lookup("SHAPES_VERBOSITY") {
        match verbosity.trim().to_lowercase().as_str() {
            "quiet" => config.output.verbosity = Verbosity::Quiet,
            "normal" => config.output.verbosity = Verbosity::Normal,
            "verbose" => config.output.verbosity = Verbosity::Verbose,
            _ => {}
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "format", "precision", "verbosity"];

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

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
