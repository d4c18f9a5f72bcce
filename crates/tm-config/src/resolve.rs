//! Model file resolution and path discovery.
//!
//! Resolution order: explicit path → environment variables → XDG paths →
//! system config → builtin preset.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Discovered model file path.
#[derive(Debug, Clone, Default)]
pub struct ModelPath {
    /// Path to model.json (or None if the builtin preset applies).
    pub path: Option<PathBuf>,

    /// Where the path came from (for diagnostics).
    pub source: ConfigSource,
}

/// Where a model file was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided by the caller.
    Explicit,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/tumor-triage/.
    SystemConfig,

    /// Using the builtin preset.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit => write!(f, "explicit path"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_MODEL_PATH: &str = "TUMOR_TRIAGE_MODEL";
pub const ENV_CONFIG_DIR: &str = "TUMOR_TRIAGE_CONFIG_DIR";

/// Standard model file name.
pub const MODEL_FILENAME: &str = "model.json";

/// Application name for XDG directories.
const APP_NAME: &str = "tumor-triage";

/// Resolve the model file path using the standard resolution order.
///
/// 1. Explicit path (if provided and present)
/// 2. TUMOR_TRIAGE_MODEL environment variable
/// 3. TUMOR_TRIAGE_CONFIG_DIR environment variable + model.json
/// 4. XDG config directory (~/.config/tumor-triage/)
/// 5. System config (/etc/tumor-triage/)
/// 6. Builtin preset (None)
pub fn resolve_model_path(explicit: Option<&Path>) -> ModelPath {
    let resolved = resolve_single(explicit);
    debug!(
        source = %resolved.source,
        path = ?resolved.path,
        "resolved model configuration"
    );
    resolved
}

fn resolve_single(explicit: Option<&Path>) -> ModelPath {
    // 1. Explicit path
    if let Some(path) = explicit {
        if path.exists() {
            return found(path.to_path_buf(), ConfigSource::Explicit);
        }
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_MODEL_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 3. Environment variable (config dir)
    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(MODEL_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 4. XDG config directory
    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(MODEL_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::XdgConfig);
        }
    }

    // 5. System config
    let system_path = system_config_dir().join(MODEL_FILENAME);
    if system_path.exists() {
        return found(system_path, ConfigSource::SystemConfig);
    }

    ModelPath::default()
}

fn found(path: PathBuf, source: ConfigSource) -> ModelPath {
    ModelPath {
        path: Some(path),
        source,
    }
}

/// Get the XDG config directory for tumor-triage.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
