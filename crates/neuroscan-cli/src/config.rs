use std::path::{Path, PathBuf};

use neuroscan_core::log_format;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuroScanConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Assessment log. Relative paths resolve against the working directory.
    #[serde(default = "default_results_log")]
    pub results_log: PathBuf,
    /// Reminder log. Relative paths resolve against the working directory.
    #[serde(default = "default_reminders_log")]
    pub reminders_log: PathBuf,
}

impl Default for NeuroScanConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            results_log: default_results_log(),
            reminders_log: default_reminders_log(),
        }
    }
}

fn default_results_log() -> PathBuf {
    PathBuf::from(log_format::RESULTS_LOG)
}

fn default_reminders_log() -> PathBuf {
    PathBuf::from(log_format::REMINDERS_LOG)
}

/// `<config dir>/neuroscan/config.json`, if the platform has a config dir.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join("neuroscan").join("config.json"))
}

/// Load the user config, falling back to defaults when there is none.
pub fn load_config() -> eyre::Result<NeuroScanConfig> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => {
            tracing::debug!("no config file, using defaults");
            Ok(NeuroScanConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> eyre::Result<NeuroScanConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: NeuroScanConfig = serde_json::from_value(migrated)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update NeuroScan."
        ));
    }

    // v0 → v1: the single `log_file` key became `results_log`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(log_file) = obj.remove("log_file") {
            obj.entry("results_log").or_insert(log_file);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (log_file → results_log)");
    }

    Ok(json)
}
