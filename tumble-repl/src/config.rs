use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use tracing::info;

const CONFIG_DIR: &str = ".tumble";
const CONFIG_FILE: &str = "config.ron";
const CONFIG_ENV: &str = "TUMBLE_CONFIG";

/// Settings and presets, stored as RON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Line editor history
    pub(crate) history_file: String,
    /// How many rolls the log keeps
    pub(crate) log_limit: usize,
    pub(crate) presets: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: "history".to_owned(),
            log_limit: 50,
            presets: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Flag first, then `$TUMBLE_CONFIG`, then `.tumble/config.ron`
    pub(crate) fn resolve_path(flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| [CONFIG_DIR, CONFIG_FILE].iter().collect())
    }

    pub(crate) fn from_ron(content: &str) -> anyhow::Result<Self> {
        ron::de::from_str(content).context("malformed configuration")
    }

    pub(crate) fn to_ron(&self) -> anyhow::Result<String> {
        Ok(ron::ser::to_string_pretty(self, Default::default())?)
    }

    /// A missing file gives the defaults
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No configuration at `{}`, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("unable to read `{}`", path.display()))?;
        let config =
            Self::from_ron(&content).with_context(|| format!("in `{}`", path.display()))?;
        info!("Configuration loaded from `{}`", path.display());
        Ok(config)
    }

    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        create_parent(path)?;
        fs::write(path, self.to_ron()?.as_bytes())
            .with_context(|| format!("unable to write `{}`", path.display()))?;
        info!("Configuration saved to `{}`", path.display());
        Ok(())
    }
}

/// Make sure the directory holding `path` exists
pub(crate) fn create_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("unable to create dir `{}`", dir.display()))?;
    }
    Ok(())
}
