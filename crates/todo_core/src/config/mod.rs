use crate::error::AppError;
use crate::storage::json_store::DEFAULT_STORAGE_KEY;
use crate::view::ViewConfig;
use serde::{Deserialize, Serialize};

/// Id of the optional `<script type="application/json">` block a page can
/// use to override defaults.
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub list: String,
    pub input: String,
    pub add_button: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            list: ".task-list".to_string(),
            input: ".nome-task".to_string(),
            add_button: ".adicionar-task".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_key: String,
    pub selectors: Selectors,
    pub view: ViewConfig,
    /// Blank means the build-mode default from `logging::default_level`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            selectors: Selectors::default(),
            view: ViewConfig::default(),
            log_level: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

/// Absent config yields defaults; invalid config yields defaults plus the
/// parse error so the host can report it.
pub fn load_config_with_fallback(raw: Option<&str>) -> ConfigLoad {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    };

    match parse_config(raw) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

pub fn parse_config(raw: &str) -> Result<Config, AppError> {
    let config = serde_json::from_str(raw)
        .map_err(|err| AppError::invalid_data(format!("invalid config JSON: {err}")))?;
    Ok(normalize_config(config))
}

fn normalize_config(mut config: Config) -> Config {
    let defaults = Config::default();
    fill_blank(&mut config.storage_key, defaults.storage_key);
    fill_blank(&mut config.selectors.list, defaults.selectors.list);
    fill_blank(&mut config.selectors.input, defaults.selectors.input);
    fill_blank(&mut config.selectors.add_button, defaults.selectors.add_button);
    fill_blank(&mut config.view.completed_class, defaults.view.completed_class);
    fill_blank(&mut config.view.remove_class, defaults.view.remove_class);
    fill_blank(&mut config.view.remove_label, defaults.view.remove_label);
    config.log_level = config.log_level.trim().to_string();
    config
}

fn fill_blank(value: &mut String, default: String) {
    let trimmed = value.trim();
    *value = if trimmed.is_empty() {
        default
    } else {
        trimmed.to_string()
    };
}
