use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "api-config-core";

const KEY_API_BASE_URL: &str = "api-base-url";
const KEY_CMD_ARGUMENTS: &str = "cmd-arguments";

/// Single-capability lookup over an external key/value source, so the
/// process environment can be swapped for a map in tests.
pub trait ConfigSource {
    fn get_string(&self, key: &str) -> Option<String>;
}

pub struct EnvSource {}

impl ConfigSource for EnvSource {
    fn get_string(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.is_empty())
    }
}

fn app_data_path() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_default();
    base.join(APP_NAME)
}

pub fn config_path() -> PathBuf {
    app_data_path().join("config.json")
}

pub fn log_file_path() -> Result<PathBuf> {
    let mut path = PathBuf::new();
    if let Some(dir) = dirs::home_dir() {
        path.push(dir);
    }

    #[cfg(target_os = "macos")]
    {
        path.push("Library/Logs");
    }
    #[cfg(target_os = "windows")]
    {
        let dir = std::env::var("APPDATA")?;
        path.push(dir);
    }
    #[cfg(target_os = "linux")]
    {
        path.push(".local/state");
    }

    path.push(APP_NAME);
    fs::create_dir_all(&path)?;

    path.push("output.log");
    Ok(path)
}

fn config_content() -> Result<Map<String, Value>> {
    let path = config_path();
    if path.exists() {
        let data = std::fs::read_to_string(path).context("Failed to read config.json")?;
        return serde_json::from_str::<Map<String, Value>>(&data).context("Failed to parse JSON");
    }

    let map: Map<String, Value> = Map::new();
    Ok(map)
}

fn write_config(value: Map<String, Value>) -> Result<()> {
    let path = config_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, &value)?;
    Ok(())
}

/// Arguments persisted in the config file, merged into argv at startup.
pub fn cmd_arguments() -> Vec<String> {
    match config_content() {
        Ok(config) => arguments_from(&config),
        Err(e) => {
            log::error!("Cannot read arguments from config: {:#?}", e);
            Vec::new()
        }
    }
}

fn arguments_from(config: &Map<String, Value>) -> Vec<String> {
    match config.get(KEY_CMD_ARGUMENTS) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(ToOwned::to_owned))
            .collect(),
        Some(_) => {
            log::error!("Value under key {} is in a wrong format", KEY_CMD_ARGUMENTS);
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Base URL pinned in the config file, if any. A missing file or key is not
/// an error; a present non-string value is.
pub fn base_url_override() -> Result<Option<String>> {
    let config = config_content()?;
    override_from(&config)
}

fn override_from(config: &Map<String, Value>) -> Result<Option<String>> {
    match config.get(KEY_API_BASE_URL) {
        Some(value) => match value.as_str() {
            Some(url) => Ok(Some(url.to_owned())),
            None => Err(anyhow!(
                "Value under key {} is in a wrong format",
                KEY_API_BASE_URL
            )),
        },
        None => Ok(None),
    }
}

/// Pins a base URL in the config file so later runs keep using it.
pub fn save_base_url_override(url: &str) -> Result<()> {
    let mut config = config_content()?;
    config.insert(KEY_API_BASE_URL.to_owned(), Value::String(url.to_owned()));
    write_config(config)?;
    Ok(())
}
