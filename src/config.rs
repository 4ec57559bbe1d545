use crate::types::*;
use chrono::Local;
use std::{
    env,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub fn work_dir() -> PathBuf {
  env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn resolve_work_path(raw: &str) -> PathBuf {
  let path = PathBuf::from(raw);
  if path.is_absolute() {
    path
  } else {
    work_dir().join(path)
  }
}

pub fn config_path() -> PathBuf {
  match env_default("VOD_TITLES_CONFIG_PATH") {
    Some(raw) => resolve_work_path(&raw),
    None => work_dir().join("config.json"),
  }
}

pub fn env_default(key: &str) -> Option<String> {
  env::var(key)
    .ok()
    .map(|value| value.trim().to_string())
    .filter(|value| !value.is_empty())
}

pub fn apply_env_defaults(mut config: AppConfig) -> AppConfig {
  if config.startgg_token.trim().is_empty() {
    if let Some(value) = env_default("STARTGG_TOKEN") {
      config.startgg_token = value;
    }
  }
  if config.event_slug.trim().is_empty() {
    if let Some(value) = env_default("STARTGG_EVENT_SLUG") {
      config.event_slug = value;
    }
  }
  if config.event_name.trim().is_empty() {
    if let Some(value) = env_default("VOD_TITLES_EVENT_NAME") {
      config.event_name = value;
    }
  }
  if config.output_path.trim().is_empty() {
    if let Some(value) = env_default("VOD_TITLES_OUTPUT") {
      config.output_path = value;
    }
  }
  config
}

pub fn load_config_inner() -> Result<AppConfig, String> {
  load_config_from(&config_path()).map(apply_env_defaults)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, String> {
  if !path.is_file() {
    return Ok(AppConfig::default());
  }
  let data = fs::read_to_string(path).map_err(|e| format!("read config {}: {e}", path.display()))?;
  serde_json::from_str::<AppConfig>(&data).map_err(|e| format!("parse config {}: {e}", path.display()))
}

pub fn save_config_inner(config: AppConfig) -> Result<AppConfig, String> {
  save_config_to(&config_path(), config)
}

pub fn save_config_to(path: &Path, config: AppConfig) -> Result<AppConfig, String> {
  let payload = serde_json::to_string_pretty(&config).map_err(|e| e.to_string())?;
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent)
      .map_err(|e| format!("create config dir {}: {e}", parent.display()))?;
  }
  fs::write(path, payload).map_err(|e| format!("write config {}: {e}", path.display()))?;
  Ok(config)
}

pub fn save_token(token: &str) -> Result<AppConfig, String> {
  save_token_to(&config_path(), token)
}

/// Stores only the token. Other fields keep whatever the file already had,
/// so environment defaults never end up persisted.
pub fn save_token_to(path: &Path, token: &str) -> Result<AppConfig, String> {
  let token = token.trim();
  if token.is_empty() {
    return Err("No token to save; pass --token.".to_string());
  }
  let mut config = load_config_from(path)?;
  config.startgg_token = token.to_string();
  save_config_to(path, config)
}

/// Checks the fields a run needs before any request is made.
pub fn validate_run_config(config: &AppConfig) -> Result<(), String> {
  if config.event_slug.trim().is_empty() || config.startgg_token.trim().is_empty() {
    return Err("Invalid slug or token.".to_string());
  }
  if config.event_name.trim().is_empty() {
    return Err("Event name cannot be empty.".to_string());
  }
  Ok(())
}

pub fn output_path(config: &AppConfig) -> PathBuf {
  let trimmed = config.output_path.trim();
  if trimmed.is_empty() {
    resolve_work_path(DEFAULT_OUTPUT_PATH)
  } else {
    resolve_work_path(trimmed)
  }
}

pub fn load_env_file() {
  let env_path = work_dir().join(".env");
  if !env_path.is_file() {
    return;
  }
  let contents = match fs::read_to_string(&env_path) {
    Ok(data) => data,
    Err(_) => return,
  };
  for line in contents.lines() {
    if let Some((key, value)) = parse_env_line(line) {
      if env::var_os(&key).is_none() {
        env::set_var(key, value);
      }
    }
  }
}

pub fn parse_env_line(line: &str) -> Option<(String, String)> {
  let trimmed = line.trim();
  if trimmed.is_empty() || trimmed.starts_with('#') {
    return None;
  }
  let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
  let (key, raw_value) = trimmed.split_once('=')?;
  let key = key.trim();
  if key.is_empty() {
    return None;
  }
  let mut value = raw_value.trim();
  if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
    value = &value[1..value.len() - 1];
  } else if value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2 {
    value = &value[1..value.len() - 1];
  } else if let Some(idx) = value.find('#') {
    value = value[..idx].trim_end();
  }
  Some((key.to_string(), value.to_string()))
}

pub fn logs_dir() -> PathBuf {
  match env_default("VOD_TITLES_LOG_DIR") {
    Some(raw) => resolve_work_path(&raw),
    None => work_dir().join("logs"),
  }
}

pub fn startgg_log_path() -> PathBuf {
  logs_dir().join("startgg_api.log")
}

pub fn append_startgg_log(label: &str, payload: &str) {
  let dir = logs_dir();
  if fs::create_dir_all(&dir).is_err() {
    return;
  }
  let path = startgg_log_path();
  let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
  let entry = format!("[{timestamp}] {label}\n{payload}\n\n");
  if let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(&path) {
    let _ = file.write_all(entry.as_bytes());
  }
}
