use std::path::PathBuf;

/// Returns the config directory path for tabset.
/// Checks `$XDG_CONFIG_HOME` first (cross-platform), then falls back to
/// platform-native config via `dirs::config_dir()`, then `~/.config`.
pub fn get_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("tabset")
}

/// Default location of the tab definitions file.
pub fn default_tabs_file() -> PathBuf {
    get_config_dir().join("tabs.json")
}

/// Location of the log file written when logging is enabled.
pub fn log_file() -> PathBuf {
    get_config_dir().join("tabset.log")
}
