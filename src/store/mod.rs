pub mod config_path;
pub mod tab_config;
