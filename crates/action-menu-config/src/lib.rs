//! Configuration and file management for action-menu
//!
//! This crate provides:
//! - File path utilities for config and cache directories
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig): menu settings, shortcut
//!   overrides and the query action template

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, MenuConfig, QueryActionConfig, ShortcutOverride};
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
