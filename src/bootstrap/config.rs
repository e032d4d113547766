//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Locate the configuration file / 定位配置文件
//! - ✅ Read TOML and map it to the `PasteboardConfig` DTO / 读取 TOML 并映射为 DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value logic / 禁止默认值逻辑**

use std::path::{Path, PathBuf};

use anyhow::Context;
use pb_core::config::PasteboardConfig;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "PASTEBOARD_CONFIG";

/// Where the configuration file is expected.
///
/// `$PASTEBOARD_CONFIG` wins; otherwise `<config dir>/pasteboard/config.toml`.
/// Returns `None` when neither is available.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("pasteboard").join("config.toml"))
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// A file that does not exist is not an error: it yields
/// [`PasteboardConfig::empty`]. Everything else in the file is accepted as
/// a fact.
///
/// # Errors / 错误
///
/// - File exists but cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<PasteboardConfig> {
    if !config_path.exists() {
        return Ok(PasteboardConfig::empty());
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    PasteboardConfig::from_toml(&toml_value)
}
