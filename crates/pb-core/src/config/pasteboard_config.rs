//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define configuration data structures / 定义配置数据结构
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation logic / 禁止验证逻辑**
//! ❌ **No default value calculation / 禁止默认值计算**
//!
//! Deciding what an empty backend or a missing `wrap_document` means is
//! wiring policy and lives in the bootstrap layer.

use std::path::PathBuf;

/// Pasteboard configuration DTO (pure data, no logic)
/// 剪贴板配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteboardConfig {
    /// Host backend name: `system`, `memory`, `none`, or empty (a fact, not an error)
    pub clipboard_backend: String,

    /// Explicit override for wrapping copied HTML in a UTF-8 document
    pub wrap_html_document: Option<bool>,

    /// Log level directive (may be empty)
    pub log_level: String,

    /// Directory for rolling log files (empty means stdout only)
    pub log_directory: PathBuf,
}

impl PasteboardConfig {
    /// Create PasteboardConfig from TOML value
    /// 从 TOML 值创建 PasteboardConfig
    ///
    /// Missing sections and keys map to empty values.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            clipboard_backend: toml_value
                .get("clipboard")
                .and_then(|c| c.get("backend"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            wrap_html_document: toml_value
                .get("html")
                .and_then(|h| h.get("wrap_document"))
                .and_then(|v| v.as_bool()),
            log_level: toml_value
                .get("logging")
                .and_then(|l| l.get("level"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_directory: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("directory"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty PasteboardConfig (all empty/default values)
    /// 创建空的 PasteboardConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            clipboard_backend: String::new(),
            wrap_html_document: None,
            log_level: String::new(),
            log_directory: PathBuf::new(),
        }
    }
}
