//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Decide which host clipboard backs the process / 选择宿主剪贴板实现
//! - ✅ Install it as the process-wide clipboard / 安装为进程级剪贴板
//! - ✅ Build the `PasteboardFactory` the engine uses / 构建 `PasteboardFactory`
//!
//! This is the only place that depends on `pb-platform` and `pb-app` at once.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use pb_app::{HtmlWrapping, PasteboardFactory};
use pb_core::config::PasteboardConfig;
use pb_core::ports::SystemClipboardPort;
use pb_platform::{
    detect_clipboard_capability, install_system_clipboard, open_host_clipboard, system_clipboard,
    ClipboardCapability, InMemoryClipboard, NullClipboard,
};

/// Which host clipboard implementation to run against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostBackend {
    /// The operating system clipboard
    System,
    /// A process-local clipboard with both selections
    Memory,
    /// No clipboard: reads are empty, writes are dropped
    None,
}

impl FromStr for HostBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(HostBackend::System),
            "memory" => Ok(HostBackend::Memory),
            "none" => Ok(HostBackend::None),
            other => Err(anyhow::anyhow!(
                "unknown clipboard backend {other:?}, expected system, memory or none"
            )),
        }
    }
}

/// Resolve the configured backend name.
///
/// An empty name selects `system` when the host has a clipboard, else `none`.
pub fn resolve_backend(name: &str, capability: ClipboardCapability) -> anyhow::Result<HostBackend> {
    if name.trim().is_empty() {
        return Ok(if capability.has_clipboard() {
            HostBackend::System
        } else {
            HostBackend::None
        });
    }
    name.parse()
}

fn open_backend(
    backend: HostBackend,
    capability: ClipboardCapability,
) -> anyhow::Result<Arc<dyn SystemClipboardPort>> {
    Ok(match backend {
        HostBackend::System => {
            open_host_clipboard(capability).context("Failed to open the host clipboard")?
        }
        HostBackend::Memory => Arc::new(InMemoryClipboard::new()),
        HostBackend::None => Arc::new(NullClipboard),
    })
}

/// Wire the host clipboard and return the factory bound to it.
///
/// `backend_override` (from the command line) takes precedence over the
/// `[clipboard] backend` config key.
pub fn build_factory(
    config: &PasteboardConfig,
    backend_override: Option<&str>,
) -> anyhow::Result<PasteboardFactory> {
    let capability = detect_clipboard_capability();
    let name = backend_override.unwrap_or(&config.clipboard_backend);
    let backend = resolve_backend(name, capability)?;

    tracing::info!(backend = ?backend, capability = ?capability, "wiring host clipboard");
    install_system_clipboard(open_backend(backend, capability)?);

    Ok(PasteboardFactory::new(system_clipboard())
        .with_html_wrapping(HtmlWrapping::from_override(config.wrap_html_document)))
}
