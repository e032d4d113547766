pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config_path};
pub use self::tracing::{init_tracing_subscriber, LoggingSettings};
pub use wiring::{build_factory, resolve_backend, HostBackend};
