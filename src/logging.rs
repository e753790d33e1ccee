use tracing_subscriber::EnvFilter;

use crate::error::{FrontendError, Result};
use crate::settings::Settings;

/// 安装全局 tracing subscriber
///
/// 优先读取 `RUST_LOG`，否则使用 `settings.log_filter`。
/// 重复调用会返回 [`FrontendError::Logging`]。
pub fn init(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| FrontendError::Logging(e.to_string()))
}
