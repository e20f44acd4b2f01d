use crate::config::{LogFormat, LogSettings};
use tracing_subscriber::EnvFilter;

/// 安装全局 tracing 订阅者。`RUST_LOG` 优先于配置中的过滤表达式。
pub fn init(log: &LogSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log.filter))?;

    match log.format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_ansi(false)
            .with_env_filter(filter)
            .with_file(true)
            .with_line_number(true)
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .flatten_event(true)
            .try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
}
