use std::io::Write;
use std::sync::Once;

/// Logger configuration.
///
/// `filter` uses the `env_logger` syntax (e.g. "debug",
/// "bouncing_shadow=trace,wgpu_core=warn"). When unset, `RUST_LOG` is used,
/// then [`DEFAULT_FILTER`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Info for the app; the GPU stack is noisy below warn
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Pick the filter string: explicit config, then `RUST_LOG`, then the default
pub fn resolve_filter(config: &LoggingConfig, env: Option<String>) -> String {
    config
        .filter
        .clone()
        .or(env)
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the global logger. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(&config, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            });

        // A test harness may already own the logger
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filter '{}'", filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig {
            filter: Some("debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_filter(&config, Some("trace".into())), "debug");
    }

    #[test]
    fn env_filter_before_default() {
        let config = LoggingConfig::default();
        assert_eq!(resolve_filter(&config, Some("warn".into())), "warn");
        assert_eq!(resolve_filter(&config, None), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            filter: Some("trace".into()),
            ..LoggingConfig::default()
        });
    }
}
