use std::sync::Once;

/// Default filter when neither the config nor `RUST_LOG` names one.
const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Logger configuration.
///
/// `env_filter` uses `env_logger` filter syntax, e.g. `"warn"` or
/// `"tessera_geom=trace,tessera_inspect=debug"`. When `None`, `RUST_LOG`
/// is consulted instead.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Config with an explicit filter that takes precedence over `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    /// The filter string that `init_logging` will apply, if any.
    fn resolved_filter(&self) -> Option<String> {
        let non_blank = |f: &String| !f.trim().is_empty();
        self.env_filter
            .clone()
            .filter(non_blank)
            .or_else(|| std::env::var("RUST_LOG").ok().filter(non_blank))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend.
///
/// Only the first call has any effect. Call it early in `main`; library code
/// only ever talks to the `log` facade.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolved_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(DEFAULT_LEVEL);
            }
        }

        builder.write_style(config.write_style);

        // A second logger may already be installed by a host application.
        if let Err(err) = builder.try_init() {
            eprintln!("tessera: logger not installed: {err}");
            return;
        }

        log::debug!("logging initialized");
    });
}
