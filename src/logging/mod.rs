//=========================================================================
// Logging Bootstrap
//=========================================================================
//
// One-shot `env_logger` initialization for hosts and tests.
//
// The library itself only emits through the `log` facade (subsystem
// targets: "screens", "runner"); installing a logger is the host's call,
// typically early in `main`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Once;

//=== LoggingConfig =======================================================

/// Logger configuration.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "limelight::screens=debug"). When unset, `RUST_LOG` is honored and the
/// fallback level is `Info`.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

//=== Initialization ======================================================

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored, so library tests and hosts
/// can both call it without coordinating.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);
        builder.init();
    });
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig {
            filter: Some("debug".to_string()),
            ..Default::default()
        });
    }
}
