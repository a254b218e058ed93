//! Logging level resolution shared by the binaries

pub const LOG_LEVEL_ENV: &str = "VISUWEAVE_LOG_LEVEL";

pub fn parse_log_level(value: &str) -> Option<log::LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        "off" => Some(log::LevelFilter::Off),
        _ => None,
    }
}

pub fn level_to_str(level: log::LevelFilter) -> &'static str {
    match level {
        log::LevelFilter::Trace => "trace",
        log::LevelFilter::Debug => "debug",
        log::LevelFilter::Info => "info",
        log::LevelFilter::Warn => "warn",
        log::LevelFilter::Error => "error",
        log::LevelFilter::Off => "off",
    }
}

/// `VISUWEAVE_LOG_LEVEL` wins when valid; otherwise debug builds log at
/// `debug` and everything else at `info`.
pub fn resolve_default_level(is_debug: bool) -> log::LevelFilter {
    resolve_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref(), is_debug)
}

fn resolve_level(env_value: Option<&str>, is_debug: bool) -> log::LevelFilter {
    let fallback = if is_debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    match env_value {
        Some(val) => parse_log_level(val).unwrap_or_else(|| {
            eprintln!(
                "Warning: Invalid {} '{}', falling back to default",
                LOG_LEVEL_ENV, val
            );
            fallback
        }),
        None => fallback,
    }
}
