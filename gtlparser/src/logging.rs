//! Logging initialization using `tracing` and `tracing-subscriber`.
//!
//! Logging is controlled by:
//! - [`EnvFilter`]: log level filtering from `RUST_LOG`
//! - [`LogFormat`]: output format from `GTLPARSER_FORMAT` (json, full, compact, bare, pretty)

use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing::{Dispatch, Level};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Emit human-readable, single-line logs.
    Full,

    /// A variant of the full-format, optimized for short line lengths (default).
    Compact,

    /// A very bare format without timestamps, targets or ANSI colors.
    Bare,

    /// Excessively pretty, multi-line logs for local development/debugging.
    Pretty,

    /// Output newline-delimited (structured) JSON logs.
    Json,
}

impl LogFormat {
    fn dispatch(self, env_filter: EnvFilter) -> Dispatch {
        match self {
            Self::Full => tracing_subscriber::fmt()
                .with_span_events(FmtSpan::NONE)
                .with_env_filter(env_filter)
                .finish()
                .into(),
            Self::Compact => tracing_subscriber::fmt()
                .compact()
                .with_span_events(FmtSpan::NONE)
                .with_env_filter(env_filter)
                .finish()
                .into(),
            Self::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(env_filter)
                .finish()
                .into(),
            Self::Bare => tracing_subscriber::fmt()
                .compact()
                .with_span_events(FmtSpan::NONE)
                .without_time()
                .with_target(false)
                .with_ansi(false)
                .with_env_filter(env_filter)
                .finish()
                .into(),
            Self::Json => tracing_subscriber::fmt()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_env_filter(env_filter)
                .finish()
                .into(),
        }
    }

    /// Install the subscriber for this format as the global default.
    ///
    /// Uses `set_global_default` rather than `SubscriberInitExt::init()`,
    /// which would install a second `LogTracer` next to [`init_log_bridge`].
    pub fn init(self, env_filter: EnvFilter) {
        if let Err(e) = tracing::dispatcher::set_global_default(self.dispatch(env_filter)) {
            eprintln!("Warning: unable to set up logging: {e}");
        }
    }
}

impl Default for LogFormat {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            "pretty" | "verbose" => Ok(Self::Pretty),
            "bare" => Ok(Self::Bare),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(format!(
                "Invalid log format '{s}'. Valid options: json, full, compact, bare or pretty"
            )),
        }
    }
}

fn log_level_filter(level: Level) -> log::LevelFilter {
    match level {
        Level::TRACE => log::LevelFilter::Trace,
        Level::DEBUG => log::LevelFilter::Debug,
        Level::INFO => log::LevelFilter::Info,
        Level::WARN => log::LevelFilter::Warn,
        Level::ERROR => log::LevelFilter::Error,
    }
}

/// Forward `log` records into `tracing`.
///
/// Call once, before the tracing subscriber is installed.
fn init_log_bridge(env_filter: &EnvFilter) {
    let mut log_builder = tracing_log::LogTracer::builder()
        .with_interest_cache(tracing_log::InterestCacheConfig::default());
    if let Some(Some(max_level)) = env_filter.max_level_hint().map(LevelFilter::into_level) {
        log_builder = log_builder.with_max_level(log_level_filter(max_level));
    }
    if let Err(e) = log_builder.init() {
        eprintln!("Warning: unable to forward log records to tracing: {e}");
    }
}

/// Initialize the global tracing subscriber for the given filter and format.
///
/// An invalid filter falls back to `debug`, an invalid format to [`LogFormat::default`].
pub fn init_tracing(filter: &str, format: Option<String>) {
    let env_filter = EnvFilter::from_str(filter).unwrap_or_else(|_| {
        eprintln!("Warning: Invalid filter string '{filter}' passed. Since you passed a filter, you likely want to debug us, so we set the filter to debug");
        EnvFilter::new("debug")
    });

    let log_format = format
        .and_then(|s| {
            s.parse::<LogFormat>()
                .map_err(|e| {
                    eprintln!("Warning: {e}");
                    eprintln!(
                        "Falling back to default format ({:?})",
                        LogFormat::default()
                    );
                })
                .ok()
        })
        .unwrap_or_default();

    init_log_bridge(&env_filter);
    log_format.init(env_filter);
}

/// Mirror the `replacement` level (e.g. `gtlparser=`) for `gtlparser_core` unless it is set explicitly.
#[must_use]
pub fn ensure_gtlparser_core_log_level_matches(
    env_filter: Option<String>,
    replacement: &'static str,
) -> String {
    let Some(rust_log) = env_filter else {
        return format!("{replacement}info,gtlparser_core=info");
    };
    if !rust_log.contains(replacement) || rust_log.contains("gtlparser_core=") {
        return rust_log;
    }
    match rust_log
        .split(',')
        .find_map(|s| s.strip_prefix(replacement))
    {
        Some(level) => format!("{rust_log},gtlparser_core={level}"),
        None => rust_log,
    }
}
