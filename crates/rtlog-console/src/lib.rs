//! `env_logger` backend for the `log` facade, formatted like `rtlog_core::log!`.
//!
//! Failed checks report on the `check` target before they panic. Installing
//! this logger makes those records, and any other `log` records, come out as
//! `[LEVEL] file:line message` on stderr.

use env_logger::{Builder, WriteStyle};
use log::{LevelFilter, Record};
use rtlog_core::Severity;

use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleLoggerError {
    #[error("console logger init failed: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}

pub type ConsoleLoggerResult<T> = Result<T, ConsoleLoggerError>;

#[derive(Debug, Clone)]
pub struct ConsoleLoggerConfig {
    pub level: LevelFilter,
    pub colors: bool,
    pub include_target: bool,
}

impl ConsoleLoggerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let level = var("RTLOG_LOG")
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);
        let colors = var("RTLOG_LOG_COLORS").map(|v| v != "0").unwrap_or(true);
        let include_target = var("RTLOG_LOG_TARGET").map(|v| v != "0").unwrap_or(true);

        Self {
            level,
            colors,
            include_target,
        }
    }
}

impl Default for ConsoleLoggerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

pub struct ConsoleLogger {
    config: ConsoleLoggerConfig,
    initialized: bool,
}

impl ConsoleLogger {
    #[inline]
    pub fn new(config: ConsoleLoggerConfig) -> Self {
        Self {
            config,
            initialized: false,
        }
    }

    #[inline]
    pub fn config(&self) -> &ConsoleLoggerConfig {
        &self.config
    }

    /// Install as the global logger. A second call on the same value is a no-op.
    pub fn init(&mut self) -> ConsoleLoggerResult<()> {
        if self.initialized {
            return Ok(());
        }

        self.builder().try_init()?;

        self.initialized = true;
        Ok(())
    }

    fn builder(&self) -> Builder {
        let mut builder = Builder::new();
        builder.filter_level(self.config.level);
        builder.write_style(if self.config.colors {
            WriteStyle::Auto
        } else {
            WriteStyle::Never
        });

        let include_target = self.config.include_target;
        builder.format(move |buf, record| {
            let style = buf.default_level_style(record.level());
            let label = Severity::from_log_level(record.level()).label();
            writeln!(
                buf,
                "[{style}{label}{style:#}] {}",
                record_body(record, include_target)
            )
        });

        builder
    }
}

/// Everything after the `[LEVEL] ` label.
fn record_body(record: &Record<'_>, include_target: bool) -> String {
    let file = record.file().unwrap_or("?");
    let location = match record.line() {
        Some(line) => format!("{file}:{line}"),
        None => file.to_owned(),
    };

    if include_target {
        format!("{:<12} {location} {}", record.target(), record.args())
    } else {
        format!("{location} {}", record.args())
    }
}
