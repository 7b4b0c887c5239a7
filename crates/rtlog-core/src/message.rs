//! Prefixed log lines on stderr.
//!
//! A [`LogMessage`] is a growing text buffer. It starts with its prefix,
//! collects whatever is appended, and writes itself as one line when dropped.
//! `log!(INFO)` hands one out for chaining; `log!(INFO, "..", ..)` formats and
//! writes in a single statement.

use crate::severity::Severity;

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write as _};

/// Highest `vlog!` level that is written. Fixed at compile time.
pub const VLOG_CUTOFF: i32 = 1;

#[inline]
pub const fn vlog_is_on(level: i32) -> bool {
    level <= VLOG_CUTOFF
}

pub struct LogMessage {
    buf: String,
    enabled: bool,
}

impl LogMessage {
    /// `[<LABEL>] <file>:<line> `
    pub fn new(severity: Severity, file: &str, line: u32) -> Self {
        let mut buf = String::with_capacity(64);
        let _ = write!(buf, "[{}] {}:{} ", severity.label(), file, line);
        Self { buf, enabled: true }
    }

    /// `[VLOG<level>] `, muted when `level` is above [`VLOG_CUTOFF`].
    pub fn verbose(level: i32) -> Self {
        if !vlog_is_on(level) {
            return Self {
                buf: String::new(),
                enabled: false,
            };
        }

        let mut buf = String::with_capacity(64);
        let _ = write!(buf, "[VLOG{level}] ");
        Self { buf, enabled: true }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append any displayable value.
    #[inline]
    pub fn append<T: Display>(mut self, value: T) -> Self {
        if self.enabled {
            let _ = write!(self.buf, "{value}");
        }
        self
    }

    /// Text written so far, without the trailing newline.
    #[inline]
    pub fn text(&self) -> &str {
        &self.buf
    }

    /// Take the finished line instead of writing it. `None` when muted.
    pub fn into_line(mut self) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.enabled = false;

        let mut line = std::mem::take(&mut self.buf);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        Some(line)
    }

    fn flush(&mut self) {
        if !self.enabled {
            return;
        }
        self.enabled = false;

        if !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }
        // One write per line keeps concurrent messages from interleaving mid-line.
        let _ = io::stderr().lock().write_all(self.buf.as_bytes());
    }
}

impl fmt::Write for LogMessage {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.buf.push_str(s);
        }
        Ok(())
    }
}

impl Drop for LogMessage {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Write `[<LEVEL>] <file>:<line> ...` to stderr.
///
/// `LEVEL` is one of `FATAL`, `ERROR`, `WARNING`, `INFO`, `DEBUG`. Every level
/// is written and none of them stop execution.
///
/// ```
/// use rtlog_core::log;
///
/// log!(INFO, "loaded {} tensors", 12);
/// log!(WARNING).append("cache miss: ").append(3);
/// ```
#[macro_export]
macro_rules! log {
    ($level:ident $(,)?) => {
        $crate::LogMessage::new($crate::Severity::$level, ::core::file!(), ::core::line!())
    };
    ($level:ident, $($arg:tt)+) => {{
        let _ = $crate::LogMessage::new($crate::Severity::$level, ::core::file!(), ::core::line!())
            .append(::core::format_args!($($arg)+));
    }};
}

/// Write `[VLOG<n>] ...` to stderr when `n <= VLOG_CUTOFF`.
///
/// In the formatting form the arguments are not evaluated above the cutoff.
#[macro_export]
macro_rules! vlog {
    ($level:expr $(,)?) => {
        $crate::LogMessage::verbose($level)
    };
    ($level:expr, $($arg:tt)+) => {{
        let level: i32 = $level;
        if $crate::vlog_is_on(level) {
            let _ = $crate::LogMessage::verbose(level).append(::core::format_args!($($arg)+));
        }
    }};
}

#[cfg(test)]
mod tests;
