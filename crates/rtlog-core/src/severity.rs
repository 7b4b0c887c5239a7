use std::fmt;

pub const LOG_FATAL: i32 = 0;
pub const LOG_ERROR: i32 = 1;
pub const LOG_WARNING: i32 = 2;
pub const LOG_INFO: i32 = 3;
pub const LOG_DEBUG: i32 = 4;

/// Severity label attached to a `log!` line.
///
/// Labels are text only. No severity is filtered and `Fatal` does not abort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Severity {
    Fatal = LOG_FATAL,
    Error = LOG_ERROR,
    Warning = LOG_WARNING,
    Info = LOG_INFO,
    Debug = LOG_DEBUG,
}

// Upper-case spellings so `log!(INFO, ..)` resolves to `Severity::INFO`.
impl Severity {
    pub const FATAL: Self = Self::Fatal;
    pub const ERROR: Self = Self::Error;
    pub const WARNING: Self = Self::Warning;
    pub const INFO: Self = Self::Info;
    pub const DEBUG: Self = Self::Debug;
}

impl Severity {
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            LOG_FATAL => Some(Self::Fatal),
            LOG_ERROR => Some(Self::Error),
            LOG_WARNING => Some(Self::Warning),
            LOG_INFO => Some(Self::Info),
            LOG_DEBUG => Some(Self::Debug),
            _ => None,
        }
    }

    /// Closest label for a `log` facade record. `Trace` folds into `Debug`.
    #[inline]
    pub const fn from_log_level(level: ::log::Level) -> Self {
        match level {
            ::log::Level::Error => Self::Error,
            ::log::Level::Warn => Self::Warning,
            ::log::Level::Info => Self::Info,
            ::log::Level::Debug | ::log::Level::Trace => Self::Debug,
        }
    }
}

impl From<Severity> for ::log::Level {
    #[inline]
    fn from(value: Severity) -> Self {
        match value {
            Severity::Fatal | Severity::Error => ::log::Level::Error,
            Severity::Warning => ::log::Level::Warn,
            Severity::Info => ::log::Level::Info,
            Severity::Debug => ::log::Level::Debug,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
