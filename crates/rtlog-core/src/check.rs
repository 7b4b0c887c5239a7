//! Condition checks.
//!
//! Every variant funnels into [`check_failed`]: a false condition logs the
//! description on the `check` target and panics with it. Checks never return
//! an error to the caller; use the `try_check*` forms when a `Result` is
//! wanted instead.
//!
//! The `dcheck*` tier is compiled in but skipped unless [`DCHECK_ENABLED`] is
//! set, so its condition is type-checked and never evaluated in release
//! builds. Do not put side effects you rely on inside a `dcheck!`.

use std::any::Any;
use std::fmt;

/// Whether `dcheck*` conditions are evaluated.
///
/// On in debug builds, or in any build with the `dcheck` feature.
pub const DCHECK_ENABLED: bool = cfg!(any(debug_assertions, feature = "dcheck"));

/// A failed check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Check failed: {condition}{} at {file}:{line}", message_suffix(.message))]
pub struct CheckError {
    condition: &'static str,
    file: &'static str,
    line: u32,
    message: Option<String>,
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" {m}"),
        None => String::new(),
    }
}

impl CheckError {
    #[inline]
    pub fn new(
        condition: &'static str,
        file: &'static str,
        line: u32,
        message: Option<String>,
    ) -> Self {
        Self {
            condition,
            file,
            line,
            message,
        }
    }

    /// Source text of the condition that was false.
    #[inline]
    pub fn condition(&self) -> &'static str {
        self.condition
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Raise a failed check. Called by the check macros.
#[cold]
#[inline(never)]
pub fn check_failed(
    condition: &'static str,
    file: &'static str,
    line: u32,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let err = CheckError::new(condition, file, line, message.map(|m| m.to_string()));
    ::log::error!(target: "check", "{err}");
    panic!("{err}");
}

/// Description carried by a caught panic, if it was a string payload.
///
/// Failed checks always panic with a `String`.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&'static str>().copied())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_message {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::core::format_args!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_check_message {
    () => {
        ::core::option::Option::None
    };
    ($($arg:tt)+) => {
        ::core::option::Option::Some(::std::format!($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __icheck_op {
    ($op:tt, $a:expr, $b:expr $(, $($arg:tt)*)?) => {
        if !($a $op $b) {
            $crate::check_failed(
                ::core::concat!(
                    ::core::stringify!($a),
                    " ",
                    ::core::stringify!($op),
                    " ",
                    ::core::stringify!($b)
                ),
                ::core::file!(),
                ::core::line!(),
                $crate::__check_message!($($($arg)*)?),
            )
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __try_check_op {
    ($op:tt, $a:expr, $b:expr $(, $($arg:tt)*)?) => {
        if $a $op $b {
            ::core::result::Result::Ok(())
        } else {
            ::core::result::Result::Err($crate::CheckError::new(
                ::core::concat!(
                    ::core::stringify!($a),
                    " ",
                    ::core::stringify!($op),
                    " ",
                    ::core::stringify!($b)
                ),
                ::core::file!(),
                ::core::line!(),
                $crate::__try_check_message!($($($arg)*)?),
            ))
        }
    };
}

/// Panic with `Check failed: <cond> [msg] at <file>:<line>` if `cond` is false.
///
/// ```should_panic
/// let n = 3;
/// rtlog_core::icheck!(n % 2 == 0, "n = {}", n);
/// ```
#[macro_export]
macro_rules! icheck {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::check_failed(
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
                ::core::option::Option::None,
            )
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::check_failed(
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
                $crate::__check_message!($($arg)+),
            )
        }
    };
}

/// `icheck!` with a single `Display` message.
#[macro_export]
macro_rules! icheck_msg {
    ($cond:expr, $msg:expr $(,)?) => {
        $crate::icheck!($cond, "{}", $msg)
    };
}

#[macro_export]
macro_rules! icheck_eq {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(==, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! icheck_ne {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(!=, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! icheck_lt {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(<, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! icheck_le {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(<=, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! icheck_gt {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(>, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! icheck_ge {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__icheck_op!(>=, $a, $b $(, $($arg)*)?) };
}

/// Same as [`icheck!`].
#[macro_export]
macro_rules! check {
    ($($t:tt)+) => { $crate::icheck!($($t)+) };
}

#[macro_export]
macro_rules! check_eq {
    ($($t:tt)+) => { $crate::icheck_eq!($($t)+) };
}

#[macro_export]
macro_rules! check_ne {
    ($($t:tt)+) => { $crate::icheck_ne!($($t)+) };
}

#[macro_export]
macro_rules! check_lt {
    ($($t:tt)+) => { $crate::icheck_lt!($($t)+) };
}

#[macro_export]
macro_rules! check_le {
    ($($t:tt)+) => { $crate::icheck_le!($($t)+) };
}

#[macro_export]
macro_rules! check_gt {
    ($($t:tt)+) => { $crate::icheck_gt!($($t)+) };
}

#[macro_export]
macro_rules! check_ge {
    ($($t:tt)+) => { $crate::icheck_ge!($($t)+) };
}

/// [`icheck!`] when [`DCHECK_ENABLED`], otherwise nothing is evaluated.
#[macro_export]
macro_rules! dcheck {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_eq {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_eq!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_ne {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_ne!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_lt {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_lt!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_le {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_le!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_gt {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_gt!($($t)+)
        }
    };
}

#[macro_export]
macro_rules! dcheck_ge {
    ($($t:tt)+) => {
        if $crate::DCHECK_ENABLED {
            $crate::icheck_ge!($($t)+)
        }
    };
}

/// Like [`icheck!`], but evaluates to `Result<(), CheckError>` instead of
/// panicking.
///
/// ```
/// fn parse(len: usize) -> Result<(), rtlog_core::CheckError> {
///     rtlog_core::try_check!(len > 0, "empty input")?;
///     Ok(())
/// }
/// assert!(parse(0).is_err());
/// ```
#[macro_export]
macro_rules! try_check {
    ($cond:expr $(,)?) => {
        if $cond {
            ::core::result::Result::Ok(())
        } else {
            ::core::result::Result::Err($crate::CheckError::new(
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
                ::core::option::Option::None,
            ))
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if $cond {
            ::core::result::Result::Ok(())
        } else {
            ::core::result::Result::Err($crate::CheckError::new(
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
                $crate::__try_check_message!($($arg)+),
            ))
        }
    };
}

#[macro_export]
macro_rules! try_check_eq {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(==, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! try_check_ne {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(!=, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! try_check_lt {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(<, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! try_check_le {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(<=, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! try_check_gt {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(>, $a, $b $(, $($arg)*)?) };
}

#[macro_export]
macro_rules! try_check_ge {
    ($a:expr, $b:expr $(, $($arg:tt)*)?) => { $crate::__try_check_op!(>=, $a, $b $(, $($arg)*)?) };
}
