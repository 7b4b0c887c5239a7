//! Runtime check and log primitives.
//!
//! Two pieces live here:
//!
//! - the check family (`icheck!`, `check!`, `dcheck!` and their comparison
//!   forms) which panics with a `Check failed: <cond> at <file>:<line>`
//!   description when a condition is false;
//! - `log!` / `vlog!`, which write a prefixed line to stderr.
//!
//! Nothing here is filtered or configured at runtime. The only build-time knob
//! is the debug tier, see [`DCHECK_ENABLED`].

pub mod check;
pub mod message;
pub mod severity;

pub use check::{check_failed, panic_message, CheckError, DCHECK_ENABLED};
pub use message::{vlog_is_on, LogMessage, VLOG_CUTOFF};
pub use severity::{Severity, LOG_DEBUG, LOG_ERROR, LOG_FATAL, LOG_INFO, LOG_WARNING};
