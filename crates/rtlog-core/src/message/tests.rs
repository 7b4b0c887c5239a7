use super::*;
use pretty_assertions::assert_eq;
use std::fmt::Write as _;

#[test]
fn test_prefix_has_label_file_and_line() {
    let msg = LogMessage::new(Severity::Warning, "src/runtime.rs", 42);
    assert_eq!(msg.text(), "[WARNING] src/runtime.rs:42 ");
    let _ = msg.into_line();
}

#[test]
fn test_append_composes_display_values() {
    let line = LogMessage::new(Severity::Info, "a.rs", 1)
        .append("shape=")
        .append(3)
        .append('x')
        .append(4.5)
        .into_line();

    assert_eq!(line.as_deref(), Some("[INFO] a.rs:1 shape=3x4.5\n"));
}

#[test]
fn test_fmt_write_appends() {
    let mut msg = LogMessage::new(Severity::Debug, "b.rs", 7);
    let _ = write!(msg, "{}-{}", 1, 2);
    assert_eq!(msg.into_line().as_deref(), Some("[DEBUG] b.rs:7 1-2\n"));
}

#[test]
fn test_existing_newline_not_doubled() {
    let line = LogMessage::new(Severity::Error, "c.rs", 3)
        .append("done\n")
        .into_line();
    assert_eq!(line.as_deref(), Some("[ERROR] c.rs:3 done\n"));
}

#[test]
fn test_vlog_cutoff() {
    assert!(vlog_is_on(0));
    assert!(vlog_is_on(1));
    assert!(!vlog_is_on(2));
    assert!(!vlog_is_on(10));

    assert_eq!(
        LogMessage::verbose(1).append("hi").into_line().as_deref(),
        Some("[VLOG1] hi\n")
    );
    assert_eq!(LogMessage::verbose(2).append("hi").into_line(), None);
}

#[test]
fn test_muted_message_ignores_appends() {
    let mut msg = LogMessage::verbose(3).append("dropped");
    let _ = msg.write_str("also dropped");
    assert!(!msg.is_enabled());
    assert_eq!(msg.text(), "");
}

#[test]
fn test_log_macro_prefix() {
    let line = line!() + 1;
    let msg = crate::log!(INFO).append("x");
    assert_eq!(msg.text(), format!("[INFO] {}:{line} x", file!()));
    let _ = msg.into_line();
}

#[test]
fn test_log_macros_never_panic() {
    crate::log!(FATAL, "fatal is only a label {}", 1);
    crate::log!(ERROR, "e");
    crate::log!(WARNING, "w");
    crate::log!(INFO, "i");
    crate::log!(DEBUG, "d");
    crate::log!(Info, "variant spelling works too");
    crate::vlog!(0, "level {}", 0);
    crate::vlog!(1).append("level 1");
}

#[test]
fn test_vlog_above_cutoff_skips_arguments() {
    let mut evaluated = false;
    crate::vlog!(2, "{}", {
        evaluated = true;
        "x"
    });
    assert!(!evaluated);

    crate::vlog!(1, "{}", {
        evaluated = true;
        "x"
    });
    assert!(evaluated);
}
