use rtlog_console::{ConsoleLogger, ConsoleLoggerConfig};
use rtlog_core::{check, check_eq, check_lt, dcheck, log, panic_message, try_check_le, vlog};

use std::panic;

fn tensor_bytes(shape: &[usize], elem_size: usize) -> usize {
    check!(!shape.is_empty(), "shape must have at least one dim");
    dcheck!(elem_size.is_power_of_two());
    shape.iter().product::<usize>() * elem_size
}

fn main() -> anyhow::Result<()> {
    ConsoleLogger::new(ConsoleLoggerConfig::from_env()).init()?;

    log!(FATAL, "label only, execution continues");
    log!(ERROR, "error line");
    log!(WARNING).append("warning line, code=").append(17);
    log!(INFO, "info line");
    log!(DEBUG, "debug line");

    vlog!(0, "verbose level 0 is printed");
    vlog!(1, "verbose level 1 is printed");
    vlog!(2, "verbose level 2 is not");

    check_eq!(tensor_bytes(&[2, 3], 4), 24);
    check_lt!(tensor_bytes(&[1], 1), 2);
    try_check_le!(tensor_bytes(&[4, 4], 2), 32, "small enough to inline")?;

    ::log::info!(target: "demo", "now failing a check on purpose");

    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let caught = panic::catch_unwind(|| tensor_bytes(&[], 4));
    panic::set_hook(hook);

    match caught {
        Ok(bytes) => log!(WARNING, "check unexpectedly passed ({bytes} bytes)"),
        Err(payload) => log!(
            ERROR,
            "caught: {}",
            panic_message(payload.as_ref()).unwrap_or("<non-string panic>")
        ),
    }

    Ok(())
}
