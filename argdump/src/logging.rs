use flexi_logger::{LogSpecification, Logger, LoggerHandle};

use crate::error::Result;

/// Start the stderr logger. `RUST_LOG` wins over the built-in `warn` level.
pub fn init() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("warn")?
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Raise the log level once per `-v` seen on the command line.
pub fn apply_verbosity(handle: &mut LoggerHandle, verbose: u8) -> Result<()> {
    if verbose == 0 {
        return Ok(());
    }
    handle.set_new_spec(LogSpecification::parse(level_for(verbose))?);
    Ok(())
}
