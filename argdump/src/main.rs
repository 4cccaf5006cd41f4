mod arguments;
mod error;
mod logging;
mod report;

use std::io::Write;

use log::{debug, info};

use error::{yourfault, ArgdumpError, Result};

fn run() -> Result<i32> {
    let mut logger = logging::init()?;
    let cmdline = arguments::parse_args(std::env::args())?;
    logging::apply_verbosity(&mut logger, cmdline.verbose)?;
    debug!("{:?}", cmdline);

    if cmdline.help {
        print!("{}", arguments::usage());
        return Ok(0);
    }
    if cmdline.version {
        println!("argdump {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let text = report::render(&cmdline);
    match &cmdline.output {
        Some(path) => {
            info!("writing report to {}", path);
            std::fs::write(path, text).map_err(|e| {
                ArgdumpError::User(format!("{}: {}", path, e))
            })?;
        }
        None => std::io::stdout().write_all(text.as_bytes())?,
    }

    Ok(if cmdline.problems.is_empty() { 0 } else { 1 })
}

fn main() {
    match run() {
        Ok(code) => {
            let _ = std::io::stdout().flush();
            std::process::exit(code)
        }
        Err(ArgdumpError::Parse(e)) => {
            yourfault(&format!(
                "argdump: {}\nTry 'argdump --help' for more information.",
                e
            ));
        }
        Err(e) => yourfault(&format!("argdump: {}", e)),
    }
}
