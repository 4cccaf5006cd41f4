use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ArgdumpError {
    #[error("{0}")]
    User(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Parse(#[from] optparse::Error),

    #[error("cannot set up logging: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, ArgdumpError>;

/// Print `msg` and exit with status 1.
pub fn yourfault(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}
