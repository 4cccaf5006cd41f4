//! Small embeddable command-line option parser.
//!
//! Options are registered into an [`OptionTable`] as [`Opt`] definitions,
//! each carrying a short name, an optional long name, an optional value
//! placeholder and an action closure. A [`Parser`] scans an argument vector,
//! runs the action of every option it recognizes, and leaves the rest
//! available as positional arguments:
//!
//! ```
//! use std::cell::RefCell;
//! use optparse::{Opt, OptionTable, Parser};
//!
//! let output = RefCell::new(None);
//! let table = OptionTable::new()
//!     .option(Opt::new('h').long("help").description("show this help"))
//!     .option(
//!         Opt::new('o')
//!             .long("output")
//!             .arg("FILE")
//!             .action(|v| *output.borrow_mut() = v.map(str::to_string)),
//!     );
//!
//! let mut parser = Parser::new(&table);
//! parser.parse(["prog", "-o", "out.txt", "input"]).unwrap();
//! assert_eq!(output.borrow().as_deref(), Some("out.txt"));
//! assert_eq!(parser.args(), ["input"]);
//! ```
//!
//! Accepted forms are `-c`, `-cVALUE`, `-c VALUE`, `--name`, `--name=VALUE`
//! and `--name VALUE`. A bare `-` ends option scanning; `--` is not special.

mod error;
mod parser;
mod table;

pub use error::{Error, Result};
pub use parser::{default_error, default_warning, Hook, Parser};
pub use table::{Action, Opt, OptionTable};

/// Character introducing an option token.
pub const OPTION_MARKER: char = '-';

/// Prefix introducing a long option token.
pub const LONG_PREFIX: &str = "--";

/// Leading character of a value placeholder that marks the value optional.
pub const OPTIONAL_MARKER: char = '[';
