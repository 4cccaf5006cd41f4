use std::cell::{RefCell, RefMut};

use log::info;
use optparse::{Opt, OptionTable, Parser};

use crate::error::{ArgdumpError, Result};

const USAGE_HEADER: &str = "Usage: argdump [OPTION]... [-] [ARG]...
Print every option argdump recognizes and the positional arguments left over.
A lone '-' ends option processing.

Options:
";

pub const DEFAULT_PREFIX: &str = "arg";
pub const DEFAULT_SEPARATOR: &str = ": ";

/// One recognized option, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Flag as shown in the help text, e.g. `--output` or `-s`.
    pub name: &'static str,
    pub value: Option<String>,
}

#[derive(Debug)]
pub struct Cmdline {
    pub help: bool,
    pub version: bool,
    pub output: Option<String>,
    pub prefix: Option<String>,
    pub separator: String,
    pub verbose: u8,
    pub quiet: bool,
    pub strict: bool,
    pub keep_going: bool,
    pub events: Vec<Event>,
    /// Errors reported and skipped under `--keep-going`.
    pub problems: Vec<String>,
    pub positional: Vec<String>,
}

impl Default for Cmdline {
    fn default() -> Self {
        Cmdline {
            help: false,
            version: false,
            output: None,
            prefix: Some(DEFAULT_PREFIX.to_string()),
            separator: DEFAULT_SEPARATOR.to_string(),
            verbose: 0,
            quiet: false,
            strict: false,
            keep_going: false,
            events: Vec::new(),
            problems: Vec::new(),
            positional: Vec::new(),
        }
    }
}

// Record the event and hand back the borrow so the action can update its field.
fn note<'c>(
    cmd: &'c RefCell<Cmdline>,
    name: &'static str,
    value: Option<&str>,
) -> RefMut<'c, Cmdline> {
    let mut cmd = cmd.borrow_mut();
    cmd.events.push(Event {
        name,
        value: value.map(str::to_string),
    });
    cmd
}

fn build_options(cmd: &RefCell<Cmdline>) -> OptionTable<'_> {
    OptionTable::new()
        .option(
            Opt::new('h')
                .long("help")
                .description("Show this help and exit.")
                .action(move |v| note(cmd, "--help", v).help = true),
        )
        .option(
            Opt::new('V')
                .long("version")
                .description("Print the version and exit.")
                .action(move |v| note(cmd, "--version", v).version = true),
        )
        .option(
            Opt::new('o')
                .long("output")
                .arg("FILE")
                .description("Write the report to FILE instead of standard output.")
                .action(move |v| {
                    note(cmd, "--output", v).output = v.map(str::to_string);
                }),
        )
        .option(
            Opt::new('p')
                .long("prefix")
                .arg("[TEXT]")
                .description("Label positional lines with TEXT; no TEXT drops the label.")
                .action(move |v| {
                    note(cmd, "--prefix", v).prefix = v.map(str::to_string);
                }),
        )
        .option(
            Opt::new('s')
                .arg("SEP")
                .description("Separator between label and value.")
                .action(move |v| {
                    let mut cmd = note(cmd, "-s", v);
                    if let Some(sep) = v {
                        cmd.separator = sep.to_string();
                    }
                }),
        )
        .option(
            Opt::new('v')
                .long("verbose")
                .description("Log more; repeat for more detail.")
                .action(move |v| {
                    let mut cmd = note(cmd, "--verbose", v);
                    cmd.verbose = cmd.verbose.saturating_add(1);
                }),
        )
        .option(
            Opt::new('q')
                .long("quiet")
                .description("Do not list recognized options.")
                .action(move |v| note(cmd, "--quiet", v).quiet = true),
        )
        .option(
            Opt::new('W')
                .long("strict")
                .description("Treat warnings as errors.")
                .action(move |v| note(cmd, "--strict", v).strict = true),
        )
        .option(
            Opt::new('k')
                .long("keep-going")
                .description("Report unknown options and missing values, then continue.")
                .action(move |v| note(cmd, "--keep-going", v).keep_going = true),
        )
}

pub fn usage() -> String {
    let scratch = RefCell::new(Cmdline::default());
    format!("{}{}", USAGE_HEADER, build_options(&scratch).describe())
}

/// Parse `argv` (program name first) into a `Cmdline`.
///
/// `--strict` and `--keep-going` take effect from the point they appear:
/// the hooks consult the flags as they stand when a problem is found.
pub fn parse_args<I>(argv: I) -> Result<Cmdline>
where
    I: IntoIterator<Item = String>,
{
    let cmd = RefCell::new(Cmdline::default());
    let table = build_options(&cmd);

    let mut parser = Parser::new(&table)
        .on_warning(|warning| {
            if cmd.borrow().strict {
                return Err(warning);
            }
            optparse::default_warning(warning)
        })
        .on_error(|error| {
            if !cmd.borrow().keep_going {
                return Err(error);
            }
            eprintln!("argdump: {}", error);
            cmd.borrow_mut().problems.push(error.to_string());
            Ok(())
        });

    parser.parse(argv)?;

    let mut positional = Vec::new();
    while let Some(arg) = parser.shift() {
        positional.push(arg.to_string());
    }
    drop(parser);
    drop(table);

    let mut cmdline = cmd.into_inner();
    info!(
        "{} option(s), {} positional argument(s)",
        cmdline.events.len(),
        positional.len()
    );
    cmdline.positional = positional;

    if cmdline.output.as_deref() == Some("") {
        return Err(ArgdumpError::User("empty output file name".to_string()));
    }
    Ok(cmdline)
}
