use log::{debug, trace};

use crate::error::{Error, Result};
use crate::table::{Opt, OptionTable};
use crate::{LONG_PREFIX, OPTION_MARKER};

/// Diagnostic hook. Returning `Err` aborts `parse` with that error; returning
/// `Ok(())` lets scanning continue.
pub type Hook<'p> = Box<dyn FnMut(Error) -> Result<()> + 'p>;

/// Default warning hook: print to stderr and keep going.
pub fn default_warning(warning: Error) -> Result<()> {
    eprintln!("WARNING: {}", warning);
    Ok(())
}

/// Default error hook: abort parsing with the error.
pub fn default_error(error: Error) -> Result<()> {
    Err(error)
}

// ============================================================================
// ParseState — scan position over one argument vector
// ============================================================================

#[derive(Debug, Default)]
struct ParseState {
    tokens: Vec<String>,
    cursor: usize,
    // Value sliced out of the token just matched; taken by the very next
    // extraction.
    pending: Option<String>,
}

impl ParseState {
    fn reset(&mut self, tokens: Vec<String>) {
        // Token 0 is the program name.
        self.cursor = tokens.len().min(1);
        self.tokens = tokens;
        self.pending = None;
    }

    fn current(&self) -> Option<&str> {
        self.tokens.get(self.cursor).map(String::as_str)
    }

    fn next(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }
}

// ============================================================================
// Parser
// ============================================================================

pub struct Parser<'p> {
    table: &'p OptionTable<'p>,
    state: ParseState,
    on_warning: Hook<'p>,
    on_error: Hook<'p>,
}

impl<'p> Parser<'p> {
    pub fn new(table: &'p OptionTable<'p>) -> Self {
        Parser {
            table,
            state: ParseState::default(),
            on_warning: Box::new(default_warning),
            on_error: Box::new(default_error),
        }
    }

    pub fn on_warning<F>(mut self, hook: F) -> Self
    where
        F: FnMut(Error) -> Result<()> + 'p,
    {
        self.on_warning = Box::new(hook);
        self
    }

    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: FnMut(Error) -> Result<()> + 'p,
    {
        self.on_error = Box::new(hook);
        self
    }

    /// Parse the process's own arguments.
    pub fn parse_env(&mut self) -> Result<()> {
        self.parse(std::env::args())
    }

    /// Scan `argv` (element 0 being the program name), running the action of
    /// every matched option in order.
    ///
    /// Scanning stops at the first token not starting with `-`, or after a
    /// bare `-`. On error the cursor stays where the failure happened, so
    /// [`args`](Self::args) still reflects how far the scan got.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.reset(argv.into_iter().map(Into::into).collect());
        let table = self.table;

        while let Some(token) = self.state.current().map(str::to_string) {
            trace!("token {} at {}", token, self.state.cursor);

            if !token.starts_with(OPTION_MARKER) {
                debug!("positional arguments start at {}", self.state.cursor);
                break;
            }
            if token.len() == OPTION_MARKER.len_utf8() {
                self.state.next();
                debug!("end of options at {}", self.state.cursor);
                break;
            }

            match self.find_option(table, &token) {
                Some(opt) => {
                    debug!("{} matches -{}", token, opt.short());
                    self.state.next();
                    let value = self.extract_value(opt, &token)?;
                    opt.invoke(value.as_deref());
                }
                None => {
                    (self.on_error)(Error::UnknownOption(token))?;
                    // The hook chose to carry on; drop the offending token.
                    self.state.next();
                }
            }
        }
        Ok(())
    }

    /// Tokens not consumed by option scanning.
    pub fn args(&self) -> &[String] {
        &self.state.tokens[self.state.cursor..]
    }

    /// Consume the next unscanned token.
    pub fn shift(&mut self) -> Option<&str> {
        let idx = self.state.cursor;
        if idx >= self.state.tokens.len() {
            return None;
        }
        self.state.next();
        Some(&self.state.tokens[idx])
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    fn find_option<'t>(&mut self, table: &'t OptionTable<'p>, token: &str) -> Option<&'t Opt<'p>> {
        for opt in table {
            if let Some(attached) = match_token(opt, token) {
                self.state.pending = attached.map(str::to_string);
                return Some(opt);
            }
        }
        None
    }

    fn extract_value(&mut self, opt: &Opt<'_>, token: &str) -> Result<Option<String>> {
        let attached = self.state.pending.take();

        let Some(argument) = opt.argument() else {
            if attached.is_some() {
                (self.on_warning)(Error::SurplusValue(token.to_string()))?;
            }
            return Ok(None);
        };

        if attached.is_some() {
            return Ok(attached);
        }
        if let Some(next) = self.state.current() {
            if !next.starts_with(OPTION_MARKER) {
                let value = next.to_string();
                self.state.next();
                return Ok(Some(value));
            }
        }
        if !opt.argument_is_optional() {
            (self.on_error)(Error::MissingValue {
                argument: argument.to_string(),
                token: token.to_string(),
            })?;
        }
        Ok(None)
    }
}

/// Match `token` against one definition.
///
/// `None` means no match. `Some(attached)` is a match, with `attached` holding
/// the text glued to the option (`file` in `-ofile`, `val` in `--opt=val`).
/// Long names match exactly or exactly followed by `=`, never by prefix.
fn match_token<'s>(opt: &Opt<'_>, token: &'s str) -> Option<Option<&'s str>> {
    if let Some((idx, c)) = token.char_indices().nth(1) {
        if c == opt.short() {
            let rest = &token[idx + c.len_utf8()..];
            return Some((!rest.is_empty()).then_some(rest));
        }
    }

    let long = opt.long_name()?;
    let rest = token.strip_prefix(LONG_PREFIX)?;
    if rest == long {
        return Some(None);
    }
    rest.strip_prefix(long)?.strip_prefix('=').map(Some)
}
