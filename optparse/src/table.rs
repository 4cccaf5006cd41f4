use std::fmt;
use std::io::Write;

use crate::OPTIONAL_MARKER;

/// Callback run when an option is matched. Receives the extracted value, or
/// `None` when the option takes no value or an optional value was absent.
pub type Action<'a> = Box<dyn Fn(Option<&str>) + 'a>;

// ============================================================================
// Opt — a single option definition
// ============================================================================

pub struct Opt<'a> {
    short: char,
    long: Option<String>,
    argument: Option<String>,
    description: Option<String>,
    action: Action<'a>,
}

impl<'a> Opt<'a> {
    pub fn new(short: char) -> Self {
        Opt {
            short,
            long: None,
            argument: None,
            description: None,
            action: Box::new(|_: Option<&str>| {}),
        }
    }

    pub fn long(mut self, name: &str) -> Self {
        self.long = Some(name.to_string());
        self
    }

    /// Declare that the option takes a value, named `placeholder` in help
    /// output. A placeholder starting with `[` makes the value optional.
    pub fn arg(mut self, placeholder: &str) -> Self {
        self.argument = Some(placeholder.to_string());
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn action<F>(mut self, func: F) -> Self
    where
        F: Fn(Option<&str>) + 'a,
    {
        self.action = Box::new(func);
        self
    }

    pub fn short(&self) -> char {
        self.short
    }

    pub fn long_name(&self) -> Option<&str> {
        self.long.as_deref()
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn takes_argument(&self) -> bool {
        self.argument.is_some()
    }

    pub fn argument_is_optional(&self) -> bool {
        self.argument
            .as_deref()
            .is_some_and(|a| a.starts_with(OPTIONAL_MARKER))
    }

    pub(crate) fn invoke(&self, value: Option<&str>) {
        (self.action)(value)
    }

    fn write_entry<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "  -{}", self.short)?;
        if let Some(long) = &self.long {
            write!(out, ", --{}", long)?;
        }
        if let Some(arg) = &self.argument {
            let sep = if self.long.is_some() { '=' } else { ' ' };
            write!(out, "{}{}", sep, arg)?;
        }
        if let Some(desc) = &self.description {
            write!(out, "\n    {}", desc)?;
        }
        write!(out, "\n")
    }
}

impl fmt::Debug for Opt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("argument", &self.argument)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// OptionTable — ordered, append-only set of definitions
// ============================================================================

#[derive(Debug, Default)]
pub struct OptionTable<'a> {
    entries: Vec<Opt<'a>>,
}

impl<'a> OptionTable<'a> {
    pub fn new() -> Self {
        OptionTable {
            entries: Vec::new(),
        }
    }

    /// Append a definition. Duplicate short or long names are accepted; the
    /// first one registered shadows the rest during matching.
    pub fn option(mut self, opt: Opt<'a>) -> Self {
        self.entries.push(opt);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opt<'a>> {
        self.entries.iter()
    }

    /// Help text for every definition, in registration order.
    pub fn describe(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.write_help(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn write_help<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for opt in &self.entries {
            opt.write_entry(out)?;
        }
        Ok(())
    }
}

impl<'t, 'a> IntoIterator for &'t OptionTable<'a> {
    type Item = &'t Opt<'a>;
    type IntoIter = std::slice::Iter<'t, Opt<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_short_only_with_description() {
        let table = OptionTable::new().option(Opt::new('v').description("verbose mode"));
        assert_eq!(table.describe(), "  -v\n    verbose mode\n");
    }

    #[test]
    fn describe_long_with_argument_uses_equals() {
        let table = OptionTable::new().option(
            Opt::new('o')
                .long("output")
                .arg("FILE")
                .description("write to FILE"),
        );
        assert_eq!(table.describe(), "  -o, --output=FILE\n    write to FILE\n");
    }

    #[test]
    fn describe_short_with_argument_uses_space() {
        let table = OptionTable::new().option(Opt::new('n').arg("COUNT"));
        assert_eq!(table.describe(), "  -n COUNT\n");
    }

    #[test]
    fn describe_preserves_registration_order() {
        let table = OptionTable::new()
            .option(Opt::new('h').long("help"))
            .option(Opt::new('l').long("level").arg("[LEVEL]"))
            .option(Opt::new('a'));
        assert_eq!(
            table.describe(),
            "  -h, --help\n  -l, --level=[LEVEL]\n  -a\n"
        );
    }

    #[test]
    fn describe_empty_table() {
        assert_eq!(OptionTable::new().describe(), "");
    }

    #[test]
    fn write_help_matches_describe() {
        let table = OptionTable::new()
            .option(Opt::new('o').long("output").arg("FILE").description("out"))
            .option(Opt::new('q').description("quiet"));
        let mut buf = Vec::new();
        table.write_help(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), table.describe());
    }

    #[test]
    fn argument_policy_accessors() {
        let flag = Opt::new('q');
        assert!(!flag.takes_argument());
        assert!(!flag.argument_is_optional());

        let mandatory = Opt::new('o').arg("FILE");
        assert!(mandatory.takes_argument());
        assert!(!mandatory.argument_is_optional());

        let optional = Opt::new('l').arg("[LEVEL]");
        assert!(optional.takes_argument());
        assert!(optional.argument_is_optional());
    }

    #[test]
    fn table_keeps_duplicates() {
        let table = OptionTable::new()
            .option(Opt::new('x').long("first"))
            .option(Opt::new('x').long("second"));
        assert_eq!(table.len(), 2);
        let longs: Vec<_> = table.iter().filter_map(|o| o.long_name()).collect();
        assert_eq!(longs, ["first", "second"]);
    }
}
