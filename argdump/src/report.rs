use std::fmt::Write;

use crate::arguments::Cmdline;

/// Text printed for a parsed command line: one `option` line per recognized
/// option (unless `--quiet`), then one line per positional argument.
pub fn render(cmd: &Cmdline) -> String {
    let mut out = String::new();

    if !cmd.quiet {
        for event in &cmd.events {
            match &event.value {
                Some(value) => {
                    let _ = writeln!(out, "option {} {}", event.name, value);
                }
                None => {
                    let _ = writeln!(out, "option {}", event.name);
                }
            }
        }
    }

    for (i, arg) in cmd.positional.iter().enumerate() {
        match &cmd.prefix {
            Some(prefix) => {
                let _ = writeln!(out, "{} {}{}{}", prefix, i + 1, cmd.separator, arg);
            }
            None => {
                let _ = writeln!(out, "{}", arg);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::Event;

    fn cmdline(events: Vec<Event>, positional: &[&str]) -> Cmdline {
        Cmdline {
            events,
            positional: positional.iter().map(|s| s.to_string()).collect(),
            ..Cmdline::default()
        }
    }

    #[test]
    fn options_then_positional() {
        let cmd = cmdline(
            vec![
                Event {
                    name: "--output",
                    value: Some("out.txt".to_string()),
                },
                Event {
                    name: "--help",
                    value: None,
                },
            ],
            &["extra", "more"],
        );
        assert_eq!(
            render(&cmd),
            "option --output out.txt\noption --help\narg 1: extra\narg 2: more\n"
        );
    }

    #[test]
    fn quiet_hides_options() {
        let mut cmd = cmdline(
            vec![Event {
                name: "--quiet",
                value: None,
            }],
            &["a"],
        );
        cmd.quiet = true;
        assert_eq!(render(&cmd), "arg 1: a\n");
    }

    #[test]
    fn custom_label_and_separator() {
        let mut cmd = cmdline(Vec::new(), &["a", "b"]);
        cmd.prefix = Some("file".to_string());
        cmd.separator = "=".to_string();
        assert_eq!(render(&cmd), "file 1=a\nfile 2=b\n");

        cmd.prefix = None;
        assert_eq!(render(&cmd), "a\nb\n");
    }

    #[test]
    fn nothing_to_report() {
        assert_eq!(render(&Cmdline::default()), "");
    }
}
