//! Terminal output: status lines, code snippets, JSON and spinners.

use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Writes user-facing output according to the global flags and config.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            config.output.format_hint()
        } else {
            args.output_format
        };

        // Auto resolves to Human on a TTY and Plain when piped.
        let format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Status lines ───────────────────────────────────────────────────────

    /// Plain line; suppressed in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Indented bullet list.
    pub fn list<S: AsRef<str>>(&self, items: &[S]) -> io::Result<()> {
        for item in items {
            self.print(&format!("  \u{2022} {}", item.as_ref()))?;
        }
        Ok(())
    }

    /// A code block the user is expected to paste somewhere.
    ///
    /// Printed even in quiet mode: it is the command's actual result.
    pub fn snippet(&self, title: &str, body: &str) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        if !self.quiet {
            self.header(title)?;
        }
        let body = if self.no_color {
            body.to_owned()
        } else {
            body.dimmed().to_string()
        };
        self.term.write_line(&body)?;
        self.term.write_line("")
    }

    /// Serialise `value` to stdout when `--output-format json` is active.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// A steady-ticking spinner, hidden unless output is human-formatted.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.silenced() || self.format != OutputFormat::Human {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner().with_message(msg.to_owned());
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    // ----- Internal Helpers -----

    fn silenced(&self) -> bool {
        self.quiet || self.format == OutputFormat::Json
    }

    fn status(&self, icon: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{icon} {msg}")
        } else {
            format!("{} {}", paint(icon), msg)
        };
        self.term.write_line(&line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(quiet: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            dir: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(manager(false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn human_format_keeps_color() {
        assert!(!manager(false, OutputFormat::Human).no_color);
    }

    #[test]
    fn quiet_print_is_ok() {
        assert!(manager(true, OutputFormat::Plain).print("hello").is_ok());
    }

    #[test]
    fn spinner_is_hidden_outside_human_mode() {
        assert!(manager(false, OutputFormat::Plain).spinner("working").is_hidden());
        assert!(manager(false, OutputFormat::Json).spinner("working").is_hidden());
    }

    #[test]
    fn json_is_noop_in_plain_mode() {
        let out = manager(false, OutputFormat::Plain);
        assert!(out.json(&serde_json::json!({ "a": 1 })).is_ok());
    }

    #[test]
    fn explicit_format_wins_over_config() {
        assert_eq!(manager(false, OutputFormat::Json).format, OutputFormat::Json);
    }
}
