//! # Output Configuration
//!
//! Controls whether status markers are rendered as emoji or as plain
//! bracketed tags. Results printed to stdout (handles, JSON) never carry
//! markers, so piping `ppa list` stays clean whatever the setting.
//!
//! In `auto` mode colours are disabled by `NO_COLOR` (any value),
//! `CLICOLOR=0` and `TERM=dumb`, forced by `CLICOLOR_FORCE`, and otherwise
//! follow the stdout terminal's capabilities.

use std::env;

use clap::ValueEnum;

/// Value of the global `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Kind of line printed for a file touched by a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Installed,
    Deleted,
    Edited,
    Kept,
    DryRun,
}

impl Status {
    fn markers(self) -> (&'static str, &'static str) {
        match self {
            Status::Installed => ("✅", "[OK]"),
            Status::Deleted => ("🗑️", "[DELETED]"),
            Status::Edited => ("✏️", "[EDITED]"),
            Status::Kept => ("⚠️", "[KEPT]"),
            Status::DryRun => ("🔍", "[DRYRUN]"),
        }
    }
}

/// Output configuration for status lines.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn from_choice(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    /// The marker for `status`: emoji with colours, a bracketed tag without.
    pub fn marker(&self, status: Status) -> &'static str {
        let (emoji, plain) = status.markers();
        if self.use_color {
            emoji
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_choice(ColorChoice::Auto)
    }
}
