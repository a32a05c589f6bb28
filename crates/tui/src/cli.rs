use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use makespan_plot_core::parsers::{self, LogFormat};

/// Plot optimiser makespan logs in the terminal, one figure per case.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct CliArgs {
    /// Log file to plot. Prompted for on stdin when omitted.
    pub path: Option<PathBuf>,

    /// Log layout.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
    pub format: FormatArg,

    /// Print the parsed cases as JSON instead of plotting them.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Multi-case if any line is `---`, single-case otherwise.
    Auto,
    /// One table; the first row is a header.
    Single,
    /// Headerless tables separated by `---` lines.
    Multi,
}

impl FormatArg {
    pub fn resolve(self, content: &str) -> LogFormat {
        match self {
            FormatArg::Auto => parsers::detect_format(content),
            FormatArg::Single => LogFormat::Single,
            FormatArg::Multi => LogFormat::Multi,
        }
    }
}
