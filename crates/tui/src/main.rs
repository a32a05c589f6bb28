#[macro_use]
extern crate log;

mod cli;
mod renderer;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser as _;
use makespan_plot_core::parsers;

const PROMPT: &str = "Insert log file filename/path: ";

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::CliArgs::parse();
    let path = match args.path {
        Some(path) => path,
        None => prompt_for_path(std::io::stdin().lock(), std::io::stdout())?,
    };

    info!("Reading log file: {}", path.display());
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let format = args.format.resolve(&content);
    info!("Parsing as {format:?} log");
    let doc = parsers::parse(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!("Parsed {} cases, {} rows", doc.len(), doc.total_rows());

    if args.json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &doc)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let source = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    renderer::show_cases(&doc, &source)
}

/// Ask for the log path on `output` and read one line from `input`.
fn prompt_for_path(mut input: impl BufRead, mut output: impl Write) -> Result<PathBuf> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();
    if line.is_empty() {
        bail!("no log file given");
    }
    Ok(PathBuf::from(line))
}
