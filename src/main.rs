//! doxtex — generate API reference manual LaTeX from Doxygen XML.
//!
//! Reads one Doxygen compound (a group or file XML page) and writes one
//! fragment suitable for `\input` into the manual:
//!
//! - `doxtex -i xml/group__tcb.xml -o parts/api/tcb.tex -l subsection`
//! - `doxtex < xml/group__tcb.xml` prints to stdout

mod assemble;
mod error;
mod escape;
mod extract;
mod logging;
mod model;
mod parser;
mod refs;
mod style;
mod translate;

use anyhow::{Context, Result};
use clap::Parser;
use model::Level;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doxtex",
    about = "Convert Doxygen XML into LaTeX for the API reference manual"
)]
struct Cli {
    /// File containing Doxygen-generated XML. If omitted, reads from stdin.
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output file. Missing parent directories are created. If omitted,
    /// writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Section level for each method
    #[arg(short = 'l', long, value_enum, default_value_t = Level::Subsection)]
    level: Level,

    /// Output format: latex (default), plain
    #[arg(short = 'f', long, default_value = "latex")]
    format: String,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let style = style::by_name(&cli.format)?;
    let xml = read_input(cli.input.as_deref())?;

    let root = parser::parse(&xml).context("failed to parse Doxygen XML")?;
    let output = assemble::assemble(&root, cli.level, style)
        .context("failed to translate documentation")?;

    write_output(cli.output.as_deref(), &output)?;
    tracing::info!(
        format = style.name,
        level = cli.level.as_str(),
        bytes = output.len(),
        "wrote documentation fragment"
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    let Some(path) = path else {
        io::stdout()
            .write_all(output.as_bytes())
            .context("failed to write stdout")?;
        return Ok(());
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    }
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}
