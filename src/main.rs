use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use valdiff::canonical::config::DiffConfig;
use valdiff::canonical::prepare::prepare;
use valdiff::diff::comparator::diff;
use valdiff::diff::printer::DiffPrinter;
use valdiff::logging;

#[derive(Parser)]
#[command(
    name = "valdiff",
    version = "0.1.0",
    about = "Structural diff for semi-structured data trees",
    long_about = "Compares two JSON trees after normalizing them into a canonical form: \
    lists of primitives are treated as sets, and lists of records are matched by a \
    configured primary key instead of by position. \
    Prints every discrepancy with the path of keys leading to it.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Path to the source JSON tree")]
    source: PathBuf,
    #[arg(index = 2, help = "Path to the destination JSON tree")]
    destination: PathBuf,
    #[arg(
        short,
        long,
        help = "Path to a diff configuration file (primary keys, ignored keys)"
    )]
    config: Option<PathBuf>,
    #[arg(
        long,
        default_value = ".",
        help = "Directory the validation.log file is written to"
    )]
    log_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_dir)?;

    let config = cli.config.as_deref().map(load_config).transpose()?;
    let source = load_tree(&cli.source)?;
    let destination = load_tree(&cli.destination)?;

    let source = prepare(&source, config.as_ref())
        .with_context(|| format!("failed to prepare {}", cli.source.display()))?;
    let destination = prepare(&destination, config.as_ref())
        .with_context(|| format!("failed to prepare {}", cli.destination.display()))?;

    let result = diff(&source, &destination);
    DiffPrinter::new(std::io::stdout()).print(result.as_ref())?;

    if result.is_some() {
        std::process::exit(1);
    }
    Ok(())
}

fn load_tree(path: &Path) -> anyhow::Result<serde_json::Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn load_config(path: &Path) -> anyhow::Result<DiffConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}
