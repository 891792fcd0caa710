#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::Parser;
use codex_registry::{RegistryCompiler, read_source, write_registry};
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

/// Compile the Codex Abyssiae master document into cards.json.
#[derive(Parser)]
#[command(name = "codex-registry")]
#[command(about = "Compile the Codex Abyssiae master document into a card registry", long_about = None)]
#[command(version)]
struct Cli {
    /// Source markdown document
    #[arg(value_name = "IN_MD", default_value = "docs/codex_abyssiae_master.md")]
    input: PathBuf,

    /// Output JSON path
    #[arg(value_name = "OUT_JSON", default_value = "assets/data/cards.json")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    info!("compiling {}", cli.input.display());

    let text = read_source(&cli.input)?;
    let compiler = RegistryCompiler::new()?;
    let cards = compiler.compile(&text)?;
    write_registry(&cli.output, &cards)?;

    println!("Wrote {} cards -> {}", cards.len(), cli.output.display());
    Ok(())
}
