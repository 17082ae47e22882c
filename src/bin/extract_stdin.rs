//! Reads a guide page from stdin and prints its shopping-list import line.
//!
//! Offline companion of `shopping-lists`: no network, no rate limiting.
//!
//! ```text
//! extract_stdin --profession alchemy --label "Vanilla Alchemy" < page.html
//! ```

use std::io::{self, Read};

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wow_shopping_lists::{extract_materials_bytes, format, Material, Profession};

#[derive(Parser)]
#[command(name = "extract_stdin")]
#[command(about = "Extract a shopping list from HTML on stdin", long_about = None)]
struct Cli {
    /// Profession whose categories and filters apply
    #[arg(short = 'p', long)]
    profession: Profession,

    /// Label written before the items; defaults to the profession title
    #[arg(short = 'l', long)]
    label: Option<String>,

    /// Print the materials as JSON instead of an import line
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    label: &'a str,
    materials: &'a [Material],
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut html = Vec::new();
    io::stdin().read_to_end(&mut html).context("failed to read from stdin")?;

    let materials = extract_materials_bytes(&html, cli.profession);
    let label = cli.label.as_deref().unwrap_or(cli.profession.title());

    if cli.json {
        println!("{}", serde_json::to_string(&Output { label, materials: &materials })?);
    } else {
        println!("{}", format::format_line(label, &materials));
    }
    Ok(())
}
