//! Scrapes profession leveling guides and writes Auctionator shopping lists.
//!
//! One output file per profession, one import line per expansion.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wow_shopping_lists::fetch::HttpFetcher;
use wow_shopping_lists::scraper::{write_output, Scraper};
use wow_shopping_lists::{ChoiceResolver, GuideCatalog, Options, PriorityTable, Profession};

#[derive(Parser)]
#[command(name = "shopping-lists")]
#[command(about = "Build Auctionator shopping lists from profession leveling guides", long_about = None)]
struct Cli {
    /// Profession to scrape; all professions when omitted
    #[arg(short = 'p', long)]
    profession: Option<Profession>,

    /// Expansion key (e.g. vanilla, bfa); all compatible expansions when omitted
    #[arg(short = 'e', long)]
    expansion: Option<String>,

    /// Output file; only valid together with --profession
    #[arg(short = 'o', long, requires = "profession")]
    output: Option<PathBuf>,

    /// Directory for the default <profession>.txt files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Seconds to wait before each request
    #[arg(short = 'r', long, default_value_t = 2.0)]
    rate_limit: f64,

    /// Seconds to wait between professions
    #[arg(long, default_value_t = 5.0)]
    profession_delay: f64,

    /// Guide catalog JSON replacing the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Priority table JSON for choice resolution
    #[arg(long)]
    priorities: Option<PathBuf>,

    /// Log extraction details
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn seconds(value: f64, flag: &str) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(value).with_context(|| format!("invalid --{flag} value {value}"))
}

fn run_profession(
    cli: &Cli,
    profession: Profession,
    catalog: &GuideCatalog,
    resolver: &ChoiceResolver,
    options: &Options,
    fetcher: &HttpFetcher,
) -> anyhow::Result<PathBuf> {
    let path = match (&cli.output, &cli.output_dir) {
        (Some(path), _) => path.clone(),
        (None, Some(dir)) => dir.join(profession.default_output_file()),
        (None, None) => PathBuf::from(profession.default_output_file()),
    };

    let mut scraper = Scraper::new(profession, catalog.clone(), resolver.clone(), options.clone(), fetcher);
    let results = scraper.scrape(cli.expansion.as_deref())?;
    write_output(&path, &results)?;

    let warnings: usize = results.iter().map(|r| r.warnings.len()).sum();
    info!(
        profession = profession.key(),
        expansions = results.len(),
        warnings,
        path = %path.display(),
        "shopping lists written"
    );
    Ok(path)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let options = Options::default().with_request_delay(seconds(cli.rate_limit, "rate-limit")?);
    let profession_delay = seconds(cli.profession_delay, "profession-delay")?;

    let catalog = match &cli.catalog {
        Some(path) => GuideCatalog::load(path)?,
        None => GuideCatalog::default(),
    };
    if let Some(key) = &cli.expansion {
        catalog
            .select(Some(key))
            .with_context(|| format!("expansions: {}", catalog.keys().join(", ")))?;
    }
    let resolver = match &cli.priorities {
        Some(path) => ChoiceResolver::new(PriorityTable::load(path)?),
        None => ChoiceResolver::default(),
    };
    let fetcher = HttpFetcher::new(&options)?;

    let professions: Vec<Profession> = cli.profession.map_or_else(|| Profession::ALL.to_vec(), |p| vec![p]);

    let mut failed = 0usize;
    for (i, profession) in professions.iter().enumerate() {
        if i > 0 && !profession_delay.is_zero() {
            std::thread::sleep(profession_delay);
        }
        match run_profession(&cli, *profession, &catalog, &resolver, &options, &fetcher) {
            Ok(path) => println!("{profession}: {}", path.display()),
            Err(e) => {
                error!(profession = profession.key(), error = %e, "profession run failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} profession runs failed", professions.len());
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
