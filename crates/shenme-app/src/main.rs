use anyhow::Context;
use clap::Parser;
use shenme_app::{Cli, Lookup, output};
use shenme_config::Config;
use shenme_lang_chinese::ChineseProcessor;
use shenme_wiktionary::{AddressBuilder, HttpFetcher};
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "warn,shenme=debug,shenme_app=debug,shenme_core=debug,\
                              shenme_wiktionary=debug,shenme_lang_chinese=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.apply_env();
    cli.apply(&mut config);

    init_tracing(config.logging.verbose);

    let fetcher =
        HttpFetcher::new(&config.wiktionary.user_agent).context("Failed to set up HTTP client")?;
    let lookup = Lookup::new(
        fetcher,
        ChineseProcessor::new(),
        AddressBuilder::new(config.wiktionary.host.clone()),
        config.logging.verbose,
    );

    let outcome = lookup.lookup(&cli.word).await?;
    print!("{}", output::render(&outcome, config.output.format)?);

    Ok(())
}

/// Diagnostics go to stderr. `RUST_LOG` takes precedence over the verbose flag.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_FILTER)
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
