use celebrity_fetcher::{celebrities, Config, Downloader, Error, Resource, UReqFetcher};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = Config::parse();

    let items = celebrities();

    println!(
        "Starting celebrity image download! {} images in total",
        items.len()
    );

    // Partial or total failure still exits 0.
    if let Err(err) = run(&config, &items) {
        error!(%err, "download aborted");
    }
}

fn run(config: &Config, items: &[Resource]) -> Result<(), Error> {
    let fetcher = UReqFetcher::with_timeout(config.timeout());

    let downloader = Downloader::with_fetcher(&config.output_dir, fetcher)?;

    if config.clean {
        downloader.clear_cache()?;
    }

    let report = downloader.run_with(items, config.workers, |outcome| println!("{}", outcome))?;

    println!("{}", report);

    Ok(())
}
