use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use deal_finder::display::{self, RenderOptions};
use deal_finder::models::{Category, Marketplace, ResultSort, SearchParams, SortBy};
use deal_finder::{config, Credentials, DealFinder};

const DEFAULT_KEYWORD: &str = "セール";

/// Search the product catalog and rank results by discount and point rate.
#[derive(Debug, Parser)]
#[command(name = "deal-finder", version, about)]
struct Cli {
    /// Search keyword
    #[arg(default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// Search without a keyword (requires a concrete --category)
    #[arg(long, conflicts_with = "keyword")]
    any: bool,

    /// Catalog section (All, Electronics, Kitchen, Books, ...)
    #[arg(short, long, default_value = "All")]
    category: Category,

    /// Upstream page ordering: featured, price-asc, price-desc, newest, rating
    #[arg(long, default_value = "featured")]
    sort_by: SortBy,

    /// Minimum discount in percent (0-90, step 10)
    #[arg(short = 'd', long, default_value_t = 0)]
    min_discount: u8,

    /// Result ordering: point-rate, discount, price
    #[arg(short, long, default_value = "point-rate")]
    order: ResultSort,

    /// Maximum number of result pages to request
    #[arg(long, default_value_t = config::DEFAULT_MAX_PAGES)]
    max_pages: u32,

    /// Delay between page requests in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_PAGE_DELAY.as_millis() as u64)]
    page_delay_ms: u64,

    /// HTTP timeout per request in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Marketplace country code (JP, US, UK, DE)
    #[arg(long, default_value = "JP")]
    country: Marketplace,

    /// Secrets file with KEY, SECRET and TAG entries
    #[arg(long)]
    secrets: Option<PathBuf>,

    /// Print the ranked list as JSON
    #[arg(long)]
    json: bool,

    /// Show image URLs
    #[arg(long)]
    images: bool,

    /// Show price-history chart links
    #[arg(long)]
    chart: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn search_params(&self) -> SearchParams {
        let params = if self.any {
            SearchParams::default()
        } else {
            SearchParams::new(self.keyword.as_str())
        };
        params
            .category(self.category)
            .sort_by(self.sort_by)
            .min_discount(self.min_discount)
            .result_sort(self.order)
    }
}

fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let default_filter = match verbose {
        0 => "warn",
        1 => "deal_finder=info",
        _ => "deal_finder=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let credentials = Credentials::discover(cli.secrets.as_deref())
        .context("catalog API credentials are not configured")?;

    let finder = DealFinder::builder()
        .credentials(credentials)
        .marketplace(cli.country)
        .timeout(Duration::from_secs(cli.timeout))
        .max_pages(cli.max_pages)
        .page_delay(Duration::from_millis(cli.page_delay_ms))
        .build()
        .context("failed to set up the catalog client")?;
    tracing::info!("{}", finder);

    let params = cli.search_params();
    tracing::info!(
        category = display::category_label(params.category),
        sort_by = display::sort_by_label(params.sort_by),
        order = display::result_sort_label(params.result_sort),
        min_discount = params.min_discount,
        "searching"
    );

    let outcome = finder.search(&params)?;

    if cli.json {
        let payload = display::json_report(&outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let opts = RenderOptions {
        currency_symbol: cli.country.currency_symbol(),
        show_images: cli.images,
        chart_domain: cli.chart.then(|| cli.country.chart_domain()),
    };
    print!("{}", display::render_outcome(&outcome, &opts));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("{e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
