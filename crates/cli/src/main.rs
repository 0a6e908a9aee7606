use clap::{Parser, Subcommand};
use commands::refresh::RefreshTarget;
use govpl_verifier_domain::CliOverrides;
use tracing::{debug, info};

mod bootstrap;
mod commands;
mod di;
mod events;
mod output;

#[derive(Parser)]
#[command(name = "govpl-verifier")]
#[command(version)]
#[command(about = "GOV.PL Verifier - checks whether a page belongs to the Polish government")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Database path
    #[arg(long, global = true)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single page address
    Check {
        /// Page URL, e.g. https://www.gov.pl/
        url: String,
    },
    /// Read navigation events from stdin, one per line
    Watch,
    /// Download lists now, ignoring their cache lifetime
    Refresh {
        #[arg(value_enum, default_value_t = RefreshTarget::All)]
        list: RefreshTarget,
    },
    /// Show the state of both cached lists
    Info,
    /// Keep both lists fresh in the background until interrupted
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting GOV.PL Verifier v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        official_url = %config.lists.official.url,
        malicious_url = %config.lists.malicious.url,
        "Configured list sources"
    );

    let pool = bootstrap::init_database(&config.storage).await?;
    let ctx = di::VerifierContext::new(pool, &config)?;

    match cli.command {
        Command::Check { url } => commands::check::run(&ctx, &url, cli.json).await,
        Command::Watch => commands::watch::run(&ctx, &config, cli.json).await,
        Command::Refresh { list } => commands::refresh::run(&ctx, list, cli.json).await,
        Command::Info => commands::info::run(&ctx, cli.json).await,
        Command::Serve => commands::serve::run(&ctx, &config).await,
    }
}
