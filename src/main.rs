use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use ecotally::api::EcoSession;
use ecotally::config::Config;
use ecotally::ledger::CsvLedger;
use ecotally::EcoResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/points.csv")]
    ledger: String,

    /// JSON file with factor and scoring settings. Flags override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate today's emissions and points without saving
    Calc(cmd::calc::CalcArgs),
    /// Estimate and credit the points to a user
    Log(cmd::log::LogArgs),
    Leaderboard(cmd::leaderboard::LeaderboardArgs),
    Lookup(cmd::lookup::LookupArgs),
    /// Statewide and county emission reference figures
    Overview,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> EcoResult<()> {
    let ledger = CsvLedger::new(&cli.ledger);
    info!("📂 Ledger: {}", ledger.path().display());

    match cli.command {
        Commands::Calc(args) => {
            let config = resolve_config(&cli.config, &args.config, matches, "calc")?;
            let session = EcoSession::from_config(&config, ledger)?;
            cmd::calc::run(&args, &session)
        }
        Commands::Log(args) => {
            let config = resolve_config(&cli.config, &args.config, matches, "log")?;
            let mut session = EcoSession::from_config(&config, ledger)?;
            cmd::log::run(&args, &mut session)
        }
        Commands::Leaderboard(args) => {
            let session = EcoSession::from_config(&Config::default(), ledger)?;
            cmd::leaderboard::run(&args, &session)
        }
        Commands::Lookup(args) => {
            let session = EcoSession::from_config(&Config::default(), ledger)?;
            cmd::lookup::run(&args, &session)
        }
        Commands::Overview => {
            reports::print_region_overview(&ecotally::region::state_overview());
            Ok(())
        }
    }
}

/// JSON file (if any) as the base, explicit flags on top.
fn resolve_config(
    path: &Option<String>,
    cli_config: &Config,
    matches: &ArgMatches,
    subcommand: &str,
) -> EcoResult<Config> {
    let Some(path) = path else {
        return Ok(cli_config.clone());
    };

    info!("⚖️  Loading config from: {}", path);
    let mut config = Config::load_from_file(path)?;
    if let Some(sub_matches) = matches.subcommand_matches(subcommand) {
        config.merge_from_cli(cli_config, sub_matches);
    }
    Ok(config)
}
