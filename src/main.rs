use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_buddy::cli::{
    handle_bill_command, handle_export_command, handle_item_command, handle_month_command,
    handle_year_command, BillCommands, ExportCommands, ItemCommands, MonthCommands,
    YearCommands,
};
use budget_buddy::config::paths::DATA_DIR_ENV;
use budget_buddy::config::{BuddyPaths, Settings};
use budget_buddy::storage::open_file_store;

#[derive(Parser)]
#[command(
    name = "budget-buddy",
    version,
    about = "Month-by-month personal budgeting",
    long_about = "Budget Buddy tracks income, bills, expenses and savings for each \
                  month, carries a rollover balance and a debt payment, and shows \
                  how much money is left. Running without a command shows the \
                  current month."
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Base directory for month data, settings and exports
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Month(MonthCommands),

    /// Line item commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Bill commands
    #[command(subcommand)]
    Bill(BillCommands),

    #[command(flatten)]
    Year(YearCommands),

    #[command(flatten)]
    Export(ExportCommands),

    /// Show paths and settings, optionally changing the currency
    Config {
        /// Currency symbol used when printing amounts
        #[arg(long)]
        currency_symbol: Option<String>,

        /// ISO currency code stored with the settings
        #[arg(long)]
        currency_code: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(verbosity(cli.verbose));

    let paths = match cli.data_dir {
        Some(dir) => BuddyPaths::with_base_dir(dir),
        None => BuddyPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    let store = open_file_store(&paths)?;
    debug!(data_dir = %store.data_dir().display(), "opened month store");

    match cli.command {
        Some(Commands::Month(cmd)) => handle_month_command(&store, &settings, cmd)?,
        Some(Commands::Item(cmd)) => handle_item_command(&store, &settings, cmd)?,
        Some(Commands::Bill(cmd)) => handle_bill_command(&store, &settings, cmd)?,
        Some(Commands::Year(cmd)) => handle_year_command(&store, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&store, &paths, cmd)?,
        Some(Commands::Config {
            currency_symbol,
            currency_code,
        }) => {
            let changed = currency_symbol.is_some() || currency_code.is_some();
            if let Some(symbol) = currency_symbol {
                settings.currency_symbol = symbol;
            }
            if let Some(code) = currency_code {
                settings.currency_code = code;
            }
            if changed {
                settings.save(&paths)?;
            }

            println!("Budget Buddy Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Currency code:   {}", settings.currency_code);
        }
        None => handle_month_command(&store, &settings, MonthCommands::Show { month: None })?,
    }

    Ok(())
}

fn verbosity(count: u8) -> LevelFilter {
    match count {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
