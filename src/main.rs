use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fuel_station::cli::{
    handle_columns_command, handle_emergency_command, handle_history_command,
    handle_refill_command, handle_sell_command, handle_stats_command, handle_tank_command,
    handle_tanks_command, handle_transfer_command, EmergencyCommands, SellArgs, TankCommands,
};
use fuel_station::config::{paths::DATA_DIR_ENV, StationPaths, Settings};
use fuel_station::models::{TankId, Volume};
use fuel_station::services::TransactionEngine;
use fuel_station::shell::OperatorShell;
use fuel_station::storage::{initialize_storage, JsonFileStore, StoreName};

/// Environment variable holding the log filter
const LOG_ENV: &str = "STATION_LOG";

#[derive(Parser)]
#[command(
    name = "station",
    version,
    about = "Fuel station manager: tanks, columns, sales and history",
    long_about = "Manages a fuel station's tanks and dispenser columns. Sales, refills, \
                  transfers and the emergency halt are checked against tank limits, \
                  recorded in the sales ledger and written to an append-only history. \
                  Run without a command for the interactive operator menu."
)]
struct Cli {
    /// Directory holding config.json and the data stores
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive operator menu
    #[command(alias = "menu")]
    Shell,

    /// Show tank levels
    Tanks,

    /// Show column routing
    Columns,

    /// Show income and per-fuel statistics
    Stats,

    /// Show recent operations, oldest first
    History {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Serve a customer
    Sell(SellArgs),

    /// Add fuel to a tank
    Refill {
        /// Tank number (e.g. 2 or #2)
        tank: TankId,
        /// Quantity in liters
        liters: Volume,
    },

    /// Pump fuel between two tanks of the same grade
    Transfer {
        /// Source tank
        from: TankId,
        /// Destination tank
        to: TankId,
        /// Quantity in liters
        liters: Volume,
    },

    /// Tank management commands
    #[command(subcommand)]
    Tank(TankCommands),

    /// Emergency halt commands
    #[command(subcommand)]
    Emergency(EmergencyCommands),

    /// Create missing data stores with the default station layout
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => StationPaths::with_base_dir(dir),
        None => StationPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "Resolved station paths");

    let command = cli.command.unwrap_or(Commands::Shell);

    match command {
        Commands::Init => {
            println!("Initializing station at: {}", paths.base_dir().display());
            let store = JsonFileStore::open(paths.clone())?;
            let created = initialize_storage(&store)?;
            settings.save(&paths)?;
            if created.is_empty() {
                println!("All stores already exist; nothing to create.");
            } else {
                let names: Vec<&str> = created.iter().map(StoreName::as_str).collect();
                println!("Created stores: {}", names.join(", "));
            }
            println!("Initialization complete!");
            return Ok(());
        }
        Commands::Config => {
            let store = JsonFileStore::open(paths.clone())?;
            println!("Fuel Station Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Station name:    {}", settings.station_name);
            println!("  Currency:        {}", settings.currency_symbol);
            println!("  History shown:   {}", settings.history_display_limit);
            println!();
            println!("Stores:");
            for name in StoreName::ALL {
                println!("  {:<8} {:?}", name.as_str(), store.status(name));
            }
            return Ok(());
        }
        _ => {}
    }

    let store = JsonFileStore::open(paths)?;
    let mut engine = TransactionEngine::open(store)?;
    engine.apply_auto_disable()?;

    match command {
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            OperatorShell::new(&mut engine, &settings, stdin.lock(), stdout.lock()).run()?;
        }
        Commands::Tanks => handle_tanks_command(&engine),
        Commands::Columns => handle_columns_command(&engine),
        Commands::Stats => handle_stats_command(&engine, &settings),
        Commands::History { limit } => handle_history_command(&engine, &settings, limit),
        Commands::Sell(args) => handle_sell_command(&mut engine, &settings, args)?,
        Commands::Refill { tank, liters } => handle_refill_command(&mut engine, tank, liters)?,
        Commands::Transfer { from, to, liters } => {
            handle_transfer_command(&mut engine, from, to, liters)?
        }
        Commands::Tank(cmd) => handle_tank_command(&mut engine, cmd)?,
        Commands::Emergency(cmd) => handle_emergency_command(&mut engine, cmd)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}

/// Install the stderr log subscriber; `STATION_LOG` sets the filter
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
