use anyhow::Result;
use clap::{Parser, Subcommand};

use splitify::cli::{
    handle_add_command, handle_analytics_command, handle_chart_command, handle_list_command,
    AddArgs, AnalyticsArgs,
};
use splitify::config::{paths::SplitifyPaths, settings::Settings};
use splitify::logging;
use splitify::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitify",
    version,
    about = "Manage your daily expenses smartly!",
    long_about = "Splitify records daily expenses in a local SQLite database, charts \
                  spending by category, forecasts the next two days and offers \
                  personalized suggestions. Run without a subcommand to open the \
                  dashboard."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive dashboard (default)
    #[command(alias = "ui")]
    Tui,

    /// Record a new expense
    Add(AddArgs),

    /// Show the expense history
    #[command(alias = "ls")]
    List,

    /// Show the category-wise expense distribution
    Chart,

    /// Show the two-day forecast and personalized suggestions
    Analytics(AnalyticsArgs),

    /// Create the settings file and expense database
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitifyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    if matches!(command, Commands::Tui) {
        logging::init_tui(&paths, &settings.log_level)?;
    } else {
        logging::init_cli(&settings.log_level);
    }

    let storage = Storage::new(paths.clone())?;
    storage.initialize()?;

    match command {
        Commands::Tui => {
            splitify::tui::run_tui(&storage, &settings)?;
        }
        Commands::Add(args) => handle_add_command(&storage, &settings, args)?,
        Commands::List => handle_list_command(&storage, &settings)?,
        Commands::Chart => handle_chart_command(&storage, &settings)?,
        Commands::Analytics(args) => handle_analytics_command(&storage, &settings, args)?,
        Commands::Init => {
            println!("Initializing Splitify at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Expense database: {}", paths.database_file().display());
            println!("Run 'splitify add Food 250' to record your first expense.");
        }
        Commands::Config => {
            println!("Splitify Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Database file:    {}", paths.database_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Amount step:     {}", settings.amount_step);
            println!("  Theme:           {}", settings.theme);
            println!("  Log level:       {}", settings.log_level);
            println!();
            println!("Stored expenses:   {}", storage.expenses.count()?);
        }
    }

    Ok(())
}
