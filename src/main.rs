use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use invoice_desk::cli::{
    handle_export_command, handle_list_command, handle_migrate_command, handle_show_command,
    handle_summary_command, open_book, FilterArgs,
};
use invoice_desk::config::{InvoicePaths, Settings};
use invoice_desk::export::ExportFormat;
use invoice_desk::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "invoices",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based invoice management",
    long_about = "Invoice Desk keeps track of customer invoices from the terminal. \
                  Search and filter the list, watch revenue and overdue totals on \
                  the dashboard, and export what you see to CSV, JSON or YAML."
)]
struct Cli {
    /// Invoice file to load (JSON array or a previous JSON export)
    #[arg(short, long, global = true, env = "INVOICE_DESK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// List invoices, optionally filtered
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Show dashboard figures for the whole collection
    Summary,

    /// Show a single invoice by id or invoice number
    Show {
        /// Invoice id or number (e.g. INV-002)
        key: String,
    },

    /// Export invoices, optionally filtered
    Export {
        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Rewrite an invoice file in the current schema, numbering legacy records
    Migrate {
        /// File to migrate
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = InvoicePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::File(paths.log_file()),
        _ => LogTarget::Stderr,
    };
    logging::init(&target, &settings.log_level)?;

    let file = cli.file.as_deref();

    match command {
        Commands::Tui => {
            let book = open_book(file, &settings)?;
            invoice_desk::tui::run_tui(book, settings)?;
        }
        Commands::List(filters) => {
            handle_list_command(&open_book(file, &settings)?, &filters)?;
        }
        Commands::Summary => {
            handle_summary_command(&open_book(file, &settings)?)?;
        }
        Commands::Show { key } => {
            handle_show_command(&open_book(file, &settings)?, &key)?;
        }
        Commands::Export {
            format,
            output,
            filters,
        } => {
            let book = open_book(file, &settings)?;
            handle_export_command(&book, format, output.as_deref(), &filters)?;
        }
        Commands::Migrate { input, output } => {
            handle_migrate_command(&input, output.as_deref(), settings.numbering)?;
        }
        Commands::Config => {
            println!("Invoice Desk Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            if !paths.is_initialized() {
                println!("                (no settings file yet; using defaults)");
            }
            println!();
            println!("Settings:");
            println!("  Default currency:    {}", settings.default_currency);
            println!("  Invoice numbering:   {}", settings.numbering);
            println!("  Require description: {}", settings.require_description);
            println!("  Seed sample data:    {}", settings.seed_sample_data);
            println!("  Log level:           {}", settings.log_level);
        }
    }

    Ok(())
}
