use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garage")]
#[command(about = "Terminal front-end for the garage workshop manager")]
#[command(version)]
#[command(after_help = "Examples:
  garage customers                         # First page of customers
  garage customers --search ahmet          # Customers matching 'ahmet'
  garage vehicles --page 2 --page-size 10  # Second page, ten rows per page
  garage services --status waiting         # Services not started yet
  garage inventory --stock critical        # Parts flagged as critical
  garage vehicles --menu 1 --invoke 'View Details'
  garage users add --name 'Ali Usta' --email ali@example.com
  garage theme toggle

Environment Variables:
  GARAGE_DATABASE   SQLite store location
  GARAGE_PAGE_SIZE  Rows per table page
  NO_COLOR          Disable colored output")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// SQLite store to use for this run instead of the configured one
    #[arg(long)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List customers
    Customers(ListArgs),
    /// List vehicles
    Vehicles(ListArgs),
    /// List service jobs
    Services(ServiceArgs),
    /// List spare parts in stock
    Inventory(InventoryArgs),
    /// Users stored behind the data access channel
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Light/dark theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
}

/// Paging and row menu options shared by every list screen
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive search term
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Page to show (clamped to the last page)
    #[arg(long, short = 'p', default_value = "1", help_heading = "Display Options")]
    pub page: usize,

    /// Number of rows per page
    #[arg(long, help_heading = "Display Options")]
    pub page_size: Option<usize>,

    /// Open the action menu of the row with this id
    #[arg(long, help_heading = "Row Actions")]
    pub menu: Option<String>,

    /// Invoke the action with this label from the open menu
    #[arg(long, requires = "menu", help_heading = "Row Actions")]
    pub invoke: Option<String>,
}

#[derive(Args, Debug, Clone)]
#[command(after_help = "Examples:
  garage services --status in-progress
  garage services --search 34 --menu 1 --invoke 'Start Service'")]
pub struct ServiceArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only jobs in this state: waiting, in-progress or completed
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Args, Debug, Clone)]
#[command(after_help = "Examples:
  garage inventory --category Fren
  garage inventory --stock critical")]
pub struct InventoryArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only parts in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Stock level: all, critical or normal
    #[arg(long, default_value = "all")]
    pub stock: String,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List stored users
    List {
        /// Case-insensitive search over name and email
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Page to show (clamped to the last page)
        #[arg(long, short = 'p', default_value = "1", help_heading = "Display Options")]
        page: usize,

        /// Number of rows per page
        #[arg(long, help_heading = "Display Options")]
        page_size: Option<usize>,
    },
    /// Store a new user
    #[command(after_help = "Examples:
  garage users add --name 'Ali Usta' --email ali@example.com")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  garage config set --page-size 10
  garage config set --theme dark
  garage config set --database ~/garage.sqlite")]
    Set {
        /// SQLite store location
        #[arg(long)]
        database: Option<PathBuf>,
        /// Rows per table page
        #[arg(long)]
        page_size: Option<usize>,
        /// light or dark
        #[arg(long)]
        theme: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Switch between light and dark and save the choice
    Toggle,
}
