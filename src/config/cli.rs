use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(name = "saju")]
#[command(about = "Zodiac lookups, admin API client and monitor stream for the saju service")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override api.base_url
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Override monitor.ws_url
    #[arg(long, global = true)]
    pub ws_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Zodiac sign for a year or a birth date
    Zodiac {
        #[arg(long, allow_negative_numbers = true)]
        year: i32,

        #[arg(long, requires = "day")]
        month: Option<u32>,

        #[arg(long, requires = "month")]
        day: Option<u32>,

        /// Accept years outside 1900..=2030
        #[arg(long)]
        any_year: bool,
    },

    /// Print one sign's reference record
    Sign { id: String },

    /// Export the reference table
    Table {
        #[arg(long, value_enum, default_value_t = TableFormat::Json)]
        format: TableFormat,
    },

    /// How the first sign relates to the second
    Compat { first: String, second: String },

    /// List sign pairs whose compatibility differs by direction
    Audit,

    #[command(subcommand)]
    Admin(AdminCommand),

    /// Stream monitor events until interrupted
    Monitor {
        /// Stop after this many messages
        #[arg(long)]
        max_messages: Option<usize>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum AdminCommand {
    /// Show engine settings
    Settings,

    /// Replace engine settings from a JSON file
    UpdateSettings { file: String },

    Users,

    Contents,

    Notifications,

    /// Change a user's grade
    Grade {
        user_id: String,
        new_grade: String,
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Change a content item's publication status
    ContentStatus { content_id: String, status: String },

    DeleteContent { content_id: String },

    /// Send a notification to users
    Notify {
        #[arg(long = "type")]
        notification_type: String,

        #[arg(long, value_delimiter = ',', required = true)]
        users: Vec<String>,

        content: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Json,
    Csv,
}
