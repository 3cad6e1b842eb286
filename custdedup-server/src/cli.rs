use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "custdedup",
    about = "Customer Deduplication - set analysis across source systems",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(
        long,
        global = true,
        env = "DATABASE_URL",
        help = "PostgreSQL connection string (records are kept in memory when unset)"
    )]
    pub database_url: Option<String>,

    #[arg(long, global = true, env = "CUSTDEDUP_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: u32,

    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Bind address used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

impl Cli {
    /// The requested subcommand, or `serve` with the top-level bind options.
    pub fn take_command(&mut self) -> Commands {
        self.command.take().unwrap_or_else(|| Commands::Serve(self.serve.clone()))
    }
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ServeArgs {
    #[arg(long, env = "CUSTDEDUP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(short, long, env = "CUSTDEDUP_PORT", default_value = "8000")]
    pub port: u16,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the HTTP API (default if no command specified)")]
    Serve(ServeArgs),

    #[command(about = "Load sample customer records from a JSON file")]
    Seed {
        #[arg(short, long, default_value = "data/sample_customers.json")]
        file: PathBuf,

        #[arg(long, help = "Keep existing records instead of clearing them first")]
        append: bool,
    },

    #[command(about = "Count total, unique and duplicate customers")]
    Analyze {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Compare customer ids across source systems")]
    Compare {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Delete all customer records")]
    Clear,
}
