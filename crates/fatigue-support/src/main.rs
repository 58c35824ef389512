use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fatigue_support::cli::{commands, OutputFormat, Session};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fatigue")]
#[command(author, version, about = "Synthetic roster, sleep and exercise data for fatigue support", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Seed for the generated data
    #[arg(long, global = true, env = "FATIGUE_SEED")]
    seed: Option<u64>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Personnel commands
    Personnel {
        #[command(subcommand)]
        command: PersonnelCommands,
    },
    /// Roster commands
    Roster {
        #[command(subcommand)]
        command: RosterCommands,
    },
    /// Exercise summary for a user
    Exercise {
        /// User ID
        #[arg(short, long)]
        user: u32,
        /// Lookback in days (defaults to the configured value)
        #[arg(long)]
        days: Option<u32>,
    },
    /// Sleep summary for a user
    Sleep {
        /// User ID
        #[arg(short, long)]
        user: u32,
        /// Lookback in days (defaults to the configured value)
        #[arg(long)]
        days: Option<u32>,
        /// Also list the sleep records inside the window
        #[arg(long)]
        records: bool,
    },
    /// Context strings handed to the chat layer
    Context {
        /// User ID
        #[arg(short, long)]
        user: u32,
        /// Lookback in days (defaults to the configured value)
        #[arg(long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand)]
enum PersonnelCommands {
    /// List known personnel
    List,
}

#[derive(Subcommand)]
enum RosterCommands {
    /// Show a user's generated roster
    Show {
        /// User ID
        #[arg(short, long)]
        user: u32,
    },
    /// Generate a roster from a shift cycle
    Generate {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: String,
        /// Roster regime (8-hour, 12-hour)
        #[arg(short = 't', long = "type", default_value = "8-hour")]
        roster_type: String,
        /// Comma-separated shift codes, e.g. N,M,A,OH
        #[arg(short, long)]
        sequence: String,
        /// Fail on unknown shift codes instead of rostering an off day
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let open = || Session::open(cli.config.as_deref(), cli.seed);

    let result = match cli.command {
        Commands::Personnel { command } => match command {
            PersonnelCommands::List => open().and_then(|s| commands::list_personnel(&s, format)),
        },
        Commands::Roster { command } => match command {
            RosterCommands::Show { user } => open().and_then(|s| commands::show_roster(&s, user, format)),
            RosterCommands::Generate {
                from,
                to,
                roster_type,
                sequence,
                strict,
            } => commands::generate_roster(&from, &to, &roster_type, &sequence, strict, format),
        },
        Commands::Exercise { user, days } => {
            open().and_then(|s| commands::show_exercise(&s, user, days, format))
        }
        Commands::Sleep { user, days, records } => {
            open().and_then(|s| commands::show_sleep(&s, user, days, records, format))
        }
        Commands::Context { user, days } => {
            open().and_then(|s| commands::show_context(&s, user, days, format))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", fatigue_support::error::format_user_error(&e));
        std::process::exit(1);
    }
}
