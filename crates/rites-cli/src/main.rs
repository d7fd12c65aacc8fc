//! CLI host for spirit binding rites.

mod commands;
mod present;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Context, Format};

#[derive(Parser)]
#[command(
    name = "rites",
    about = "Binding Rites: unite with spirits and release them again",
    version,
    propagate_version = true
)]
struct Cli {
    /// Roster file holding the characters
    #[arg(short, long, global = true, default_value = "rites.json")]
    file: PathBuf,

    /// Spirit catalog to use instead of the built-in one (JSON)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// RNG seed for reproducible dice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Character to act as (needed when the roster holds several)
    #[arg(short, long, global = true)]
    character: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a character who knows the Binding Rites
    Init {
        /// Character name
        name: String,

        /// Spell slots per level, 1st level first
        #[arg(long, value_delimiter = ',', default_value = "4,3,2")]
        slots: Vec<u32>,

        /// Create the character without the Binding Rites feature
        #[arg(long)]
        no_rites: bool,
    },

    /// List the spirits in the catalog
    Spirits,

    /// Show both rules of one spirit
    Show {
        /// Spirit name (case-insensitive)
        spirit: String,
    },

    /// Show what can be bound or released right now
    Options,

    /// Bind a spirit into a spell slot
    Bind {
        /// Spirit name (case-insensitive)
        spirit: String,

        /// Spell slot level (1-9)
        #[arg(short, long)]
        level: i64,

        /// Maximum simultaneous bonds (1-5, default 5)
        #[arg(long)]
        max_bonds: Option<u32>,
    },

    /// Release a bound spirit
    Release {
        /// Spirit name (case-insensitive)
        spirit: String,
    },

    /// Show the spirit box status board
    Status {
        /// Heading of the journal page (html format)
        #[arg(long)]
        title: Option<String>,
    },

    /// Show past rites
    History,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = Context {
        file: cli.file,
        catalog: cli.catalog,
        seed: cli.seed,
        format: cli.format,
        character: cli.character,
    };

    let result = match cli.command {
        Commands::Init {
            name,
            slots,
            no_rites,
        } => commands::init::run(&ctx, &name, &slots, no_rites),
        Commands::Spirits => commands::spirits::run(&ctx),
        Commands::Show { spirit } => commands::show::run(&ctx, &spirit),
        Commands::Options => commands::options::run(&ctx),
        Commands::Bind {
            spirit,
            level,
            max_bonds,
        } => commands::bind::run(&ctx, &spirit, level, max_bonds),
        Commands::Release { spirit } => commands::release::run(&ctx, &spirit),
        Commands::Status { title } => commands::status::run(&ctx, title.as_deref()),
        Commands::History => commands::history::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
