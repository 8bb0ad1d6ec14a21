// Rust guideline compliant 2026-10-14

//! Samachar CLI Application
//!
//! Command-line front-end for the Samachar feed and moderation core,
//! running against a JSON fixture of the news API.

use clap::Parser;
use samachar_cli::{commands, create_formatter, logging};
use samachar_core::{Config, Role};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "smc",
    version,
    about = "Samachar: paged news feeds and content moderation",
    long_about = "Samachar pages through category feeds with infinite-scroll semantics and applies acknowledged moderation actions to posts, reporter accounts and e-paper editions.",
    after_help = "Examples:\n  smc --fixture news.json feed --category mumbai --pages 2\n  smc --fixture news.json moderate approve p-17 --role admin\n  smc --fixture news.json reporter apply suspend r-3 --role admin\n  smc --fixture news.json epaper show --date 2026-07-01\n  smc --fixture news.json stats --category tech\n  smc categories\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Directory containing samachar.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixture file standing in for the news API
    #[arg(long, global = true, default_value = "samachar.json")]
    fixture: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Page through a category feed
    Feed {
        /// Category key (home, mumbai, maharashtra, politics, tech, games)
        #[arg(long)]
        category: Option<String>,

        /// Moderation status filter (pending, approved, rejected, all)
        #[arg(long)]
        status: Option<String>,

        /// Only verified (true) or unverified (false) posts
        #[arg(long)]
        verified: Option<bool>,

        /// Only posts in the breaking-news ticker
        #[arg(long)]
        breaking: bool,

        /// Title search
        #[arg(long)]
        search: Option<String>,

        /// Only posts created on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// Only posts created on or before this date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,

        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Apply a moderation action to a post
    Moderate {
        /// Action to apply
        #[arg(value_parser = commands::moderate::ACTIONS)]
        action: String,

        /// Post ID
        id: String,

        /// New title (update only)
        #[arg(long)]
        title: Option<String>,

        /// New category key (update only)
        #[arg(long)]
        category: Option<String>,

        /// Role of the acting viewer
        #[arg(long, default_value = "guest")]
        role: String,
    },

    /// List or moderate reporter accounts
    Reporter {
        #[command(subcommand)]
        action: ReporterCommand,
    },

    /// Read or manage daily e-paper editions
    Epaper {
        #[command(subcommand)]
        action: EpaperCommand,
    },

    /// Show moderation counters
    Stats {
        /// Restrict to one category
        #[arg(long)]
        category: Option<String>,
    },

    /// List feed categories
    Categories,
}

#[derive(Debug, clap::Subcommand)]
enum ReporterCommand {
    /// List reporter accounts
    List {
        /// Account status filter (pending, active, suspended)
        #[arg(long)]
        status: Option<String>,

        /// Only verified (true) or unverified (false) accounts
        #[arg(long)]
        verified: Option<bool>,

        /// Role of the acting viewer
        #[arg(long, default_value = "guest")]
        role: String,
    },

    /// Apply an action to a reporter account
    Apply {
        /// Action to apply
        #[arg(value_parser = commands::reporter::ACTIONS)]
        action: String,

        /// Reporter ID
        id: String,

        /// Role of the acting viewer
        #[arg(long, default_value = "guest")]
        role: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum EpaperCommand {
    /// Show the active edition for a date
    Show {
        /// Edition date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<String>,
    },

    /// List editions
    List {
        /// Only active (true) or inactive (false) editions
        #[arg(long)]
        active: Option<bool>,

        /// Role of the acting viewer
        #[arg(long, default_value = "guest")]
        role: String,
    },

    /// Apply an action to an edition
    Apply {
        /// Action to apply
        #[arg(value_parser = commands::epaper::ACTIONS)]
        action: String,

        /// Edition ID
        id: String,

        /// Role of the acting viewer
        #[arg(long, default_value = "guest")]
        role: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let guard = logging::init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let config_dir = cli.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let config = Config::load(&config_dir)?;

    let format = match cli.format {
        Some(FormatArg::Json) => samachar_core::OutputFormat::Json,
        Some(FormatArg::Table) => samachar_core::OutputFormat::Table,
        Some(FormatArg::Plain) => samachar_core::OutputFormat::Plain,
        None if cli.json => samachar_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format);

    let result = run(cli, &config, formatter.as_ref());
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
        eprintln!("{}", formatter.format_error(err));
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}

fn run(
    cli: Cli,
    config: &Config,
    formatter: &dyn samachar_cli::OutputFormatter,
) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Feed {
            category,
            status,
            verified,
            breaking,
            search,
            since,
            until,
            pages,
        }) => {
            let options = commands::feed::FeedOptions {
                category,
                status,
                verified,
                breaking,
                search,
                since,
                until,
                pages,
            };
            commands::feed::execute(&cli.fixture, options, config, formatter)?;
        }
        Some(Commands::Moderate {
            action,
            id,
            title,
            category,
            role,
        }) => {
            let action = commands::moderate::parse_action(&action, title, category)?;
            let role: Role = role.parse()?;
            commands::moderate::execute(&cli.fixture, &id, action, role, formatter)?;
        }
        Some(Commands::Reporter { action }) => match action {
            ReporterCommand::List {
                status,
                verified,
                role,
            } => {
                let role: Role = role.parse()?;
                commands::reporter::list(&cli.fixture, status, verified, role, config, formatter)?;
            }
            ReporterCommand::Apply { action, id, role } => {
                let action = commands::reporter::parse_action(&action)?;
                let role: Role = role.parse()?;
                commands::reporter::execute(&cli.fixture, &id, action, role, formatter)?;
            }
        },
        Some(Commands::Epaper { action }) => match action {
            EpaperCommand::Show { date } => {
                let date = commands::epaper::parse_date(date.as_deref())?;
                commands::epaper::show(&cli.fixture, date, formatter)?;
            }
            EpaperCommand::List { active, role } => {
                let role: Role = role.parse()?;
                commands::epaper::list(&cli.fixture, active, role, config, formatter)?;
            }
            EpaperCommand::Apply { action, id, role } => {
                let action = commands::epaper::parse_action(&action)?;
                let role: Role = role.parse()?;
                commands::epaper::execute(&cli.fixture, &id, action, role, formatter)?;
            }
        },
        Some(Commands::Stats { category }) => {
            commands::stats::execute(&cli.fixture, category, formatter)?;
        }
        Some(Commands::Categories) => {
            commands::categories::execute(formatter);
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
