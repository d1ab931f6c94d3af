mod cmd;
mod output;
mod root;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use cmd::eligibility::EligibilityArgs;
use sla_core::types::EntityKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sla",
    about = "SLA countdowns for the mortgage CRM: format timers, classify deadlines, list breaches",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .sla/)
    #[arg(long, global = true, env = "SLA_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .sla/config.yaml with default thresholds
    Init,

    /// Format signed remaining hours (negative = overdue)
    Duration {
        /// Remaining hours; omit when the SLA has no running clock
        #[arg(allow_negative_numbers = true)]
        hours: Option<f64>,
        /// Status reported by the backend
        #[arg(long, default_value = "ok")]
        status: String,
    },

    /// Format signed remaining minutes for list views
    Timer {
        /// Remaining minutes; omit for "No SLA"
        #[arg(allow_negative_numbers = true)]
        minutes: Option<i64>,
    },

    /// Classify a countdown and show its text and style tokens
    Classify {
        /// Remaining hours (negative = overdue)
        #[arg(allow_negative_numbers = true)]
        hours: Option<f64>,
        /// Status reported by the backend
        #[arg(long, default_value = "ok")]
        status: String,
        /// Badge size: sm, md or lg
        #[arg(long, default_value = "md")]
        size: String,
    },

    /// Show the style tokens for a status
    Style { status: String },

    /// List overdue and at-risk SLAs from an exported YAML or JSON file
    Breaches {
        /// File holding a list of breach records
        file: PathBuf,
        /// Evaluate as of this RFC 3339 instant (default: now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
        /// Only list overdue rows, even if the config includes at-risk ones
        #[arg(long)]
        overdue_only: bool,
        /// Restrict to one entity kind: lead, client or case
        #[arg(long)]
        entity: Option<EntityKind>,
    },

    /// Preview DBR/LTV eligibility for a mortgage application
    Eligibility(EligibilityArgs),

    /// Inspect and validate .sla/config.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::Duration { hours, status } => cmd::format::duration(hours, &status, cli.json),
        Commands::Timer { minutes } => cmd::format::timer(minutes, cli.json),
        Commands::Classify {
            hours,
            status,
            size,
        } => cmd::format::classify(&root, hours, &status, &size, cli.json),
        Commands::Style { status } => cmd::format::style(&status, cli.json),
        Commands::Breaches {
            file,
            now,
            overdue_only,
            entity,
        } => cmd::breaches::run(&root, &file, now, overdue_only, entity, cli.json),
        Commands::Eligibility(args) => cmd::eligibility::run(&root, args, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
