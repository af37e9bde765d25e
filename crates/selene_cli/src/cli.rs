use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use selene_app::PaidPlan;
use selene_phase::LocalDateTime;

/// Selene lunar phase calculator.
#[derive(Parser)]
#[command(name = "selene", version, about = "Moon phase, illumination and rise/set estimates")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = "selene.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Phase, illumination and age of the Moon
    Phase {
        /// Local date-time (YYYY-MM-DD[Thh:mm[:ss]]), default now
        #[arg(long)]
        date: Option<LocalDateTime>,
    },
    /// Estimated moonrise/moonset and sunrise/sunset
    Times {
        /// Local date (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<LocalDateTime>,
    },
    /// Calendar month with the phase of every day
    Month {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
    },
    /// 31-day illumination trend (10-day preview without premium)
    Trend,
    /// Days until the next new and full moon
    Countdown {
        /// Local date-time, default now
        #[arg(long)]
        date: Option<LocalDateTime>,
    },
    /// Details for a single calendar day
    Day {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: LocalDateTime,
    },
    /// List selectable locations
    Locations {
        /// Case-insensitive city/country filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Select a location by id
    Location {
        id: String,
    },
    /// List supported languages
    Languages,
    /// Select display language by code (en, es, fr, ...)
    Language {
        code: String,
    },
    /// Show or change premium access
    Subscription {
        #[command(subcommand)]
        action: SubscriptionAction,
    },
}

#[derive(Subcommand)]
pub enum SubscriptionAction {
    /// Current plan, trial and expiry
    Status,
    /// Start the 7-day free trial
    Trial,
    /// Purchase a plan
    Subscribe {
        #[arg(value_enum)]
        plan: PlanArg,
    },
    /// Cancel the subscription and any trial
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlanArg {
    Monthly,
    Yearly,
}

impl From<PlanArg> for PaidPlan {
    fn from(p: PlanArg) -> Self {
        match p {
            PlanArg::Monthly => PaidPlan::Monthly,
            PlanArg::Yearly => PaidPlan::Yearly,
        }
    }
}
