//! `amnet-schedule` CLI -- resolve AM.net event records and related fields from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve an event record (stdin → stdout)
//! echo '{"beginDate":"2017-05-15","endDate":"2017-05-15",
//!        "days":[{"beginTime":"8:00am","endTime":"7:10pm"}]}' | amnet-schedule resolve
//!
//! # Resolve from file to file in a specific zone
//! amnet-schedule resolve -i event.json -o ranges.json --timezone America/Chicago
//!
//! # Fail instead of shifting times that fall in a DST gap
//! amnet-schedule resolve -i event.json --policy reject
//!
//! # Parse a single clock string
//! amnet-schedule parse-time "7:10 pm"
//!
//! # Timeslot keys for a JSON array of sessions, or grouped
//! amnet-schedule timeslot -i sessions.json --group
//!
//! # Format a phone number
//! amnet-schedule phone "555.123.4567 ext 12"
//! ```
//!
//! The default zone comes from `--timezone`, then `AMNET_TIMEZONE`, then
//! `America/New_York`. Diagnostics go to stderr; set `RUST_LOG` or pass `-v`.

use amnet_schedule::{EventRecord, LocalTimePolicy, Session};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Parser)]
#[command(
    name = "amnet-schedule",
    version,
    about = "Resolve AM.net event times, timeslot keys and phone numbers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an event record into per-day start/end timestamps
    Resolve {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// IANA time zone the event's clock times are in
        #[arg(long, env = "AMNET_TIMEZONE", default_value = DEFAULT_TIMEZONE)]
        timezone: String,
        /// What to do with clock times that fall in a DST transition
        #[arg(long, value_enum, default_value_t = PolicyArg::ShiftForward)]
        policy: PolicyArg,
    },
    /// Parse a 12-hour clock string and print it as HH:MM
    ParseTime {
        /// e.g. "8:00am" or "7:10 PM"
        time: String,
    },
    /// Compute timeslot keys for a JSON array of sessions
    Timeslot {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print sessions grouped by key instead of one key per session
        #[arg(long)]
        group: bool,
    },
    /// Validate and format a North American phone number
    Phone {
        number: String,
        /// Print E.164 (+1AAAEEENNNN) instead of (AAA) EEE-NNNN
        #[arg(long)]
        e164: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    ShiftForward,
    Reject,
}

impl From<PolicyArg> for LocalTimePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ShiftForward => LocalTimePolicy::ShiftForward,
            PolicyArg::Reject => LocalTimePolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            input,
            output,
            timezone,
            policy,
        } => {
            let json = read_input(input.as_deref())?;
            let event: EventRecord =
                serde_json::from_str(&json).context("Failed to parse event record JSON")?;
            tracing::debug!(%timezone, days = event.days.len(), "resolving event");

            let ranges = amnet_schedule::resolve_event_date_time_ranges_with_policy(
                &event,
                &timezone,
                policy.into(),
            )
            .context("Failed to resolve event day ranges")?;

            let pretty = serde_json::to_string_pretty(&ranges)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::ParseTime { time } => {
            let parts = amnet_schedule::parse_time_parts(&time)
                .with_context(|| format!("Failed to parse time: {}", time))?;
            println!("{}", parts);
        }
        Commands::Timeslot { input, group } => {
            let json = read_input(input.as_deref())?;
            let sessions: Vec<Session> =
                serde_json::from_str(&json).context("Failed to parse sessions JSON")?;

            if group {
                let groups = amnet_schedule::group_by_timeslot(&sessions)
                    .context("Failed to group sessions")?;
                tracing::debug!(sessions = sessions.len(), groups = groups.len(), "grouped sessions");
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for (i, session) in sessions.iter().enumerate() {
                    let key = amnet_schedule::compute_timeslot_key(session)
                        .with_context(|| format!("Failed to key session #{}", i + 1))?;
                    println!("{}", key);
                }
            }
        }
        Commands::Phone { number, e164 } => {
            let phone = amnet_schedule::parse_phone(&number).context("Invalid phone number")?;
            if e164 {
                println!("{}", phone.to_e164());
            } else {
                println!("{}", phone.format());
            }
        }
    }

    Ok(())
}

/// Log to stderr. `-v` flags win over `RUST_LOG`; with neither, only warnings.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
