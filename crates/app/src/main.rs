use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use iq_core::model::{CandidateEmail, EmailError};
use services::config::{TIMEOUT_VAR, parse_timeout_secs};
use services::{ApiConfig, Clock, ConfigError, HttpTransport, SessionStartService};
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt, prelude::*};
use ui::{App, UiApp, build_app_context};

const EMAIL_VAR: &str = "IQ_CANDIDATE_EMAIL";
const MINUTES_VAR: &str = "IQ_TEST_MINUTES";
const LEVELS_VAR: &str = "IQ_TEST_LEVELS";
const DEFAULT_TEST_MINUTES: u64 = 30;
const DEFAULT_LEVEL_COUNT: u32 = 30;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    MissingEmail,
    InvalidEmail(EmailError),
    InvalidMinutes { raw: String },
    InvalidLevels { raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::MissingEmail => {
                write!(f, "a candidate email is required (--email or {EMAIL_VAR})")
            }
            ArgsError::InvalidEmail(err) => write!(f, "invalid --email value: {err}"),
            ArgsError::InvalidMinutes { raw } => write!(f, "invalid --minutes value: {raw}"),
            ArgsError::InvalidLevels { raw } => write!(f, "invalid --levels value: {raw}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    email: CandidateEmail,
    test_duration: Duration,
    level_count: u32,
    session_start: Arc<SessionStartService>,
}

impl UiApp for DesktopApp {
    fn candidate_email(&self) -> CandidateEmail {
        self.email.clone()
    }

    fn test_duration(&self) -> Duration {
        self.test_duration
    }

    fn level_count(&self) -> u32 {
        self.level_count
    }

    fn session_start(&self) -> Arc<SessionStartService> {
        Arc::clone(&self.session_start)
    }
}

#[derive(Debug)]
struct Args {
    email: CandidateEmail,
    test_duration: Duration,
    level_count: u32,
    api: ApiConfig,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- --email <addr> [--api <url>] [--minutes <n>] [--levels <n>] \
         [--timeout-secs <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api http://localhost:8080");
    eprintln!("  --minutes {DEFAULT_TEST_MINUTES}");
    eprintln!("  --levels {DEFAULT_LEVEL_COUNT}");
    eprintln!("  --timeout-secs 10");
    eprintln!();
    eprintln!("Environment:");
    eprintln!(
        "  {EMAIL_VAR}, {MINUTES_VAR}, {LEVELS_VAR}, IQ_API_BASE_URL, IQ_API_TIMEOUT_SECS, RUST_LOG"
    );
}

/// What the command line asked for.
#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
}

impl Args {
    /// Flags win over environment variables, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut api = ApiConfig::from_lookup(&lookup)?;
        let mut email = lookup(EMAIL_VAR);
        let mut minutes = lookup(MINUTES_VAR);
        let mut levels = lookup(LEVELS_VAR);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--email" => email = Some(require_value(args, "--email")?),
                "--api" => {
                    let value = require_value(args, "--api")?;
                    api = api.with_base_url(value)?;
                }
                "--minutes" => minutes = Some(require_value(args, "--minutes")?),
                "--levels" => levels = Some(require_value(args, "--levels")?),
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    api = api.with_timeout(parse_timeout_secs(TIMEOUT_VAR, &value)?);
                }
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let email = email.ok_or(ArgsError::MissingEmail)?;
        let email = CandidateEmail::new(email).map_err(ArgsError::InvalidEmail)?;
        let test_duration = match minutes {
            Some(raw) => parse_minutes(&raw)?,
            None => Duration::from_secs(DEFAULT_TEST_MINUTES * 60),
        };
        let level_count = match levels {
            Some(raw) => parse_levels(&raw)?,
            None => DEFAULT_LEVEL_COUNT,
        };

        Ok(Command::Run(Self {
            email,
            test_duration,
            level_count,
            api,
        }))
    }
}

fn parse_minutes(raw: &str) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(minutes) if minutes > 0 => Ok(Duration::from_secs(minutes * 60)),
        _ => Err(ArgsError::InvalidMinutes {
            raw: raw.to_string(),
        }),
    }
}

fn parse_levels(raw: &str) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(levels) if levels > 0 => Ok(levels),
        _ => Err(ArgsError::InvalidLevels {
            raw: raw.to_string(),
        }),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(tracing_fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv, |var| std::env::var(var).ok()) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();
    tracing::info!(
        api = %args.api.base_url,
        minutes = args.test_duration.as_secs() / 60,
        levels = args.level_count,
        "launching instructions"
    );

    let transport = HttpTransport::new(args.api)?;
    let session_start = Arc::new(SessionStartService::new(
        Clock::default_clock(),
        Arc::new(transport),
    ));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        email: args.email,
        test_duration: args.test_duration,
        level_count: args.level_count,
        session_start,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("IQ Engine")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
