use std::{io, process};

mod terminal;

use clap::ArgAction;
use register::Session;
use terminal::Colorize;

/// Interactive in-memory register of university students.
///
/// There are no operational flags: the program starts directly into the
/// menu and everything is driven from there.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let stdin = io::stdin();
        let stdout = io::stdout();
        let session = Session::new(stdin.lock(), stdout.lock());

        match session.run() {
            Ok(roster) => {
                tracing::debug!(records = roster.len(), "session finished");
                Ok(())
            }
            Err(err) => {
                // Malformed integer input and stream failures are fatal;
                // the menu never re-prompts.
                eprintln!("{}", format!("Fatal input error: {err}").warning());
                if matches!(err, register::PromptError::Parse(_)) {
                    eprintln!(
                        "{}",
                        "Menu selections and ID prompts accept base-10 integers only.".dim()
                    );
                }
                process::exit(1);
            }
        }
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Diagnostics go to stderr so stdout stays reserved for the menu.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
