//! Todo command-line front-end.
//!
//! Reads commands from stdin, one per line, and prints results to stdout.
//! Errors go to stderr and do not stop the session. Type `help` for the
//! command list.

use std::io::{self, BufRead, Write};
use todo::{DemoConfig, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout only carries command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DemoConfig::from_env()?;
    tracing::info!(title = %config.title, output = %config.output, "starting session");

    let mut session = Session::new(&config);
    let mut stdout = io::stdout().lock();

    for line in io::stdin().lock().lines() {
        let line = line?;
        match session.execute(&line) {
            Ok(Some(output)) => writeln!(stdout, "{output}")?,
            Ok(None) => {}
            Err(e) => eprintln!("error: {e}"),
        }
    }

    tracing::info!(items = session.list().len(), "session finished");
    Ok(())
}
