#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code.
// Test code is allowed to use unwrap() for convenience.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use payroll::Session;
use payroll::config::ShellConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Logs go to stderr so they never interleave with replies on stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "payroll=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ShellConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: prompt={:?}, salary_decimals={}",
        config.prompt,
        config.salary_decimals
    );

    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    if let Err(e) = session.run(stdin.lock(), &mut stdout.lock()) {
        tracing::error!("Session ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!(
        "Session finished with {} employee records",
        session.employees().count()
    );
}
