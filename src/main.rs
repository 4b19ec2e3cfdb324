use dotenv_report::config::Config;
use dotenv_report::reporter;
use dotenv_report::{EnvFileLoader, ProcessEnv};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let loaded = match Config::from_env() {
        Ok(config) => {
            let loader =
                EnvFileLoader::new(config.env_file).override_existing(config.override_existing);
            tracing::debug!("Loading env file from {}", loader.path().display());
            loader.load()
        }
        Err(e) => {
            tracing::warn!("Config error: {}", e);
            false
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = reporter::report(&mut stdout.lock(), loaded, &ProcessEnv) {
        tracing::error!("Failed to write report: {}", e);
    }
}
