use std::process::ExitCode;

use resolver::{ResolverConfig, run};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ResolverConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(count) => {
            info!(count, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("failed: {err}");
            ExitCode::FAILURE
        }
    }
}
