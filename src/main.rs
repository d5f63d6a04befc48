use std::process::ExitCode;

use clap::Parser;
use notes_quiz::{app_state::AppState, cli::Cli, config::Config};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("{}", err.user_message());
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Provider {} with default model {}",
        config.provider,
        config.default_model
    );

    let state = AppState::new(config);

    match notes_quiz::cli::run(cli, &state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{} ({})", err, err.error_code());
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
