use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use std::sync::Arc;
use text_to_speech::cli::Cli;
use text_to_speech::domain::tts::TtsService;
use text_to_speech::error::AppError;
use text_to_speech::infrastructure::config::{Config, LogFormat};
use text_to_speech::infrastructure::repositories::ConfiguredProviders;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse arguments; clap exits with status 2 on malformed input
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => return fail(AppError::from(err)),
    };

    // Initialize logging
    init_logging(&config);

    let providers = Arc::new(ConfiguredProviders::new(Arc::new(config)));
    let tts_service = TtsService::new(providers);

    let selection = cli.tts.selection();

    // Dropping the synthesis on a signal removes staged and intermediate
    // files and kills any running tool
    let result = tokio::select! {
        result = tts_service.synthesize_to_file(cli.text, cli.output, cli.tts.lang, &selection) => result,
        _ = shutdown_signal() => {
            tracing::warn!("Interrupted, discarding partial output");
            Err(AppError::Interrupted)
        }
    };

    match result {
        Ok(path) => {
            tracing::info!(output = %path.display(), "Speech written");
            ExitCode::SUCCESS
        }
        Err(err) => fail(err),
    }
}

/// Wait for SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

fn fail(err: AppError) -> ExitCode {
    tracing::debug!(error = ?err, "Run failed");
    eprintln!("ERROR: {}", err);
    if err.is_usage() {
        eprintln!();
        let _ = Cli::command().print_help();
    }
    ExitCode::from(err.exit_code())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "text_to_speech=info".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
