//! CLI entrypoint for study-aid
//!
//! This is the main binary that wires together all layers using
//! dependency injection and serves the HTTP API.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use study_application::{InvocationClient, LlmGateway, ModelSelector, TaskRunner};
use study_infrastructure::{
    ConfigLoader, FileConfig, FileLoggingConfig, GeminiGateway, PdfTextExtractor, Severity,
};
use study_presentation::{AppState, Cli};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = ConfigLoader::load_dotenv();
    let cli = Cli::parse();

    // Load configuration: files + env, then CLI overrides
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    if let Some(bind) = cli.bind {
        config.server.bind = bind.to_string();
    }
    if cli.log_json {
        config.logging.json = true;
    }

    if cli.show_config {
        show_config(&cli, &config)?;
        return Ok(());
    }

    let _log_guard = init_logging(&cli, &config.logging)?;
    if let Some(path) = &dotenv {
        info!(path = %path.display(), "Loaded environment from dotenv file");
    }

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration, see the errors above");
    }

    // === Dependency Injection ===
    let gemini = GeminiGateway::new(config.provider.to_gemini_config())
        .context("Failed to create Gemini client")?;
    if !gemini.has_api_key() {
        warn!(
            env = %config.provider.api_key_env,
            "No Gemini API key configured, AI endpoints will fail"
        );
    }

    if cli.list_models {
        return list_models(&gemini).await;
    }

    let params = config.invocation.to_params();
    let (preferences, _) = config.models.to_preferences();

    let gateway: Arc<dyn LlmGateway> = Arc::new(gemini);
    let selector = Arc::new(ModelSelector::new(gateway.clone(), preferences));
    let invocation = Arc::new(InvocationClient::new(gateway, selector, params.retry));

    let shutdown = CancellationToken::new();
    let runner =
        TaskRunner::new(invocation, params.prompt_builder()).with_cancellation(shutdown.clone());
    let state = AppState::new(runner, Arc::new(PdfTextExtractor::new()));

    let origins: Vec<String> = config
        .server
        .cors_origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect();
    let router = study_presentation::router(state, &origins);

    let addr = config
        .server
        .socket_addr()
        .with_context(|| format!("Invalid bind address '{}'", config.server.bind))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    // Ctrl-C cancels in-flight model calls and stops the listener
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, shutting down");
            ctrlc_token.cancel();
        }
    });

    info!(
        %addr,
        content_window = params.content_window,
        max_attempts = params.retry.max_attempts,
        "Starting study-aid server"
    );

    study_presentation::serve(listener, router, shutdown)
        .await
        .context("HTTP server error")?;

    Ok(())
}

fn show_config(cli: &Cli, config: &FileConfig) -> Result<()> {
    if cli.no_config {
        println!("Config files disabled by --no-config (defaults and environment only)");
    } else {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
    }
    println!();
    print!(
        "{}",
        config
            .to_toml()
            .context("Failed to render configuration")?
    );
    Ok(())
}

/// Log to stderr, and to daily rolling files when a directory is configured.
///
/// `RUST_LOG` overrides the verbosity flags. The returned guard flushes the
/// file writer on drop and must live until exit.
fn init_logging(cli: &Cli, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    let console = if logging.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file, guard) = match &logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "study-server.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    Ok(guard)
}

async fn list_models(gateway: &GeminiGateway) -> Result<()> {
    let catalog = gateway
        .catalog()
        .await
        .context("Failed to list Gemini models")?;

    let mut count = 0;
    for model in catalog.iter().filter(|m| m.supports_generation()) {
        count += 1;
        match &model.display_name {
            Some(name) => println!("{}  ({})", model.id(), name),
            None => println!("{}", model.id()),
        }
    }

    if count == 0 {
        println!("No models supporting generateContent were found.");
    }
    Ok(())
}
