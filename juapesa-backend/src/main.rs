use anyhow::Context;
use juapesa_backend::infrastructure::init_tracing;
use juapesa_backend::{AppConfig, Backend};

fn print_help() {
    eprintln!(
        r#"Jua Pesa backend - mobile-money transfers and operator forecasts

USAGE:
    juapesa-backend [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES (also read from .env):
    ENV                 Deployment environment (default: development)
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8000)
    LOG_LEVEL           Log level when RUST_LOG is unset (default: info)
    LOG_FORMAT          text | json (default: text)
    RUST_LOG            Log level filter
    GROQ_API_KEY        Summarizer credential
    DATABASE_URL        SQLite url (default: sqlite::memory:)
    REDIS_URL           External cache url (logged, in-memory cache used)
    ALLOWED_ORIGINS     Comma-separated CORS origins, * for any
    USE_STUB_DARAJA     Use the Daraja stub (default: true)
    USE_STUB_CCTP       Use the CCTP stub (default: true)
    USE_STUB_HEDERA     Use the Hedera stub (default: true)

EXAMPLES:
    # Run with defaults
    juapesa-backend

    # Run with config file
    juapesa-backend --config config.json

    # Run with custom port
    PORT=9000 juapesa-backend
"#
    );
}

/// What the command line asked for
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Serve { config_path: Option<String> },
}

fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--config" | "-c" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("{} requires a path argument", arg))?;
                config_path = Some(path);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Serve { config_path })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let config_path = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Serve { config_path }) => config_path,
        Err(message) => {
            eprintln!("Error: {}", message);
            print_help();
            std::process::exit(1);
        }
    };

    let config = match &config_path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => AppConfig::from_env().context("Invalid environment configuration")?,
    };

    init_tracing(&config.logging);

    match &config_path {
        Some(path) => tracing::info!("Loaded configuration from: {}", path),
        None => tracing::info!("Using environment configuration"),
    }
    tracing::info!("Environment: {}", config.env);
    tracing::info!("Allowed origins: {:?}", config.allowed_origins);

    let backend = Backend::new(config).await?;

    tracing::info!("Available endpoints:");
    tracing::info!("  POST /api/ussd/session");
    tracing::info!("  POST /api/convert");
    tracing::info!("  POST /api/liquidity/rebalance");
    tracing::info!("  POST /api/kyc/verify");
    tracing::info!("  POST /api/daraja/debit");
    tracing::info!("  POST /api/forecast");
    tracing::info!("  GET  /api/operators/{{operator}}/summary?window=4h");
    tracing::info!("  GET  /healthz | /readyz | /metrics | /testall");

    backend.run().await
}
