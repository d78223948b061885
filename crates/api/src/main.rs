//! Numerolog - numerology Mini App client
//!
//! Command-line entry point. Each invocation starts a session for the
//! configured Telegram user, runs one command and prints its result as JSON.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use numerolog_core::{IdentityProvider, Tab};
use numerolog_domain::utils::validation::RegistrationForm;
use numerolog_domain::{CalculatorId, Tariff};
use numerolog_infra::{config, StaticIdentityProvider};
use numerolog_lib::AppContext;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "numerolog")]
#[command(about = "Numerolog - destiny matrix, calculators and AI reports", long_about = None)]
struct Cli {
    /// Config file (JSON or TOML); defaults to the environment or a probed file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Telegram user as JSON, overriding NUMEROLOG_TELEGRAM_USER
    #[arg(long, global = true)]
    telegram_user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the session header and current profile
    Session,
    /// Seed every page with the profile birth date and open a tab
    ForMe {
        #[arg(default_value = "matrix")]
        tab: Tab,
    },
    /// Compute the destiny matrix
    Matrix { date: Option<String> },
    /// List calculators and whether the tariff unlocks them
    Calculators,
    /// Run one calculator
    Calculate { calculator: CalculatorId, date: Option<String> },
    /// Generate an AI interpretation report
    Ai { date: Option<String> },
    /// Show the profile page
    Profile,
    /// Log in with e-mail and password
    Login { email: String, password: String },
    /// Register a new account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        birth_date: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        password_confirm: String,
    },
    /// Confirm a registration e-mail
    Verify {
        /// Address the code was sent to
        #[arg(long)]
        email: String,
        code: String,
    },
    /// Switch tariff (free, basic or pro)
    Tariff { tariff: String },
    /// Upload an image as the avatar
    Avatar { path: PathBuf },
}

#[allow(clippy::print_stdout)]
fn emit<T: Serialize>(result: std::result::Result<T, String>) -> Result<()> {
    let value = result.map_err(|message| anyhow!(message))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn build_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))?,
        None => config::load()?,
    };
    let identity: Arc<dyn IdentityProvider> = match &cli.telegram_user {
        Some(raw) => Arc::new(StaticIdentityProvider::from_json(raw)),
        None => Arc::new(StaticIdentityProvider::from_env()),
    };

    AppContext::new_with_identity(config, identity).context("failed to initialise application")
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = build_context(&cli)?;
    numerolog_lib::start_session(&ctx).await.map_err(|message| anyhow!(message))?;

    match cli.command {
        Commands::Session => emit(numerolog_lib::get_session(&ctx).await),
        Commands::ForMe { tab } => emit(numerolog_lib::calculate_for_me(&ctx, tab).await),
        Commands::Matrix { date } => {
            emit(numerolog_lib::compute_matrix(&ctx, date.as_deref()).await)
        }
        Commands::Calculators => emit(numerolog_lib::list_calculators(&ctx).await),
        Commands::Calculate { calculator, date } => {
            emit(numerolog_lib::run_calculator(&ctx, calculator, date.as_deref()).await)
        }
        Commands::Ai { date } => emit(numerolog_lib::generate_report(&ctx, date.as_deref()).await),
        Commands::Profile => emit(numerolog_lib::get_profile(&ctx).await),
        Commands::Login { email, password } => {
            emit(numerolog_lib::login(&ctx, &email, &password).await)
        }
        Commands::Register { name, email, phone, birth_date, password, password_confirm } => {
            let form =
                RegistrationForm { name, email, phone, birth_date, password, password_confirm };
            emit(numerolog_lib::register(&ctx, form).await)
        }
        Commands::Verify { email, code } => {
            emit(numerolog_lib::verify_email(&ctx, Some(&email), &code).await)
        }
        Commands::Tariff { tariff } => {
            emit(numerolog_lib::select_tariff(&ctx, Tariff::from(tariff.to_lowercase())).await)
        }
        Commands::Avatar { path } => emit(numerolog_lib::upload_avatar(&ctx, &path).await),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    run(Cli::parse()).await
}
