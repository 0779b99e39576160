use anyhow::{Context, Result, bail};
use bakery_core::{
    application::services::SecurityServices,
    config::AppConfig,
    domain::{
        access::{Principal, has_dot_segment},
        user::PasswordHash,
    },
};
use clap::{Parser, Subcommand};
use std::{
    io::{self, BufRead},
    process::ExitCode,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "bakery-core",
    version,
    about = "Password and access-policy tooling for the bakery backend"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a password from stdin and print its hash.
    EncodePassword,
    /// Read a password from stdin and check it against a stored hash.
    VerifyPassword {
        #[arg(long, env = "BAKERY_PASSWORD_HASH")]
        hash: String,
    },
    /// Print the access decision for a request path.
    CheckAccess {
        path: String,
        /// Role of the caller; omit for an anonymous request.
        #[arg(long)]
        role: Option<String>,
        #[arg(long, default_value = "cli@localhost")]
        email: String,
    },
}

/// `verify-password` exits with 1 on a mismatch; errors use a separate code.
const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "fatal error");
            eprintln!("fatal error: {err:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<ExitCode> {
    // Loads `.env` first so it can also supply `RUST_LOG` and clap's env args.
    let config = AppConfig::from_env()?;
    init_tracing();

    let cli = Cli::parse();
    let services = SecurityServices::from_config(&config)?;

    match cli.command {
        Command::EncodePassword => {
            let password = read_password()?;
            let hash = services.password_encoder().encode(&password)?;
            println!("{}", hash.as_str());
            Ok(ExitCode::SUCCESS)
        }
        Command::VerifyPassword { hash } => {
            let hash = PasswordHash::new(hash)?;
            let password = read_password()?;
            if services.password_encoder().matches(&password, &hash)? {
                println!("match");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("no match");
                Ok(ExitCode::from(EXIT_NO_MATCH))
            }
        }
        Command::CheckAccess { path, role, email } => {
            let principal = role.map(|role| Principal::new(email, role));
            let policy = services.access_policy();
            let source = if has_dot_segment(&path) {
                "dot-segment".to_owned()
            } else {
                policy
                    .matching_rule(&path)
                    .map_or_else(|| "fallback".to_owned(), |rule| rule.pattern.to_string())
            };
            let decision = policy.evaluate(&path, principal.as_ref());
            println!("{decision} ({source})");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_password() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        bail!("no password given on stdin");
    }
    Ok(password.to_owned())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    // stdout carries command output; logs go to stderr.
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
