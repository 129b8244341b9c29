//! Command line entry point for the forge client

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use forge::services::FileDataset;
use forge::{Forge, ForgeConfig, ForgeQueue, ForgeResult, OfflineNames, RealRemoteCall, StaticAuth};
use shared::{DescriptionOptions, GenerationMethod, GenerationOptions, HomebrewOptions, NamesOptions, logging};

/// Generate names, descriptions and homebrew content for TTRPGs
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Generate names, descriptions and homebrew content for tabletop RPGs")]
struct Args {
    /// Base URL of the generation API (overrides FORGE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Credential sent with every request (overrides FORGE_AUTH_TOKEN)
    #[arg(long, global = true)]
    auth_token: Option<String>,

    /// Per-request timeout in milliseconds (overrides FORGE_TIMEOUT_MS)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: Option<u64>,

    /// Names dataset replacing the bundled one (overrides FORGE_OFFLINE_NAMES)
    #[arg(long, global = true)]
    offline_names: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate names
    Names {
        #[arg(long = "type")]
        category: String,
        #[arg(long)]
        genre: String,
        #[arg(long, default_value_t = 5)]
        quantity: u32,
        #[arg(long, default_value = "")]
        gender: String,
        #[arg(long)]
        language: Option<String>,
        /// `ai` or `simple` (offline)
        #[arg(long, default_value = "ai")]
        method: GenerationMethod,
    },
    /// Generate a description
    Description {
        #[arg(long = "type")]
        category: String,
        #[arg(long)]
        genre: String,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        style: String,
        /// short, medium or extensive
        #[arg(long, default_value = "")]
        length: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        system: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Generate a homebrew object from a JSON options file
    Homebrew { file: PathBuf },
}

impl Command {
    fn into_options(self) -> anyhow::Result<GenerationOptions> {
        let options = match self {
            Command::Names {
                category,
                genre,
                quantity,
                gender,
                language,
                method,
            } => NamesOptions {
                quantity,
                method,
                category,
                genre,
                gender,
                language,
            }
            .into(),
            Command::Description {
                category,
                genre,
                name,
                style,
                length,
                language,
                system,
                notes,
            } => DescriptionOptions {
                name,
                category,
                genre,
                style,
                length,
                language,
                system,
                notes,
            }
            .into(),
            Command::Homebrew { file } => {
                let raw = std::fs::read_to_string(&file)
                    .with_context(|| format!("reading homebrew options from {}", file.display()))?;
                let options: HomebrewOptions =
                    serde_json::from_str(&raw).with_context(|| format!("parsing {}", file.display()))?;
                options.into()
            }
        };
        Ok(options)
    }
}

fn apply_overrides(config: &mut ForgeConfig, args: &Args) -> ForgeResult<()> {
    if let Some(url) = &args.api_url {
        config.api_url = Some(url.clone());
    }
    if let Some(token) = &args.auth_token {
        config.auth_token = token.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.set_timeout_ms(ms)?;
    }
    if let Some(path) = &args.offline_names {
        config.offline_names_path = Some(path.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ForgeConfig::from_env()?;
    apply_overrides(&mut config, &args)?;

    logging::init_tracing(Some(&config.log_level));
    logging::log_startup("forge client");

    let options = args.command.into_options()?;
    let offline_only = matches!(
        &options,
        GenerationOptions::Names(names) if names.method == GenerationMethod::Simple
    );

    let remote = if offline_only {
        RealRemoteCall::new(config.api_url.clone().unwrap_or_default(), config.timeout)
    } else {
        RealRemoteCall::from_config(&config)?
    };

    let offline = match &config.offline_names_path {
        Some(path) => {
            debug!("Using offline names from {}", path.display());
            Arc::new(OfflineNames::new(FileDataset::new(path)))
        }
        None => OfflineNames::global(),
    };

    let forge = Forge::with_offline(remote, StaticAuth::new(config.auth_token.clone()), offline);
    let queue = ForgeQueue::new(forge);

    match queue.submit(options).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            logging::log_error("Generation failed", &e);
            Err(e.into())
        }
    }
}
