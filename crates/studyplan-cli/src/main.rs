mod config;
mod generate_cmd;
mod profile_cmds;
mod serve_cmd;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use studyplan_core::completion::PerplexityClient;

use config::StudyplanConfig;

#[derive(Parser)]
#[command(
    name = "studyplan",
    about = "Motivation-aware study plan generator backed by a language model"
)]
struct Cli {
    /// Completion API key (overrides STUDYPLAN_API_KEY / PERPLEXITY_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a studyplan config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the motivation analysis for a profile as JSON
    Analyze {
        /// Path to the learner profile JSON file
        profile: PathBuf,
    },
    /// Print the prompt that would be sent for a profile
    Prompt {
        /// Path to the learner profile JSON file
        profile: PathBuf,
    },
    /// Generate a study plan for a profile
    Generate {
        /// Path to the learner profile JSON file
        profile: PathBuf,
        /// Replay a captured model reply instead of calling the API
        #[arg(long)]
        response_file: Option<PathBuf>,
        /// Output file path (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Serve the study plan endpoint over HTTP
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

/// Show only the start of a secret.
fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{prefix}...")
}

/// Execute the `studyplan init` command: write config file.
fn cmd_init(api_key: Option<&str>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        completion: config::CompletionSection {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  completion.api_url = {}", cfg.completion.api_url);
    println!("  completion.model = {}", cfg.completion.model);
    match api_key {
        Some(key) => println!("  completion.api_key = {}", mask_secret(key)),
        None => {
            println!();
            println!(
                "No API key stored. Set {} or rerun with --api-key before `studyplan generate`.",
                config::ENV_API_KEY
            );
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(cli.api_key.as_deref(), force)?;
        }
        Commands::Analyze { profile } => {
            profile_cmds::run_analyze(&profile)?;
        }
        Commands::Prompt { profile } => {
            profile_cmds::run_prompt(&profile)?;
        }
        Commands::Generate {
            profile,
            response_file,
            output,
        } => {
            generate_cmd::run_generate(
                &profile,
                response_file.as_deref(),
                output.as_deref(),
                cli.api_key.as_deref(),
            )
            .await?;
        }
        Commands::Serve { bind, port } => {
            let resolved = StudyplanConfig::resolve(cli.api_key.as_deref())?;
            let client = PerplexityClient::new(resolved.perplexity)
                .context("failed to build completion client")?;
            serve_cmd::run_serve(Arc::new(client), resolved.max_tokens, &bind, port).await?;
        }
    }

    Ok(())
}
