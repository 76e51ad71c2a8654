use anyhow::Result;
use clap::{Parser, Subcommand};

use rudeshare::moderation::{self, Severity};
use rudeshare::output::terminal;

/// RudeShare: the anonymous board that bans politeness.
///
/// Profanity is tolerated, threats are not, and anything too nice ends up
/// in the Hall of Shame.
#[derive(Parser)]
#[command(name = "rudeshare", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a piece of text through the moderation engine
    Moderate {
        /// The text to classify
        text: String,

        /// Print the raw verdict as JSON instead of a colored summary
        #[arg(long)]
        json: bool,
    },

    /// Show today's brutal challenge
    Challenge {
        /// Pick a random challenge instead of today's
        #[arg(long)]
        random: bool,
    },

    /// Start the board's JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides RUDESHARE_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides RUDESHARE_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rudeshare=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Moderate { text, json } => {
            let text = text.trim();
            let verdict = moderation::moderate(text);

            if json {
                println!("{}", serde_json::to_string_pretty(&verdict)?);
                return Ok(());
            }

            terminal::display_verdict(text, &verdict);
            if verdict.severity == Severity::BannedPolite {
                let response = moderation::generate_rude_response(&verdict.flagged_terms);
                terminal::display_rude_response(&response);
            }
        }

        Commands::Challenge { random } => {
            let prompt = if random {
                rudeshare::challenge::random_challenge(&mut rand::rng())
            } else {
                rudeshare::challenge::todays_challenge()
            };
            terminal::display_challenge(prompt);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = rudeshare::config::Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            tracing::info!(
                max_post_chars = config.max_post_chars,
                max_comment_chars = config.max_comment_chars,
                retention_days = config.retention_days,
                "Starting RudeShare"
            );
            println!(
                "{}",
                colored::Colorize::bold(
                    format!("RudeShare on http://{}:{}", config.bind, config.port).as_str()
                )
            );

            let store: std::sync::Arc<dyn rudeshare::board::BoardStore> =
                std::sync::Arc::new(rudeshare::board::MemoryStore::new());
            rudeshare::web::run_server(config, store).await?;
        }
    }

    Ok(())
}
