use std::path::PathBuf;

use anyhow::Context;
use briefing_core::models::{BriefingInput, KeywordSet};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use seo_briefing::api::{self, AppState, SecurityConfig};
use seo_briefing::config::{self, AppConfig};
use seo_briefing::export::render_report;
use seo_briefing::extraction::{encode_document, AnthropicExtractor, KeywordExtractor};

#[derive(Parser)]
#[command(name = "briefing")]
#[command(about = "SEO content briefings from keyword research")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for HTTP API
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Compose a briefing and print the text report
    Compose {
        /// Main keyword
        main: String,

        /// Keyword variation (repeatable)
        #[arg(short, long = "variation")]
        variations: Vec<String>,

        /// Long-tail keyword (repeatable)
        #[arg(short, long = "long-tail")]
        long_tail: Vec<String>,

        /// Related question (repeatable)
        #[arg(short, long = "question")]
        questions: Vec<String>,

        /// Competitor URL or description
        #[arg(short, long)]
        competitor: Option<String>,

        /// Display name (defaults to the main keyword)
        #[arg(short, long)]
        name: Option<String>,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Extract keywords from a PDF keyword report
    Extract {
        /// Path to the PDF
        pdf: PathBuf,
    },
    /// Print the effective configuration
    Config {
        /// Write a default config file if none exists yet
        #[arg(long)]
        init: bool,

        /// With --init, overwrite an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },
}

/// Initialize tracing on stderr so command output on stdout stays clean.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "seo_briefing=debug,briefing_core=debug,tower_http=debug".into()
        }),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn serve(config: &AppConfig, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let mut state = AppState::new(config.composer.build_composer());
    match AnthropicExtractor::from_config(&config.extraction) {
        Ok(extractor) => state = state.with_extractor(extractor),
        Err(e) => tracing::warn!("PDF import disabled: {}", e),
    }

    let app = api::create_router(state, SecurityConfig::from_env());

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Briefing server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&config, host, port).await?,
        Some(Commands::Compose {
            main,
            variations,
            long_tail,
            questions,
            competitor,
            name,
            out,
        }) => {
            let keywords = KeywordSet::new(main)
                .with_variations(variations)
                .with_long_tail(long_tail)
                .with_questions(questions);
            let input = BriefingInput {
                name,
                keywords,
                competitor,
            };

            let composer = config.composer.build_composer();
            let doc = composer.build_document(Uuid::new_v4(), &input, Utc::now())?;
            let report = render_report(&doc);

            match out {
                Some(path) => {
                    std::fs::write(&path, &report)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote briefing to {}", path.display());
                }
                None => println!("{}", report),
            }
        }
        Some(Commands::Extract { pdf }) => {
            let bytes = std::fs::read(&pdf)
                .with_context(|| format!("Failed to read {}", pdf.display()))?;
            let extractor = AnthropicExtractor::from_config(&config.extraction)?;
            let keywords = extractor.extract(&encode_document(&bytes)).await?;
            println!("{}", serde_json::to_string_pretty(&keywords)?);
        }
        Some(Commands::Config { init: true, force }) => {
            let path = config::get_config_path()?;
            if AppConfig::init_at(&path, force)? {
                tracing::info!("Wrote default config to {}", path.display());
            } else {
                tracing::warn!("{} already exists, use --force to overwrite", path.display());
            }
        }
        Some(Commands::Config { init: false, .. }) => {
            match config::get_config_path() {
                Ok(path) => eprintln!("# {}", path.display()),
                Err(e) => tracing::warn!("{}", e),
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        None => serve(&config, None, None).await?,
    }

    Ok(())
}
