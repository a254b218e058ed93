mod app;
mod commands;
mod ui;

use anyhow::Context;
use app::App;
use clap::Parser;
use commands::Command;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use visuweave_core::infrastructure::logging::{level_to_str, resolve_default_level};
use visuweave_core::{
    ConfigManager, HttpAssetProbe, SceneComposer, SceneVariant, ScriptedCapture, SpeechCapture,
    UnavailableCapture,
};

#[derive(Parser, Debug)]
#[command(name = "visuweave-cli", version, about = "Describe a scene, get its images")]
struct Args {
    /// Config file (defaults to the user config, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scene variant: noun or object
    #[arg(long, value_parser = parse_variant)]
    variant: Option<SceneVariant>,

    /// Asset Host image URL prefix, e.g. http://localhost:5000/images/
    #[arg(long)]
    base_url: Option<String>,

    /// Replay spoken transcripts from a file (one utterance per line) for /speak
    #[arg(long)]
    transcripts: Option<PathBuf>,

    /// Print the final session as JSON on exit
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn parse_variant(value: &str) -> Result<SceneVariant, String> {
    value.parse()
}

fn init_logging(is_debug: bool) {
    let level = level_to_str(resolve_default_level(is_debug));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_capture(transcripts: Option<&PathBuf>) -> anyhow::Result<Box<dyn SpeechCapture>> {
    match transcripts {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read transcripts {}", path.display()))?;
            Ok(Box::new(ScriptedCapture::from_lines(&content)))
        }
        None => Ok(Box::new(UnavailableCapture::default())),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let mut config = ConfigManager::load(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(base_url) = args.base_url {
        config.resolver.base_url = base_url;
    }
    config.validate()?;
    info!(
        "Starting scene session: variant={}, base_url={}",
        config.variant, config.resolver.base_url
    );

    let probe = Arc::new(HttpAssetProbe::new(config.probe_timeout())?);
    let composer = SceneComposer::from_config(&config, probe);
    let capture = build_capture(args.transcripts.as_ref())?;
    let mut app = App::new(composer, capture);

    let mut stdout = std::io::stdout();
    app.flush_transcript(&mut stdout)?;
    writeln!(stdout, "{}", commands::HELP)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if app.handle(Command::parse(&line), &mut stdout).await?.is_break() {
            break;
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(app.session())?;
        writeln!(stdout, "{}", json)?;
    }

    Ok(())
}
