use clap::Parser;
use std::path::PathBuf;
use visuweave_core::ConfigManager;

#[derive(Parser, Debug)]
#[command(name = "visuweave-server", version, about = "Serve scene images over HTTP")]
struct Args {
    /// Config file (defaults to the user config, then built-in defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the served image directory
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    visuweave_server::init_logging(args.debug);

    let mut config = ConfigManager::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config.host.host = host;
    }
    if let Some(port) = args.port {
        config.host.port = port;
    }
    if let Some(images_dir) = args.images_dir {
        config.host.images_dir = images_dir;
    }

    visuweave_server::serve(&config.host).await
}
