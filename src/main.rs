// main.rs
use bienestar::cli::{self, Args, Commands};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "bienestar=info,tower_http=warn";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();

    let result = match args.command {
        Commands::Serve { host, port, config } => cli::handle_serve(host, port, config).await,
        Commands::Emotions => cli::handle_emotions(),
        Commands::Show { emotion } => cli::handle_show(&emotion),
        Commands::Check => cli::handle_check(),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
