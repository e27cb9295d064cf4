// src/cli.rs
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{ConfigRegistry, EmotionKind, EmotionResolver};
use crate::server;

#[derive(Parser)]
#[command(name = "bienestar")]
#[command(version, about = "Emotional wellness center: guided breathing and calming waves")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config and BIENESTAR_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config and BIENESTAR_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Path to a config.json
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List supported emotions and their exercises
    Emotions,
    /// Print the exercise bundle for an emotion as JSON
    Show {
        emotion: String,
    },
    /// Validate the built-in configuration
    Check,
}

pub async fn handle_serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = Config::new(config_path)?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    print_banner(&config);
    server::serve(config).await
}

fn print_banner(config: &Config) {
    let rule = "=".repeat(50);
    println!("{}", rule);
    println!("{}", "🌟 Centro de Bienestar Emocional".cyan().bold());
    println!("{}", rule);
    println!("🚀 Servidor iniciando...");
    println!("📡 Accede a: http://{}", config.bind_address());
    println!("💡 Para detener el servidor: Ctrl+C");
    println!("{}", rule);
}

pub fn handle_emotions() -> Result<()> {
    let registry = ConfigRegistry::load()?;

    println!("{}", "Emociones disponibles".cyan().bold());
    for (kind, exercise) in registry.exercises().iter() {
        println!(
            "  {} ({}, /select/{}) - {} · {:.0}s",
            kind.label().bold(),
            kind.as_str(),
            kind.slug(),
            exercise.technique,
            exercise.total_seconds()
        );
    }
    Ok(())
}

pub fn handle_show(emotion: &str) -> Result<()> {
    let registry = std::sync::Arc::new(ConfigRegistry::load()?);
    let resolver = EmotionResolver::new(registry);
    let resolved = resolver.resolve(emotion).map_err(|e| {
        let supported: Vec<_> = EmotionKind::ALL.iter().map(|k| k.as_str()).collect();
        anyhow!("{e} (supported: {})", supported.join(", "))
    })?;

    let bundle = serde_json::json!({
        "emotion": resolved.emotion,
        "config": resolved.config,
        "general": resolved.general,
    });
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}

pub fn handle_check() -> Result<()> {
    let registry = ConfigRegistry::load()?;
    for (kind, exercise) in registry.exercises().iter() {
        println!(
            "{} {}: {} ramps, {} messages",
            "✓".green(),
            kind,
            exercise.color_ramps.len(),
            exercise.messages.len()
        );
    }
    println!("{} ui theme: {} orbs", "✓".green(), registry.theme().orbs.len());
    println!("{}", "Configuration OK".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let args = Args::try_parse_from(["bienestar", "serve", "--port", "8080"]).unwrap();
        match args.command {
            Commands::Serve { host, port, config } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
                assert_eq!(config, None);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_show() {
        let args = Args::try_parse_from(["bienestar", "show", "estres"]).unwrap();
        assert!(matches!(args.command, Commands::Show { ref emotion } if emotion == "estres"));
    }

    #[test]
    fn test_show_rejects_unknown_emotion() {
        let err = handle_show("alegria").unwrap_err();
        assert!(err.to_string().contains("alegria"));
        assert!(handle_show("ira").is_ok());
    }

    #[test]
    fn test_check_passes_on_builtin_data() {
        assert!(handle_check().is_ok());
        assert!(handle_emotions().is_ok());
    }
}
