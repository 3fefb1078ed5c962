//! chatdesk - knowledge base and company settings dashboard
//!
//! This is the binary entry point. All logic lives in the library.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chatdesk::{build_client, resolve_settings, run_headless_upload, HeadlessUpload};
use chatdesk_app::config;
use chatdesk_core::prelude::*;

/// chatdesk - upload knowledge base documents and manage your chatbot
#[derive(Parser, Debug)]
#[command(name = "chatdesk", version)]
#[command(about = "Knowledge base uploads and chatbot settings from the terminal", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config and CHATDESK_API_URL)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Bearer token (overrides CHATDESK_TOKEN)
    #[arg(long, value_name = "TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload documents without the TUI, printing NDJSON events
    Upload {
        /// Upload text read from stdin under this filename instead of files
        #[arg(long, value_name = "NAME", conflicts_with = "files")]
        text_filename: Option<String>,

        /// Documents to upload
        #[arg(value_name = "FILES", required_unless_present = "text_filename")]
        files: Vec<PathBuf>,
    },

    /// Write a commented default config file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    chatdesk_core::logging::init()?;

    match args.command {
        None => {
            let settings = resolve_settings(args.config.as_deref(), args.api_url)?;
            chatdesk::run(settings, args.token).await
        }
        Some(Command::Init) => {
            let path = args
                .config
                .or_else(config::default_config_path)
                .ok_or_else(|| Error::config("No config directory on this platform"))?;
            config::init_config_dir(&path)?;
            eprintln!("Config written to {}", path.display());
            Ok(())
        }
        Some(Command::Upload {
            text_filename,
            files,
        }) => {
            let settings = resolve_settings(args.config.as_deref(), args.api_url)?;
            let upload = match text_filename {
                Some(filename) => {
                    let mut content = String::new();
                    std::io::stdin().read_to_string(&mut content)?;
                    HeadlessUpload::Text { filename, content }
                }
                None => HeadlessUpload::Files(files),
            };

            let api = build_client(&settings, args.token)?;
            if !run_headless_upload(settings, api, upload).await? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
