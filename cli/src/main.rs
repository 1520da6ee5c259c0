//! Edital CLI - submit spreadsheets for point-by-point analysis
//!
//! # Main Commands
//!
//! ```bash
//! edital submit edital.xlsx --project "Edital 2024"   # Validate and submit
//! edital validate edital.xlsx                          # Only run the file policy
//! edital config                                        # Show effective configuration
//! edital serve                                         # Local receiver (port 3000)
//! ```
//!
//! Configuration comes from `EDITAL_*` environment variables (a `.env`
//! file is honoured) and can be overridden per command.

use clap::{Parser, Subcommand};
use edital_cli::{config_from_env, load_candidate, CliError, CliResult, LinkKey, ReqwestTransport};
use edital_core::{submit, validate, Notice, UploadIntake, UploaderConfig};
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "edital")]
#[command(about = "Submit spreadsheets for point-by-point analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a spreadsheet and submit it to the endpoint
    Submit {
        /// Spreadsheet to submit
        input: PathBuf,

        /// Project name the submission is filed under
        #[arg(short, long)]
        project: String,

        /// Endpoint URL (overrides EDITAL_ENDPOINT_URL)
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a spreadsheet against the type and size policy
    Validate {
        /// Spreadsheet to check
        input: PathBuf,
    },

    /// Print the effective configuration as JSON
    Config,

    /// Start the development receiver
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Response key carrying the tracking link
        #[arg(long, value_enum, default_value_t = LinkKey::Link)]
        link_key: LinkKey,

        /// Base URL used in returned links (default: http://localhost:<port>)
        #[arg(long)]
        public_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Submit {
            input,
            project,
            endpoint,
            json,
        } => cmd_submit(&input, &project, endpoint, json).await,

        Commands::Validate { input } => cmd_validate(&input).await,

        Commands::Config => cmd_config(),

        Commands::Serve {
            port,
            link_key,
            public_url,
        } => edital_cli::server::start_server(port, link_key, public_url).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_submit(input: &Path, project: &str, endpoint: Option<String>, as_json: bool) -> CliResult<()> {
    let mut config = config_from_env()?;
    if let Some(url) = endpoint {
        config = config.with_endpoint(url);
    }

    eprintln!("📄 Loading: {}", input.display());
    let candidate = load_candidate(input).await?;

    let mut intake = UploadIntake::new(config.clone());
    if let Err(rejection) = intake.accept(candidate) {
        print_notice(&Notice::file_rejected(&rejection, &config));
        return Err(rejection.into());
    }
    if let Some(file) = intake.held() {
        print_notice(&Notice::file_accepted(&file.name));
    }

    eprintln!("📤 Sending to {}", config.endpoint_url);
    let result = match submit(&ReqwestTransport::new(), &config, intake.held(), project).await {
        Ok(result) => result,
        Err(e) => {
            print_notice(&Notice::submission_failed(&e));
            return Err(e.into());
        }
    };

    print_notice(&Notice::submission_succeeded());
    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        eprintln!("   Projeto: {}", result.project_name);
        println!("{}", result.link);
    }

    Ok(())
}

async fn cmd_validate(input: &Path) -> CliResult<()> {
    let config = config_from_env()?;

    eprintln!("✔️  Validating: {}", input.display());
    let candidate = load_candidate(input).await?;
    eprintln!("   Type: {}", candidate.media_type);
    eprintln!("   Size: {}", candidate.size_label());

    match validate(&config, &candidate) {
        Ok(()) => {
            print_notice(&Notice::file_accepted(&candidate.name));
            Ok(())
        }
        Err(reason) => {
            let rejection = edital_core::ValidationRejected {
                file_name: candidate.name,
                reason,
            };
            print_notice(&Notice::file_rejected(&rejection, &config));
            Err(CliError::Rejected(rejection))
        }
    }
}

fn cmd_config() -> CliResult<()> {
    let config: UploaderConfig = config_from_env()?;
    let output = json!({
        "config": config,
        "maxFileSize": config.max_file_size_label(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_notice(notice: &Notice) {
    eprintln!("{} {} {}", notice.severity.emoji(), notice.title, notice.description);
}
