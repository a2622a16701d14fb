//! Autoquote CLI
//!
//! Insurance quote calculator on the terminal

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autoquote_app::{render_quote, run_session, AppConfig, ApplicantForm, QuoteEnv};
use autoquote_common::{normalize_quote_id_input, VERSION};
use autoquote_directory::{find_quote, QuoteDirectory};
use autoquote_pricing::quote_applicant;

#[derive(Parser, Debug)]
#[command(name = "autoquote", version, about = "Insurance quote calculator")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, global = true, help = "Seed quote-number generation for reproducible output")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a new quote
    Quote {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        age: String,
        #[arg(long, help = "sedan, suv, luxury, or truck")]
        vehicle: String,
        #[arg(long, help = "liability, collision, or comprehensive")]
        coverage: String,
        #[arg(long)]
        email: String,
    },
    /// Look up an existing quote by its 7-character ID
    Find { id: String },
    /// Run an interactive session on stdin
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?.with_overrides(cli.seed, cli.json);

    // Initialize tracing; stdout is reserved for screens and JSON
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting autoquote v{}", VERSION);
    info!("Loaded configuration: {:?}", config);

    let directory = QuoteDirectory::mock();
    let ids = config.id_generator();
    let env = QuoteEnv::new(&directory, &ids);

    match cli.command {
        Commands::Quote {
            first_name,
            last_name,
            age,
            vehicle,
            coverage,
            email,
        } => {
            let form = ApplicantForm {
                first_name,
                last_name,
                age,
                vehicle_type: vehicle,
                coverage,
                email,
            };
            let applicant = form.validate()?;
            let quote = quote_applicant(&applicant, env.ids);
            if config.json_output {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Your Insurance Quote\n{}", render_quote(&quote));
            }
        }
        Commands::Find { id } => {
            let quote = find_quote(env.directory, &normalize_quote_id_input(&id))?;
            if config.json_output {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                println!("Found Quote\n{}", render_quote(&quote));
            }
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            run_session(stdin.lock(), io::stdout(), &env, config.json_output)?;
        }
    }

    Ok(())
}
