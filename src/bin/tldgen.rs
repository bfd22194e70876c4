//! Regenerates `src/tlds.rs` from the IANA list and the Public Suffix List.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use linkgrep::tldgen::{render, write_tlds, TldGenerator, TldSource};

#[derive(Debug, Parser)]
#[command(version, about = "Regenerate the built-in TLD list", long_about = None)]
struct Args {
    /// Where to write the generated source file
    #[arg(short, long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/src/tlds.rs"))]
    output: PathBuf,

    #[arg(long, value_name = "URL", default_value = TldSource::Iana.default_url())]
    iana_url: String,

    #[arg(long, value_name = "URL", default_value = TldSource::PublicSuffix.default_url())]
    public_suffix_url: String,

    /// Timeout for each fetch
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Print the generated source instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> ExitCode {
    init_logger();
    let args = Args::parse();

    let generator = TldGenerator::new()
        .with_iana_url(args.iana_url)
        .with_public_suffix_url(args.public_suffix_url)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let tlds = match generator.generate() {
        Ok(tlds) => tlds,
        Err(e) => {
            error!("Could not get TLD list: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if args.dry_run {
        print!("{}", render(&tlds));
        return ExitCode::SUCCESS;
    }

    if let Err(e) = write_tlds(&args.output, &tlds) {
        error!("Could not write {}: {}", args.output.display(), e);
        return ExitCode::FAILURE;
    }

    info!(count = tlds.len(), path = %args.output.display(), "wrote TLD list");
    ExitCode::SUCCESS
}
