#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates gated step sequences and renders pages.

mod config;

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use stepgate_core::{ExpiryPreset, Sequence, UserParams};
use stepgate_pages::{PageRenderer, PageSkeleton};
use stepgate_system_seeding::SeedDigest;
use stepgate_system_sequence::SequenceBuilder;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Debug, Parser)]
#[command(name = "stepgate", about = "Generate forced-delay step sequences")]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Generates a step sequence and prints it as JSON.
    Generate(GenerateArgs),
    /// Wraps block markup in a page skeleton and prints the HTML.
    Render(RenderArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Total duration preset: 30s, 1min, 2min, 5min or 10min.
    #[arg(long, default_value = "1min")]
    preset: String,
    /// Number of steps to attempt, capped by the preset.
    #[arg(long)]
    steps: Option<u32>,
    /// Content fingerprint folded into the seed.
    #[arg(long, default_value = "")]
    fingerprint: String,
    /// Short session identifier folded into the seed.
    #[arg(long, default_value = "")]
    short_id: String,
    /// Link expiry preset: 1h, 1d, 3d or 7d.
    #[arg(long)]
    expiry: Option<String>,
    /// Replays generation from a hexadecimal digest instead of fresh entropy.
    #[arg(long)]
    seed: Option<String>,
    /// Pretty-prints the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Page skeleton identifier.
    #[arg(long, default_value = "simple_center")]
    page: String,
    /// File holding the block markup; read from stdin when omitted.
    #[arg(long)]
    block: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateOutput<'a> {
    #[serde(flatten)]
    sequence: &'a Sequence,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in_seconds: Option<u64>,
}

/// Entry point for the stepgate command-line interface.
fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let mut stdout = io::stdout().lock();
    match cli.command {
        CliCommand::Generate(args) => generate(&config, &args, &mut stdout),
        CliCommand::Render(args) => render(&args, &mut stdout),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn generate(config: &CliConfig, args: &GenerateArgs, out: &mut impl Write) -> Result<()> {
    let expiry = match args.expiry.as_deref() {
        None => None,
        Some(label) => {
            let Some(preset) = ExpiryPreset::from_label(label) else {
                bail!("unknown expiry preset `{label}`; expected one of 1h, 1d, 3d, 7d");
            };
            Some(preset)
        }
    };

    let catalog = Arc::new(config.catalog()?);
    let mut builder = SequenceBuilder::new(catalog, config.generation);
    let params = UserParams::new(args.preset.as_str(), args.steps);

    let sequence = match &args.seed {
        Some(hex) => {
            let seed = SeedDigest::from_hex(hex.as_str()).context("invalid --seed digest")?;
            debug!(seed = seed.prefix(), "replaying generation from supplied digest");
            builder.generate_with_seed(&params, &seed)
        }
        None => builder.generate(&params, &args.fingerprint, &args.short_id),
    };

    let output = GenerateOutput {
        sequence: &sequence,
        expires_in_seconds: expiry.map(|preset| preset.duration().as_secs()),
    };
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("failed to serialize generated sequence")?;

    writeln!(out, "{json}").context("failed to write generated sequence")
}

fn render(args: &RenderArgs, out: &mut impl Write) -> Result<()> {
    let block = match &args.block {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read block markup at {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read block markup from stdin")?,
    };

    let renderer = PageRenderer;
    if renderer.skeleton(&args.page).is_none() {
        let known: Vec<&str> = renderer.skeletons().map(PageSkeleton::id).collect();
        warn!(page = %args.page, ?known, "unknown page skeleton; printing the bare block");
    }
    let html = renderer.render(&args.page, &block);
    out.write_all(html.as_bytes())
        .context("failed to write rendered page")
}
