//! Prints what the local SDL3 library reports: version, power status, a
//! pixel format's layout and the clipboard's contents.
//!
//! Usage:
//!   sdl3-info --format ARGB8888 --json

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use opencnc_sdl3::LoaderConfig;
use opencnc_sdl3_info::{collect, render_text, resolve_format};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "sdl3-info")]
#[command(about = "Report what the installed SDL3 library provides")]
struct Args {
    /// Path to the SDL3 shared library (overrides SDL3_LIBRARY_PATH)
    #[arg(short, long)]
    library: Option<PathBuf>,

    /// Pixel format to describe, by name or numeric code
    #[arg(short, long, default_value = "RGBA8888")]
    format: String,

    /// Skip starting the video subsystem for clipboard queries
    #[arg(long)]
    no_clipboard: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging, including SDL's own log output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &args.library {
        opencnc_sdl3::load_library(&LoaderConfig::with_path(path.clone()))
            .with_context(|| format!("Failed to load SDL3 from {}", path.display()))?;
    }
    if !opencnc_sdl3::is_available() {
        bail!(
            "SDL3 library not found; install it or set {}",
            opencnc_sdl3::LIBRARY_PATH_ENV
        );
    }

    if args.verbose {
        opencnc_sdl3::log::forward_to_tracing().context("Failed to forward SDL logging")?;
        opencnc_sdl3::log::set_priorities(opencnc_sdl3::LogPriority::Debug)?;
    }

    let format = resolve_format(&args.format).context("Failed to look up pixel format")?;
    if format.is_none() {
        bail!("Unknown pixel format: {}", args.format);
    }
    debug!("Describing format {:?}", format);

    let report = collect(format, !args.no_clipboard).context("Failed to query SDL3")?;
    info!("SDL {} loaded", report.version);

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}
