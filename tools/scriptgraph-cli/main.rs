use clap::Parser;
use scriptgraph::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Convert Unity C# scripts to Visual Scripting graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input C# file or directory
    input: PathBuf,

    /// Output directory (default: the directory containing the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process directories recursively
    #[arg(short, long)]
    recursive: bool,

    /// Emit statements in source order instead of grouped by kind
    #[arg(long)]
    textual_order: bool,

    /// Use counter-based GUIDs so repeated runs produce identical assets
    #[arg(long)]
    deterministic: bool,

    /// Log every recognized construct
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let converter = Converter::builder()
        .scan_order(if cli.textual_order {
            ScanOrder::Textual
        } else {
            ScanOrder::Category
        })
        .guids(if cli.deterministic {
            GuidStrategy::Sequential
        } else {
            GuidStrategy::Random
        })
        .build();

    let report = convert_path(&converter, &cli.input, cli.output.as_deref(), cli.recursive)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    for asset in &report.converted {
        println!("Converted: {}", asset.display());
    }
    for (source, err) in &report.failed {
        eprintln!("Failed: {}: {}", source.display(), err);
    }
    println!("\nConverted {} file(s)", report.converted.len());

    if !report.is_success() {
        std::process::exit(1);
    }
}

/// Warnings only unless `RUST_LOG` says otherwise; `--verbose` raises the crate to debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scriptgraph=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
