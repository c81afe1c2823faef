mod args;
mod export;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::{self, Write};
use std::time::Duration;

use args::Args;
use harmonic_dft::{AnalyzerConfig, GenerationWorker, SignalParameters};

fn main() {
    let args = Args::parse();

    // Set up logging only on request
    if args.enable_logs {
        // Don't override RUST_LOG if it's already set
        let env = env_logger::Env::default().default_filter_or("harmonic_dft=info,harmonic_dft_cli=info");
        env_logger::Builder::from_env(env).init();
    }

    if let Err(e) = run(&args) {
        if args.enable_logs {
            error!("Generation failed: {:?}", e);
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let params = SignalParameters::try_from(&args.parameter_form()).context("Invalid input")?;

    let base = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path).context("Invalid analyzer config")?,
        None => AnalyzerConfig::default(),
    };
    let config = args.apply_overrides(base);
    info!("Parameters: {:?}, config: {:?}", params, config);

    let mut worker = GenerationWorker::new();
    worker.start(params, config)?;

    // Keep the terminal informed while the transform runs
    while worker.is_running() {
        if !args.quiet {
            eprint!("\rGenerating results... {:>3.0}%", worker.progress() * 100.0);
            let _ = io::stderr().flush();
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    if !args.quiet {
        eprintln!();
    }

    let generation = worker.wait().context("Generation failed")?;
    print!("{}", generation.row);

    if let Some(path) = &args.csv {
        export::write_csv(&generation.row, path)?;
    }
    if let Some(path) = &args.json {
        export::write_json(&generation.row, path)?;
    }
    if let Some(dir) = &args.plots {
        let written = render::save_plots(&generation.plots, dir)?;
        for (series, path) in generation.plots.iter().zip(&written) {
            println!("{}: {}", path.display(), series.caption());
        }
        info!("Rendered {} plots into {}", written.len(), dir.display());
    }

    Ok(())
}
