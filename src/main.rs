//! Quantum Prompt Optimizer CLI
//!
//! Generates prompt variations from the command line, printing each one
//! with the provenance of the entropy that shaped it.

use clap::{Parser, ValueEnum};
use quantum_prompt::{
    config::{FileConfig, OutputFormat},
    entropy::{EntropySource, EntropyStats},
    export,
    metrics::{MetricsRegistry, MetricsSnapshot},
    variation::Provenance,
    TechniqueStacker, VariationGenerator,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Parametrized optimization approaches
    Approaches,
    /// Stacked prompt-engineering techniques
    Techniques,
}

#[derive(Debug, Parser)]
#[command(name = "quantum-prompt", version, about = "Transform prompts using physical randomness")]
struct Cli {
    /// Prompt to optimize
    prompt: String,

    /// Number of variations to generate
    #[arg(short = 'n', long, default_value_t = 5)]
    variations: usize,

    /// Generation mode
    #[arg(long, value_enum, default_value_t = Mode::Approaches)]
    mode: Mode,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip physical providers and use the local CSPRNG only
    #[arg(long)]
    offline: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Write a timestamped text export into this directory
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print Prometheus metrics after generating
    #[arg(long)]
    metrics: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    if cli.offline {
        config.entropy.go_offline();
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if cli.export.is_some() {
        config.output.export_dir = cli.export.clone();
    }

    info!("Quantum Prompt Optimizer v{}", quantum_prompt::VERSION);

    let entropy = EntropySource::from_config(&config.entropy)?;
    if entropy.provider_count() == 0 {
        info!("No physical providers enabled, using local CSPRNG");
    }

    let stats = match cli.mode {
        Mode::Approaches => {
            let mut generator = VariationGenerator::new(entropy, &config.generation);
            let records = generator.generate(&cli.prompt, cli.variations)?;

            match config.output.format {
                OutputFormat::Json => println!("{}", export::to_json(&records)?),
                OutputFormat::Text => {
                    for record in &records {
                        println!(
                            "=== Variation {}: {} ===",
                            record.id, record.approach_name
                        );
                        print_provenance(&record.provenance);
                        println!("{}\n", record.prompt);
                        println!("  ({})\n", record.description);
                    }
                }
            }
            if let Some(dir) = &config.output.export_dir {
                let path = export::write_text(dir, &records)?;
                println!("Exported to {}", path.display());
            }
            if cli.metrics {
                print_metrics(MetricsSnapshot::from_session(
                    1,
                    generator.entropy_stats(),
                    &records,
                ))?;
            }
            generator.entropy_stats()
        }
        Mode::Techniques => {
            let mut stacker = TechniqueStacker::new(entropy, &config.generation);
            let variations = stacker.generate(&cli.prompt, cli.variations)?;

            match config.output.format {
                OutputFormat::Json => println!("{}", export::to_json(&variations)?),
                OutputFormat::Text => {
                    for variation in &variations {
                        println!(
                            "=== Variation {}: {} ===",
                            variation.id,
                            variation.technique_names.join(", ")
                        );
                        print_provenance(&variation.provenance);
                        println!("{}\n", variation.prompt);
                        for (name, description) in
                            variation.technique_names.iter().zip(variation.descriptions())
                        {
                            println!("  • {name}: {description}");
                        }
                        println!();
                    }
                }
            }
            if let Some(dir) = &config.output.export_dir {
                let path = export::write_text(dir, &variations)?;
                println!("Exported to {}", path.display());
            }
            if cli.metrics {
                let mut snapshot = MetricsSnapshot::from_session(1, stacker.entropy_stats(), &[]);
                snapshot.variations = variations.len() as u64;
                print_metrics(snapshot)?;
            }
            stacker.entropy_stats()
        }
    };

    print_summary(stats);
    Ok(())
}

fn print_provenance(provenance: &Provenance) {
    println!("[{}] Source: {} ({})", provenance.badge(), provenance.source, provenance.detail);
    if !provenance.is_physical && !provenance.fallback_reasons.is_empty() {
        println!("Physical sources unavailable, used secure local randomness instead");
    }
}

fn print_metrics(snapshot: MetricsSnapshot) -> Result<(), Box<dyn std::error::Error>> {
    let registry = MetricsRegistry::new()?;
    registry.update(&snapshot);
    println!("{}", registry.encode()?);
    Ok(())
}

fn print_summary(stats: EntropyStats) {
    if stats.provider_failures > 0 {
        warn!(
            failures = stats.provider_failures,
            "Some physical providers were unavailable"
        );
    }
    info!(
        physical_calls = stats.physical_calls,
        fallback_calls = stats.fallback_calls,
        "Done"
    );
}
