use std::io;
use std::path::PathBuf;
use clap::{Parser, Subcommand};
use anyhow::Result;
use tracing_subscriber::EnvFilter;

use diet_impact_viz::{
    dump, print_dataset_info, run_pipeline, Dataset, PipelineConfig, DEFAULT_INPUT, DEFAULT_OUTPUT,
};
use diet_impact_viz::analyzer::DEFAULT_RUN_COUNT;

#[derive(Parser)]
#[command(name = "diet-impact-viz")]
#[command(author, version, about = "Parallel-coordinates report of dietary environmental impact")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample runs and write the parallel-coordinates HTML report
    Plot {
        /// Path to the summary CSV
        #[arg(short, long, value_name = "CSV", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output HTML file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Number of Monte Carlo runs to plot
        #[arg(short, long, default_value_t = DEFAULT_RUN_COUNT)]
        runs: usize,

        /// Seed for run selection (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Display information about the summary table
    Info {
        /// Path to the summary CSV
        #[arg(short, long, value_name = "CSV", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Also show per-metric value ranges
        #[arg(short, long)]
        verbose: bool,
    },

    /// Dump the sampled rows and computed axes to a text file for debugging
    Dump {
        /// Path to the summary CSV
        #[arg(short, long, value_name = "CSV", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output text file path (default: <input>.dump.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of Monte Carlo runs to sample
        #[arg(short, long, default_value_t = DEFAULT_RUN_COUNT)]
        runs: usize,

        /// Seed for run selection (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Plot { input, output, runs, seed } => {
            let config = PipelineConfig { input, output, runs, seed };
            let spec = run_pipeline(&config)?;

            println!("Visualization generated: {}", config.output.display());
            println!("{}: {}", spec.annotation.title, spec.annotation.text);
        }

        Commands::Info { input, verbose } => {
            let dataset = Dataset::open(&input)?;
            print_dataset_info(&dataset, verbose);
        }

        Commands::Dump { input, output, runs, seed } => {
            let dataset = Dataset::open(&input)?;

            let output_path = output.unwrap_or_else(|| {
                let mut path = input.clone();
                let new_name = format!(
                    "{}.dump.txt",
                    path.file_stem().and_then(|s| s.to_str()).unwrap_or("summary")
                );
                path.set_file_name(new_name);
                path
            });

            let options = dump::DumpOptions { runs, seed };
            dump::dump_to_file(&dataset, &output_path, &options)?;

            println!("Dump written to: {}", output_path.display());
        }
    }

    Ok(())
}
