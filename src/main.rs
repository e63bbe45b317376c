use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;

use repo_janitor_rs::logging;
use repo_janitor_rs::prelude::*;
use repo_janitor_rs::scanner::inspect_files_with_progress;

#[derive(Parser)]
#[command(name = "repo_janitor_rs")]
#[command(about = "Null-byte scanner and Prisma schema de-duplicator", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report source files that contain null bytes
    Scan {
        /// Root directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Number of parallel worker threads (default: number of CPUs)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Also write a report file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the report file as JSON
        #[arg(long, requires = "output")]
        json: bool,

        /// Run in batch mode (no progress bar)
        #[arg(long)]
        batch: bool,
    },

    /// Remove the marked duplicate `model Expense` block from a schema file
    FixSchema {
        /// Schema file to rewrite in place
        #[arg(default_value = "prisma/schema.prisma")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Scan {
            directory,
            workers,
            output,
            json,
            batch,
        } => run_scan(directory, workers, output, json, batch),
        Command::FixSchema { file } => run_fix_schema(file),
    }
}

fn run_scan(
    directory: PathBuf,
    workers: Option<usize>,
    output: Option<PathBuf>,
    json: bool,
    batch: bool,
) -> Result<()> {
    if let Some(workers) = workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
            .context("Failed to build thread pool")?;
    }

    let files = collect_candidate_files(&directory)?;
    tracing::info!(
        "Inspecting {} candidate file(s) on {} thread(s)",
        files.len(),
        rayon::current_num_threads()
    );

    let progress = if batch {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .context("Invalid progress template")?
                .progress_chars("#>-"),
        );
        pb
    };

    let results = inspect_files_with_progress(&files, progress.clone());
    progress.finish_and_clear();

    print_results(&mut io::stdout().lock(), &results)?;

    if let Some(output) = output {
        if json {
            write_json_report(&output, &results)?;
        } else {
            write_report(&output, &results)?;
        }
        tracing::info!("Report saved to {}", output.display());
    }

    Ok(())
}

fn run_fix_schema(file: PathBuf) -> Result<()> {
    let dedup = fix_schema_file(&file)?;
    if !dedup.changed() {
        tracing::warn!("No marked block found in {}", file.display());
    }
    println!("Fixed schema.");
    Ok(())
}
