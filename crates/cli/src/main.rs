mod commands;

use anyhow::Result;
use cjk_text::Script;
use clap::{Args, Parser, Subcommand};
use commands::ExportSettings;
use proposal::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Render offshore asset allocation proposals and export them to PDF.
///
/// Every command reads the sample record unless `--input` names a JSON
/// record; omitted fields take the sample values.
#[derive(Parser, Debug)]
#[command(name = "proposal", author, version)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the sample record as JSON.
    Seed {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every derived display value as JSON.
    Project {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Render the proposal as HTML or XeLaTeX source.
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: html or latex
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the proposal to PDF with an external HTML-to-PDF program.
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Directory the PDF is written to
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,

        /// HTML-to-PDF program (default: wkhtmltopdf on PATH)
        #[arg(long, env = "PROPOSAL_RASTERIZER")]
        rasterizer: Option<PathBuf>,

        /// JSON file of export options
        #[arg(long)]
        options: Option<PathBuf>,

        /// Leave the PDF document info untouched
        #[arg(long)]
        no_metadata: bool,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Proposal record JSON ("-" reads stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Document script: simplified or traditional
    #[arg(short, long, env = "PROPOSAL_SCRIPT", default_value = "simplified")]
    script: Script,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {}", cause);
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Seed { output } => {
            commands::write_output(output.as_deref(), &commands::seed_json()?)
        }
        Commands::Project { input } => {
            let proposal = commands::load_proposal(input.input.as_deref())?;
            commands::write_output(None, &commands::projection_json(&proposal, input.script)?)
        }
        Commands::Render {
            input,
            format,
            output,
        } => {
            let proposal = commands::load_proposal(input.input.as_deref())?;
            let document = commands::render_document(&proposal, input.script, format)?;
            commands::write_output(output.as_deref(), &document)
        }
        Commands::Export {
            input,
            out_dir,
            rasterizer,
            options,
            no_metadata,
        } => {
            let proposal = commands::load_proposal(input.input.as_deref())?;
            let settings = ExportSettings {
                out_dir,
                rasterizer,
                options,
                metadata: !no_metadata,
            };
            let path = commands::export_pdf(&proposal, input.script, &settings)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
