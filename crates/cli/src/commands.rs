//! Subcommand implementations

use anyhow::{Context, Result};
use cjk_text::Script;
use pdf_export::{CommandRasterizer, ExportOptions, ExportRequest, ExportTrigger, Notice, Rasterizer};
use proposal::{OutputFormat, Proposal, ProposalRenderer};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where and how `export` writes the PDF
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub out_dir: PathBuf,
    /// Rasterizer program; looked up on `PATH` when absent
    pub rasterizer: Option<PathBuf>,
    /// JSON file of export options
    pub options: Option<PathBuf>,
    pub metadata: bool,
}

/// Read a record from a file, from stdin for `-`, or take the sample record
pub fn load_proposal(input: Option<&Path>) -> Result<Proposal> {
    let Some(path) = input else {
        tracing::debug!("using the sample record");
        return Ok(Proposal::default());
    };

    let json = if path == Path::new("-") {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read proposal from stdin")?;
        json
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    Proposal::from_json(&json).with_context(|| format!("Invalid proposal in {}", path.display()))
}

/// Write to a file, or to stdout when no file is given
pub fn write_output(output: Option<&Path>, contents: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "wrote output");
        }
        None => print!("{contents}"),
    }
    Ok(())
}

pub fn seed_json() -> Result<String> {
    Ok(Proposal::default().to_json_pretty()? + "\n")
}

pub fn projection_json(proposal: &Proposal, script: Script) -> Result<String> {
    let projection = ProposalRenderer::new(proposal)
        .with_script(script)
        .projection();
    Ok(serde_json::to_string_pretty(&projection)? + "\n")
}

pub fn render_document(proposal: &Proposal, script: Script, format: OutputFormat) -> Result<String> {
    let document = ProposalRenderer::new(proposal)
        .with_script(script)
        .render(format)
        .with_context(|| format!("Failed to render {format}"))?;
    Ok(document)
}

/// Render the HTML document and rasterize it into `settings.out_dir`
pub fn export_pdf(proposal: &Proposal, script: Script, settings: &ExportSettings) -> Result<PathBuf> {
    let html = render_document(proposal, script, OutputFormat::Html)?;

    let mut request = ExportRequest::new(proposal.client.name.as_str(), html);
    if let Some(path) = &settings.options {
        let options = ExportOptions::load(path)
            .with_context(|| format!("Failed to load export options from {}", path.display()))?;
        request = request.with_options(options);
    }
    if !settings.metadata {
        request = request.without_metadata();
    }

    let rasterizer = match &settings.rasterizer {
        Some(program) => Some(CommandRasterizer::new(program)),
        None => CommandRasterizer::detect(),
    };

    std::fs::create_dir_all(&settings.out_dir)
        .with_context(|| format!("Failed to create {}", settings.out_dir.display()))?;

    let notifier = |notice: &Notice| eprintln!("{notice}");
    let path = ExportTrigger::new().export(
        rasterizer.as_ref().map(|r| r as &dyn Rasterizer),
        &request,
        &settings.out_dir,
        &notifier,
    )?;
    Ok(path)
}
