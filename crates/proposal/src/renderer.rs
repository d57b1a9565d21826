//! Document rendering

use crate::html::HtmlRenderer;
use crate::latex::LatexRenderer;
use crate::locale::{strings, Strings};
use crate::projection::{project, Projection};
use crate::sections::Section;
use crate::{Proposal, ProposalError, Result};
use cjk_text::Script;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;

/// Output representation of a rendered proposal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Screen / print HTML document
    #[default]
    Html,
    /// XeLaTeX source
    Latex,
}

impl OutputFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Latex => "tex",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => f.write_str("html"),
            OutputFormat::Latex => f.write_str("latex"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProposalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "latex" | "tex" => Ok(OutputFormat::Latex),
            _ => Err(ProposalError::UnknownFormat(s.to_string())),
        }
    }
}

/// Everything a renderer reads while writing one document
pub struct RenderContext<'a> {
    /// The input record (for verbatim fields)
    pub proposal: &'a Proposal,
    /// Derived display values
    pub projection: Projection,
    /// Literal text for the script
    pub text: &'static Strings,
    pub script: Script,
}

impl<'a> RenderContext<'a> {
    pub fn new(proposal: &'a Proposal, script: Script) -> Self {
        Self {
            proposal,
            projection: project(proposal, script),
            text: strings(script),
            script,
        }
    }
}

/// A document skeleton that proposal values are substituted into
///
/// Implementors write the preamble, each [`Section`] and the closing; the
/// provided methods fix the section order and page breaks.
pub trait DocumentRenderer {
    /// Write everything before the first section
    fn begin(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result;

    /// Write a page break
    fn page_break(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result;

    /// Write one section
    fn section(
        &self,
        out: &mut dyn Write,
        section: Section,
        ctx: &RenderContext<'_>,
    ) -> fmt::Result;

    /// Write everything after the last section
    fn end(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result;

    /// Write the complete document
    fn write_document(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        self.begin(out, ctx)?;
        for section in Section::ORDER {
            if section.starts_new_page() {
                self.page_break(out, ctx)?;
            }
            self.section(out, section, ctx)?;
        }
        self.end(out, ctx)
    }

    /// Render the complete document to a string
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let mut out = String::new();
        self.write_document(&mut out, ctx)
            .map_err(|e| ProposalError::RenderError(e.to_string()))?;
        Ok(out)
    }
}

/// Proposal renderer
pub struct ProposalRenderer<'a> {
    /// The proposal to render
    proposal: &'a Proposal,
    /// Script of all document text
    script: Script,
}

impl<'a> ProposalRenderer<'a> {
    /// Create a new renderer for a proposal (simplified script)
    pub fn new(proposal: &'a Proposal) -> Self {
        Self {
            proposal,
            script: Script::default(),
        }
    }

    /// Set the script
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Projection the documents are rendered from
    pub fn projection(&self) -> Projection {
        project(self.proposal, self.script)
    }

    /// Render the proposal in the given format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let ctx = RenderContext::new(self.proposal, self.script);
        let output = match format {
            OutputFormat::Html => HtmlRenderer.render(&ctx)?,
            OutputFormat::Latex => LatexRenderer.render(&ctx)?,
        };

        tracing::debug!(
            %format,
            script = %self.script,
            bytes = output.len(),
            "rendered proposal"
        );

        Ok(output)
    }

    /// Render the screen / print HTML document
    pub fn render_html(&self) -> Result<String> {
        self.render(OutputFormat::Html)
    }

    /// Render the XeLaTeX source document
    pub fn render_latex(&self) -> Result<String> {
        self.render(OutputFormat::Latex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("TEX".parse::<OutputFormat>().unwrap(), OutputFormat::Latex);
        assert!(matches!(
            "docx".parse::<OutputFormat>(),
            Err(ProposalError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_output_format_extension() {
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Latex.extension(), "tex");
    }

    #[test]
    fn test_renderer_defaults_to_simplified() {
        let proposal = Proposal::default();
        let renderer = ProposalRenderer::new(&proposal);
        assert_eq!(renderer.script(), Script::Simplified);
        assert_eq!(
            renderer.with_script(Script::Traditional).script(),
            Script::Traditional
        );
    }

    /// Records the order of calls made by `write_document`
    struct Outline;

    impl DocumentRenderer for Outline {
        fn begin(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
            out.write_str("begin;")
        }

        fn page_break(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
            out.write_str("break;")
        }

        fn section(
            &self,
            out: &mut dyn Write,
            section: Section,
            _ctx: &RenderContext<'_>,
        ) -> fmt::Result {
            write!(out, "{section:?};")
        }

        fn end(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
            out.write_str("end")
        }
    }

    #[test]
    fn test_write_document_order() {
        let proposal = Proposal::default();
        let ctx = RenderContext::new(&proposal, Script::Simplified);
        let outline = Outline.render(&ctx).unwrap();
        assert_eq!(
            outline,
            "begin;Header;ClientOverview;RiskDisclosure;Infographic;break;\
             ScenarioA;ScenarioB;Promotions;Disclaimer;end"
        );
    }
}
