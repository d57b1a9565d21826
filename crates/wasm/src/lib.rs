//! WASM bindings for proposal-kit
//!
//! This crate provides JavaScript-friendly API for:
//! - Loading a proposal record (seed, JSON or plain object)
//! - Rendering the proposal as HTML or XeLaTeX source
//! - The display formatting helpers
//! - Exporting the report region to PDF through html2pdf
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { ProposalDocument, PdfExporter } from 'proposal-wasm';
//!
//! await init();
//!
//! const doc = ProposalDocument.fromObject(formState);
//! preview.innerHTML = doc.renderHtml('traditional');
//!
//! const exporter = new PdfExporter();
//! button.disabled = exporter.isExporting;
//! await exporter.exportReport(doc.clientName);
//! ```

mod export;

pub use export::PdfExporter;

use cjk_text::Script;
use proposal::{OutputFormat, Proposal, ProposalRenderer};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook and console logging
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Script from an optional JS string; absent means simplified
fn parse_script(script: Option<String>) -> Result<Script, JsValue> {
    match script {
        Some(s) => s.parse().map_err(js_error),
        None => Ok(Script::default()),
    }
}

/// A proposal record ready to render
#[wasm_bindgen]
pub struct ProposalDocument {
    inner: Proposal,
}

#[wasm_bindgen]
impl ProposalDocument {
    /// The sample record the form starts from
    pub fn seed() -> ProposalDocument {
        ProposalDocument {
            inner: Proposal::default(),
        }
    }

    /// Load a record from JSON
    ///
    /// @param json - Record JSON; omitted fields take the sample values
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<ProposalDocument, JsValue> {
        let inner = Proposal::from_json(json).map_err(js_error)?;
        Ok(ProposalDocument { inner })
    }

    /// Load a record from a plain JS object (e.g., form state)
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(value: JsValue) -> Result<ProposalDocument, JsValue> {
        let value: serde_json::Value = serde_wasm_bindgen::from_value(value)?;
        let inner = Proposal::from_value(value).map_err(js_error)?;
        Ok(ProposalDocument { inner })
    }

    #[wasm_bindgen(getter, js_name = clientName)]
    pub fn client_name(&self) -> String {
        self.inner.client.name.clone()
    }

    /// Render the screen / print HTML document
    ///
    /// @param script - "simplified" (default) or "traditional"
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, script: Option<String>) -> Result<String, JsValue> {
        self.render(OutputFormat::Html, script)
    }

    /// Render the XeLaTeX source document
    ///
    /// @param script - "simplified" (default) or "traditional"
    #[wasm_bindgen(js_name = renderLatex)]
    pub fn render_latex(&self, script: Option<String>) -> Result<String, JsValue> {
        self.render(OutputFormat::Latex, script)
    }

    /// Every derived display value as a plain object
    pub fn projection(&self, script: Option<String>) -> Result<JsValue, JsValue> {
        let script = parse_script(script)?;
        let projection = ProposalRenderer::new(&self.inner)
            .with_script(script)
            .projection();
        Ok(projection.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
    }

    /// Filename the PDF export saves under
    #[wasm_bindgen(js_name = exportFilename)]
    pub fn export_filename(&self) -> String {
        pdf_export::export_filename(&self.inner.client.name)
    }

    /// The record as pretty-printed JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.to_json_pretty().map_err(js_error)
    }

    fn render(&self, format: OutputFormat, script: Option<String>) -> Result<String, JsValue> {
        let script = parse_script(script)?;
        ProposalRenderer::new(&self.inner)
            .with_script(script)
            .render(format)
            .map_err(js_error)
    }
}

/// Display formatting helpers
#[wasm_bindgen]
pub struct ProposalFormatter;

#[wasm_bindgen]
impl ProposalFormatter {
    /// Format an amount with thousands separators
    ///
    /// @param value - Amount
    /// @returns Formatted amount (e.g., "1,200,000")
    #[wasm_bindgen(js_name = formatMoney)]
    pub fn format_money(value: f64) -> String {
        cjk_text::format_money(value)
    }

    /// Whole-percent return of an amount against the premium
    ///
    /// @returns Percentage (e.g., "116%"); "0%" when the premium is zero
    #[wasm_bindgen(js_name = computeReturnRate)]
    pub fn compute_return_rate(amount: f64, premium_total: f64) -> String {
        cjk_text::compute_return_rate(amount, premium_total)
    }

    /// Month and day of a date (e.g., "3月31日")
    ///
    /// @param input - Date string; unparseable input is returned unchanged
    #[wasm_bindgen(js_name = formatShortDate)]
    pub fn format_short_date(input: &str, script: Option<String>) -> Result<String, JsValue> {
        Ok(cjk_text::format_short_date(input, parse_script(script)?))
    }

    /// Replace characters unsafe in a filename with "_"
    #[wasm_bindgen(js_name = sanitizeFilename)]
    pub fn sanitize_filename(name: &str) -> String {
        cjk_text::sanitize_filename_component(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_formatter() {
        assert_eq!(ProposalFormatter::format_money(1200000.0), "1,200,000");
        assert_eq!(ProposalFormatter::compute_return_rate(580000.0, 500000.0), "116%");
        assert_eq!(ProposalFormatter::compute_return_rate(1.0, 0.0), "0%");
        assert_eq!(ProposalFormatter::sanitize_filename("陈总 (Mr. Chen)"), "陈总__Mr__Chen_");
    }

    #[wasm_bindgen_test]
    fn test_seed_document() {
        let doc = ProposalDocument::seed();
        assert_eq!(doc.client_name(), "陈总 (Mr. Chen)");
        assert_eq!(
            doc.export_filename(),
            "陈总__Mr__Chen__Offshore_Asset_Allocation.pdf"
        );

        let html = doc.render_html(None).unwrap();
        assert!(html.contains("116%"));
        let latex = doc.render_latex(Some("traditional".to_string())).unwrap();
        assert!(latex.contains("Noto Sans CJK TC"));
    }

    #[wasm_bindgen_test]
    fn test_json_roundtrip() {
        let doc = ProposalDocument::seed();
        let again = ProposalDocument::from_json(&doc.to_json().unwrap()).unwrap();
        assert_eq!(again.inner, doc.inner);
    }
}
