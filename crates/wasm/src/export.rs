//! Browser PDF export through html2pdf
//!
//! html2pdf is loaded by the page as a global script and looked up on every
//! call, so a page that loads it late still works.

use js_sys::{Array, Function, Promise, Reflect};
use pdf_export::{export_filename, ExportError, ExportOptions, ExportTrigger, Notice, Notifier};
use proposal::REPORT_ELEMENT_ID;
use serde::Serialize;
use std::path::PathBuf;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::HtmlElement;

/// Shows error notices with `window.alert`
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        if !notice.is_error() {
            tracing::info!("{}", notice);
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&notice.to_string());
        }
    }
}

/// PDF export of the rendered report
#[wasm_bindgen]
#[derive(Default)]
pub struct PdfExporter {
    trigger: ExportTrigger,
}

#[wasm_bindgen]
impl PdfExporter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> PdfExporter {
        PdfExporter::default()
    }

    /// Whether an export is running; bind the button's disabled state to it
    #[wasm_bindgen(getter, js_name = isExporting)]
    pub fn is_exporting(&self) -> bool {
        self.trigger.is_exporting()
    }

    /// The html2pdf option object used for a client
    #[wasm_bindgen(js_name = exportOptions)]
    pub fn export_options(client_name: &str) -> Result<JsValue, JsValue> {
        to_js(&ExportOptions::with_filename(export_filename(client_name)))
    }

    /// Export an element to `<client>_Offshore_Asset_Allocation.pdf`
    ///
    /// @param element - Report region
    /// @param clientName - Client name the filename is derived from
    /// @returns Promise resolving to the filename
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self, element: HtmlElement, client_name: String) -> Promise {
        let guard = match self.trigger.begin() {
            Ok(guard) => guard,
            Err(e) => return Promise::reject(&JsValue::from_str(&e.to_string())),
        };

        let Some(html2pdf) = find_html2pdf() else {
            tracing::warn!("html2pdf is not loaded");
            AlertNotifier.notify(&Notice::GeneratorMissing);
            return Promise::reject(&JsValue::from_str(
                &ExportError::CapabilityUnavailable.to_string(),
            ));
        };

        let filename = export_filename(&client_name);
        let options = match to_js(&ExportOptions::with_filename(filename.clone())) {
            Ok(options) => options,
            Err(e) => return Promise::reject(&e),
        };

        tracing::info!(%filename, "generating PDF");
        future_to_promise(async move {
            let _guard = guard;
            match run_html2pdf(&html2pdf, &element, &options).await {
                Ok(()) => {
                    AlertNotifier.notify(&Notice::Saved {
                        path: PathBuf::from(&filename),
                    });
                    Ok(JsValue::from_str(&filename))
                }
                Err(err) => {
                    web_sys::console::error_2(&JsValue::from_str("PDF generation error:"), &err);
                    tracing::error!(error = ?err, "PDF generation failed");
                    AlertNotifier.notify(&Notice::GenerationFailed);
                    Err(err)
                }
            }
        })
    }

    /// Export the element with id `report` in the current document
    #[wasm_bindgen(js_name = exportReport)]
    pub fn export_report(&self, client_name: String) -> Promise {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(REPORT_ELEMENT_ID))
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        match element {
            Some(element) => self.export_pdf(element, client_name),
            None => Promise::reject(&JsValue::from_str(&format!(
                "No element with id \"{REPORT_ELEMENT_ID}\""
            ))),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// The global `html2pdf` factory, if the page loaded it
fn find_html2pdf() -> Option<Function> {
    let window = web_sys::window()?;
    Reflect::get(&window, &JsValue::from_str("html2pdf"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// `html2pdf().set(options).from(element).save()`
async fn run_html2pdf(
    html2pdf: &Function,
    element: &HtmlElement,
    options: &JsValue,
) -> Result<(), JsValue> {
    let element: &JsValue = element.as_ref();
    let worker = html2pdf.call0(&JsValue::NULL)?;
    let worker = call_method(&worker, "set", &[options])?;
    let worker = call_method(&worker, "from", &[element])?;
    let saved = call_method(&worker, "save", &[])?;
    JsFuture::from(Promise::resolve(&saved)).await?;
    Ok(())
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let args: Array = args.iter().collect();
    method.apply(target, &args)
}
