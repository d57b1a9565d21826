//! Screen / print HTML document
//!
//! The report body lives in a single A4-sized element with id
//! [`REPORT_ELEMENT_ID`]; that element is what the PDF export rasterizes.

use crate::escape::escape_html as esc;
use crate::renderer::{DocumentRenderer, RenderContext};
use crate::sections::Section;
use std::fmt::{self, Write};

/// `id` of the element holding the printable report
pub const REPORT_ELEMENT_ID: &str = "report";

/// Class html2pdf treats as a forced page break
const PAGE_BREAK_CLASS: &str = "html2pdf__page-break";

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; background: #e2e8f0; color: #0f172a; }
.page-shell { display: flex; justify-content: center; padding: 32px; }
.print-container { width: 210mm; min-height: 297mm; padding: 20mm; background: #fff;
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); display: flex; flex-direction: column; }
.strong { font-weight: 700; }
.underline { text-decoration: underline; }
.doc-header { display: flex; justify-content: space-between; align-items: flex-end;
  border-bottom: 2px solid #d97706; padding-bottom: 16px; margin-bottom: 32px; }
.doc-header h1 { font-size: 30px; margin: 0; }
.subtitle { color: #64748b; font-size: 14px; margin: 4px 0 0; text-transform: uppercase; letter-spacing: 0.1em; }
.brand { text-align: right; }
.brand-mark { color: #d97706; font-weight: 700; font-size: 18px; }
.brand-tagline { color: #94a3b8; font-size: 12px; }
.block { margin-bottom: 32px; break-inside: avoid; }
.section-title { font-size: 20px; color: #1e293b; margin: 0 0 16px; padding-left: 12px; border-left: 4px solid #f59e0b; }
.intro { text-align: justify; line-height: 1.7; color: #334155; margin: 0 0 16px; }
.summary { display: flex; justify-content: space-between; background: #f8fafc; padding: 16px;
  border: 1px solid #f1f5f9; border-radius: 4px; font-size: 14px; }
.summary ul { margin: 0; padding-left: 18px; color: #334155; }
.summary-side { text-align: right; color: #64748b; }
.ok { font-weight: 600; color: #15803d; }
.accent { font-weight: 600; color: #b45309; }
.alert { background: #fef2f2; border-left: 4px solid #ef4444; padding: 16px; border-radius: 0 4px 4px 0; }
.alert h3 { font-size: 14px; color: #991b1b; margin: 0 0 8px; }
.alert ul { font-size: 12px; color: #b91c1c; margin: 0; padding-left: 28px; }
.infographic { flex: 1; display: flex; justify-content: center; align-items: center; margin: 32px 0; break-inside: avoid; }
.break-preview { position: relative; border-top: 2px dashed #cbd5e1; margin: 48px 0; }
.break-preview span { position: absolute; top: -10px; left: 50%; transform: translateX(-50%);
  background: #e2e8f0; padding: 0 8px; font-size: 12px; color: #64748b; }
.running-header { display: flex; justify-content: space-between; align-items: flex-end;
  border-bottom: 1px solid #e2e8f0; padding: 16px 0 8px; margin-bottom: 32px; }
.running-header .client { font-size: 14px; color: #64748b; }
.running-header .client span { font-weight: 700; color: #0f172a; }
.running-header .label { font-size: 12px; color: #94a3b8; }
.note { font-size: 14px; color: #64748b; margin: 0 0 16px; }
table { width: 100%; font-size: 14px; border-collapse: collapse; }
thead tr { background: #1e293b; color: #fff; }
th, td { padding: 12px 16px; text-align: right; }
th.left, td.left { text-align: left; }
tbody tr { border-bottom: 1px solid #e2e8f0; }
tbody tr.alt { background: rgba(248, 250, 252, 0.5); }
td.rate { font-weight: 500; color: #b45309; }
.promotions { margin-bottom: auto; }
.promo-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.promo-card { background: #f8fafc; padding: 16px; border-top: 2px solid #cbd5e1; }
.promo-title { font-size: 12px; color: #64748b; font-weight: 700; text-transform: uppercase; margin-bottom: 4px; }
.promo-value { color: #1e293b; font-weight: 500; }
.deadline { font-size: 12px; color: #ef4444; }
.disclaimer { margin-top: 32px; padding-top: 16px; border-top: 1px solid #cbd5e1; font-size: 10px;
  color: #64748b; text-align: justify; break-inside: avoid; }
@media print {
  body { background: #fff; }
  .page-shell { padding: 0; display: block; }
  .print-container { padding: 0; box-shadow: none; }
  .break-preview { display: none; }
}
"#;

/// Renders the proposal as a self-contained HTML page
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn header(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        writeln!(out, r#"<header class="doc-header">"#)?;
        writeln!(out, "  <div>")?;
        writeln!(out, r#"    <h1 class="serif">{}</h1>"#, esc(t.title))?;
        writeln!(out, r#"    <p class="subtitle">{}</p>"#, esc(t.subtitle))?;
        writeln!(out, "  </div>")?;
        writeln!(out, r#"  <div class="brand">"#)?;
        writeln!(out, r#"    <div class="brand-mark">{}</div>"#, esc(t.brand))?;
        writeln!(out, r#"    <div class="brand-tagline">{}</div>"#, esc(t.brand_tagline))?;
        writeln!(out, "  </div>")?;
        writeln!(out, "</header>")
    }

    fn client_overview(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let p = ctx.proposal;
        let client = esc(&p.client.name);

        writeln!(out, r#"<section class="block">"#)?;
        writeln!(
            out,
            r#"  <h2 class="section-title serif">{}: {}</h2>"#,
            esc(t.overview_heading),
            client
        )?;
        writeln!(
            out,
            r#"  <p class="intro"><span class="strong">{}{}{}</span>{}{}{}</p>"#,
            esc(t.salutation_prefix),
            client,
            esc(t.salutation_suffix),
            esc(t.intro_lead),
            esc(&p.plan_name),
            esc(t.intro_tail)
        )?;
        writeln!(out, r#"  <div class="summary">"#)?;
        writeln!(out, "    <ul>")?;
        writeln!(
            out,
            "      <li>{}: {} {}</li>",
            esc(t.premium_total_label),
            esc(t.currency),
            esc(&ctx.projection.premium_total)
        )?;
        writeln!(
            out,
            "      <li>{}: {}</li>",
            esc(t.payment_type_label),
            esc(&p.premium.payment_type)
        )?;
        writeln!(out, "    </ul>")?;
        writeln!(out, r#"    <div class="summary-side">"#)?;
        writeln!(
            out,
            r#"      <div>{}: <span class="ok">{}</span></div>"#,
            esc(t.hedge_label),
            esc(t.hedge_value)
        )?;
        writeln!(
            out,
            r#"      <div>{}: <span class="accent">{}</span></div>"#,
            esc(t.domicile_label),
            esc(t.domicile_value)
        )?;
        writeln!(out, "    </div>")?;
        writeln!(out, "  </div>")?;
        writeln!(out, "</section>")
    }

    fn risk_disclosure(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        writeln!(out, r#"<section class="block">"#)?;
        writeln!(out, r#"  <div class="alert">"#)?;
        writeln!(out, "    <h3>{}</h3>", esc(t.risk_heading))?;
        writeln!(out, "    <ul>")?;
        for alert in &t.risk_alerts {
            write!(
                out,
                r#"      <li><span class="strong">{}:</span> {}"#,
                esc(alert.title),
                esc(alert.before)
            )?;
            if !alert.emphasis.is_empty() {
                write!(
                    out,
                    r#"<span class="strong underline">{}</span>"#,
                    esc(alert.emphasis)
                )?;
            }
            writeln!(out, "{}</li>", esc(alert.after))?;
        }
        writeln!(out, "    </ul>")?;
        writeln!(out, "  </div>")?;
        writeln!(out, "</section>")
    }

    fn infographic(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        const GOLD: &str = "#B8860B";
        const NAVY: &str = "#212C3C";
        // Node centres: top, lower left, lower right
        const NODES: [(f64, f64); 3] = [(0.0, -100.0), (-86.6, 50.0), (86.6, 50.0)];

        let t = ctx.text;
        let serif = ctx.script.serif_font_stack();
        let sans = ctx.script.sans_font_stack();

        writeln!(out, r#"<div class="infographic">"#)?;
        writeln!(
            out,
            r#"  <svg width="400" height="300" viewBox="-200 -150 400 300" xmlns="http://www.w3.org/2000/svg">"#
        )?;
        writeln!(out, "    <defs>")?;
        writeln!(
            out,
            r#"      <marker id="arrow" markerWidth="10" markerHeight="10" refX="9" refY="3" orient="auto" markerUnits="strokeWidth"><path d="M0,0 L0,6 L9,3 z" fill="{GOLD}"/></marker>"#
        )?;
        writeln!(out, "    </defs>")?;

        for (x, y) in NODES {
            writeln!(
                out,
                r#"    <line x1="0" y1="0" x2="{x}" y2="{y}" stroke="{GOLD}" stroke-width="2" marker-end="url(#arrow)"/>"#
            )?;
        }

        writeln!(
            out,
            r##"    <circle cx="0" cy="0" r="55" fill="#FFF8DC" stroke="{GOLD}" stroke-width="2"/>"##
        )?;
        for (line, y) in t.infographic_core.iter().zip([-5.0, 15.0]) {
            writeln!(
                out,
                r##"    <text x="0" y="{y}" text-anchor="middle" font-size="14" font-weight="bold" fill="#333" font-family="{serif}">{}</text>"##,
                esc(line)
            )?;
        }

        for ((x, y), labels) in NODES.iter().zip(&t.infographic_nodes) {
            writeln!(
                out,
                r#"    <circle cx="{x}" cy="{y}" r="42" fill="{NAVY}"/>"#
            )?;
            for (line, dy) in labels.iter().zip([-5.0, 15.0]) {
                writeln!(
                    out,
                    r#"    <text x="{x}" y="{}" text-anchor="middle" font-size="12" fill="white" font-family="{sans}">{}</text>"#,
                    y + dy,
                    esc(line)
                )?;
            }
        }

        writeln!(out, "  </svg>")?;
        writeln!(out, "</div>")
    }

    fn scenario_a(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let rows: Vec<[String; 4]> = ctx
            .projection
            .scenario_a
            .iter()
            .map(|row| {
                [
                    t.policy_year(row.year),
                    row.surrender.clone(),
                    row.death.clone(),
                    row.return_rate.clone(),
                ]
            })
            .collect();

        writeln!(out, r#"<section class="block">"#)?;
        writeln!(
            out,
            r#"  <h2 class="section-title serif">{}</h2>"#,
            esc(t.scenario_a_heading)
        )?;
        writeln!(out, r#"  <p class="note">{}</p>"#, esc(t.scenario_a_description))?;
        write_table(
            out,
            [
                t.policy_year_column,
                t.surrender_column,
                t.death_column,
                t.return_column,
            ],
            &rows,
        )?;
        writeln!(out, "</section>")
    }

    fn scenario_b(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let rows: Vec<[String; 4]> = ctx
            .projection
            .scenario_b
            .iter()
            .map(|row| {
                [
                    t.policy_year(row.year),
                    row.cumulative.clone(),
                    row.remaining.clone(),
                    row.return_rate.clone(),
                ]
            })
            .collect();

        writeln!(out, r#"<section class="block">"#)?;
        writeln!(
            out,
            r#"  <h2 class="section-title serif">{}</h2>"#,
            esc(t.scenario_b_heading)
        )?;
        writeln!(
            out,
            r#"  <p class="note">{}<span class="strong">{} {}</span>{}</p>"#,
            esc(t.scenario_b_lead),
            esc(t.currency),
            esc(&ctx.projection.annual_withdrawal),
            esc(t.scenario_b_tail)
        )?;
        write_table(
            out,
            [
                t.policy_year_column,
                t.cumulative_column,
                t.remaining_column,
                t.return_column,
            ],
            &rows,
        )?;
        writeln!(out, "</section>")
    }

    fn promotions(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        let projection = &ctx.projection;

        writeln!(out, r#"<section class="block promotions">"#)?;
        writeln!(
            out,
            r#"  <h2 class="section-title serif">{}</h2>"#,
            esc(t.promotions_heading)
        )?;
        writeln!(out, r#"  <div class="promo-grid">"#)?;
        writeln!(out, r#"    <div class="promo-card">"#)?;
        writeln!(out, r#"      <div class="promo-title">{}</div>"#, esc(t.rebate_title))?;
        writeln!(out, r#"      <div class="promo-value">{}</div>"#, esc(&projection.rebate))?;
        writeln!(out, "    </div>")?;
        writeln!(out, r#"    <div class="promo-card">"#)?;
        writeln!(out, r#"      <div class="promo-title">{}</div>"#, esc(t.prepay_title))?;
        write!(out, r#"      <div class="promo-value">{}"#, esc(&projection.prepay))?;
        if let Some(note) = &projection.prepay_deadline {
            write!(out, r#" <span class="deadline">{}</span>"#, esc(note))?;
        }
        writeln!(out, "</div>")?;
        writeln!(out, "    </div>")?;
        writeln!(out, "  </div>")?;
        writeln!(out, "</section>")
    }

    fn disclaimer(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        writeln!(
            out,
            r#"<footer class="disclaimer"><span class="strong">{}:</span> {}</footer>"#,
            esc(t.disclaimer_title),
            esc(t.disclaimer_body)
        )
    }
}

impl DocumentRenderer for HtmlRenderer {
    fn begin(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, r#"<html lang="{}">"#, ctx.script.language_tag())?;
        writeln!(out, "<head>")?;
        writeln!(out, r#"<meta charset="utf-8">"#)?;
        writeln!(
            out,
            "<title>{} - {}</title>",
            esc(ctx.text.title),
            esc(&ctx.proposal.client.name)
        )?;
        writeln!(out, "<style>{STYLE}")?;
        writeln!(
            out,
            "body {{ font-family: {}; }}",
            ctx.script.sans_font_stack()
        )?;
        writeln!(
            out,
            ".serif {{ font-family: {}; }}",
            ctx.script.serif_font_stack()
        )?;
        writeln!(out, "</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, r#"<div class="page-shell">"#)?;
        writeln!(
            out,
            r#"<div id="{REPORT_ELEMENT_ID}" class="print-container">"#
        )
    }

    fn page_break(&self, out: &mut dyn Write, ctx: &RenderContext<'_>) -> fmt::Result {
        let t = ctx.text;
        writeln!(out, r#"<div class="{PAGE_BREAK_CLASS}"></div>"#)?;
        writeln!(
            out,
            r#"<div class="break-preview" data-html2canvas-ignore="true"><span>{}</span></div>"#,
            esc(t.page_break_preview)
        )?;
        writeln!(out, r#"<div class="running-header">"#)?;
        writeln!(
            out,
            r#"  <div class="client">{} <span>{}</span></div>"#,
            esc(t.running_header_prefix),
            esc(&ctx.proposal.client.name)
        )?;
        writeln!(
            out,
            r#"  <div class="label">{}</div>"#,
            esc(t.running_header_label)
        )?;
        writeln!(out, "</div>")
    }

    fn section(
        &self,
        out: &mut dyn Write,
        section: Section,
        ctx: &RenderContext<'_>,
    ) -> fmt::Result {
        match section {
            Section::Header => self.header(out, ctx),
            Section::ClientOverview => self.client_overview(out, ctx),
            Section::RiskDisclosure => self.risk_disclosure(out, ctx),
            Section::Infographic => self.infographic(out, ctx),
            Section::ScenarioA => self.scenario_a(out, ctx),
            Section::ScenarioB => self.scenario_b(out, ctx),
            Section::Promotions => self.promotions(out, ctx),
            Section::Disclaimer => self.disclaimer(out, ctx),
        }
    }

    fn end(&self, out: &mut dyn Write, _ctx: &RenderContext<'_>) -> fmt::Result {
        writeln!(out, "</div>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

/// Four-column projection table; the first column is left aligned
fn write_table(out: &mut dyn Write, columns: [&str; 4], rows: &[[String; 4]]) -> fmt::Result {
    writeln!(out, "  <table>")?;
    writeln!(out, "    <thead>")?;
    write!(out, r#"      <tr><th class="left">{}</th>"#, esc(columns[0]))?;
    for column in &columns[1..] {
        write!(out, "<th>{}</th>", esc(column))?;
    }
    writeln!(out, "</tr>")?;
    writeln!(out, "    </thead>")?;
    writeln!(out, "    <tbody>")?;
    for (i, row) in rows.iter().enumerate() {
        let class = if i % 2 == 1 { r#" class="alt""# } else { "" };
        writeln!(
            out,
            r#"      <tr{class}><td class="left strong">{}</td><td>{}</td><td>{}</td><td class="rate">{}</td></tr>"#,
            esc(&row[0]),
            esc(&row[1]),
            esc(&row[2]),
            esc(&row[3])
        )?;
    }
    writeln!(out, "    </tbody>")?;
    writeln!(out, "  </table>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Proposal;
    use cjk_text::Script;

    fn render(proposal: &Proposal, script: Script) -> String {
        HtmlRenderer
            .render(&RenderContext::new(proposal, script))
            .unwrap()
    }

    #[test]
    fn test_report_region() {
        let html = render(&Proposal::default(), Script::Simplified);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<div id="report" class="print-container">"#));
        assert!(html.contains(r#"<html lang="zh-Hans">"#));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_page_break_marker() {
        let html = render(&Proposal::default(), Script::Simplified);
        let break_at = html.find(PAGE_BREAK_CLASS).unwrap();
        let infographic_at = html.find(r#"class="infographic""#).unwrap();
        let scenario_a_at = html.find("情境 A").unwrap();
        assert!(infographic_at < break_at && break_at < scenario_a_at);
        assert!(html.contains(r#"data-html2canvas-ignore="true""#));
    }

    #[test]
    fn test_alert_emphasis() {
        let html = render(&Proposal::default(), Script::Simplified);
        assert!(html.contains(r#"<span class="strong underline">每年 18%</span>"#));
        assert!(html.contains("金税四期 &amp; CRS"));
    }

    #[test]
    fn test_infographic_labels_follow_script() {
        let html = render(&Proposal::default(), Script::Traditional);
        assert!(html.contains(">稅務</text>"));
        assert!(html.contains(">儲備</text>"));
        assert!(html.contains("Noto Serif TC"));
    }

    #[test]
    fn test_client_name_escaped() {
        let mut proposal = Proposal::default();
        proposal.client.name = "<script>alert(1)</script>".to_string();
        let html = render(&proposal, Script::Simplified);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_deadline_omitted_when_absent() {
        let mut proposal = Proposal::default();
        proposal.promo.prepay.deadline.clear();
        let html = render(&proposal, Script::Simplified);
        assert!(!html.contains(r#"class="deadline""#));
        assert!(html.contains(r#"<div class="promo-value">4.2%</div>"#));
    }

    #[test]
    fn test_alternating_rows() {
        let html = render(&Proposal::default(), Script::Simplified);
        assert!(html.contains(r#"<tr class="alt"><td class="left strong">第 20 年</td>"#));
        assert!(html.contains(r#"<tr><td class="left strong">第 30 年</td>"#));
    }
}
