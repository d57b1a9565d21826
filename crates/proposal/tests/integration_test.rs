//! Integration tests for proposal rendering

use pretty_assertions::assert_eq;
use proposal::{
    parse_proposal, project, OutputFormat, Proposal, ProposalError, ProposalRenderer, Script,
};
use serde_json::json;

#[test]
fn test_render_seed_html() {
    let proposal = Proposal::default();
    let html = ProposalRenderer::new(&proposal).render_html().unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="zh-Hans">"#));
    assert!(html.contains(r#"id="report""#));
    assert!(html.contains("陈总 (Mr. Chen)"));
    assert!(html.contains("跨境资产保全与合规传承计划"));
    assert!(html.contains("500,000"));
    assert!(html.contains("116%"));
    assert!(html.contains("380%"));
    assert!(html.contains("一笔过 3.5%"));
    assert!(!html.contains("5年缴"));
    assert!(html.contains("(至 3月31日)"));
}

#[test]
fn test_render_traditional_html() {
    let proposal = Proposal::default();
    let html = ProposalRenderer::new(&proposal)
        .with_script(Script::Traditional)
        .render(OutputFormat::Html)
        .unwrap();

    assert!(html.contains(r#"<html lang="zh-Hant">"#));
    assert!(html.contains("離岸資產配置建議書"));
    assert!(html.contains("一筆過 3.5%"));
    assert!(!html.contains("离岸资产配置建议书"));
}

#[test]
fn test_render_is_deterministic() {
    let proposal = Proposal::default();
    let renderer = ProposalRenderer::new(&proposal);

    assert_eq!(renderer.render_html().unwrap(), renderer.render_html().unwrap());
    assert_eq!(
        renderer.render_latex().unwrap(),
        renderer.render_latex().unwrap()
    );
}

#[test]
fn test_return_rate_from_json_record() {
    let input = json!({
        "client": { "name": "王女士" },
        "premium": { "total": 500000, "paymentType": "5年缴" },
        "scenarioA": {
            "year10": { "surrender": 580000, "death": 1000000 },
            "year20": { "surrender": 0, "death": 0 },
            "year30": { "surrender": 1250000, "death": 2000000 }
        }
    });

    let proposal = parse_proposal(&input.to_string()).unwrap();
    let projection = project(&proposal, Script::Simplified);

    assert_eq!(projection.scenario_a[0].return_rate, "116%");
    assert_eq!(projection.scenario_a[1].return_rate, "0%");
    assert_eq!(projection.scenario_a[2].return_rate, "250%");
    // Omitted sections fall back to the seed record
    assert_eq!(projection.scenario_b[0].return_rate, "140%");
}

#[test]
fn test_all_promotions() {
    let input = json!({
        "promo": {
            "lumpSum": { "enabled": true, "percent": 3.5 },
            "fiveYear": { "enabled": true, "percent": 10 },
            "prepay": { "enabled": true, "rate": 4.2, "deadline": "2025-12-01" }
        }
    });

    let proposal = parse_proposal(&input.to_string()).unwrap();
    let html = ProposalRenderer::new(&proposal).render_html().unwrap();

    assert!(html.contains("一笔过 3.5%, 5年缴 10%"));
    assert!(html.contains("(至 12月1日)"));
}

#[test]
fn test_no_promotions() {
    let input = json!({
        "promo": {
            "lumpSum": { "enabled": false, "percent": 3.5 },
            "fiveYear": { "enabled": false, "percent": 10 },
            "prepay": { "enabled": false, "rate": 4.2, "deadline": "2025-03-31" }
        }
    });

    let proposal = parse_proposal(&input.to_string()).unwrap();
    let projection = project(&proposal, Script::Simplified);

    assert_eq!(projection.rebate, "N/A");
    assert_eq!(projection.prepay, "N/A");
    assert_eq!(projection.prepay_deadline, None);

    let latex = ProposalRenderer::new(&proposal).render_latex().unwrap();
    assert!(!latex.contains("(至"));
}

#[test]
fn test_latex_document() {
    let proposal = Proposal::default();
    let latex = ProposalRenderer::new(&proposal)
        .with_script(Script::Traditional)
        .render_latex()
        .unwrap();

    assert!(latex.contains(r"\usepackage{xeCJK}"));
    assert!(latex.contains(r"\setCJKmainfont{Noto Sans CJK TC}"));
    assert!(latex.contains(r"\date{\today}"));
    assert!(latex.contains(r"116\%"));
    assert!(latex.contains(r"\newpage"));
    assert!(!latex.contains("babel"));
}

#[test]
fn test_markup_in_client_name() {
    let mut proposal = Proposal::default();
    proposal.client.name = "<script>&_%".to_string();
    let renderer = ProposalRenderer::new(&proposal);

    let html = renderer.render_html().unwrap();
    assert!(html.contains("&lt;script&gt;&amp;_%"));
    assert!(!html.contains("<script>"));

    let latex = renderer.render_latex().unwrap();
    assert!(latex.contains(r"<script>\&\_\%"));
}

#[test]
fn test_invalid_record() {
    let result = parse_proposal(r#"{"premium": {"total": "lots"}}"#);
    assert!(matches!(result, Err(ProposalError::ParseError(_))));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn script() -> impl Strategy<Value = Script> {
        prop_oneof![Just(Script::Simplified), Just(Script::Traditional)]
    }

    proptest! {
        #[test]
        fn render_is_deterministic(
            name in r#"[a-zA-Z陈王總 <>&"'\\{}$#%_~^]{0,24}"#,
            plan_name in r"[a-z计划 \\%&]{0,16}",
            premium in prop_oneof![Just(0.0), 0.0..1.0e8f64],
            lump_sum in any::<bool>(),
            five_year in any::<bool>(),
            prepay in any::<bool>(),
            deadline in "[0-9]{4}-[0-9]{2}-[0-9]{2}|[a-z ]{0,8}",
            script in script(),
        ) {
            let mut proposal = Proposal::default();
            proposal.client.name = name;
            proposal.plan_name = plan_name;
            proposal.premium.total = premium;
            proposal.promo.lump_sum.enabled = lump_sum;
            proposal.promo.five_year.enabled = five_year;
            proposal.promo.prepay.enabled = prepay;
            proposal.promo.prepay.deadline = deadline;
            let copy = proposal.clone();

            for format in [OutputFormat::Html, OutputFormat::Latex] {
                let first = ProposalRenderer::new(&proposal)
                    .with_script(script)
                    .render(format)
                    .unwrap();
                let second = ProposalRenderer::new(&copy)
                    .with_script(script)
                    .render(format)
                    .unwrap();
                prop_assert_eq!(first, second);
            }
        }
    }
}
