//! Projection of a proposal into display-ready values
//!
//! Every function here is total: zero premiums, disabled promotions and
//! unparseable dates degrade to a defined fallback string instead of failing.

use crate::locale::strings;
use crate::{Promo, Proposal};
use cjk_text::{compute_return_rate, format_money, format_percent, format_short_date, Script};
use serde::Serialize;

/// Every derived display value of one proposal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub script: Script,
    pub premium_total: String,
    pub annual_withdrawal: String,
    pub scenario_a: Vec<IsolationRow>,
    pub scenario_b: Vec<LiquidityRow>,
    pub rebate: String,
    pub prepay: String,
    pub prepay_deadline: Option<String>,
}

/// Scenario A table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsolationRow {
    pub year: u32,
    pub surrender: String,
    pub death: String,
    /// Return of the surrender value against the premium
    pub return_rate: String,
}

/// Scenario B table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityRow {
    pub year: u32,
    pub cumulative: String,
    pub remaining: String,
    /// Return of withdrawn plus remaining value against the premium
    pub return_rate: String,
}

/// Derive every display value of `proposal` for `script`
pub fn project(proposal: &Proposal, script: Script) -> Projection {
    let premium = proposal.premium.total;

    let scenario_a = proposal
        .scenario_a
        .rows()
        .into_iter()
        .map(|(year, point)| IsolationRow {
            year,
            surrender: format_money(point.surrender),
            death: format_money(point.death),
            return_rate: compute_return_rate(point.surrender, premium),
        })
        .collect();

    let scenario_b = proposal
        .scenario_b
        .rows()
        .into_iter()
        .map(|(year, point)| LiquidityRow {
            year,
            cumulative: format_money(point.cumulative),
            remaining: format_money(point.remaining),
            return_rate: compute_return_rate(point.total(), premium),
        })
        .collect();

    tracing::debug!(%script, premium, "projected proposal");

    Projection {
        script,
        premium_total: format_money(premium),
        annual_withdrawal: format_money(proposal.scenario_b.annual_withdrawal),
        scenario_a,
        scenario_b,
        rebate: build_rebate_label(&proposal.promo, script),
        prepay: build_prepay_label(&proposal.promo, script),
        prepay_deadline: build_prepay_deadline_note(&proposal.promo, script),
    }
}

/// Enabled premium rebates, lump sum first (e.g., "一笔过 3.5%, 5年缴 10%")
///
/// Returns the not-applicable sentinel when no rebate is enabled.
pub fn build_rebate_label(promo: &Promo, script: Script) -> String {
    let text = strings(script);
    let mut parts = Vec::with_capacity(2);

    if promo.lump_sum.enabled {
        parts.push(format!(
            "{} {}",
            text.lump_sum_name,
            format_percent(promo.lump_sum.percent)
        ));
    }
    if promo.five_year.enabled {
        parts.push(format!(
            "{} {}",
            text.five_year_name,
            format_percent(promo.five_year.percent)
        ));
    }

    if parts.is_empty() {
        script.not_applicable().to_string()
    } else {
        parts.join(", ")
    }
}

/// Prepayment rate as a percentage, or the not-applicable sentinel
pub fn build_prepay_label(promo: &Promo, script: Script) -> String {
    if !promo.prepay.enabled {
        return script.not_applicable().to_string();
    }
    format_percent(promo.prepay.rate)
}

/// Parenthesized deadline fragment (e.g., "(至 3月31日)")
///
/// `None` means the fragment is omitted entirely: the offer is disabled or
/// has no deadline.
pub fn build_prepay_deadline_note(promo: &Promo, script: Script) -> Option<String> {
    if !promo.prepay.enabled || promo.prepay.deadline.is_empty() {
        return None;
    }

    Some(format!(
        "({} {})",
        strings(script).valid_until,
        format_short_date(&promo.prepay.deadline, script)
    ))
}
