//! Proposal input record

use serde::{Deserialize, Serialize};

/// Complete set of parameters driving one proposal document
///
/// Sections missing from JSON input are taken from [`Proposal::default`],
/// the seed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Proposal {
    /// Client the proposal is addressed to
    pub client: Client,

    /// Plan label shown verbatim in the overview paragraph
    pub plan_name: String,

    /// Premium terms
    pub premium: Premium,

    /// Asset isolation projection (surrender / death benefit)
    pub scenario_a: ScenarioA,

    /// Liquidity withdrawal projection
    pub scenario_b: ScenarioB,

    /// Limited-time promotions
    pub promo: Promo,
}

impl Default for Proposal {
    fn default() -> Self {
        Self {
            client: Client {
                name: "陈总 (Mr. Chen)".to_string(),
                age: 45,
            },
            plan_name: "跨境资产保全与合规传承计划".to_string(),
            premium: Premium {
                total: 500000.0,
                payment_type: "整付".to_string(),
            },
            scenario_a: ScenarioA {
                year10: IsolationPoint::new(580000.0, 1200000.0),
                year20: IsolationPoint::new(950000.0, 1200000.0),
                year30: IsolationPoint::new(1600000.0, 1800000.0),
            },
            scenario_b: ScenarioB {
                annual_withdrawal: 25000.0,
                year10: LiquidityPoint::new(250000.0, 450000.0),
                year20: LiquidityPoint::new(500000.0, 480000.0),
                year30: LiquidityPoint::new(750000.0, 650000.0),
                year40: LiquidityPoint::new(1000000.0, 900000.0),
            },
            promo: Promo {
                lump_sum: Rebate {
                    enabled: true,
                    percent: 3.5,
                },
                five_year: Rebate {
                    enabled: false,
                    percent: 10.0,
                },
                prepay: Prepay {
                    enabled: true,
                    rate: 4.2,
                    deadline: "2025-03-31".to_string(),
                },
            },
        }
    }
}

/// Client identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Display name, also used for the export filename
    pub name: String,

    /// Client age. Carried for compatibility; no document reads it.
    #[serde(default)]
    pub age: u32,
}

/// Premium terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Premium {
    /// Total premium, the denominator of every return rate
    pub total: f64,

    /// Free-form payment type label (e.g., "整付")
    #[serde(default)]
    pub payment_type: String,
}

/// Scenario A: asset isolation values at fixed policy years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioA {
    pub year10: IsolationPoint,
    pub year20: IsolationPoint,
    pub year30: IsolationPoint,
}

impl ScenarioA {
    /// Rows in table order as `(policy year, values)`
    pub fn rows(&self) -> [(u32, &IsolationPoint); 3] {
        [
            (10, &self.year10),
            (20, &self.year20),
            (30, &self.year30),
        ]
    }
}

/// Scenario A values at one policy year
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IsolationPoint {
    /// Surrender value (liquidity)
    pub surrender: f64,

    /// Death benefit (legacy)
    pub death: f64,
}

impl IsolationPoint {
    pub fn new(surrender: f64, death: f64) -> Self {
        Self { surrender, death }
    }
}

/// Scenario B: annual withdrawals and what remains at fixed policy years
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioB {
    /// Amount withdrawn every year
    pub annual_withdrawal: f64,

    pub year10: LiquidityPoint,
    pub year20: LiquidityPoint,
    pub year30: LiquidityPoint,
    pub year40: LiquidityPoint,
}

impl ScenarioB {
    /// Rows in table order as `(policy year, values)`
    pub fn rows(&self) -> [(u32, &LiquidityPoint); 4] {
        [
            (10, &self.year10),
            (20, &self.year20),
            (30, &self.year30),
            (40, &self.year40),
        ]
    }
}

/// Scenario B values at one policy year
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPoint {
    /// Total withdrawn so far
    pub cumulative: f64,

    /// Value left in the policy
    pub remaining: f64,
}

impl LiquidityPoint {
    pub fn new(cumulative: f64, remaining: f64) -> Self {
        Self {
            cumulative,
            remaining,
        }
    }

    /// Withdrawn plus remaining value, the base of the scenario B return rate
    pub fn total(&self) -> f64 {
        self.cumulative + self.remaining
    }
}

/// Promotion settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promo {
    /// Premium rebate for single-payment plans
    pub lump_sum: Rebate,

    /// Premium rebate for five-year payment plans
    pub five_year: Rebate,

    /// Locked interest rate on prepaid premiums
    pub prepay: Prepay,
}

/// A premium rebate; `percent` is only read when `enabled`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rebate {
    pub enabled: bool,

    #[serde(default)]
    pub percent: f64,
}

/// Prepayment interest offer; `rate` and `deadline` are only read when `enabled`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prepay {
    pub enabled: bool,

    #[serde(default)]
    pub rate: f64,

    /// Calendar date string, or empty when the offer has no deadline
    #[serde(default)]
    pub deadline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_record() {
        let p = Proposal::default();
        assert_eq!(p.client.age, 45);
        assert_eq!(p.premium.total, 500000.0);
        assert_eq!(p.scenario_a.year10.surrender, 580000.0);
        assert!(p.promo.lump_sum.enabled);
        assert!(!p.promo.five_year.enabled);
        assert_eq!(p.promo.prepay.deadline, "2025-03-31");
    }

    #[test]
    fn test_scenario_rows_order() {
        let p = Proposal::default();
        let years: Vec<u32> = p.scenario_a.rows().iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![10, 20, 30]);

        let years: Vec<u32> = p.scenario_b.rows().iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![10, 20, 30, 40]);
    }

    #[test]
    fn test_liquidity_total() {
        let point = LiquidityPoint::new(250000.0, 450000.0);
        assert_eq!(point.total(), 700000.0);
    }
}
