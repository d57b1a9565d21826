//! Proposal JSON parsing

use crate::{Proposal, ProposalError, Result};

/// Parse a proposal from a JSON string
///
/// Top-level sections that are missing take their seed values.
pub fn parse_proposal(json: &str) -> Result<Proposal> {
    serde_json::from_str(json).map_err(|e| ProposalError::ParseError(e.to_string()))
}

impl Proposal {
    /// Parse a proposal from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        parse_proposal(json)
    }

    /// Parse a proposal from an already decoded JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ProposalError::ParseError(e.to_string()))
    }

    /// Serialize the proposal as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_record() {
        let json = r#"{
            "client": { "name": "Alice", "age": 50 },
            "planName": "Legacy Plan",
            "premium": { "total": 100000, "paymentType": "5 years" },
            "scenarioA": {
                "year10": { "surrender": 110000, "death": 200000 },
                "year20": { "surrender": 150000, "death": 200000 },
                "year30": { "surrender": 210000, "death": 260000 }
            },
            "scenarioB": {
                "annualWithdrawal": 5000,
                "year10": { "cumulative": 50000, "remaining": 70000 },
                "year20": { "cumulative": 100000, "remaining": 60000 },
                "year30": { "cumulative": 150000, "remaining": 50000 },
                "year40": { "cumulative": 200000, "remaining": 40000 }
            },
            "promo": {
                "lumpSum": { "enabled": false, "percent": 0 },
                "fiveYear": { "enabled": true, "percent": 10 },
                "prepay": { "enabled": false, "rate": 0, "deadline": "" }
            }
        }"#;

        let p = parse_proposal(json).unwrap();
        assert_eq!(p.client.name, "Alice");
        assert_eq!(p.plan_name, "Legacy Plan");
        assert_eq!(p.premium.payment_type, "5 years");
        assert_eq!(p.scenario_b.year40.remaining, 40000.0);
        assert!(p.promo.five_year.enabled);
    }

    #[test]
    fn test_parse_partial_record_uses_seed() {
        let p = parse_proposal(r#"{ "client": { "name": "Bob" } }"#).unwrap();
        assert_eq!(p.client.name, "Bob");
        assert_eq!(p.client.age, 0);
        assert_eq!(p.premium, Proposal::default().premium);
    }

    #[test]
    fn test_parse_missing_deadline() {
        let p = parse_proposal(
            r#"{ "promo": {
                "lumpSum": { "enabled": true, "percent": 2 },
                "fiveYear": { "enabled": false },
                "prepay": { "enabled": true, "rate": 3 }
            } }"#,
        )
        .unwrap();
        assert_eq!(p.promo.prepay.deadline, "");
        assert_eq!(p.promo.five_year.percent, 0.0);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_proposal(r#"{ "premium": { "total": "lots" } }"#).unwrap_err();
        assert!(matches!(err, ProposalError::ParseError(_)));
    }

    #[test]
    fn test_from_value() {
        let p = Proposal::from_value(json!({ "planName": "Plan X" })).unwrap();
        assert_eq!(p.plan_name, "Plan X");
    }

    #[test]
    fn test_json_roundtrip_preserves_age() {
        let seed = Proposal::default();
        let json = seed.to_json_pretty().unwrap();
        assert!(json.contains("\"planName\""));
        assert!(json.contains("\"age\": 45"));
        assert_eq!(Proposal::from_json(&json).unwrap(), seed);
    }
}
