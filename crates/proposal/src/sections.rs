//! Document sections and their fixed order

use serde::{Deserialize, Serialize};

/// A section of the proposal document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Header,
    ClientOverview,
    RiskDisclosure,
    Infographic,
    ScenarioA,
    ScenarioB,
    Promotions,
    Disclaimer,
}

impl Section {
    /// Sections in document order
    pub const ORDER: [Section; 8] = [
        Section::Header,
        Section::ClientOverview,
        Section::RiskDisclosure,
        Section::Infographic,
        Section::ScenarioA,
        Section::ScenarioB,
        Section::Promotions,
        Section::Disclaimer,
    ];

    /// Whether a page break is inserted before this section
    ///
    /// The first page ends after the infographic; the projection tables and
    /// everything after them go on the second page.
    pub fn starts_new_page(self) -> bool {
        matches!(self, Section::ScenarioA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_starts_with_header_ends_with_disclaimer() {
        assert_eq!(Section::ORDER.first(), Some(&Section::Header));
        assert_eq!(Section::ORDER.last(), Some(&Section::Disclaimer));
    }

    #[test]
    fn test_single_page_break() {
        let breaks: Vec<Section> = Section::ORDER
            .into_iter()
            .filter(|s| s.starts_new_page())
            .collect();
        assert_eq!(breaks, vec![Section::ScenarioA]);
    }
}
