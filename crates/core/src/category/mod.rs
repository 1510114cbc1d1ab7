//! Expense categories and keyword-based categorization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category an expense is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    /// Fees paid to outside consultants.
    #[serde(rename = "Sub-Consultant")]
    SubConsultant,
    /// Flights, hotels and local transport.
    Travel,
    /// Drawings, boards and reproduction.
    Printing,
    /// Samples, models and mock-up materials.
    Materials,
    /// Anything else.
    #[default]
    Others,
}

/// Keywords checked against a lowercased description, in order.
///
/// The first category with a matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(ExpenseCategory, &[&str])] = &[
    (
        ExpenseCategory::SubConsultant,
        &[
            "consultant",
            "subconsultant",
            "sub-consultant",
            "structural",
            "mep",
            "engineer",
            "survey",
            "geotechnical",
            "landscape",
        ],
    ),
    (
        ExpenseCategory::Travel,
        &[
            "flight", "airfare", "hotel", "taxi", "uber", "travel", "trip", "visa", "per diem",
            "mileage",
        ],
    ),
    (
        ExpenseCategory::Printing,
        &["print", "plot", "copies", "binding", "a0", "a1", "scan", "render board"],
    ),
    (
        ExpenseCategory::Materials,
        &["material", "sample", "model", "foam", "timber", "mock-up", "mockup", "stone", "tile"],
    ),
];

impl ExpenseCategory {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::SubConsultant,
        Self::Travel,
        Self::Printing,
        Self::Materials,
        Self::Others,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SubConsultant => "Sub-Consultant",
            Self::Travel => "Travel",
            Self::Printing => "Printing",
            Self::Materials => "Materials",
            Self::Others => "Others",
        }
    }

    /// Maps free text to a category, falling back to `Others`.
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a label matches no category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown expense category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// Picks a category for an expense description.
#[must_use]
pub fn categorize(description: &str) -> ExpenseCategory {
    let text = description.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map_or(ExpenseCategory::Others, |(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Flight to Riyadh for client meeting", ExpenseCategory::Travel)]
    #[case("Structural consultant fee - phase 2", ExpenseCategory::SubConsultant)]
    #[case("A0 plots for municipality submission", ExpenseCategory::Printing)]
    #[case("Stone samples for facade", ExpenseCategory::Materials)]
    #[case("Office coffee", ExpenseCategory::Others)]
    #[case("", ExpenseCategory::Others)]
    fn test_categorize(#[case] description: &str, #[case] expected: ExpenseCategory) {
        assert_eq!(categorize(description), expected);
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions both a consultant and travel.
        assert_eq!(
            categorize("Hotel for MEP engineer site visit"),
            ExpenseCategory::SubConsultant
        );
    }

    #[rstest]
    #[case("Sub-Consultant", ExpenseCategory::SubConsultant)]
    #[case("  travel ", ExpenseCategory::Travel)]
    #[case("PRINTING", ExpenseCategory::Printing)]
    #[case("Materials", ExpenseCategory::Materials)]
    #[case("Catering", ExpenseCategory::Others)]
    #[case("", ExpenseCategory::Others)]
    fn test_normalize(#[case] value: &str, #[case] expected: ExpenseCategory) {
        assert_eq!(ExpenseCategory::normalize(value), expected);
    }

    #[test]
    fn test_label_round_trip() {
        for category in ExpenseCategory::ALL {
            assert_eq!(category.to_string().parse::<ExpenseCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_label_is_error() {
        assert_eq!(
            "Catering".parse::<ExpenseCategory>(),
            Err(UnknownCategory("Catering".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::SubConsultant).unwrap(),
            "\"Sub-Consultant\""
        );
    }
}
