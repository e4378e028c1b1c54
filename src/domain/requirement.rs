use serde::{Deserialize, Serialize};

use super::FrRef;

/// A non-functional requirement.
///
/// Non-functional requirements are grouped by category (usability,
/// reliability, etc.) and refer to the functional requirements they
/// constrain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonFunctionalRequirement {
    /// The quality attribute, e.g. `Usability`.
    pub category: String,
    /// Free-text statement of the requirement.
    pub description: String,
    /// The functional requirements this requirement applies to.
    #[serde(default)]
    pub related: Vec<FrRef>,
}

impl NonFunctionalRequirement {
    /// Create a new non-functional requirement.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        related: Vec<FrRef>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            related,
        }
    }
}

/// Order requirements for display: a stable sort by category.
///
/// Requirements sharing a category keep their catalogue order.
#[must_use]
pub fn sorted_by_category(
    requirements: &[NonFunctionalRequirement],
) -> Vec<&NonFunctionalRequirement> {
    let mut sorted: Vec<_> = requirements.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_stable_within_category() {
        let requirements = vec![
            NonFunctionalRequirement::new("Usability", "first", vec![]),
            NonFunctionalRequirement::new("Efficiency", "second", vec![]),
            NonFunctionalRequirement::new("Usability", "third", vec![]),
            NonFunctionalRequirement::new("Efficiency", "fourth", vec![]),
        ];

        let descriptions: Vec<_> = sorted_by_category(&requirements)
            .into_iter()
            .map(|nfr| nfr.description.as_str())
            .collect();

        assert_eq!(descriptions, ["second", "fourth", "first", "third"]);
    }
}
