use serde::{Deserialize, Serialize};

use super::{Identifier, Kind};

/// One concrete flow of steps within a [`UseCase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short description of the flow.
    pub title: String,
    /// State that holds before the first step.
    pub precondition: String,
    /// State that holds after the last step.
    pub postcondition: String,
    /// The steps, in order.
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Scenario {
    /// Create a new scenario.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        precondition: impl Into<String>,
        postcondition: impl Into<String>,
        steps: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            title: title.into(),
            precondition: precondition.into(),
            postcondition: postcondition.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

/// Which list of its use case a scenario belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioCategory {
    /// The expected flow.
    Nominal,
    /// An alternative flow that still succeeds.
    Variant,
    /// A flow ending in an error.
    Exception,
}

/// A titled interaction grouping nominal, variant and exception scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCase {
    /// Short description of the interaction.
    pub title: String,
    /// The actors taking part.
    pub actors: String,
    /// State that holds before the use case starts.
    pub precondition: String,
    /// State that holds after the use case completes.
    pub postcondition: String,
    /// Expected flows.
    #[serde(default)]
    pub nominal: Vec<Scenario>,
    /// Alternative flows.
    #[serde(default)]
    pub variants: Vec<Scenario>,
    /// Failing flows.
    #[serde(default)]
    pub exceptions: Vec<Scenario>,
}

impl UseCase {
    /// The full display name, e.g. `Use case 1, UC1: Sign up`.
    #[must_use]
    pub fn full_name(&self, identifier: Identifier) -> String {
        format!(
            "Use case {}, {identifier}: {}",
            identifier.code(),
            self.title
        )
    }

    /// The scenarios of this use case in display order (nominal, then
    /// variants, then exceptions), paired with their one-based index and
    /// category.
    pub fn scenarios(&self) -> impl Iterator<Item = NumberedScenario<'_>> {
        let nominal = self
            .nominal
            .iter()
            .map(|s| (ScenarioCategory::Nominal, s));
        let variants = self
            .variants
            .iter()
            .map(|s| (ScenarioCategory::Variant, s));
        let exceptions = self
            .exceptions
            .iter()
            .map(|s| (ScenarioCategory::Exception, s));

        nominal
            .chain(variants)
            .chain(exceptions)
            .enumerate()
            .map(|(position, (category, scenario))| NumberedScenario {
                index: position + 1,
                category,
                scenario,
            })
    }

    /// Total number of scenarios across all categories.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.nominal.len() + self.variants.len() + self.exceptions.len()
    }
}

/// A scenario together with its position within its use case.
#[derive(Debug, Clone, Copy)]
pub struct NumberedScenario<'a> {
    /// One-based index in nominal ++ variants ++ exceptions order.
    pub index: usize,
    /// The list the scenario came from.
    pub category: ScenarioCategory,
    /// The scenario itself.
    pub scenario: &'a Scenario,
}

impl NumberedScenario<'_> {
    /// The scenario code, e.g. `Scenario 1.2`.
    #[must_use]
    pub fn code(&self, use_case: Identifier) -> String {
        format!("Scenario {}.{}", use_case.code(), self.index)
    }

    /// The full display name, e.g. `Scenario 1.2: Username is already in use`.
    #[must_use]
    pub fn full_name(&self, use_case: Identifier) -> String {
        format!("{}: {}", self.code(use_case), self.scenario.title)
    }
}

/// Identifier of the use case at `index` (zero-based).
#[must_use]
pub const fn use_case_identifier(index: usize, uc_before: i64) -> Identifier {
    Identifier::from_position(Kind::Uc, index, uc_before)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(title: &str) -> Scenario {
        Scenario::new(title, "", "", ["step"])
    }

    #[test]
    fn scenarios_are_numbered_across_categories() {
        let use_case = UseCase {
            title: "Sign up".to_string(),
            actors: "Customer".to_string(),
            precondition: String::new(),
            postcondition: String::new(),
            nominal: vec![scenario("a")],
            variants: vec![scenario("b"), scenario("c")],
            exceptions: vec![scenario("d")],
        };

        let numbered: Vec<_> = use_case
            .scenarios()
            .map(|s| (s.index, s.category, s.scenario.title.as_str()))
            .collect();

        assert_eq!(
            numbered,
            [
                (1, ScenarioCategory::Nominal, "a"),
                (2, ScenarioCategory::Variant, "b"),
                (3, ScenarioCategory::Variant, "c"),
                (4, ScenarioCategory::Exception, "d"),
            ]
        );
        assert_eq!(use_case.scenario_count(), 4);
    }

    #[test]
    fn names_use_offset_identifier() {
        let use_case = UseCase {
            title: "Login".to_string(),
            actors: "User".to_string(),
            precondition: String::new(),
            postcondition: String::new(),
            nominal: vec![scenario("User logs in")],
            variants: vec![],
            exceptions: vec![],
        };
        let identifier = use_case_identifier(1, 2);

        assert_eq!(use_case.full_name(identifier), "Use case 4, UC4: Login");

        let first = use_case.scenarios().next().unwrap();
        assert_eq!(first.full_name(identifier), "Scenario 4.1: User logs in");
    }
}
