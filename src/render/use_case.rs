use std::{fmt, str::FromStr};

use tracing::instrument;

use super::Error;
use crate::domain::{
    scenario_slug, slug,
    use_case::{use_case_identifier, NumberedScenario},
    Identifier, ScenarioCategory, UseCase,
};

/// How use cases are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A nested list of links to every use case and scenario.
    Links,
    /// Full use case and scenario sections.
    Text,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "links" => Ok(Self::Links),
            "text" => Ok(Self::Text),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Links => f.write_str("links"),
            Self::Text => f.write_str("text"),
        }
    }
}

/// Render use cases in the named mode (`links` or `text`).
///
/// # Errors
///
/// Returns [`Error::UnsupportedMode`] if `mode` is not recognised. Nothing is
/// rendered in that case.
pub fn render_use_cases(
    use_cases: &[UseCase],
    mode: &str,
    uc_before: i64,
) -> Result<Vec<String>, Error> {
    let lines = match mode.parse()? {
        Mode::Links => render_use_case_links(use_cases, uc_before),
        Mode::Text => render_use_case_details(use_cases, uc_before),
    };
    Ok(lines)
}

/// Render a nested list linking to every use case and its scenarios.
///
/// Use case lines are indented by one tab and scenario lines by two, so the
/// outline can be nested under an existing list item.
#[must_use]
#[instrument(level = "debug", skip(use_cases))]
pub fn render_use_case_links(use_cases: &[UseCase], uc_before: i64) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, use_case) in use_cases.iter().enumerate() {
        let identifier = use_case_identifier(index, uc_before);
        lines.push(format!("\t- {}", use_case_link(use_case, identifier)));
        for scenario in use_case.scenarios() {
            lines.push(format!("\t\t- {}", scenario_link(&scenario, identifier)));
        }
    }
    lines
}

/// Render the full section of every use case, followed by the sections of its
/// scenarios.
#[must_use]
#[instrument(level = "debug", skip(use_cases))]
pub fn render_use_case_details(use_cases: &[UseCase], uc_before: i64) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, use_case) in use_cases.iter().enumerate() {
        let identifier = use_case_identifier(index, uc_before);
        push_use_case(&mut lines, use_case, identifier);
    }
    lines
}

fn use_case_link(use_case: &UseCase, identifier: Identifier) -> String {
    let name = use_case.full_name(identifier);
    let anchor = slug(&name);
    format!("[{name}](#{anchor})")
}

fn scenario_link(scenario: &NumberedScenario<'_>, use_case: Identifier) -> String {
    let name = scenario.full_name(use_case);
    let anchor = scenario_slug(&name);
    format!("[{name}](#{anchor})")
}

fn push_use_case(lines: &mut Vec<String>, use_case: &UseCase, identifier: Identifier) {
    let category_links = |category: ScenarioCategory| {
        use_case
            .scenarios()
            .filter(|scenario| scenario.category == category)
            .map(|scenario| scenario_link(&scenario, identifier))
            .collect::<Vec<_>>()
            .join(", ")
    };

    lines.push(format!("### {}", use_case.full_name(identifier)));
    lines.push(String::new());
    lines.push(format!("|Actors involved|{}|", use_case.actors));
    lines.push("|:-:|:-|".to_string());
    lines.push(format!("|Precondition|{}|", use_case.precondition));
    lines.push(format!("|Post condition|{}|", use_case.postcondition));
    lines.push(format!(
        "|Nominal Scenario|{}|",
        category_links(ScenarioCategory::Nominal)
    ));
    lines.push(format!("|Variants|{}|", category_links(ScenarioCategory::Variant)));
    lines.push(format!(
        "|Exceptions|{}|",
        category_links(ScenarioCategory::Exception)
    ));
    lines.push(String::new());

    for scenario in use_case.scenarios() {
        push_scenario(lines, &scenario, identifier);
    }
}

fn push_scenario(lines: &mut Vec<String>, scenario: &NumberedScenario<'_>, use_case: Identifier) {
    lines.push(format!("##### {}", scenario.full_name(use_case)));
    lines.push(String::new());
    lines.push(format!(
        "|{}|{}|",
        scenario.code(use_case),
        scenario.scenario.title
    ));
    lines.push("|:-:|:-|".to_string());
    lines.push(format!("|Precondition|{}|", scenario.scenario.precondition));
    lines.push(format!("|Post condition|{}|", scenario.scenario.postcondition));
    lines.push("|Step#|Description|".to_string());
    for (number, step) in scenario.scenario.steps.iter().enumerate() {
        lines.push(format!("|{}|{step}|", number + 1));
    }
    lines.push(String::new());
}
