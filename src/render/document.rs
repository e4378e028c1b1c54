use super::{render_nfr_table, render_use_case_details, render_use_case_links, NFR_TABLE_HEADER};
use crate::{Catalogue, Config};

/// Render the complete requirements document.
///
/// The document holds the non-functional requirements table, an outline of
/// links to every use case and scenario, and the full use case sections.
#[must_use]
pub fn render_requirements_document(catalogue: &Catalogue, config: &Config) -> Vec<String> {
    let mut lines = vec!["## Non functional requirements".to_string(), String::new()];
    lines.extend(NFR_TABLE_HEADER.map(String::from));
    lines.extend(render_nfr_table(
        &catalogue.requirements,
        config.fr_before,
        config.nfr_before,
    ));

    lines.extend(["", "## Use cases", "", "- Use cases"].map(String::from));
    lines.extend(render_use_case_links(&catalogue.use_cases, config.uc_before));
    lines.push(String::new());
    lines.extend(render_use_case_details(
        &catalogue.use_cases,
        config.uc_before,
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_contains_every_section() {
        let catalogue = Catalogue::builtin().unwrap();
        let lines = render_requirements_document(&catalogue, &Config::default());

        assert_eq!(lines[0], "## Non functional requirements");
        assert_eq!(lines[2], NFR_TABLE_HEADER[0]);
        assert!(lines[4].starts_with("| NFR11 |"));

        let outline = lines.iter().position(|line| line == "- Use cases").unwrap();
        assert_eq!(
            lines[outline + 1],
            "\t- [Use case 1, UC1: Sign up](#use-case-1-uc1-sign-up)"
        );

        let use_case_sections = lines.iter().filter(|line| line.starts_with("### ")).count();
        assert_eq!(use_case_sections, catalogue.use_cases.len());

        let scenario_sections = lines.iter().filter(|line| line.starts_with("##### ")).count();
        let scenarios: usize = catalogue
            .use_cases
            .iter()
            .map(crate::domain::UseCase::scenario_count)
            .sum();
        assert_eq!(scenario_sections, scenarios);
    }

    #[test]
    fn offsets_come_from_config() {
        let catalogue = Catalogue::builtin().unwrap();
        let config = Config {
            nfr_before: 0,
            uc_before: 20,
            ..Config::default()
        };
        let lines = render_requirements_document(&catalogue, &config);

        assert!(lines[4].starts_with("| NFR1 |"));
        assert!(lines.iter().any(|line| line == "### Use case 21, UC21: Sign up"));
    }
}
