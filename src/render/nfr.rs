use tracing::instrument;

use crate::domain::{sorted_by_category, Identifier, Kind, NonFunctionalRequirement};

/// Header and alignment lines of the non-functional requirements table.
///
/// [`render_nfr_table`] only emits body rows, so that rows can be appended
/// to a table that already exists in the hosting document.
pub const NFR_TABLE_HEADER: [&str; 2] = [
    "| ID | Type | Description | Refers to |",
    "| :-: | :-: | :- | :-: |",
];

/// Render one Markdown table row per non-functional requirement.
///
/// Rows are ordered by category (stable, so requirements sharing a category
/// keep their catalogue order) and numbered in that order starting from
/// `NFR{nfr_before + 1}`. The last column lists the related functional
/// requirements, e.g. `FR 4.4, 4.5`.
#[must_use]
#[instrument(level = "debug", skip(requirements))]
pub fn render_nfr_table(
    requirements: &[NonFunctionalRequirement],
    fr_before: i64,
    nfr_before: i64,
) -> Vec<String> {
    sorted_by_category(requirements)
        .into_iter()
        .enumerate()
        .map(|(position, nfr)| {
            let identifier = Identifier::from_position(Kind::Nfr, position, nfr_before);
            let related = nfr
                .related
                .iter()
                .map(|fr| fr.identifier(fr_before).code().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "| {identifier} | {} | {} | FR {related} |",
                nfr.category, nfr.description
            )
        })
        .collect()
}
