//! The two tables of the test report.
//!
//! `table1` lists test cases as a Markdown table; `table2` maps requirements
//! and scenarios to the tests covering them as an HTML fragment (HTML is
//! needed for the nested lists inside cells).

use tracing::instrument;

/// Column titles of the test case table.
pub const TEST_CASE_COLUMNS: [&str; 4] = [
    "Test case name",
    "Object(s) tested",
    "Test level",
    "Technique used",
];

/// Render the test case table (`table1`).
///
/// Each row is passed through as-is: fields are joined with `" | "`. Rows
/// are not checked against [`TEST_CASE_COLUMNS`], so a short row yields
/// fewer cells and a long row yields extra unlabeled cells. Such rows are
/// reported with a warning.
#[must_use]
#[instrument(level = "debug", skip(rows))]
pub fn render_test_case_table(rows: &[Vec<String>]) -> Vec<String> {
    let mut lines = vec![
        format!("| {} |", TEST_CASE_COLUMNS.join(" | ")),
        "| :------------- | :--------------- | :--------: | :------------: |".to_string(),
    ];

    for (index, row) in rows.iter().enumerate() {
        if row.len() != TEST_CASE_COLUMNS.len() {
            tracing::warn!(
                row = index + 1,
                fields = row.len(),
                expected = TEST_CASE_COLUMNS.len(),
                "test case row has unexpected number of fields"
            );
        }
        lines.push(format!("| {} |", row.join(" | ")));
    }

    lines
}

/// Render the requirement to test mapping (`table2`) as an HTML table.
///
/// Each row holds a requirement (or scenario) id and a newline-separated
/// list of tests. Empty lines in the list are skipped, but a line holding
/// only whitespace is kept as an item. A requirement with no tests is
/// rendered with a `-` placeholder. Missing fields are treated as empty.
#[must_use]
#[instrument(level = "debug", skip(rows))]
pub fn render_requirement_test_table(rows: &[Vec<String>]) -> Vec<String> {
    let mut lines: Vec<String> = [
        "<table>",
        "\t<thead>",
        "\t\t<tr>",
        "\t\t\t<th>Functional Requirement or scenario</th>",
        "\t\t\t<th>Test(s)</th>",
        "\t\t</tr>",
        "\t</thead>",
        "\t<tbody style='font-family:\"Courier New\"'>",
    ]
    .map(String::from)
    .into();

    for (index, row) in rows.iter().enumerate() {
        if row.len() < 2 {
            tracing::warn!(
                row = index + 1,
                fields = row.len(),
                "requirement row is missing fields"
            );
        }
        let requirement = row.first().map_or("", String::as_str);
        let tests: Vec<&str> = row
            .get(1)
            .map(|tests| tests.lines().filter(|test| !test.is_empty()).collect())
            .unwrap_or_default();

        lines.push("\t\t<tr>".to_string());
        lines.push(format!("\t\t\t<td>{requirement}</td>"));
        if tests.is_empty() {
            lines.push("\t\t\t<td>-</td>".to_string());
        } else {
            lines.push("\t\t\t<td>".to_string());
            lines.push("\t\t\t\t<ul>".to_string());
            for test in tests {
                lines.push(format!("\t\t\t\t\t<li>{test}</li>"));
            }
            lines.push("\t\t\t\t</ul>".to_string());
            lines.push("\t\t\t</td>".to_string());
        }
        lines.push("\t\t</tr>".to_string());
    }

    lines.push("\t</tbody>".to_string());
    lines.push("</table>".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_case_table_has_header_and_rows() {
        let lines = render_test_case_table(&[row(&[
            "testSignUp",
            "UserController",
            "Unit",
            "WB/statement coverage",
        ])]);

        assert_eq!(lines, [
            "| Test case name | Object(s) tested | Test level | Technique used |",
            "| :------------- | :--------------- | :--------: | :------------: |",
            "| testSignUp | UserController | Unit | WB/statement coverage |",
        ]);
    }

    #[test]
    fn test_case_table_passes_irregular_rows_through() {
        let lines = render_test_case_table(&[
            row(&["short", "row"]),
            row(&["a", "b", "c", "d", "extra"]),
            row(&[]),
        ]);

        assert_eq!(lines[2], "| short | row |");
        assert_eq!(lines[3], "| a | b | c | d | extra |");
        assert_eq!(lines[4], "|  |");
    }

    #[test]
    fn empty_test_list_renders_placeholder() {
        let lines = render_requirement_test_table(&[row(&["FR1", ""])]);

        let body = &lines[8..lines.len() - 2];
        assert_eq!(body, ["\t\t<tr>", "\t\t\t<td>FR1</td>", "\t\t\t<td>-</td>", "\t\t</tr>"]);
    }

    #[test]
    fn tests_render_as_list_in_order() {
        let lines = render_requirement_test_table(&[row(&["FR2", "testA\ntestB"])]);

        let items: Vec<_> = lines
            .iter()
            .filter(|line| line.contains("<li>"))
            .map(|line| line.trim())
            .collect();
        assert_eq!(items, ["<li>testA</li>", "<li>testB</li>"]);
    }

    #[test]
    fn empty_lines_and_carriage_returns_are_dropped() {
        let lines = render_requirement_test_table(&[row(&["FR3", "testA\r\n\r\ntestB\n"])]);

        let items: Vec<_> = lines
            .iter()
            .filter(|line| line.contains("<li>"))
            .map(|line| line.trim())
            .collect();
        assert_eq!(items, ["<li>testA</li>", "<li>testB</li>"]);
    }

    #[test]
    fn whitespace_only_lines_are_kept() {
        let lines = render_requirement_test_table(&[row(&["FR5", "testA\n \ntestB"])]);

        let items: Vec<_> = lines
            .iter()
            .filter(|line| line.contains("<li>"))
            .map(String::as_str)
            .collect();
        assert_eq!(items, [
            "\t\t\t\t\t<li>testA</li>",
            "\t\t\t\t\t<li> </li>",
            "\t\t\t\t\t<li>testB</li>",
        ]);
    }

    #[test]
    fn missing_fields_are_treated_as_empty() {
        let lines = render_requirement_test_table(&[row(&["FR4"])]);
        assert!(lines.contains(&"\t\t\t<td>FR4</td>".to_string()));
        assert!(lines.contains(&"\t\t\t<td>-</td>".to_string()));
    }

    #[test]
    fn fragment_is_closed() {
        let lines = render_requirement_test_table(&[]);
        assert_eq!(lines.first().map(String::as_str), Some("<table>"));
        assert_eq!(lines.last().map(String::as_str), Some("</table>"));
        assert_eq!(lines.len(), 10);
    }
}
