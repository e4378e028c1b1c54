use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{Alphabetic}\p{Nd}]+").expect("static regex must compile")
});

/// Convert a heading title into the anchor generated for it by the hosting
/// Markdown renderer.
///
/// The title is lower-cased, every run of characters other than letters and
/// decimal digits becomes a single `-`, and leading and trailing dashes are
/// trimmed. Non-ASCII letters are kept as-is (`Résumé` becomes `résumé`), as
/// GitHub-flavoured heading anchors do. Applying `slug` to its own output
/// returns the same string.
///
/// ```
/// use reqdoc::domain::slug;
///
/// assert_eq!(slug("Use case 1, UC1: Sign up"), "use-case-1-uc1-sign-up");
/// ```
#[must_use]
pub fn slug(title: &str) -> String {
    let lower = title.to_lowercase();
    SEPARATORS
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Anchor for a scenario heading.
///
/// Dots are removed before slugging so that `Scenario 2.1` links to
/// `scenario-21` rather than colliding with the separator rules.
#[must_use]
pub fn scenario_slug(title: &str) -> String {
    slug(&title.replace('.', ""))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("Use case 1, UC1: Sign up", "use-case-1-uc1-sign-up"; "use case title")]
    #[test_case("  Leading and trailing  ", "leading-and-trailing"; "trims")]
    #[test_case("Customer's problem", "customer-s-problem"; "apostrophe")]
    #[test_case("A -- b", "a-b"; "collapses runs")]
    #[test_case("", ""; "empty")]
    #[test_case("Use case 16, UC16: Résumé upload", "use-case-16-uc16-résumé-upload"; "accented letters")]
    #[test_case("Ünïcödé ÄÖÜ", "ünïcödé-äöü"; "upper case non ascii")]
    fn slug_normalises(title: &str, expected: &str) {
        assert_eq!(slug(title), expected);
    }

    #[test_case("Use case 1, UC1: Sign up"; "ascii")]
    #[test_case("Use case 2, UC2: Café & Résumé"; "non ascii")]
    fn slug_is_idempotent(title: &str) {
        let once = slug(title);
        assert_eq!(slug(&once), once);
    }

    #[test]
    fn scenario_slug_drops_dots() {
        assert_eq!(
            scenario_slug("Scenario 2.1: User logs in"),
            "scenario-21-user-logs-in"
        );
        assert_ne!(scenario_slug("Scenario 2.1: X"), scenario_slug("Scenario 2.11: X"));
        assert_eq!(scenario_slug("Scenario 1.1: Café order"), "scenario-11-café-order");
    }
}
