//! Style-class list merging
//!
//! Rendered regions carry a whitespace-separated list of style-class names
//! which the stylesheet resolves to a concrete appearance. Merging is plain
//! concatenation: base classes first, caller overrides after, empty and
//! absent fragments skipped. No deduplication and no validation.

/// Merge an ordered list of optional class fragments into a single
/// whitespace-separated class string.
pub fn class_list<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut merged = String::new();
    for part in parts.into_iter().flatten() {
        if part.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(part);
    }
    merged
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(vec![Some("window")], "window")]
    #[case(vec![Some("window"), Some("wide")], "window wide")]
    #[case(vec![Some("window"), None], "window")]
    #[case(vec![None, Some("wide")], "wide")]
    #[case(vec![Some("window"), Some("")], "window")]
    #[case(vec![None, None], "")]
    #[case(vec![], "")]
    fn test_class_list(#[case] parts: Vec<Option<&str>>, #[case] expected: &str) {
        assert_eq!(class_list(parts), expected);
    }

    #[test]
    fn test_class_list_preserves_order_and_duplicates() {
        let merged = class_list([Some("window"), Some("window"), Some("active")]);
        assert_eq!(merged, "window window active");
    }

    #[test]
    fn test_class_list_keeps_multi_class_fragments() {
        // A caller override may itself contain several classes; they pass
        // through verbatim.
        let merged = class_list([Some("window-body"), Some("padded scrollable")]);
        assert_eq!(merged, "window-body padded scrollable");
    }
}
