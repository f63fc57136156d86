//! Ordered literal substitution.

use remap_model::MappingTable;

/// Result of [`apply_mapping_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionOutcome {
    pub text: String,
    /// Total number of replaced occurrences across all rules.
    pub replacements: usize,
    /// Number of rules that matched at least once.
    pub rules_applied: usize,
}

/// Applies every rule of `mapping` to `text`, in table order.
///
/// Each rule replaces all non-overlapping occurrences, scanning left to right,
/// in the output of the previous rule. A later rule can therefore match text
/// introduced by an earlier one: `[a -> b, b -> c]` turns `"a"` into `"c"`.
pub fn apply_mapping(mapping: &MappingTable, text: &str) -> String {
    apply_mapping_with_stats(mapping, text).text
}

/// Same as [`apply_mapping`], also counting what was replaced.
pub fn apply_mapping_with_stats(mapping: &MappingTable, text: &str) -> SubstitutionOutcome {
    let mut result = text.to_owned();
    let mut replacements = 0;
    let mut rules_applied = 0;
    for entry in mapping {
        let hits = result.matches(entry.find.as_str()).count();
        if hits == 0 {
            continue;
        }
        result = result.replace(entry.find.as_str(), &entry.replace);
        replacements += hits;
        rules_applied += 1;
    }
    SubstitutionOutcome {
        text: result,
        replacements,
        rules_applied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remap_model::MappingEntry;

    fn mapping(pairs: &[(&str, &str)]) -> MappingTable {
        pairs
            .iter()
            .map(|&(find, replace)| MappingEntry::new(find, replace))
            .collect()
    }

    #[test]
    fn test_rules_feed_forward() {
        let table = mapping(&[("a", "b"), ("b", "c")]);
        assert_eq!(apply_mapping(&table, "a"), "c");
    }

    #[test]
    fn test_order_matters() {
        let table = mapping(&[("b", "c"), ("a", "b")]);
        assert_eq!(apply_mapping(&table, "a"), "b");
    }

    #[test]
    fn test_non_overlapping_left_to_right() {
        let table = mapping(&[("aa", "b")]);
        assert_eq!(apply_mapping(&table, "aaa"), "ba");
    }

    #[test]
    fn test_stats_count_occurrences() {
        let table = mapping(&[("cat", "dog"), ("bird", "fish"), ("x", "")]);
        let outcome = apply_mapping_with_stats(&table, "cat, cat and x");
        assert_eq!(outcome.text, "dog, dog and ");
        assert_eq!(outcome.replacements, 3);
        assert_eq!(outcome.rules_applied, 2);
    }

    #[test]
    fn test_multibyte_and_line_endings_preserved() {
        let table = mapping(&[("りんご", "apple")]);
        assert_eq!(
            apply_mapping(&table, "りんご\r\nみかん\n"),
            "apple\r\nみかん\n"
        );
    }
}
