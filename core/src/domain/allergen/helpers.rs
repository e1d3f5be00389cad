/// True when two allergen strings denote the same allergen.
///
/// Loose containment match in either direction after trimming and
/// case-folding, so "nuts" matches "Tree Nuts" and "peanut" matches
/// "Peanuts". Over-matches on very short entries; tightening this changes
/// safety verdicts, so the policy stays as-is.
pub fn allergen_matches(source: &str, profile_entry: &str) -> bool {
    let source = source.trim().to_lowercase();
    let entry = profile_entry.trim().to_lowercase();

    if source.is_empty() || entry.is_empty() {
        return false;
    }

    source.contains(&entry) || entry.contains(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_case_insensitive() {
        assert!(allergen_matches("Peanuts", "peanuts"));
        assert!(allergen_matches("MILK", "milk"));
    }

    #[test]
    fn test_containment_both_directions() {
        assert!(allergen_matches("Tree Nuts", "nuts"));
        assert!(allergen_matches("nut", "Tree Nuts"));
        assert!(allergen_matches("Shellfish", "fish"));
    }

    #[test]
    fn test_whitespace_trimmed() {
        assert!(allergen_matches("  sesame  ", "Sesame"));
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!allergen_matches("", "milk"));
        assert!(!allergen_matches("milk", "   "));
        assert!(!allergen_matches("", ""));
    }

    #[test]
    fn test_unrelated_strings() {
        assert!(!allergen_matches("Milk", "peanuts"));
    }
}
