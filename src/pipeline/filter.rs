//! Acceptance predicate for the filter stage.

use crate::models::Candidate;

/// Whether a candidate passes the year-bound and keyword checks.
///
/// The coerced year must fall inside the inclusive `[year_start, year_end]`
/// range (a missing or unparseable year counts as `0`), and every query
/// token must appear as a substring of the lower-cased title + abstract
/// text. An inverted range matches nothing.
pub fn candidate_matches(
    candidate: &Candidate,
    tokens: &[String],
    year_start: i32,
    year_end: i32,
) -> bool {
    let year = candidate.parsed_year();
    if year < year_start || year > year_end {
        return false;
    }

    let haystack = candidate.search_text();
    tokens.iter().all(|token| haystack.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateBuilder;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_accepts_in_range_matching_candidate() {
        let candidate = CandidateBuilder::new("Stem Cell Atlas")
            .abstract_text("Regeneration of tissue")
            .year("2015")
            .build();
        assert!(candidate_matches(&candidate, &tokens(&["stem", "cell"]), 2000, 2024));
    }

    #[test]
    fn test_year_outside_range_excludes_despite_text_match() {
        let candidate = CandidateBuilder::new("Stem Cell Atlas").year("1999").build();
        assert!(!candidate_matches(&candidate, &tokens(&["stem"]), 2000, 2024));

        let late = CandidateBuilder::new("Stem Cell Atlas").year("2025").build();
        assert!(!candidate_matches(&late, &tokens(&["stem"]), 2000, 2024));
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let lower = CandidateBuilder::new("stem").year("2000").build();
        let upper = CandidateBuilder::new("stem").year("2024").build();
        assert!(candidate_matches(&lower, &tokens(&["stem"]), 2000, 2024));
        assert!(candidate_matches(&upper, &tokens(&["stem"]), 2000, 2024));
    }

    #[test]
    fn test_missing_token_excludes_despite_year_match() {
        let candidate = CandidateBuilder::new("Stem Cell Atlas")
            .abstract_text("Regeneration of tissue")
            .year("2015")
            .build();
        assert!(!candidate_matches(
            &candidate,
            &tokens(&["stem", "quantum"]),
            2000,
            2024
        ));
    }

    #[test]
    fn test_token_may_match_in_abstract_only() {
        let candidate = CandidateBuilder::new("Tissue Atlas")
            .abstract_text("A survey of stem cells")
            .year("2015")
            .build();
        assert!(candidate_matches(&candidate, &tokens(&["stem"]), 2000, 2024));
    }

    #[test]
    fn test_token_matches_as_substring() {
        let candidate = CandidateBuilder::new("Categories of Sets").year("2015").build();
        assert!(candidate_matches(&candidate, &tokens(&["cat"]), 2000, 2024));
    }

    #[test]
    fn test_unparseable_year_coerces_to_zero() {
        let candidate = CandidateBuilder::new("stem").year("NA").build();
        assert!(!candidate_matches(&candidate, &tokens(&["stem"]), 2000, 2024));
        // year 0 only passes when the lower bound reaches it
        assert!(candidate_matches(&candidate, &tokens(&["stem"]), -1, 2024));
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let candidate = CandidateBuilder::new("stem").year("2015").build();
        assert!(!candidate_matches(&candidate, &tokens(&["stem"]), 2024, 2000));
    }

    #[test]
    fn test_no_tokens_accepts_any_in_range_candidate() {
        let candidate = CandidateBuilder::new("Anything").year("2015").build();
        assert!(candidate_matches(&candidate, &[], 2000, 2024));
    }
}
