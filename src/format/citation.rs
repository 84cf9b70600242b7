//! APA-style citation formatting.

use crate::models::Candidate;

/// Errors that can occur when formatting a citation
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CitationError {
    /// The record carries no authors; there is no defined citation for it
    #[error("record has no authors")]
    EmptyAuthorList,
}

/// Format a candidate as an APA-style citation:
/// `Authors (Year). Title. Journal.`
///
/// A missing or non-numeric year renders as the literal `n.d.`; a missing
/// journal ends the citation after the title. A record with no authors is
/// an error, left to the caller to turn into a fallback.
pub fn format_citation(record: &Candidate) -> Result<String, CitationError> {
    let formatted: Vec<String> = record
        .authors
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(format_author)
        .collect();

    if formatted.is_empty() {
        return Err(CitationError::EmptyAuthorList);
    }

    let author_str = join_authors(&formatted);
    let year = record
        .year
        .as_deref()
        .and_then(|y| y.trim().parse::<i32>().ok())
        .map(|y| y.to_string())
        .unwrap_or_else(|| "n.d.".to_string());

    let citation = match record.journal.as_deref().filter(|j| !j.trim().is_empty()) {
        Some(journal) => format!("{} ({}). {}. {}.", author_str, year, record.title, journal),
        None => format!("{} ({}). {}.", author_str, year, record.title),
    };

    Ok(citation)
}

/// Rewrite one author name as "Last, First Middle." with the period
/// closing the initials block. A single-token name keeps the name and
/// gains the period.
fn format_author(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => format!("{}.", only),
        [given @ .., last] => format!("{}, {}.", last, given.join(" ")),
    }
}

/// Join formatted author names: one stands alone, two are joined with
/// " & ", three or more use ", " separators and an Oxford ", & " before
/// the last.
fn join_authors(formatted: &[String]) -> String {
    match formatted {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{} & {}", a, b),
        [rest @ .., last] => format!("{}, & {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CandidateBuilder;

    #[test]
    fn test_single_author_citation() {
        let record = CandidateBuilder::new("Graph Theory")
            .author("Jane Doe")
            .year("2020")
            .journal("J. Math")
            .build();

        assert_eq!(
            format_citation(&record).unwrap(),
            "Doe, Jane. (2020). Graph Theory. J. Math."
        );
    }

    #[test]
    fn test_two_authors_joined_with_ampersand() {
        let record = CandidateBuilder::new("Graph Theory")
            .authors(["Jane Doe", "John Smith"])
            .year("2020")
            .journal("J. Math")
            .build();

        assert_eq!(
            format_citation(&record).unwrap(),
            "Doe, Jane. & Smith, John. (2020). Graph Theory. J. Math."
        );
    }

    #[test]
    fn test_three_authors_oxford_ampersand() {
        let record = CandidateBuilder::new("T")
            .authors(["B A", "D C", "F E"])
            .year("2001")
            .journal("J")
            .build();

        assert_eq!(
            format_citation(&record).unwrap(),
            "A, B., C, D., & E, F. (2001). T. J."
        );
    }

    #[test]
    fn test_middle_names_stay_in_initials_block() {
        let record = CandidateBuilder::new("T")
            .author("Ada Byron Lovelace")
            .year("1843")
            .journal("Notes")
            .build();

        assert_eq!(
            format_citation(&record).unwrap(),
            "Lovelace, Ada Byron. (1843). T. Notes."
        );
    }

    #[test]
    fn test_missing_year_renders_nd() {
        let record = CandidateBuilder::new("T").author("Jane Doe").journal("J").build();
        assert_eq!(format_citation(&record).unwrap(), "Doe, Jane. (n.d.). T. J.");
    }

    #[test]
    fn test_unparseable_year_renders_nd() {
        let record = CandidateBuilder::new("T")
            .author("Jane Doe")
            .year("NA")
            .journal("J")
            .build();
        assert_eq!(format_citation(&record).unwrap(), "Doe, Jane. (n.d.). T. J.");
    }

    #[test]
    fn test_missing_journal_ends_after_title() {
        let record = CandidateBuilder::new("Graph Theory")
            .author("Jane Doe")
            .year("2020")
            .build();
        assert_eq!(
            format_citation(&record).unwrap(),
            "Doe, Jane. (2020). Graph Theory."
        );
    }

    #[test]
    fn test_single_token_author() {
        let record = CandidateBuilder::new("Republic")
            .author("Plato")
            .journal("Dialogues")
            .build();
        assert_eq!(
            format_citation(&record).unwrap(),
            "Plato. (n.d.). Republic. Dialogues."
        );
    }

    #[test]
    fn test_empty_author_list_is_an_error() {
        let record = CandidateBuilder::new("T").year("2020").build();
        assert_eq!(format_citation(&record), Err(CitationError::EmptyAuthorList));
    }

    #[test]
    fn test_whitespace_only_authors_are_an_error() {
        let record = CandidateBuilder::new("T").authors(["  ", ""]).build();
        assert_eq!(format_citation(&record), Err(CitationError::EmptyAuthorList));
    }
}
