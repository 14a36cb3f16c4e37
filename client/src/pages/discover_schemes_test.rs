use super::*;

fn filter(search: &str, state: &str, category: &str, eligibility: &str) -> SchemeFilter {
    SchemeFilter {
        search: search.to_owned(),
        state: state.to_owned(),
        category: category.to_owned(),
        eligibility: eligibility.to_owned(),
    }
}

#[test]
fn empty_filter_keeps_every_scheme() {
    assert_eq!(filter_schemes(SCHEMES, &SchemeFilter::default()).len(), SCHEMES.len());
}

#[test]
fn all_selections_do_not_constrain() {
    let hits = filter_schemes(SCHEMES, &filter("", "All States", "All", "All"));
    assert_eq!(hits.len(), SCHEMES.len());
}

#[test]
fn search_matches_name_and_description() {
    let by_name = filter_schemes(SCHEMES, &filter("ayushman", "", "", ""));
    assert_eq!(by_name.len(), 1);
    assert!(by_name[0].name.contains("PM-JAY"));

    let by_description = filter_schemes(SCHEMES, &filter("landless", "", "", ""));
    assert_eq!(by_description.len(), 1);
    assert!(by_description[0].name.contains("AABY"));
}

#[test]
fn state_filter_includes_nationwide_schemes() {
    let hits = filter_schemes(SCHEMES, &filter("", "Bihar", "", ""));
    // RSBY is Bihar-specific; every "All States" scheme also matches.
    assert!(hits.iter().any(|s| s.name.contains("RSBY")));
    assert!(hits.iter().any(|s| s.states.contains(&"All States")));
    assert!(!hits.iter().any(|s| s.name.contains("Chief Minister's")));
}

#[test]
fn category_filter_is_exact() {
    let hits = filter_schemes(SCHEMES, &filter("", "", "Maternal Health", ""));
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|s| s.category == "Maternal Health"));
}

#[test]
fn eligibility_filter_matches_substring_case_insensitively() {
    let hits = filter_schemes(SCHEMES, &filter("", "", "", "Pregnant women"));
    assert_eq!(hits.len(), 2);
}

#[test]
fn filters_combine() {
    let hits = filter_schemes(SCHEMES, &filter("bima", "Bihar", "Government", ""));
    assert_eq!(hits.len(), 1);
    assert!(hits[0].name.contains("RSBY"));
}

#[test]
fn unmatched_search_yields_nothing() {
    assert!(filter_schemes(SCHEMES, &filter("dental", "", "", "")).is_empty());
}
