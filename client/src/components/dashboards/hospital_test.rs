use super::*;

#[test]
fn empty_term_keeps_every_ward_patient() {
    assert_eq!(filter_ward(WARD_PATIENTS, "").len(), WARD_PATIENTS.len());
}

#[test]
fn matches_department() {
    let hits = filter_ward(WARD_PATIENTS, "cardiology");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Vikram Patel");
}

#[test]
fn matches_condition_across_case() {
    let hits = filter_ward(WARD_PATIENTS, "HIP FRACTURE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].bed, "OR-15");
}

#[test]
fn matches_uhid_fragment() {
    let hits = filter_ward(WARD_PATIENTS, "789123");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sunita Devi");
}

#[test]
fn unmatched_term_yields_nothing() {
    assert!(filter_ward(WARD_PATIENTS, "pediatrics").is_empty());
}
