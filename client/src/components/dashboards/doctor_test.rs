use super::*;

#[test]
fn empty_term_keeps_every_patient() {
    assert_eq!(filter_patients(RECENT_PATIENTS, "").len(), RECENT_PATIENTS.len());
    assert_eq!(filter_patients(RECENT_PATIENTS, "   ").len(), RECENT_PATIENTS.len());
}

#[test]
fn matches_name_case_insensitively() {
    let hits = filter_patients(RECENT_PATIENTS, "sunita");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sunita Devi");
}

#[test]
fn matches_partial_uhid() {
    let hits = filter_patients(RECENT_PATIENTS, "321654");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Vikram Patel");
}

#[test]
fn matches_condition() {
    let hits = filter_patients(RECENT_PATIENTS, "thyroid");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Meera Gupta");
}

#[test]
fn unmatched_term_yields_nothing() {
    assert!(filter_patients(RECENT_PATIENTS, "cardiomyopathy").is_empty());
}
