use super::*;

#[test]
fn empty_term_keeps_every_claim() {
    assert_eq!(filter_claims(CLAIMS, "").len(), CLAIMS.len());
}

#[test]
fn matches_claim_id() {
    let hits = filter_claims(CLAIMS, "clm2025001235");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].patient, "Priya Sharma");
}

#[test]
fn matches_hospital() {
    let hits = filter_claims(CLAIMS, "metro");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].status, "pending-documents");
}

#[test]
fn matches_patient_name() {
    let hits = filter_claims(CLAIMS, "rajesh");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].claim_id, "CLM2025001234");
}

#[test]
fn shared_uhid_prefix_matches_all() {
    assert_eq!(filter_claims(CLAIMS, "uhid").len(), CLAIMS.len());
}

#[test]
fn unmatched_term_yields_nothing() {
    assert!(filter_claims(CLAIMS, "fortis").is_empty());
}
