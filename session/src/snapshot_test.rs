use super::*;
use crate::identity::RoleProfile;

fn patient_identity() -> Identity {
    Identity {
        id: "patient-1".to_owned(),
        email: "john@example.com".to_owned(),
        display_name: "John Doe".to_owned(),
        phone: Some("9876543210".to_owned()),
        verified: true,
        profile_complete: true,
        profile: RoleProfile::Patient {
            health_id: "UHID123456789".to_owned(),
        },
    }
}

#[test]
fn empty_slot_loads_none() {
    let snapshot = MemorySnapshot::new();
    assert!(snapshot.load().is_none());
}

#[test]
fn save_then_load_round_trips() {
    let snapshot = MemorySnapshot::new();
    let identity = patient_identity();
    snapshot.save(&identity).expect("save");
    assert_eq!(snapshot.load(), Some(identity));
}

#[test]
fn clones_share_the_same_slot() {
    let snapshot = MemorySnapshot::new();
    let other = snapshot.clone();
    snapshot.save(&patient_identity()).expect("save");
    assert!(other.load().is_some());
}

#[test]
fn clear_erases_the_slot() {
    let snapshot = MemorySnapshot::new();
    snapshot.save(&patient_identity()).expect("save");
    snapshot.clear();
    assert!(snapshot.load().is_none());
    assert!(snapshot.raw().is_none());
}

#[test]
fn clear_on_empty_slot_is_a_no_op() {
    let snapshot = MemorySnapshot::new();
    snapshot.clear();
    assert!(snapshot.load().is_none());
}

#[test]
fn corrupt_snapshot_loads_none() {
    let snapshot = MemorySnapshot::new();
    snapshot.save(&patient_identity()).expect("save");
    *snapshot.slot.borrow_mut() = Some("{not json".to_owned());
    assert!(snapshot.load().is_none());
}

#[test]
fn failing_writes_return_write_error_and_keep_old_snapshot() {
    let snapshot = MemorySnapshot::new();
    snapshot.save(&patient_identity()).expect("save");
    snapshot.set_fail_writes(true);

    let mut updated = patient_identity();
    updated.display_name = "Jane Doe".to_owned();
    let err = snapshot.save(&updated).expect_err("write should fail");
    assert!(matches!(err, SnapshotError::Write(_)));
    assert_eq!(snapshot.load().map(|i| i.display_name), Some("John Doe".to_owned()));
}
