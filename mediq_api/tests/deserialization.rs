use mediq_api::types::{
    Appointment, AppointmentStatus, Envelope, Identity, Medicine, PageEnvelope, Role, User,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_appointments_full() {
    let json = load_fixture("appointments.json");
    let resp: PageEnvelope<Appointment> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.pagination.page_number, 1);
    assert_eq!(resp.pagination.page_size, 5);
    assert_eq!(resp.pagination.total_items, 11);
    assert_eq!(resp.pagination.total_pages, 3);
    assert!(resp.pagination.has_next());

    let first = &resp.data[0];
    assert_eq!(first.id, 101);
    assert_eq!(first.patient_id, 42);
    assert_eq!(first.patient_name, "Amara Osei");
    assert_eq!(first.doctor_name, "Dr. Lindqvist");
    assert_eq!(first.status, AppointmentStatus::Confirmed);
    assert_eq!(first.note.as_deref(), Some("Follow-up for blood pressure"));

    // Missing optional note deserializes to None.
    assert_eq!(resp.data[1].note, None);
    assert_eq!(resp.data[1].status, AppointmentStatus::Pending);
}

#[test]
fn deserialize_appointments_empty() {
    let json = load_fixture("appointments_empty.json");
    let resp: PageEnvelope<Appointment> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.pagination.total_items, 0);
    assert!(!resp.pagination.has_next());
}

#[test]
fn deserialize_medicines() {
    let json = load_fixture("medicines.json");
    let resp: PageEnvelope<Medicine> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 1);

    let medicine = &resp.data[0];
    assert_eq!(medicine.id, 7);
    assert_eq!(medicine.name, "Amoxicillin 500mg");
    assert_eq!(medicine.unit_price, 4.5);
    assert_eq!(medicine.stock, 120);
    assert_eq!(
        medicine.expires_on.map(|d| d.to_string()),
        Some("2027-01-31".to_string())
    );
}

#[test]
fn deserialize_identity() {
    let json = load_fixture("identity.json");
    let resp: Envelope<Identity> = serde_json::from_str(&json).unwrap();
    let identity = resp.data.unwrap();
    assert_eq!(identity.id, 42);
    assert_eq!(identity.username, "amara.osei");
    assert_eq!(identity.effective_role(), Some(Role::Doctor));
}

#[test]
fn deserialize_identity_without_user_record() {
    let resp: Envelope<Identity> = serde_json::from_str(r#"{"status": 401}"#).unwrap();
    assert!(resp.data.is_none());
}

#[test]
fn deserialize_users_with_unknown_role() {
    let json = load_fixture("users.json");
    let resp: PageEnvelope<User> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].roles, vec![Role::Admin]);
    assert_eq!(resp.data[0].full_name.as_deref(), Some("Clinic Administrator"));

    // "Auditor" is not a known role and must land on Unknown, not fail.
    assert_eq!(resp.data[1].roles, vec![Role::User, Role::Unknown]);
    assert!(resp.data[1].is_deleted);
    assert_eq!(resp.data[1].full_name, None);
}
