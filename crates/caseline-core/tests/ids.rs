use caseline_core::ids::{client_uuid, document_key};

#[test]
fn client_uuid_is_sixteen_digits() {
    let id = client_uuid();
    assert_eq!(id.len(), 16);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn document_key_is_uuid_shaped() {
    let key = document_key();
    assert_eq!(key.len(), 36);
    assert_eq!(key.matches('-').count(), 4);
}

#[test]
fn document_keys_are_unique_enough() {
    let a = document_key();
    let b = document_key();
    assert_ne!(a, b);
}
