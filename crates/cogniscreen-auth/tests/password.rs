use cogniscreen_auth::password::{hash, verify};

#[test]
fn hash_then_verify_round_trips() {
    let hashed = hash("correct horse battery staple").unwrap();
    assert!(verify("correct horse battery staple", &hashed).unwrap());
}

#[test]
fn wrong_password_does_not_verify() {
    let hashed = hash("correct horse battery staple").unwrap();
    assert!(!verify("Tr0ub4dor&3", &hashed).unwrap());
}

#[test]
fn hash_is_salted() {
    let first = hash("same password").unwrap();
    let second = hash("same password").unwrap();
    assert_ne!(first, second);
}

#[test]
fn hash_is_a_phc_string() {
    let hashed = hash("anything").unwrap();
    assert!(hashed.starts_with("$argon2id$"));
}

#[test]
fn garbage_stored_hash_is_an_error_not_a_match() {
    assert!(verify("anything", "not-a-phc-string").is_err());
}
