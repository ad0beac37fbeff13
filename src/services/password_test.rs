use super::*;

#[test]
fn hash_is_phc_argon2_string() {
    let hash = hash_password("p").expect("hashing should succeed");
    assert!(hash.starts_with("$argon2"));
}

#[test]
fn hash_never_contains_plaintext() {
    let hash = hash_password("supersecretword").expect("hashing should succeed");
    assert!(!hash.contains("supersecretword"));
}

#[test]
fn same_password_hashes_differ() {
    let a = hash_password("p").expect("hashing should succeed");
    let b = hash_password("p").expect("hashing should succeed");
    assert_ne!(a, b, "salts must differ");
}

#[test]
fn verify_accepts_correct_password() {
    let hash = hash_password("correct horse").expect("hashing should succeed");
    assert!(verify_password("correct horse", &hash));
}

#[test]
fn verify_rejects_wrong_password() {
    let hash = hash_password("correct horse").expect("hashing should succeed");
    assert!(!verify_password("battery staple", &hash));
}

#[test]
fn verify_rejects_empty_password_against_real_hash() {
    let hash = hash_password("nonempty").expect("hashing should succeed");
    assert!(!verify_password("", &hash));
}

#[test]
fn verify_rejects_malformed_stored_hash() {
    assert!(!verify_password("p", "not-a-phc-string"));
    assert!(!verify_password("p", ""));
}
