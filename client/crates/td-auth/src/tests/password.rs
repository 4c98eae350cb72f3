use crate::{AuthError, hash_password, verify_password};

#[test]
fn given_hash_when_verified_then_only_original_password_matches() {
    let hash = hash_password("correct-horse").unwrap();

    assert!(hash.starts_with("$argon2id$"));
    assert!(verify_password("correct-horse", &hash).unwrap());
    assert!(!verify_password("wrong-horse", &hash).unwrap());
}

#[test]
fn given_same_password_then_salts_differ() {
    let first = hash_password("same-password").unwrap();
    let second = hash_password("same-password").unwrap();

    assert_ne!(first, second);
    assert!(verify_password("same-password", &first).unwrap());
    assert!(verify_password("same-password", &second).unwrap());
}

#[test]
fn given_plaintext_column_when_verified_then_hashing_error() {
    let result = verify_password("secret1", "secret1");

    assert!(matches!(result, Err(AuthError::Hashing { .. })));
}
