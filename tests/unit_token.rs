use std::collections::HashSet;

use fithub::utils::token::generate_verification_token;

#[test]
fn test_token_is_fixed_length_hex() {
    let token = generate_verification_token().unwrap();

    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_tokens_do_not_collide() {
    let mut seen = HashSet::new();

    for _ in 0..1000 {
        let token = generate_verification_token().unwrap();
        assert_eq!(token.len(), 32);
        assert!(seen.insert(token), "verification token collided");
    }
}
