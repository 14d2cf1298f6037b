use crate::{CODE_TOKEN_ALPHABET, CODE_TOKEN_LENGTH, Code, Identity, mint_code_token};

use std::collections::HashSet;

use googletest::prelude::*;

fn creator() -> Identity {
    Identity::new("user-123").unwrap()
}

#[test]
fn test_minted_token_has_expected_length_and_alphabet() {
    let token = mint_code_token();

    assert_that!(token.len(), eq(CODE_TOKEN_LENGTH));
    assert!(token.bytes().all(|b| CODE_TOKEN_ALPHABET.contains(&b)));
}

#[test]
fn test_minted_tokens_do_not_collide() {
    let tokens: HashSet<String> = (0..1000).map(|_| mint_code_token()).collect();

    assert_that!(tokens.len(), eq(1000));
}

#[test]
fn test_mint_pair_yields_two_distinct_unclaimed_codes() {
    let [first, second] = Code::mint_pair(&creator());

    assert_that!(first.id, not(eq(&second.id)));
    assert_that!(first.creator, eq(&creator()));
    assert_that!(second.creator, eq(&creator()));
    assert!(!first.is_claimed());
    assert!(!second.is_claimed());
}
