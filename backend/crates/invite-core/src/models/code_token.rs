use rand::Rng;

/// URL-safe alphabet, same shape as nanoid ids
pub const CODE_TOKEN_ALPHABET: &[u8] =
    b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// 21 symbols of 64 = 126 bits of entropy
pub const CODE_TOKEN_LENGTH: usize = 21;

/// Mint a fresh invite token
pub fn mint_code_token() -> String {
    let mut rng = rand::rng();
    (0..CODE_TOKEN_LENGTH)
        .map(|_| CODE_TOKEN_ALPHABET[rng.random_range(0..CODE_TOKEN_ALPHABET.len())] as char)
        .collect()
}
