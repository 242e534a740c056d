//! Salted password hashing.
//!
//! Stored format is `"<salt-hex>:<digest-hex>"` where the digest is Argon2id
//! over the plaintext with the salt as Argon2's salt input. Parameters are
//! fixed because the stored format does not carry them.

use anyhow::{Result, anyhow};
use argon2::{Algorithm, Argon2, Params, Version};

const SALT_LEN: usize = 16;
const DIGEST_LEN: usize = 32;

/// Argon2 memory cost in KiB.
const MEMORY_COST_KIB: u32 = 8192;
const TIME_COST: u32 = 3;
const PARALLELISM: u32 = 1;

/// Well-formed stored hash that matches no password. Verifying against it
/// costs the same as a real check.
pub const UNMATCHABLE_HASH: &str = "00000000000000000000000000000000:\
0000000000000000000000000000000000000000000000000000000000000000";

fn argon2() -> Result<Argon2<'static>> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, Some(DIGEST_LEN))
        .map_err(|e| anyhow!("Invalid argon2 parameters: {e}"))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn digest(plaintext: &str, salt: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    let mut out = [0u8; DIGEST_LEN];
    argon2()?
        .hash_password_into(plaintext.as_bytes(), salt, &mut out)
        .map_err(|e| anyhow!("Password hashing failed: {e}"))?;
    Ok(out)
}

/// Hashes `plaintext` with a fresh random salt.
///
/// CPU and memory heavy; call through `spawn_blocking` from async code.
pub fn hash(plaintext: &str) -> Result<String> {
    let salt: [u8; SALT_LEN] = rand::random();
    let digest = digest(plaintext, &salt)?;
    Ok(format!("{}:{}", hex::encode(salt), hex::encode(digest)))
}

/// Checks `plaintext` against a stored hash. Malformed stored values never
/// verify.
#[must_use]
pub fn verify(plaintext: &str, stored: &str) -> bool {
    let Some((salt, expected)) = decode(stored) else {
        return false;
    };

    digest(plaintext, &salt).is_ok_and(|actual| constant_time_eq(&actual, &expected))
}

fn decode(stored: &str) -> Option<(Vec<u8>, Vec<u8>)> {
    let (salt_hex, digest_hex) = stored.split_once(':')?;
    let salt = hex::decode(salt_hex).ok()?;
    let expected = hex::decode(digest_hex).ok()?;

    (salt.len() >= SALT_LEN && expected.len() == DIGEST_LEN).then_some((salt, expected))
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
