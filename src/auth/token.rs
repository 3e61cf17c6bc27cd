// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const SESSION_TOKEN_BYTES: usize = 32;

/// Fresh session token from the OS RNG.
pub fn generate_session_token() -> String {
    let mut rng = OsRng;
    generate_token(&mut rng, SESSION_TOKEN_BYTES)
}

/// Generate a URL-safe token from random bytes.
/// - Uses Base64 URL-safe, no padding.
/// - Typically 32 bytes -> ~43 char token.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the token. Only this goes into the sessions table.
pub fn hash_token(token: &str) -> [u8; 32] {
    let out = Sha256::digest(token.as_bytes());
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
