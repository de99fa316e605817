//! Password-based private key encryption.
//!
//! The symmetric key is the SHA-256 digest of the password (a single
//! unsalted digest, not a KDF), the cipher is AES-256-GCM with a fresh
//! 12-byte nonce per call, and the output is `base64(nonce ‖ ciphertext)`.
//!
//! Failures are reported as `None` rather than errors: callers must check
//! the return value explicitly and treat `None` as distinct from a
//! successfully decrypted empty string.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

const NONCE_LEN: usize = 12;

/// Derive the AES-256-GCM cipher from a password digest.
fn derive_cipher(password: &str) -> Option<Aes256Gcm> {
    let key = Sha256::digest(password.as_bytes());
    Aes256Gcm::new_from_slice(key.as_slice()).ok()
}

/// Encrypt a private key under a password.
///
/// An empty password skips encryption entirely and returns the private key
/// unchanged. That plaintext passthrough is part of the demonstrated design.
///
/// Returns `None` if the cipher fails.
pub async fn encrypt_private_key(private_key: &str, password: &str) -> Option<String> {
    if password.is_empty() {
        tracing::warn!("Empty password: private key stored without encryption");
        return Some(private_key.to_string());
    }

    let cipher = derive_cipher(password)?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher.encrypt(nonce, private_key.as_bytes()).ok()?;

    let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);
    Some(BASE64.encode(combined))
}

/// Decrypt a private key previously produced by [`encrypt_private_key`].
///
/// Returns `None` on malformed input, a wrong password, or any
/// authentication failure.
pub async fn decrypt_private_key(encrypted_key: &str, password: &str) -> Option<String> {
    let combined = BASE64.decode(encrypted_key).ok()?;
    if combined.len() < NONCE_LEN {
        return None;
    }
    let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);

    let cipher = derive_cipher(password)?;
    let nonce = Nonce::from_slice(nonce_bytes);

    let plaintext = cipher.decrypt(nonce, ciphertext).ok()?;
    String::from_utf8(plaintext).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn encrypt_decrypt_roundtrip() {
        let secret = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        let password = "correct horse battery staple";

        let encrypted = encrypt_private_key(secret, password).await.unwrap();
        assert_ne!(encrypted, secret);

        let decrypted = decrypt_private_key(&encrypted, password).await.unwrap();
        assert_eq!(decrypted, secret);
    }

    #[tokio::test]
    async fn wrong_password_fails() {
        let encrypted = encrypt_private_key("secret", "password-one").await.unwrap();
        assert!(decrypt_private_key(&encrypted, "password-two").await.is_none());
    }

    #[tokio::test]
    async fn empty_password_is_plaintext_passthrough() {
        let secret = "deadbeef";
        let out = encrypt_private_key(secret, "").await.unwrap();
        assert_eq!(out, secret);
    }

    #[tokio::test]
    async fn nonce_makes_ciphertexts_differ() {
        let a = encrypt_private_key("secret", "pw").await.unwrap();
        let b = encrypt_private_key("secret", "pw").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn malformed_input_fails() {
        // Not base64 at all
        assert!(decrypt_private_key("not base64!!!", "pw").await.is_none());
        // Valid base64 but shorter than a nonce
        assert!(decrypt_private_key(&BASE64.encode([0u8; 4]), "pw").await.is_none());
        // Nonce present but garbage ciphertext
        assert!(decrypt_private_key(&BASE64.encode([0u8; 32]), "pw").await.is_none());
    }

    #[tokio::test]
    async fn tampered_ciphertext_fails() {
        let encrypted = encrypt_private_key("secret", "pw").await.unwrap();
        let mut raw = BASE64.decode(&encrypted).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xff;
        assert!(decrypt_private_key(&BASE64.encode(raw), "pw").await.is_none());
    }

    #[tokio::test]
    async fn empty_secret_roundtrips_to_empty_string() {
        let encrypted = encrypt_private_key("", "pw").await.unwrap();
        let decrypted = decrypt_private_key(&encrypted, "pw").await;
        // A decrypted empty string is a success, unlike None
        assert_eq!(decrypted.as_deref(), Some(""));
    }
}
