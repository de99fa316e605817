//! Keypair generation and address helpers.
//!
//! Keys are independently random hex strings: the address and public key are
//! NOT derived from the private key. This keeps the sandbox free of real
//! elliptic-curve math while producing realistically shaped values.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A generated wallet keypair.
///
/// All three values come from fresh OS randomness with no mathematical
/// relationship between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyPair {
    /// 32 bytes, hex-encoded (64 chars)
    pub private_key: String,
    /// "04" prefix + 64 bytes, hex-encoded (129 chars total)
    pub public_key: String,
    /// "0x" prefix + 20 bytes, hex-encoded (42 chars total)
    pub address: String,
}

/// Generate a new keypair from secure randomness.
pub fn generate_keypair() -> KeyPair {
    KeyPair {
        private_key: generate_random_hex(32),
        public_key: format!("04{}", generate_random_hex(64)),
        address: format!("0x{}", generate_random_hex(20)),
    }
}

/// Draw `byte_length` bytes from the OS random source and lower-case
/// hex-encode them. The output is always `2 * byte_length` characters.
pub fn generate_random_hex(byte_length: usize) -> String {
    let mut bytes = vec![0u8; byte_length];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Shorten an address for display: first 6 characters, an ellipsis, last 4.
/// An empty input yields an empty output.
pub fn format_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    let head: String = address.chars().take(6).collect();
    let count = address.chars().count();
    let tail: String = address.chars().skip(count.saturating_sub(4)).collect();
    format!("{head}...{tail}")
}

/// Check whether a recipient address is acceptable: "0x" prefix, total
/// length between 10 and 66, and only hex digits after the prefix.
///
/// Real Ethereum addresses are exactly 42 characters; the wider range is a
/// deliberate relaxation for hand-entered sandbox addresses.
pub fn is_valid_address(address: &str) -> bool {
    let Some(body) = address.strip_prefix("0x") else {
        return false;
    };
    if address.len() < 10 || address.len() > 66 {
        return false;
    }
    body.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn random_hex_has_requested_length() {
        for byte_length in [0, 1, 12, 20, 32, 64] {
            let out = generate_random_hex(byte_length);
            assert_eq!(out.len(), 2 * byte_length);
            assert!(is_lower_hex(&out), "not lower-case hex: {out}");
        }
    }

    #[test]
    fn random_hex_does_not_repeat() {
        let a = generate_random_hex(32);
        let b = generate_random_hex(32);
        assert_ne!(a, b);
    }

    #[test]
    fn keypair_has_expected_shape() {
        let keypair = generate_keypair();

        assert_eq!(keypair.private_key.len(), 64);
        assert!(is_lower_hex(&keypair.private_key));

        assert!(keypair.public_key.starts_with("04"));
        assert_eq!(keypair.public_key.len(), 2 + 128);

        assert!(keypair.address.starts_with("0x"));
        assert_eq!(keypair.address.len(), 2 + 40);
        assert!(is_lower_hex(&keypair.address[2..]));
    }

    #[test]
    fn keypairs_are_independent() {
        let a = generate_keypair();
        let b = generate_keypair();
        assert_ne!(a.private_key, b.private_key);
        assert_ne!(a.public_key, b.public_key);
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn format_address_shortens() {
        let formatted = format_address("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(formatted, "0x1234...5678");
    }

    #[test]
    fn format_address_empty_input() {
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn valid_address_accepted() {
        let address = format!("0x{}", "ab".repeat(20));
        assert!(is_valid_address(&address));
        // Upper-case hex is allowed
        assert!(is_valid_address("0xDEADBEEF"));
    }

    #[test]
    fn invalid_addresses_rejected() {
        // Missing prefix
        assert!(!is_valid_address("1234567890abcdef"));
        // Non-hex characters
        assert!(!is_valid_address("0x12345xyz9"));
        // Too short
        assert!(!is_valid_address("0xabc"));
        // Too long
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(65))));
        assert!(!is_valid_address(""));
    }
}
