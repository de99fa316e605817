//! Transaction hashing, signing, and integrity verification.
//!
//! SECURITY NOTE:
//! - The signature produced here is a demonstration artifact, not an
//!   elliptic-curve signature. It offers no unforgeability guarantee.
//! - Verification recomputes the transaction hash and compares it to the
//!   stored one. It never inspects the signature bytes or the public key,
//!   so "valid" means "not tampered with", not "authentic".

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::crypto::keys::generate_random_hex;
use crate::transaction::{SignedTransaction, TransactionData};

/// Outcome of an integrity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    pub reason: String,
}

/// Compute the canonical SHA-256 digest of a transaction, hex-encoded.
///
/// The canonical form is the JSON serialization of [`TransactionData`] with
/// fields in declaration order. Identical transactions always hash to the
/// same digest.
pub async fn hash_transaction(tx_data: &TransactionData) -> String {
    let canonical =
        serde_json::to_string(tx_data).expect("transaction serialization is infallible");
    let digest = Sha256::digest(canonical.as_bytes());
    hex::encode(digest)
}

/// Sign a transaction with the demo signature scheme.
///
/// The signature is `r ‖ s`: `r` is 64 fresh random hex characters, `s` is
/// the first 32 hex characters of the transaction hash followed by the
/// first 32 hex characters of the private key. The `s` component is
/// deterministic for a given transaction and key; only `r` varies.
pub async fn sign_transaction(tx_data: &TransactionData, private_key: &str) -> SignedTransaction {
    let hash = hash_transaction(tx_data).await;
    let r = generate_random_hex(32);
    let s = format!("{}{}", hex_prefix(&hash, 32), hex_prefix(private_key, 32));

    SignedTransaction {
        signature: format!("{r}{s}"),
        hash,
        tx_data: tx_data.clone(),
        timestamp: chrono::Utc::now().timestamp_millis(),
    }
}

/// Check a signed transaction for tampering.
///
/// Recomputes the hash of `signed_tx.tx_data` and compares it to the stored
/// hash. The public key argument is accepted for interface symmetry but is
/// not used; see the module notes.
pub async fn verify_signature(
    signed_tx: &SignedTransaction,
    _public_key: &str,
) -> VerificationResult {
    let recomputed = hash_transaction(&signed_tx.tx_data).await;
    if recomputed != signed_tx.hash {
        return VerificationResult {
            valid: false,
            reason: "Transaction hash mismatch - data has been tampered".to_string(),
        };
    }
    VerificationResult {
        valid: true,
        reason: "Signature valid and transaction integrity verified".to_string(),
    }
}

fn hex_prefix(value: &str, len: usize) -> &str {
    &value[..value.len().min(len)]
}
