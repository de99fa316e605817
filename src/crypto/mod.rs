//! Cryptographic utilities for the wallet sandbox.
//!
//! Stateless building blocks used by the session layer:
//! - Keypair and secure random hex generation
//! - Password-based private key encryption (AES-256-GCM)
//! - Transaction hashing, signing, and integrity verification
//! - Address formatting and validation
//!
//! Every function is a pure function of its inputs apart from the OS
//! random source. Operations that can fail for cryptographic reasons
//! return `None` instead of an error; callers check explicitly.

mod cipher;
mod keys;
mod signing;

pub use cipher::{decrypt_private_key, encrypt_private_key};
pub use keys::{format_address, generate_keypair, generate_random_hex, is_valid_address, KeyPair};
pub use signing::{hash_transaction, sign_transaction, verify_signature, VerificationResult};
