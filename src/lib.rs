//! Wallet Sandbox
//!
//! An in-memory demonstration of wallet key management and transaction
//! signing:
//! - Generate a keypair and address from secure randomness
//! - Encrypt the private key under a user password (AES-256-GCM)
//! - Build, hash, and sign transaction records
//! - Verify transaction integrity by hash recomputation
//!
//! # Security Model
//!
//! This is a sandbox, NOT a production wallet. It deliberately reproduces
//! the weaknesses of the design it demonstrates:
//! - Keys are independently random; the address and public key are not
//!   derived from the private key
//! - The "signature" is a demo construction with no unforgeability guarantee
//! - Verification detects tampering only; it never proves authenticity
//! - The wallet record holds the plaintext private key and password in
//!   memory next to the encrypted key
//!
//! Nothing is persisted and nothing is broadcast to any network.

pub mod crypto;
pub mod session;
pub mod transaction;

mod error;

// Re-export commonly used types
pub use error::{Error, Result};
pub use session::{Wallet, WalletExport, WalletSession};
pub use transaction::{SignedTransaction, TransactionData};
