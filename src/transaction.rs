//! Transaction records.

use serde::{Deserialize, Serialize};

/// The unsigned payload describing a transfer intent.
///
/// Field declaration order is the canonical serialization order used by
/// transaction hashing. Reordering fields changes every transaction hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    /// Sender wallet address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Transfer amount, kept as the caller's decimal string
    pub amount: String,
    /// Free-form note
    pub memo: String,
    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Random value in [0, 1_000_000)
    pub nonce: u32,
}

/// A transaction bundled with its hash and signature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Hex SHA-256 digest of the canonical transaction form
    pub hash: String,
    /// 128 hex characters; see `crypto::sign_transaction` for the layout
    pub signature: String,
    /// The signed payload
    pub tx_data: TransactionData,
    /// Signing time, milliseconds since the Unix epoch
    pub timestamp: i64,
}
