//! Wallet session management.
//!
//! A [`WalletSession`] owns at most one wallet, the most recently signed
//! transaction, and an append-only history of every transaction it has
//! signed. Sessions are plain values with no interior locking; the
//! `&mut self` methods give compile-time exclusivity, and callers that need
//! concurrent access wrap the session in their own mutex.
//!
//! SECURITY NOTE:
//! - The wallet record keeps the plaintext private key and the password in
//!   memory next to the encrypted key. That co-storage is part of the
//!   demonstrated design and is asserted by tests rather than fixed.
//! - [`WalletSession::export_wallet`] is the safe view: it never contains
//!   the plaintext key or the password.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::crypto::{self, VerificationResult};
use crate::error::{Error, Result};
use crate::transaction::{SignedTransaction, TransactionData};

/// Display balance for a freshly created wallet. Nothing in the sandbox
/// ever credits funds.
const INITIAL_BALANCE: &str = "0.00 ETH";

/// Upper bound (exclusive) for transaction nonces.
const NONCE_BOUND: u32 = 1_000_000;

/// An in-memory wallet.
///
/// Holds both the encrypted private key and the plaintext secrets it was
/// built from; see the module notes.
#[derive(Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub public_key: String,
    pub private_key: String,
    pub encrypted_private_key: String,
    pub balance: String,
    pub created_at: DateTime<Utc>,
    pub password: String,
}

// Keep secrets out of log output even though the fields are public.
impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .field("encrypted_private_key", &self.encrypted_private_key)
            .field("balance", &self.balance)
            .field("created_at", &self.created_at)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The shareable wallet view: address, public key, encrypted private key,
/// and creation time. Never the plaintext key or password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletExport {
    pub address: String,
    pub public_key: String,
    pub encrypted_private_key: String,
    pub created_at: DateTime<Utc>,
}

/// Stateful orchestrator for the wallet and transaction lifecycle.
#[derive(Debug, Default)]
pub struct WalletSession {
    current_wallet: Option<Wallet>,
    current_signed_tx: Option<SignedTransaction>,
    transactions: Vec<SignedTransaction>,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a keypair, encrypt its private key under `password`, and
    /// store the resulting wallet as the session's current one.
    ///
    /// Any prior wallet is replaced. Previously signed transactions stay in
    /// the history. Fails with [`Error::EncryptionFailed`] if the cipher
    /// signals failure.
    pub async fn create_wallet(&mut self, password: &str) -> Result<&Wallet> {
        let keypair = crypto::generate_keypair();
        let encrypted_private_key = crypto::encrypt_private_key(&keypair.private_key, password)
            .await
            .ok_or(Error::EncryptionFailed)?;

        let wallet = Wallet {
            address: keypair.address,
            public_key: keypair.public_key,
            private_key: keypair.private_key,
            encrypted_private_key,
            balance: INITIAL_BALANCE.to_string(),
            created_at: Utc::now(),
            password: password.to_string(),
        };
        tracing::info!(address = %wallet.address, "Created wallet");

        Ok(self.current_wallet.insert(wallet))
    }

    /// Build, sign, and record a transaction from the current wallet.
    ///
    /// Validation failures leave the session untouched: nothing is appended
    /// to the history and the current transaction is unchanged.
    pub async fn create_transaction(
        &mut self,
        to: &str,
        amount: &str,
        memo: &str,
    ) -> Result<SignedTransaction> {
        let wallet = self.current_wallet.as_ref().ok_or(Error::NoWallet)?;

        if !crypto::is_valid_address(to) {
            return Err(Error::InvalidRecipient(to.to_string()));
        }
        let parsed: f64 = amount
            .parse()
            .map_err(|_| Error::InvalidAmount(amount.to_string()))?;
        if parsed.is_nan() || parsed <= 0.0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        let tx_data = TransactionData {
            from: wallet.address.clone(),
            to: to.to_string(),
            amount: amount.to_string(),
            memo: memo.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            nonce: rand::thread_rng().gen_range(0..NONCE_BOUND),
        };

        let signed = crypto::sign_transaction(&tx_data, &wallet.private_key).await;
        tracing::info!(
            hash = %signed.hash,
            to = %signed.tx_data.to,
            amount = %signed.tx_data.amount,
            "Signed transaction"
        );

        self.current_signed_tx = Some(signed.clone());
        self.transactions.push(signed.clone());
        Ok(signed)
    }

    /// Check the current transaction for tampering.
    ///
    /// "Valid" means the stored hash still matches a fresh digest of the
    /// transaction data; authenticity is not checked.
    pub async fn verify_current_transaction(&self) -> Result<VerificationResult> {
        let signed_tx = self
            .current_signed_tx
            .as_ref()
            .ok_or(Error::NothingToVerify)?;
        let public_key = self
            .current_wallet
            .as_ref()
            .map(|w| w.public_key.as_str())
            .unwrap_or_default();
        Ok(crypto::verify_signature(signed_tx, public_key).await)
    }

    /// The current wallet, if one exists.
    pub fn wallet(&self) -> Option<&Wallet> {
        self.current_wallet.as_ref()
    }

    /// The most recently signed transaction, if any.
    pub fn current_signed_tx(&self) -> Option<&SignedTransaction> {
        self.current_signed_tx.as_ref()
    }

    /// Every transaction this session has signed, in signing order.
    pub fn transactions(&self) -> &[SignedTransaction] {
        &self.transactions
    }

    /// The safe wallet view, or `None` without a wallet.
    pub fn export_wallet(&self) -> Option<WalletExport> {
        self.current_wallet.as_ref().map(|wallet| WalletExport {
            address: wallet.address.clone(),
            public_key: wallet.public_key.clone(),
            encrypted_private_key: wallet.encrypted_private_key.clone(),
            created_at: wallet.created_at,
        })
    }

    /// Discard the current wallet and current transaction. The history
    /// survives.
    pub fn clear_wallet(&mut self) {
        tracing::info!("Cleared wallet");
        self.current_wallet = None;
        self.current_signed_tx = None;
    }
}
