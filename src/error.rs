//! Error types for the wallet sandbox

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No wallet available")]
    NoWallet,

    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("No transaction to verify")]
    NothingToVerify,

    #[error("Failed to encrypt private key")]
    EncryptionFailed,
}

pub type Result<T> = std::result::Result<T, Error>;
