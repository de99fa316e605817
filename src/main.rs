//! Wallet Sandbox CLI
//!
//! Command-line driver for the in-memory wallet and signing sandbox.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wallet_sandbox::{crypto, Result, WalletSession};

#[derive(Parser)]
#[command(name = "wallet-sandbox")]
#[command(about = "In-memory wallet and transaction signing sandbox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the full lifecycle: create a wallet, sign, verify, export
    Demo {
        /// Wallet password (at least 6 characters)
        #[arg(short, long)]
        password: String,

        /// Recipient address (a fresh one is generated when omitted)
        #[arg(long)]
        to: Option<String>,

        /// Amount to transfer
        #[arg(long, default_value = "1.5")]
        amount: String,

        /// Transaction memo
        #[arg(long, default_value = "")]
        memo: String,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a standalone keypair
    Keypair {
        /// Print the keypair as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Demo {
            password,
            to,
            amount,
            memo,
            json,
        } => {
            run_demo(password, to, amount, memo, json).await?;
        }
        Commands::Keypair { json } => {
            run_keypair(json);
        }
    }

    Ok(())
}

async fn run_demo(
    password: String,
    to: Option<String>,
    amount: String,
    memo: String,
    json: bool,
) -> Result<()> {
    // Password length is a front-end rule; the session itself accepts any
    // password, including an empty one.
    if password.len() < 6 {
        eprintln!("Password must be at least 6 characters");
        std::process::exit(2);
    }

    let mut session = WalletSession::new();

    let wallet = session.create_wallet(&password).await?;
    println!("== Wallet ==");
    println!(
        "Address:               {} ({})",
        wallet.address,
        crypto::format_address(&wallet.address)
    );
    println!("Public key:            {}", wallet.public_key);
    println!("Encrypted private key: {}", wallet.encrypted_private_key);
    println!("Balance:               {}", wallet.balance);
    println!("Created:               {}", wallet.created_at);

    let recipient = to.unwrap_or_else(|| crypto::generate_keypair().address);
    let signed = session.create_transaction(&recipient, &amount, &memo).await?;

    println!();
    println!("== Signed transaction ==");
    if json {
        println!("{}", serde_json::to_string_pretty(&signed).unwrap());
    } else {
        println!("Hash:      {}", signed.hash);
        println!("Signature: {}", signed.signature);
        println!("From:      {}", signed.tx_data.from);
        println!("To:        {}", signed.tx_data.to);
        println!("Amount:    {}", signed.tx_data.amount);
        if !signed.tx_data.memo.is_empty() {
            println!("Memo:      {}", signed.tx_data.memo);
        }
        println!("Nonce:     {}", signed.tx_data.nonce);
    }

    let verdict = session.verify_current_transaction().await?;
    println!();
    println!("== Verification ==");
    println!("{}: {}", verdict_label(verdict.valid), verdict.reason);

    // Tamper with a copy to show what verification actually catches
    let mut tampered = signed.clone();
    tampered.tx_data.amount = "999999".to_string();
    let public_key = session
        .wallet()
        .map(|w| w.public_key.clone())
        .unwrap_or_default();
    let tampered_verdict = crypto::verify_signature(&tampered, &public_key).await;
    println!(
        "After changing the amount: {}: {}",
        verdict_label(tampered_verdict.valid),
        tampered_verdict.reason
    );

    if let Some(export) = session.export_wallet() {
        println!();
        println!("== Export (safe view) ==");
        println!("{}", serde_json::to_string_pretty(&export).unwrap());
    }

    Ok(())
}

fn run_keypair(json: bool) {
    let keypair = crypto::generate_keypair();
    if json {
        println!("{}", serde_json::to_string_pretty(&keypair).unwrap());
    } else {
        println!("Address:     {}", keypair.address);
        println!("Public key:  {}", keypair.public_key);
        println!("Private key: {}", keypair.private_key);
    }
}

fn verdict_label(valid: bool) -> &'static str {
    if valid {
        "VALID"
    } else {
        "INVALID"
    }
}
