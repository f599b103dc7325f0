//! FHE client CLI
//!
//! Usage:
//!   fhe-client insert-zero
//!   fhe-client encrypt --value 100 --key <hex32>
//!   fhe-client transfer --sender <hex32> --recipient <hex32> --amount <hex32>
//!   fhe-client --server-url http://fhe.internal:3000 decrypt --key <hex32>
//!   fhe-client --config fhe.json withdraw --key <hex32> --amount <hex32>

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fhe_client::FheClient;
use fhe_core::{Ciphertext, ClientConfig};

#[derive(Parser, Debug)]
#[command(name = "fhe-client")]
#[command(about = "Send encrypt/transfer/add requests to an FHE ledger server")]
struct Args {
    /// Server base URL (defaults to $FHE_SERVER_URL, then http://localhost:3000)
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// JSON config file with a `base_url` field (ignored if --server-url is set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed the encrypted zero under the all-zero key
    InsertZero,
    /// Encrypt a plaintext value under a key
    Encrypt {
        #[arg(long)]
        value: u128,
        /// 32-byte hex key
        #[arg(long)]
        key: String,
    },
    /// Transfer an encrypted amount between two balances
    Transfer {
        #[arg(long)]
        sender: String,
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        amount: String,
    },
    /// Add two 8-bit ciphertexts into a result key
    Fhe8add {
        #[arg(long)]
        lhs: String,
        #[arg(long)]
        rhs: String,
        #[arg(long)]
        result: String,
    },
    /// Decrypt the value stored under a key
    Decrypt {
        #[arg(long)]
        key: String,
    },
    /// Withdraw an encrypted amount from a balance
    Withdraw {
        #[arg(long)]
        key: String,
        #[arg(long)]
        amount: String,
    },
}

fn key(s: &str) -> Result<Ciphertext> {
    Ok(Ciphertext::from_hex(s)?)
}

/// `--server-url`, then `--config`, then `$FHE_SERVER_URL`, then the default
fn resolve_config(args: &Args) -> Result<ClientConfig> {
    if let Some(url) = &args.server_url {
        return Ok(ClientConfig::new(url.as_str()));
    }
    match &args.config {
        Some(path) => Ok(ClientConfig::load(path)?),
        None => Ok(ClientConfig::from_env()),
    }
}

async fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(base_url = %config.base_url, "Using FHE server");
    let client = FheClient::new(config);

    match args.command {
        Command::InsertZero => client.insert_zero().await,
        Command::Encrypt { value, key: k } => client.encrypt(value, key(&k)?).await,
        Command::Transfer {
            sender,
            recipient,
            amount,
        } => {
            client
                .transfer(key(&sender)?, key(&recipient)?, key(&amount)?)
                .await?
        }
        Command::Fhe8add { lhs, rhs, result } => {
            client.fhe8add(key(&lhs)?, key(&rhs)?, key(&result)?).await?
        }
        Command::Decrypt { key: k } => {
            let value = client.decrypt(key(&k)?).await?;
            println!("{}", value);
        }
        Command::Withdraw { key: k, amount } => {
            let balance = client.withdraw(key(&k)?, key(&amount)?).await?;
            println!("{}", balance);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "fhe_client=info".into()),
        )
        .init();

    run(Args::parse()).await
}
