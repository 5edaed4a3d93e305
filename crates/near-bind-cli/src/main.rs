mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "near-bind", about = "Call contract methods: view, change, or build unsigned actions", version)]
struct Cli {
    /// Network: mainnet, testnet, or an http(s) RPC URL
    #[arg(long, global = true)]
    network: Option<String>,

    /// Account id that signs change calls
    #[arg(long, global = true, env = "NEAR_BIND_SIGNER_ID")]
    signer_id: Option<String>,

    /// Secret key for change calls (ed25519:<base58>)
    #[arg(long, global = true, env = "NEAR_BIND_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read-only query; prints the decoded JSON result
    View {
        contract_id: String,
        method: String,
        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
    /// Signed change call; prints the decoded result, or the full outcome with --raw
    Call {
        contract_id: String,
        method: String,
        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,

        /// Gas budget in Tgas (default 30)
        #[arg(long)]
        gas: Option<u64>,

        /// Attached deposit in yoctoNEAR (default 0)
        #[arg(long)]
        deposit: Option<u128>,

        /// Print the full execution outcome instead of the extracted result
        #[arg(long)]
        raw: bool,
    },
    /// Build the unsigned action for a change call; no network I/O
    Tx {
        contract_id: String,
        method: String,
        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,

        /// Gas budget in Tgas (default 30)
        #[arg(long)]
        gas: Option<u64>,

        /// Attached deposit in yoctoNEAR (default 0)
        #[arg(long)]
        deposit: Option<u128>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let network = config::resolve_network(cli.network)?;

    match cli.command {
        Commands::View {
            contract_id,
            method,
            args,
        } => {
            commands::view(network, &contract_id, method, &args).await?;
        }
        Commands::Call {
            contract_id,
            method,
            args,
            gas,
            deposit,
            raw,
        } => {
            commands::call(
                network,
                cli.signer_id,
                cli.secret_key,
                &contract_id,
                method,
                &args,
                gas,
                deposit,
                raw,
            )
            .await?;
        }
        Commands::Tx {
            contract_id,
            method,
            args,
            gas,
            deposit,
        } => {
            commands::tx(network, &contract_id, method, &args, gas, deposit)?;
        }
    }
    Ok(())
}
