//! enskit CLI
//!
//! Command-line front end for the enskit ENS toolkit: resolve names,
//! manage text records, and run the commit/register flow.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::Address;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use enskit::{
    constants, Ens, LocalWallet, Network, RegistrationRequest, TextRecord, TransactionReceipt,
};

/// enskit - Ethereum Name Service toolkit
#[derive(Parser)]
#[command(name = "enskit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Network to operate on (mainnet or sepolia)
    #[arg(short, long, global = true, default_value = "mainnet")]
    network: String,

    /// Ethereum JSON-RPC URL
    #[arg(long, global = true, env = "ETH_RPC_URL")]
    rpc_url: Option<String>,

    /// Private key for write operations (hex)
    #[arg(long, global = true, env = "ETH_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a name to its address record
    Resolve {
        /// ENS name, e.g. alice.eth
        name: String,
    },

    /// Look up the primary name of an address
    Name {
        /// Ethereum address
        address: String,
    },

    /// Compute the reverse node of an address
    Node {
        /// Ethereum address
        address: String,
    },

    /// Read text records
    TextGet {
        /// ENS name
        name: String,
        /// Record keys to read
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Write and/or remove text records in one transaction
    TextSet {
        /// ENS name
        name: String,
        /// Records to set, as key=value pairs
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Record keys to remove
        #[arg(short, long = "remove", value_name = "KEY")]
        remove: Vec<String>,
    },

    /// Set the address record for a name
    SetAddr {
        /// ENS name
        name: String,
        /// Address to point the name at
        address: String,
    },

    /// Quote the registration price for a label
    RentPrice {
        /// Label without the .eth suffix
        label: String,
        /// Registration duration in seconds
        #[arg(short, long, default_value = "31536000")]
        duration: u64,
    },

    /// Publish a registration commitment
    Commit(RegistrationArgs),

    /// Register a committed name (after the commitment has matured)
    Register(RegistrationArgs),

    /// Set the primary name for the signing account
    SetName {
        /// ENS name
        name: String,
    },
}

#[derive(Args)]
struct RegistrationArgs {
    /// Label without the .eth suffix
    label: String,
    /// Address that will own the name
    owner: String,
    /// Registration duration in seconds
    #[arg(short, long, default_value = "31536000")]
    duration: u64,
    /// Commitment secret (must match between commit and register)
    #[arg(short, long)]
    secret: String,
    /// Resolver address (defaults to the network's public resolver)
    #[arg(long)]
    resolver: Option<String>,
    /// Also set the owner's primary name
    #[arg(long)]
    primary: bool,
    /// Fuse bitmask for the wrapped name
    #[arg(long, default_value = "0")]
    fuses: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "enskit=debug,info"
    } else {
        "enskit=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let network: Network = cli.network.parse()?;
    let ens = build_ens(&cli, network)?;

    match cli.command {
        Commands::Resolve { name } => cmd_resolve(&ens, &name).await,
        Commands::Name { address } => cmd_name(&ens, &address).await,
        Commands::Node { address } => cmd_node(&ens, &address).await,
        Commands::TextGet { name, keys } => cmd_text_get(&ens, &name, keys).await,
        Commands::TextSet { name, set, remove } => cmd_text_set(&ens, &name, set, remove).await,
        Commands::SetAddr { name, address } => cmd_set_addr(&ens, &name, &address).await,
        Commands::RentPrice { label, duration } => cmd_rent_price(&ens, &label, duration).await,
        Commands::Commit(args) => cmd_commit(&ens, network, args).await,
        Commands::Register(args) => cmd_register(&ens, network, args).await,
        Commands::SetName { name } => cmd_set_name(&ens, &name).await,
    }
}

fn build_ens(cli: &Cli, network: Network) -> Result<Ens> {
    let rpc_url = cli
        .rpc_url
        .clone()
        .context("an RPC URL is required (--rpc-url or ETH_RPC_URL)")?;

    let mut builder = Ens::builder().network(network).rpc_url(rpc_url);
    if let Some(key) = &cli.private_key {
        builder = builder.wallet(Arc::new(LocalWallet::from_hex(key)?));
    }

    Ok(builder.build()?)
}

fn parse_address(s: &str) -> Result<Address> {
    s.parse::<Address>()
        .with_context(|| format!("invalid address: {s}"))
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn print_receipt(receipt: &TransactionReceipt) {
    let status = if receipt.is_success() {
        "confirmed".green().bold()
    } else {
        "failed".red().bold()
    };
    println!("{} {}", status, format!("{:?}", receipt.transaction_hash).dimmed());
    if let Some(block) = receipt.block_number {
        println!("  block:    {block}");
    }
    println!("  gas used: {}", receipt.gas_used);
}

async fn cmd_resolve(ens: &Ens, name: &str) -> Result<()> {
    let address = ens.get_address(name).await?;
    println!("{} {address}", format!("{name} ->").cyan());
    Ok(())
}

async fn cmd_name(ens: &Ens, address: &str) -> Result<()> {
    let address = parse_address(address)?;
    let node = ens.node(address).await?;
    let name = ens.get_name(node).await?;

    if name.is_empty() {
        println!("{}", "no primary name set".yellow());
    } else {
        println!("{} {name}", format!("{address} ->").cyan());
    }
    Ok(())
}

async fn cmd_node(ens: &Ens, address: &str) -> Result<()> {
    let node = ens.node(parse_address(address)?).await?;
    println!("{node:?}");
    Ok(())
}

async fn cmd_text_get(ens: &Ens, name: &str, keys: Vec<String>) -> Result<()> {
    let records = ens.get_text_records(name, &keys).await?;

    if records.is_empty() {
        println!("{}", "no records set".yellow());
        return Ok(());
    }
    for record in records {
        println!("{} {}", format!("{}:", record.key).cyan(), record.value);
    }
    Ok(())
}

async fn cmd_text_set(
    ens: &Ens,
    name: &str,
    set: Vec<String>,
    remove: Vec<String>,
) -> Result<()> {
    if set.is_empty() && remove.is_empty() {
        bail!("nothing to do: pass --set and/or --remove");
    }

    let updates = set
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| TextRecord::new(key, value))
                .with_context(|| format!("expected KEY=VALUE, got '{pair}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    let bar = spinner("updating text records...");
    let receipt = ens.set_text_records(name, &updates, &remove).await?;
    bar.finish_and_clear();

    print_receipt(&receipt);
    Ok(())
}

async fn cmd_set_addr(ens: &Ens, name: &str, address: &str) -> Result<()> {
    let address = parse_address(address)?;

    let bar = spinner("setting address record...");
    let receipt = ens.set_address(name, address).await?;
    bar.finish_and_clear();

    print_receipt(&receipt);
    Ok(())
}

async fn cmd_rent_price(ens: &Ens, label: &str, duration: u64) -> Result<()> {
    let price = ens.rent_price(label, duration).await?;

    println!("{}", format!("{label}.eth for {duration}s").cyan().bold());
    println!("  base:    {} wei", price.base);
    println!("  premium: {} wei", price.premium);
    println!("  total:   {} wei", price.total());
    Ok(())
}

fn registration_request(
    network: Network,
    args: &RegistrationArgs,
) -> Result<RegistrationRequest> {
    let resolver = match &args.resolver {
        Some(resolver) => parse_address(resolver)?,
        None => constants::resolver_address(network),
    };

    Ok(RegistrationRequest {
        label: args.label.clone(),
        owner: parse_address(&args.owner)?,
        duration: args.duration,
        secret: args.secret.clone(),
        resolver,
        set_as_primary: args.primary,
        fuses: args.fuses,
    })
}

async fn cmd_commit(ens: &Ens, network: Network, args: RegistrationArgs) -> Result<()> {
    let request = registration_request(network, &args)?;

    let bar = spinner("publishing commitment...");
    let receipt = ens.commit(&request).await?;
    bar.finish_and_clear();

    print_receipt(&receipt);
    println!(
        "{}",
        "keep the secret: register needs the exact same request"
            .yellow()
    );
    Ok(())
}

async fn cmd_register(ens: &Ens, network: Network, args: RegistrationArgs) -> Result<()> {
    let request = registration_request(network, &args)?;
    let total = ens.estimate_price(&request.normalized_label(), request.duration).await?;

    println!("registering {} for {} wei", request.full_name().cyan(), total);

    let bar = spinner("registering...");
    let receipt = ens.register(&request).await?;
    bar.finish_and_clear();

    print_receipt(&receipt);
    Ok(())
}

async fn cmd_set_name(ens: &Ens, name: &str) -> Result<()> {
    let bar = spinner("setting primary name...");
    let receipt = ens.set_name(name).await?;
    bar.finish_and_clear();

    print_receipt(&receipt);
    Ok(())
}
