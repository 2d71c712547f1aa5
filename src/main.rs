//! Native hash bridge demo CLI
//!
//! Plays the application layer: every command reaches the native operation
//! through the bridge registry, never by calling the provider directly.
//!
//! # Commands
//!
//! - `hash` - Invoke a named operation on an input string
//! - `ops` - List registered native operations
//! - `benchmark` - Run performance benchmark through the bridge

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::time::Instant;

use hashbridge::{BridgeRegistry, SHA256_OP};

#[derive(Parser)]
#[command(name = "hashbridge")]
#[command(version = "0.1.0")]
#[command(about = "Native SHA-256 module bridge demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke a named native operation on an input string
    Hash {
        /// Input text (omit to hash the empty string)
        input: Option<String>,

        /// Operation name to invoke
        #[arg(long, default_value = SHA256_OP)]
        op: String,
    },

    /// List registered native operations
    Ops,

    /// Run performance benchmark through the bridge
    Benchmark {
        /// Number of invocations
        #[arg(short, long, default_value = "1000")]
        count: u32,
    },
}

#[derive(Serialize)]
struct HashOutput<'a> {
    op: &'a str,
    input: &'a str,
    digest: &'a str,
    elapsed_ms: f64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let registry = BridgeRegistry::with_defaults();

    let result = match cli.command {
        Commands::Hash { input, op } => cmd_hash(&registry, &op, input, cli.json).await,
        Commands::Ops => cmd_ops(&registry, cli.json),
        Commands::Benchmark { count } => cmd_benchmark(&registry, count).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_hash(
    registry: &BridgeRegistry,
    op: &str,
    input: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    // Resolve the capability once; absence is an ordinary typed branch.
    let Some(capability) = registry.capability(op) else {
        anyhow::bail!(
            "native operation '{}' is not available. See 'hashbridge ops' for the registered ones.",
            op
        );
    };

    let start = Instant::now();
    let digest = capability.invoke(input.clone()).await?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if json {
        let output = HashOutput {
            op,
            input: input.as_deref().unwrap_or(""),
            digest: &digest,
            elapsed_ms,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", digest);
    }

    Ok(())
}

fn cmd_ops(registry: &BridgeRegistry, json: bool) -> anyhow::Result<()> {
    let names = registry.names();

    if json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}

async fn cmd_benchmark(registry: &BridgeRegistry, count: u32) -> anyhow::Result<()> {
    println!("Running benchmark with {} invocations...", count);

    let start = Instant::now();

    for i in 0..count {
        let input = format!("benchmark_input_{}", i);
        let _ = registry.invoke(SHA256_OP, Some(input)).await?;
    }

    let elapsed = start.elapsed();
    let rate = count as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Total invocations: {}", count);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Rate: {:.2} invocations/s", rate);

    Ok(())
}
