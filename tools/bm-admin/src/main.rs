//! BM-Admin: Block Matrix Admin CLI
//!
//! Operates on a block matrix persisted in a single file.

mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use block_matrix::{Block, BlockMatrix, BlockMatrixApi, BlockNumber, FileBackedKVStore};

/// BM-Admin: Block Matrix Admin CLI
#[derive(Parser, Debug)]
#[command(name = "bm-admin")]
#[command(about = "Insert, inspect, redact and audit a file-backed block matrix")]
struct Args {
    /// Path of the store file
    #[arg(short, long, env = "BM_STORE", default_value = "block-matrix.db")]
    store: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Store a payload under a key
    Insert {
        key: String,
        /// Payload; UTF-8 text unless --hex is given
        data: String,
        /// Treat the payload as hex
        #[arg(long)]
        hex: bool,
    },
    /// Print the block stored under a key
    Get {
        key: String,
        #[arg(long)]
        hex: bool,
    },
    /// Print the block at a block number
    GetNumber {
        number: BlockNumber,
        #[arg(long)]
        hex: bool,
    },
    /// Replace the payload under a key with the empty sentinel
    Redact { key: String },
    /// Full integrity scan; exits non-zero on the first violation
    Verify,
    /// Full integrity scan listing every violation
    Audit,
    /// Print the grid and its digests
    Print,
    /// Print the metadata record
    Info {
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn print_block(block: &Block, as_hex: bool) {
    if block.is_empty_sentinel() {
        println!("data: <empty>");
    } else if as_hex {
        println!("data: {}", hex::encode(&block.data));
    } else {
        println!("data: {}", String::from_utf8_lossy(&block.data));
    }
    println!("hash: {}", hex::encode(block.hash));
}

fn run(args: Args) -> Result<ExitCode> {
    let store = FileBackedKVStore::open(&args.store)
        .with_context(|| format!("opening store {}", args.store.display()))?;
    let matrix = BlockMatrix::open(store)?;
    tracing::debug!(store = %args.store.display(), command = ?args.command, "running command");

    match args.command {
        Command::Insert {
            key,
            data,
            hex: as_hex,
        } => {
            let payload = if as_hex {
                hex::decode(&data).context("payload is not valid hex")?
            } else {
                data.into_bytes()
            };
            let number = matrix.insert(&key, &payload)?;
            println!("{key} -> block {number}");
        }
        Command::Get { key, hex: as_hex } => {
            let number = matrix.block_number(&key)?;
            println!("block: {number}");
            print_block(&matrix.get(&key)?, as_hex);
        }
        Command::GetNumber {
            number,
            hex: as_hex,
        } => {
            print_block(&matrix.get_by_number(number)?, as_hex);
        }
        Command::Redact { key } => {
            let receipt = matrix.redact(&key)?;
            println!(
                "redacted block {} at ({}, {})",
                receipt.block_number, receipt.position.row, receipt.position.column
            );
            println!("previous hash: {}", hex::encode(receipt.previous_hash));
        }
        Command::Verify => match matrix.verify() {
            Ok(()) => println!("ok"),
            Err(e) => {
                println!("FAILED: {e}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Audit => {
            let report = matrix.audit()?;
            println!(
                "checked {} blocks, {} rows, {} columns",
                report.blocks_checked, report.rows_checked, report.columns_checked
            );
            for violation in &report.violations {
                println!("  {violation}");
            }
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Print => {
            let snapshot = matrix.snapshot()?;
            let info = matrix.info()?;
            print!("{}", render::render_table(&snapshot, &info));
        }
        Command::Info { json } => {
            let info = matrix.info()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("size: {}", info.dimension);
                println!("block count: {}", info.block_count);
                println!("capacity: {}", info.capacity());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;
    run(args)
}
