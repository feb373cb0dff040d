use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use mhcodec::{Algorithm, Multihash};

/// Build, inspect and list multihashes
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log decoding details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prefix a hex digest with its algorithm header and print the multihash as hex
    Wrap {
        /// Algorithm name, e.g. sha2-256
        algorithm: Algorithm,
        digest: String,
    },
    /// Decode a hex multihash and print its fields
    Inspect { multihash: String },
    /// List the supported algorithms
    Algorithms,
}

fn wrap(algorithm: Algorithm, digest_hex: &str) -> Result<String, Box<dyn std::error::Error>> {
    let digest = hex::decode(digest_hex)?;
    let mh = Multihash::wrap(algorithm, digest)?;
    Ok(mh.to_hex())
}

fn inspect(multihash_hex: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mh = Multihash::from_hex(multihash_hex)?;
    Ok(format!(
        "algorithm: {}\ncode: 0x{:02x}\nsize: {}\ndigest: {}",
        mh.algorithm(),
        mh.code(),
        mh.size(),
        hex::encode(mh.digest())
    ))
}

fn algorithms() -> String {
    Algorithm::ALL
        .iter()
        .map(|a| format!("{:<10} 0x{:02x} {:>3}", a.name(), a.code(), a.digest_len()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();
    debug!("{:?}", args);

    let output = match args.command {
        Command::Wrap { algorithm, digest } => wrap(algorithm, &digest)?,
        Command::Inspect { multihash } => inspect(&multihash)?,
        Command::Algorithms => algorithms(),
    };
    println!("{}", output);

    Ok(())
}
