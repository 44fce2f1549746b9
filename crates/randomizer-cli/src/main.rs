//! CLI for randomizer — pooled hash-seed randomness from the command line.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "randomizer")]
#[command(about = "randomizer — uniform integers, floats, words, and network addresses")]
#[command(version = randomizer_core::VERSION)]
struct Cli {
    /// Repeat the draw this many times (one result per line)
    #[arg(long, global = true, default_value_t = 1)]
    count: usize,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Uniform signed integer: full 64-bit range, or [min, max) when bounds are given
    Int {
        /// Lower bound (inclusive after normalization)
        #[arg(long, requires = "max")]
        min: Option<i64>,

        /// Upper bound (exclusive after normalization)
        #[arg(long, requires = "min")]
        max: Option<i64>,
    },

    /// Uniform unsigned integer: full 64-bit range, or [min, max) when bounds are given
    Uint {
        /// Lower bound (inclusive after normalization)
        #[arg(long, requires = "max")]
        min: Option<u64>,

        /// Upper bound (exclusive after normalization)
        #[arg(long, requires = "min")]
        max: Option<u64>,
    },

    /// Uniform float in [0, 1)
    Float {
        /// Output width
        #[arg(long, default_value = "64", value_parser = ["32", "64"])]
        bits: String,
    },

    /// Fixed-alphabet word with no two adjacent symbols equal
    Word {
        /// Symbol table
        #[arg(long, default_value = "hex", value_parser = ["decimal", "hex", "octal"])]
        alphabet: String,

        /// Number of symbols
        #[arg(long, default_value_t = 16)]
        length: usize,

        /// Uppercase symbol table (hex only)
        #[arg(long)]
        upper: bool,
    },

    /// Random IPv4 address (no masking)
    Ipv4,

    /// Random IPv6 address; optionally shaped as unicast or multicast
    Ipv6 {
        /// Force a unicast prefix
        #[arg(long, conflicts_with = "multicast", value_parser = ["global", "link-local", "site-local", "unique-local"])]
        unicast: Option<String>,

        /// Force a multicast prefix with this scope
        #[arg(long, value_parser = ["interface-local", "link-local", "admin-local", "site-local", "org-local", "global"])]
        multicast: Option<String>,
    },

    /// Random MAC address with explicit U/L and I/G bits
    Mac {
        /// Set the locally-administered (U/L) bit
        #[arg(long)]
        local: bool,

        /// Set the multicast (I/G) bit
        #[arg(long)]
        multicast: bool,
    },

    /// Raw random bytes, hex-encoded
    Bytes {
        /// Number of bytes
        #[arg(default_value_t = 32)]
        n: usize,
    },

    /// Run the statistical battery over freshly generated output
    Check {
        /// Bytes to generate per stream under test
        #[arg(long, default_value_t = 65536)]
        samples: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Int { min, max } => commands::numbers::run_int(min, max, cli.count, cli.json),
        Commands::Uint { min, max } => commands::numbers::run_uint(min, max, cli.count, cli.json),
        Commands::Float { bits } => commands::numbers::run_float(&bits, cli.count, cli.json),
        Commands::Word {
            alphabet,
            length,
            upper,
        } => commands::words::run(&alphabet, length, upper, cli.count, cli.json),
        Commands::Ipv4 => commands::net::run_ipv4(cli.count, cli.json),
        Commands::Ipv6 { unicast, multicast } => {
            commands::net::run_ipv6(unicast.as_deref(), multicast.as_deref(), cli.count, cli.json)
        }
        Commands::Mac { local, multicast } => {
            commands::net::run_mac(local, multicast, cli.count, cli.json)
        }
        Commands::Bytes { n } => commands::net::run_bytes(n, cli.count, cli.json),
        Commands::Check { samples } => commands::check::run(samples),
    }
}
