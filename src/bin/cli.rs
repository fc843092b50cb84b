use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;
use std::io::Cursor;

use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use btc_wire::wire::constants::GENESIS_BLOCK_HASH_MAINNET;
use btc_wire::wire::{
    self, BlockHash, Command, GetHeadersMessage, Message, Network, PROTOCOL_VERSION, Payload,
    ProtocolVersion,
};

#[derive(Parser)]
#[command(name = "btc-wire", about = "Encode and inspect Bitcoin P2P getheaders payloads")]
struct Cli {
    /// Network whose magic is used for framed messages.
    #[arg(long, value_enum, global = true, default_value = "mainnet")]
    network: NetworkArg,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a getheaders payload and print it as hex.
    Encode {
        #[arg(long, default_value_t = PROTOCOL_VERSION)]
        pver: ProtocolVersion,

        /// Locator hash in display order, newest first. Repeatable.
        /// Defaults to the mainnet genesis block.
        #[arg(long = "locator")]
        locators: Vec<BlockHash>,

        /// Stop hash in display order. Zero requests the maximum.
        #[arg(long)]
        stop: Option<BlockHash>,

        /// Wrap the payload in a full message frame.
        #[arg(long)]
        frame: bool,
    },
    /// Decode a hex getheaders payload, or a full frame with --frame.
    Decode {
        #[arg(long, default_value_t = PROTOCOL_VERSION)]
        pver: ProtocolVersion,

        #[arg(long)]
        frame: bool,

        hex: String,
    },
    /// Print the largest payload each command may announce.
    MaxPayload {
        #[arg(long, default_value_t = PROTOCOL_VERSION)]
        pver: ProtocolVersion,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NetworkArg {
    Mainnet,
    Testnet3,
    Regtest,
    Signet,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Mainnet => Network::Mainnet,
            NetworkArg::Testnet3 => Network::Testnet3,
            NetworkArg::Regtest => Network::Regtest,
            NetworkArg::Signet => Network::Signet,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let network = Network::from(cli.network);

    match cli.command {
        Commands::Encode {
            pver,
            locators,
            stop,
            frame,
        } => encode(network, pver, locators, stop, frame)?,
        Commands::Decode { pver, frame, hex } => decode(network, pver, frame, &hex)?,
        Commands::MaxPayload { pver } => max_payload(pver),
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

fn encode(
    network: Network,
    pver: ProtocolVersion,
    locators: Vec<BlockHash>,
    stop: Option<BlockHash>,
    frame: bool,
) -> Result<(), Box<dyn Error>> {
    let mut msg = GetHeadersMessage::new(pver);
    msg.hash_stop = stop.unwrap_or(BlockHash::ZERO);

    if locators.is_empty() {
        msg.add_block_locator_hash(BlockHash::from_wire_bytes(GENESIS_BLOCK_HASH_MAINNET))?;
    }
    for hash in locators {
        msg.add_block_locator_hash(hash)?;
    }

    info!(
        pver,
        locators = msg.block_locator_hashes().len(),
        stop = %msg.hash_stop,
        "encoding getheaders"
    );

    let bytes = if frame {
        let mut out = vec![];
        wire::write_message(&mut out, network, &msg, pver)?;
        out
    } else {
        msg.to_payload(pver)?
    };

    println!("{}", hex::encode(bytes));
    Ok(())
}

fn decode(
    network: Network,
    pver: ProtocolVersion,
    frame: bool,
    input: &str,
) -> Result<(), Box<dyn Error>> {
    let bytes = hex::decode(input.trim())?;
    debug!(len = bytes.len(), frame, "decoding");

    let msg = if frame {
        let raw = wire::read_message(&mut Cursor::new(bytes), network, pver)?;
        match raw.decode(pver)? {
            Payload::GetHeaders(msg) => msg,
            other => return Err(format!("expected getheaders frame, got {other:?}").into()),
        }
    } else {
        let mut msg = GetHeadersMessage::new(pver);
        msg.decode(&mut bytes.as_slice(), pver)?;
        msg
    };

    println!("command:          {}", msg.command());
    println!("protocol_version: {}", msg.protocol_version);
    println!("locator hashes:   {}", msg.block_locator_hashes().len());
    for (i, hash) in msg.block_locator_hashes().iter().enumerate() {
        println!("  [{i}] {hash}");
    }
    println!("hash_stop:        {}", msg.hash_stop);

    Ok(())
}

fn max_payload(pver: ProtocolVersion) {
    for command in [
        Command::GetHeaders,
        Command::GetBlocks,
        Command::Headers,
        Command::Ping,
        Command::Pong,
        Command::Verack,
        Command::SendHeaders,
    ] {
        println!(
            "{:<12} {}",
            command.name(),
            command.max_payload_len(pver)
        );
    }
}
