//! Clap CLI definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use esp32_pkt::builder::BuildRequest;
use esp32_pkt::transport::Newline;

pub const AFTER_HELP: &str = "\
Examples:
  esp32-pkt build --opcode 1 --lamp 2 --color R
  esp32-pkt build --opcode 2 --pairs 1:R 2:Y 3:G --port /dev/ttyUSB0 --read-seconds 2
  esp32-pkt build --opcode 5 --set auto --port COM3 --newline CRLF
  esp32-pkt verify --request-json '{...}' --response-json '{...}'";

/// ESP32 JSON packet builder, serial sender, and response MD5 verifier.
#[derive(Parser, Debug)]
#[command(name = "esp32-pkt", version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Path to a TOML config file with defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a request packet (and optionally send it over serial).
    #[command(allow_negative_numbers = true)]
    Build(BuildArgs),
    /// Verify a response's MD5 using the original request JSON.
    Verify(VerifyArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// 1..5
    #[arg(long)]
    pub opcode: i64,

    /// Lamp number (opcode 1).
    #[arg(long)]
    pub lamp: Option<i64>,

    /// R|Y|G (opcode 1).
    #[arg(long)]
    pub color: Option<String>,

    /// lamp:color tokens, e.g. 1:R 2:Y 3:G (opcode 2).
    #[arg(long, num_args = 0..)]
    pub pairs: Vec<String>,

    /// auto|manual (opcode 5).
    #[arg(long)]
    pub set: Option<String>,

    #[arg(long)]
    pub id_src: Option<i64>,

    #[arg(long)]
    pub id_des: Option<i64>,

    /// Shared secret.
    #[arg(long)]
    pub key: Option<String>,

    /// Epoch seconds; default now.
    #[arg(long)]
    pub time: Option<i64>,

    /// Serial port, e.g. COM3 or /dev/ttyUSB0. Without it the packet is printed.
    #[arg(long)]
    pub port: Option<String>,

    /// Baud rate [default: 115200]
    #[arg(long)]
    pub baud: Option<u32>,

    /// LF | CRLF | CR [default: LF]
    #[arg(long)]
    pub newline: Option<Newline>,

    /// Wait this many seconds for a response after sending (0 = don't read).
    #[arg(long)]
    pub read_seconds: Option<f64>,
}

impl BuildArgs {
    pub fn to_request(&self) -> BuildRequest {
        BuildRequest {
            opcode: self.opcode,
            lamp: self.lamp,
            color: self.color.clone(),
            pairs: self.pairs.clone(),
            set: self.set.clone(),
            id_src: self.id_src,
            id_des: self.id_des,
            key: self.key.clone(),
            time: self.time,
        }
    }
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Compact request JSON that was sent.
    #[arg(long)]
    pub request_json: String,

    /// Response JSON received from the device.
    #[arg(long)]
    pub response_json: String,

    /// Shared secret.
    #[arg(long)]
    pub key: Option<String>,
}
