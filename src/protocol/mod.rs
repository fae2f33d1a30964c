//! Packet protocol module.
//!
//! Defines the command packet, its opcode-keyed payloads, the verify report,
//! and the canonical JSON text used both on the wire and as auth input.
//!
//! ## Wire Format
//!
//! One compact JSON object per line, keys in fixed order:
//! ```text
//! {"id_src":1,"id_des":2,"opcode":1,"time":1700000000,"data":{"lamp":1,"color":"R"},"auth":"<32 hex>"}
//! ```

mod canonical;
mod packet;
mod payload;
mod report;

pub use canonical::{canonical_data, canonical_json, to_canonical};
pub use packet::Packet;
pub use payload::{Color, LampCommand, Mode, Payload};
pub use report::VerifyReport;
