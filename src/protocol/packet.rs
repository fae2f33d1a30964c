//! The authenticated command packet.

use serde::Serialize;
use serde_json::Value;

use crate::auth::AuthFields;
use crate::error::PacketResult;

use super::{to_canonical, Payload};

/// A fully authenticated packet.
///
/// Field order here is the wire order, with `auth` last. A packet is only
/// ever produced by [`Packet::authenticate`], so `auth` always matches the
/// other fields for the key it was built with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Packet {
    id_src: i64,
    id_des: i64,
    opcode: u8,
    time: i64,
    data: Value,
    auth: String,
}

impl Packet {
    /// Build a packet and compute its auth code.
    pub fn authenticate(
        id_src: i64,
        id_des: i64,
        payload: &Payload,
        time: i64,
        key: &str,
    ) -> PacketResult<Self> {
        let opcode = payload.opcode();
        let data = serde_json::to_value(payload)?;
        let auth = AuthFields {
            id_src,
            id_des,
            opcode: i64::from(opcode),
            data: Some(&data),
            time,
        }
        .derive(key);

        Ok(Self {
            id_src,
            id_des,
            opcode,
            time,
            data,
            auth,
        })
    }

    pub fn id_src(&self) -> i64 {
        self.id_src
    }

    pub fn id_des(&self) -> i64 {
        self.id_des
    }

    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn auth(&self) -> &str {
        &self.auth
    }

    /// Compact text sent to the device.
    pub fn to_wire(&self) -> PacketResult<String> {
        to_canonical(self)
    }
}
