//! Packet builder: validates opcode arguments and produces authenticated packets.

use tracing::debug;

use crate::config::PacketDefaults;
use crate::error::{PacketError, PacketResult, ValidationErrorKind};
use crate::protocol::{LampCommand, Packet, Payload};
use crate::validation::{validate_color, validate_mode, validate_opcode, validate_pairs};

/// Raw build arguments as given on the command line.
///
/// Arguments that do not apply to the chosen opcode are ignored.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    pub opcode: i64,
    /// Opcode 1.
    pub lamp: Option<i64>,
    /// Opcode 1.
    pub color: Option<String>,
    /// Opcode 2, `lamp:color` tokens.
    pub pairs: Vec<String>,
    /// Opcode 5.
    pub set: Option<String>,
    pub id_src: Option<i64>,
    pub id_des: Option<i64>,
    pub key: Option<String>,
    /// Epoch seconds; now when unset.
    pub time: Option<i64>,
}

impl BuildRequest {
    pub fn new(opcode: i64) -> Self {
        Self {
            opcode,
            ..Self::default()
        }
    }

    /// Pin the timestamp (builder pattern).
    pub fn at(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    /// Build the payload for this request's opcode.
    pub fn payload(&self) -> PacketResult<Payload> {
        let opcode = validate_opcode(self.opcode)?;

        let payload = match opcode {
            1 => {
                let lamp = self.lamp.ok_or_else(|| missing(opcode, "lamp"))?;
                let color = self.color.as_deref().ok_or_else(|| missing(opcode, "color"))?;
                Payload::SetLamp(LampCommand::new(lamp, validate_color(color)?))
            }
            2 => Payload::SetLamps(validate_pairs(&self.pairs)?),
            3 => Payload::Opcode3,
            4 => Payload::Opcode4,
            _ => {
                let set = self.set.as_deref().ok_or_else(|| missing(opcode, "set"))?;
                Payload::SetMode(validate_mode(set)?)
            }
        };

        Ok(payload)
    }
}

fn missing(opcode: u8, param: &str) -> PacketError {
    PacketError::validation(ValidationErrorKind::MissingParameter {
        opcode,
        param: param.to_string(),
    })
}

/// Builds packets, filling unset header fields from configured defaults.
#[derive(Debug, Clone, Default)]
pub struct PacketBuilder {
    defaults: PacketDefaults,
}

impl PacketBuilder {
    pub fn new(defaults: PacketDefaults) -> Self {
        Self { defaults }
    }

    /// Validate the request and produce an authenticated packet.
    pub fn build(&self, request: &BuildRequest) -> PacketResult<Packet> {
        let payload = request.payload()?;

        let id_src = request.id_src.unwrap_or(self.defaults.id_src);
        let id_des = request.id_des.unwrap_or(self.defaults.id_des);
        let key = request.key.as_deref().unwrap_or(&self.defaults.key);
        let time = request.time.unwrap_or_else(|| chrono::Utc::now().timestamp());

        let packet = Packet::authenticate(id_src, id_des, &payload, time, key)?;
        debug!(
            id_src,
            id_des,
            opcode = packet.opcode(),
            time,
            auth = %packet.auth(),
            "Built packet"
        );

        Ok(packet)
    }
}
