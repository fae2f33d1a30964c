//! Auth code derivation.

use md5::{Digest, Md5};
use serde_json::Value;
use tracing::trace;

use crate::protocol::canonical_data;

/// The packet fields covered by the auth code.
#[derive(Debug, Clone, Copy)]
pub struct AuthFields<'a> {
    pub id_src: i64,
    pub id_des: i64,
    pub opcode: i64,
    /// Packet data; `None` hashes as the literal `null`.
    pub data: Option<&'a Value>,
    pub time: i64,
}

impl AuthFields<'_> {
    /// Get the message to hash.
    ///
    /// Format: `{id_src}{id_des}{opcode}{data_json}{time}{key}`
    pub fn signing_message(&self, key: &str) -> String {
        format!(
            "{}{}{}{}{}{}",
            self.id_src,
            self.id_des,
            self.opcode,
            canonical_data(self.data),
            self.time,
            key
        )
    }

    /// Compute the 32-char lowercase hex auth code.
    pub fn derive(&self, key: &str) -> String {
        let message = self.signing_message(key);
        trace!(len = message.len(), "Hashing auth input");
        hex::encode(Md5::digest(message.as_bytes()))
    }
}

/// Compute the auth code for a set of packet fields.
pub fn derive_auth(
    id_src: i64,
    id_des: i64,
    opcode: i64,
    data: Option<&Value>,
    time: i64,
    key: &str,
) -> String {
    AuthFields {
        id_src,
        id_des,
        opcode,
        data,
        time,
    }
    .derive(key)
}
