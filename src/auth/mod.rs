//! Authentication module.
//!
//! Derives the MD5 shared-secret auth code and verifies device responses.
//!
//! The code is `md5(id_src ‖ id_des ‖ opcode ‖ data ‖ time ‖ key)` over the
//! decimal/canonical text of each field with no separators. It is not an
//! HMAC; the firmware on the other end computes exactly this.

mod digest;
mod verify;

pub use digest::{derive_auth, AuthFields};
pub use verify::verify_response;
