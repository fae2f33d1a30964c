//! Integration tests for the packet tool.
//!
//! These tests drive the public library API end to end: build a packet,
//! put it on an in-memory transport, fabricate the device's signed reply,
//! and verify it.

use std::collections::VecDeque;
use std::time::Duration;

use serde_json::{json, Value};

use esp32_pkt::auth::{derive_auth, verify_response};
use esp32_pkt::builder::{BuildRequest, PacketBuilder};
use esp32_pkt::config::PacketDefaults;
use esp32_pkt::error::{PacketError, PacketResult, ValidationErrorKind};
use esp32_pkt::protocol::Packet;
use esp32_pkt::transport::{send_packet, Newline, Transport};

const KEY: &str = "my_secret_key";

/// Fake device: records what was written and answers with a signed reply.
struct FakeDevice {
    written: Vec<u8>,
    reply: VecDeque<Vec<u8>>,
    reply_time: i64,
}

impl FakeDevice {
    fn new(reply_time: i64) -> Self {
        Self {
            written: Vec::new(),
            reply: VecDeque::new(),
            reply_time,
        }
    }

    /// Sign a reply the way the firmware does: request fields, own time.
    fn sign_reply(&self, request: &Value, status: &str) -> String {
        let auth = derive_auth(
            request["id_src"].as_i64().unwrap(),
            request["id_des"].as_i64().unwrap(),
            request["opcode"].as_i64().unwrap(),
            Some(&request["data"]),
            self.reply_time,
            KEY,
        );
        json!({"time": self.reply_time, "status": status, "auth": auth}).to_string()
    }
}

impl Transport for FakeDevice {
    fn clear(&mut self) -> PacketResult<()> {
        self.written.clear();
        Ok(())
    }

    fn write_all(&mut self, bytes: &[u8]) -> PacketResult<()> {
        self.written.extend_from_slice(bytes);
        let line = std::str::from_utf8(bytes).unwrap().trim_end();
        let request: Value = serde_json::from_str(line).unwrap();
        let reply = self.sign_reply(&request, "ok");
        self.reply.push_back(reply.into_bytes());
        Ok(())
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> PacketResult<usize> {
        match self.reply.pop_front() {
            Some(bytes) => {
                buf[..bytes.len()].copy_from_slice(&bytes);
                Ok(bytes.len())
            }
            None => {
                std::thread::sleep(Duration::from_millis(2));
                Ok(0)
            }
        }
    }
}

fn build(request: BuildRequest) -> Packet {
    PacketBuilder::new(PacketDefaults::default())
        .build(&request)
        .expect("packet should build")
}

#[test]
fn test_fixed_regression_vector() {
    let packet = build(BuildRequest::new(3).at(1_700_000_000));
    assert_eq!(
        packet.to_wire().unwrap(),
        r#"{"id_src":1,"id_des":2,"opcode":3,"time":1700000000,"data":{},"auth":"82d757cc339e8522049ba681935232e9"}"#
    );
}

#[test]
fn test_send_and_verify_every_opcode() {
    let requests = vec![
        BuildRequest {
            lamp: Some(4),
            color: Some("G".to_string()),
            ..BuildRequest::new(1)
        },
        BuildRequest {
            pairs: vec!["3:G".to_string(), "1:R".to_string(), "2:Y".to_string()],
            ..BuildRequest::new(2)
        },
        BuildRequest::new(3),
        BuildRequest::new(4),
        BuildRequest {
            set: Some("manual".to_string()),
            ..BuildRequest::new(5)
        },
    ];

    for request in requests {
        let packet = build(request.at(1_700_000_000));
        let wire = packet.to_wire().unwrap();

        let mut device = FakeDevice::new(1_700_000_007);
        let outcome =
            send_packet(&mut device, &wire, Newline::CrLf, Duration::from_millis(20)).unwrap();

        assert_eq!(device.written, format!("{}\r\n", wire).into_bytes());
        let response = outcome.response_text().expect("device should reply");

        let report = verify_response(&wire, &response, KEY).unwrap();
        assert!(report.md5_match, "opcode {} should verify", packet.opcode());
        assert_eq!(report.response_status, Some(json!("ok")));

        let report = verify_response(&wire, &response, "not_the_key").unwrap();
        assert!(!report.md5_match);
    }
}

#[test]
fn test_verify_detects_tampered_request() {
    let packet = build(BuildRequest {
        lamp: Some(1),
        color: Some("R".to_string()),
        ..BuildRequest::new(1).at(1_700_000_000)
    });
    let wire = packet.to_wire().unwrap();
    let device = FakeDevice::new(1_700_000_001);
    let response = device.sign_reply(&serde_json::from_str(&wire).unwrap(), "ok");

    assert!(verify_response(&wire, &response, KEY).unwrap().md5_match);

    let tampered = [
        wire.replace(r#""id_src":1"#, r#""id_src":9"#),
        wire.replace(r#""id_des":2"#, r#""id_des":9"#),
        wire.replace(r#""opcode":1"#, r#""opcode":2"#),
        wire.replace(r#""color":"R""#, r#""color":"Y""#),
    ];
    for request in tampered {
        assert!(!verify_response(&request, &response, KEY).unwrap().md5_match);
    }

    let late = response.replace("1700000001", "1700000002");
    assert!(!verify_response(&wire, &late, KEY).unwrap().md5_match);
}

#[test]
fn test_commands_keep_input_order() {
    let packet = build(BuildRequest {
        pairs: vec!["2:y".to_string(), "1:r".to_string()],
        ..BuildRequest::new(2).at(5)
    });
    assert_eq!(
        packet.data().to_string(),
        r#"{"commands":[{"lamp":2,"color":"Y"},{"lamp":1,"color":"R"}]}"#
    );
}

#[test]
fn test_validation_failures() {
    let builder = PacketBuilder::default();
    let cases = vec![
        BuildRequest {
            color: Some("R".to_string()),
            ..BuildRequest::new(1)
        },
        BuildRequest {
            pairs: vec!["abc".to_string()],
            ..BuildRequest::new(2)
        },
        BuildRequest {
            set: Some("foo".to_string()),
            ..BuildRequest::new(5)
        },
        BuildRequest::new(6),
    ];

    for case in cases {
        let result = builder.build(&case);
        assert!(
            matches!(result, Err(PacketError::Validation { .. })),
            "{:?} should fail validation",
            case
        );
    }

    assert!(matches!(
        builder.build(&BuildRequest::new(0)),
        Err(PacketError::Validation {
            kind: ValidationErrorKind::InvalidOpcode { opcode: 0 }
        })
    ));
}
