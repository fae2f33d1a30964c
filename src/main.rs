//! esp32-pkt - build, send, and verify authenticated ESP32 command packets.

mod cli;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use esp32_pkt::auth::verify_response;
use esp32_pkt::builder::PacketBuilder;
use esp32_pkt::config::Settings;
use esp32_pkt::error::{PacketError, PacketResult, ValidationErrorKind};
use esp32_pkt::transport::{send_packet, SendOutcome, SerialTransport, Transport};

use cli::{BuildArgs, Cli, Command, VerifyArgs};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => match Settings::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("[ERROR] {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    init_logging(&settings);
    if let Some(path) = &cli.config {
        debug!("Configuration loaded from: {}", path.display());
    }

    let result = match &cli.command {
        Command::Build(args) => run_build(args, &settings),
        Command::Verify(args) => run_verify(args, &settings),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Build a packet, then print it or send it.
fn run_build(args: &BuildArgs, settings: &Settings) -> PacketResult<()> {
    let builder = PacketBuilder::new(settings.packet.clone());
    let packet = builder.build(&args.to_request())?;
    let wire = packet.to_wire()?;

    let Some(port) = args.port.as_deref() else {
        println!("{}", wire);
        return Ok(());
    };

    let baud = args.baud.unwrap_or(settings.serial.baud);
    let newline = args.newline.unwrap_or(settings.serial.newline);
    let read_seconds = args.read_seconds.unwrap_or(settings.serial.read_seconds);
    let read_for = Duration::try_from_secs_f64(read_seconds).map_err(|_| {
        PacketError::Validation {
            kind: ValidationErrorKind::InvalidParameter {
                param: "read-seconds".to_string(),
                message: format!("{} is not a non-negative number of seconds", read_seconds),
            },
        }
    })?;

    let mut transport = SerialTransport::open(
        port,
        baud,
        Duration::from_millis(settings.serial.poll_timeout_ms),
    )?;

    if !read_for.is_zero() {
        info!(port, "Waiting {:.1}s for a response", read_seconds);
    }
    let outcome = send_packet(&mut transport, &wire, newline, read_for)?;
    print!("{}", render_send(port, baud, read_seconds, &outcome));

    transport.close()?;
    info!(port, "Send complete");
    Ok(())
}

/// Console text for a completed send.
fn render_send(port: &str, baud: u32, read_seconds: f64, outcome: &SendOutcome) -> String {
    let mut out = format!("[INFO] sent -> {} @ {}:\n{}", port, baud, outcome.sent);

    if outcome.response.is_some() {
        out.push_str(&format!(
            "[INFO] waited {:.1}s for a response\n",
            read_seconds
        ));
        match outcome.response_text() {
            Some(text) => out.push_str(&format!(
                "\n[RESP] ----------------\n{}\n[RESP] ----------------\n",
                text
            )),
            None => out.push_str("[INFO] no response within the wait time.\n"),
        }
    }

    out
}

/// Verify a response against its request and print the report.
fn run_verify(args: &VerifyArgs, settings: &Settings) -> PacketResult<()> {
    let key = args.key.as_deref().unwrap_or(&settings.packet.key);
    let report = verify_response(&args.request_json, &args.response_json, key)?;
    println!("{}", report.to_pretty_json()?);
    Ok(())
}

/// Initialize logging based on settings. Logs go to stderr; stdout carries
/// packet text and reports only.
fn init_logging(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    match settings.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        "compact" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_send_without_read() {
        let outcome = SendOutcome {
            sent: "{}\r\n".to_string(),
            response: None,
        };
        assert_eq!(
            render_send("COM3", 9600, 0.0, &outcome),
            "[INFO] sent -> COM3 @ 9600:\n{}\r\n"
        );
    }

    #[test]
    fn test_render_send_with_response() {
        let outcome = SendOutcome {
            sent: "{}\n".to_string(),
            response: Some(b"{\"status\":\"ok\"}".to_vec()),
        };
        let text = render_send("/dev/ttyUSB0", 115_200, 1.5, &outcome);

        assert!(text.starts_with("[INFO] sent -> /dev/ttyUSB0 @ 115200:\n{}\n"));
        assert!(text.contains("[INFO] waited 1.5s for a response\n"));
        assert!(text.contains("[RESP] ----------------\n{\"status\":\"ok\"}\n[RESP]"));
    }

    #[test]
    fn test_render_send_no_response() {
        let outcome = SendOutcome {
            sent: "{}\n".to_string(),
            response: Some(Vec::new()),
        };
        let text = render_send("COM3", 115_200, 2.0, &outcome);
        assert!(text.ends_with("[INFO] no response within the wait time.\n"));
        assert!(!text.contains("[RESP]"));
    }
}
