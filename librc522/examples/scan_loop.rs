// Continuous tag scan over a serial-attached RC522.
//
// Usage: cargo run --example scan_loop --features serial -- <serial port>
//
// Every tag that answers is printed once and halted, so the next scan
// can reach the other tags in the field.

use std::thread;
use std::time::Duration;

use anyhow::{Context, bail};
use librc522::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let Some(port) = std::env::args().nth(1) else {
        bail!("usage: scan_loop <serial port>");
    };

    let link = SerialLink::open(&port).with_context(|| format!("opening {}", port))?;
    let mut reader = ReaderBuilder::new().with_link(link).build()?.initialize()?;
    println!("Reader on {}: {}", port, reader.version()?);

    loop {
        loop {
            match reader.scan_tag(false) {
                Ok(tag) => {
                    reader.halt()?;
                    println!("UID {}  ATQA {:02x?}  SAK {}", tag.uid, tag.atqa.as_bytes(), tag.sak);
                }
                Err(e) if e.is_no_reply() => break,
                Err(e) => {
                    println!("scan error: {}", e);
                    break;
                }
            }
        }
        thread::sleep(Duration::from_millis(100));
    }
}
