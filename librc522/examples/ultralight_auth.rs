// Ultralight-C authentication with the factory default key.
//
// Usage: cargo run --example ultralight_auth --features serial -- <serial port> [key hex]

use anyhow::{Context, bail};
use librc522::prelude::*;

const DEFAULT_KEY: &str = "49454D4B41455242214E4143554F5946";

fn parse_key(text: &str) -> anyhow::Result<[u8; 16]> {
    let bytes = hex::decode(text).context("key is not hex")?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("key must be 16 bytes, got {}", b.len()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(port) = args.next() else {
        bail!("usage: ultralight_auth <serial port> [key hex]");
    };
    let key = parse_key(&args.next().unwrap_or_else(|| DEFAULT_KEY.to_string()))?;

    let link = SerialLink::open(&port).with_context(|| format!("opening {}", port))?;
    let mut reader = ReaderBuilder::new().with_link(link).build()?.initialize()?;

    println!("Waiting for a tag...");
    let tag = loop {
        match reader.scan_tag(true) {
            Ok(tag) => break tag,
            Err(e) if e.is_no_reply() => std::thread::sleep(ms(100)),
            Err(e) => return Err(e.into()),
        }
    };
    println!("Found {} (SAK {})", tag.uid, tag.sak);

    let mut ulc = reader.ultralight_c();
    match ulc.authenticate(&key) {
        Ok(()) => println!("Authentication succeeded"),
        Err(Error::AuthenticationFailed) => println!("Tag failed to prove the key"),
        Err(e) if e.is_no_reply() => println!("Tag rejected our key (no answer)"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
