//! Minimal prometheus registry backing `/v1/metrics`.
use once_cell::sync::Lazy;
use prometheus::{Encoder, Registry, TextEncoder};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

pub fn registry() -> &'static Registry {
    &REGISTRY
}

pub fn encode(registry: &Registry) -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
