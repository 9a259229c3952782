// Initial menu loaded into the store when the service starts.

use crate::modules::cafes::core::cafe::Cafe;
use anyhow::Context;
use std::fs;
use std::path::Path;

const DEFAULT_SEED: &str = include_str!("cafes.json");

pub fn default_seed() -> anyhow::Result<Vec<Cafe>> {
    parse_seed(DEFAULT_SEED)
}

pub fn load_seed(path: impl AsRef<Path>) -> anyhow::Result<Vec<Cafe>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_seed(&raw)
}

fn parse_seed(raw: &str) -> anyhow::Result<Vec<Cafe>> {
    serde_json::from_str(raw).context("invalid seed json")
}
