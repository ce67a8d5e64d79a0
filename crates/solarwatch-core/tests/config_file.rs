//! The shipped `solarwatch-config.yaml` must reproduce the built-in defaults.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use solarwatch_core::WatchConfig;

#[test]
fn shipped_config_equals_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../solarwatch-config.yaml");
    let contents = std::fs::read_to_string(path).unwrap();
    let config = WatchConfig::parse(&contents).unwrap();
    assert_eq!(config, WatchConfig::default());
}
