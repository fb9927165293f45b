#![cfg(test)]

use crate::Unit;

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Parse a unit expression that the test expects to be valid.
pub fn unit(source: &str) -> Unit {
    Unit::parse(source).unwrap_or_else(|e| panic!("Failed to parse '{}': {}", source, e))
}
