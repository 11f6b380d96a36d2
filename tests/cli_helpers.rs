#![allow(dead_code)]

use assert_cmd::{cargo, Command};
use tempfile::TempDir;

pub const BUY_SELL_PROFIT: &str = r#"[{"operation":"buy", "unit-cost":10.00, "quantity": 10000},{"operation":"sell", "unit-cost":20.00, "quantity": 5000}]"#;

pub const BUY_SELL_LOSS: &str = r#"[{"operation":"buy", "unit-cost":20.00, "quantity": 10000},{"operation":"sell", "unit-cost":10.00, "quantity": 5000}]"#;

pub fn setup_temp_home() -> TempDir {
    TempDir::new().expect("failed to create temp home")
}

/// Command isolated from the user's config and history
pub fn base_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("capital-gains"));
    cmd.env("HOME", home.path());
    cmd.env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd.env_remove("CAPITAL_GAINS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.arg("--no-color");
    cmd
}
