use assert_cmd::Command;
use bank_core::{
    cli::SCRIPT_ENV,
    config::{Config, ConfigManager, HOME_ENV},
};
use tempfile::TempDir;

pub const BIN_NAME: &str = "bank_core_cli";

/// Script-mode command with an isolated home directory holding `config`.
pub fn script_command(config: &Config) -> (Command, TempDir) {
    let home = TempDir::new().expect("create temp home");
    ConfigManager::with_base_dir(home.path().to_path_buf())
        .save(config)
        .expect("write config");

    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env(SCRIPT_ENV, "1").env(HOME_ENV, home.path());
    (cmd, home)
}

pub fn colorless() -> Config {
    Config {
        ui_color_enabled: false,
        ..Config::default()
    }
}
