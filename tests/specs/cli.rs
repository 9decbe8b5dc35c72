//! CLI surface specs
//!
//! Verify help, version, and argument errors.

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    Env::new()
        .ob()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("exec")
        .stdout_has("ping")
        .stdout_has("tempo");
}

#[test]
fn exec_help_describes_batch_shape() {
    Env::new().ob().args(&["exec", "--help"]).passes().stdout_has("description");
}

#[test]
fn version_flag() {
    Env::new().ob().args(&["--version"]).passes().stdout_has("ob ");
}

#[test]
fn no_subcommand_is_a_usage_error() {
    Env::new().ob().fails().stderr_has("Usage:");
}

#[test]
fn unknown_flag_exits_like_an_error_not_a_partial_batch() {
    Env::new().ob().args(&["exec", "--bogus"]).fails().stderr_has("--bogus");
}

#[test]
fn bad_config_file_is_reported() {
    let env = Env::new();
    let config = env.file("ob.toml", "prot = 1\n");
    env.ob()
        .args(&["--config", &config, "exec"])
        .stdin(r#"{"commands": [], "description": "x"}"#)
        .fails()
        .stderr_has("invalid config");
}
