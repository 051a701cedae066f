//! CLI surface tests: argument handling, profile selection and body-source
//! errors that never reach the network.

use predicates::str::contains;

mod common;
use common::TestEnv;

#[test]
fn version_flag_works() {
    let env = TestEnv::new();
    env.cmd().arg("--version").assert().success();
}

#[test]
fn explicitly_named_missing_profile_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-p", "staging", "do", "get", "vendors/v1"])
        .assert()
        .failure()
        .stderr(contains("Profile not found: staging"));
}

#[test]
fn missing_default_profile_is_tolerated() {
    // An empty HOME has no config file at all; the implicit default profile
    // must not be an error. The command still fails later for want of a body.
    let env = TestEnv::new();
    std::fs::remove_file(env.home.join(".els/els-cli.toml")).unwrap();
    env.cmd()
        .args(["do", "put", "vendors/v1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("No Content Provided"));
}

#[test]
fn unrecognized_output_flag_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-o", "everything", "do", "get", "vendors/v1"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn unrecognized_output_in_config_is_rejected() {
    let env = TestEnv::new();
    std::fs::write(
        env.home.join(".els/els-cli.toml"),
        "[profiles.default]\noutput = \"everything\"\n",
    )
    .unwrap();
    env.cmd()
        .args(["do", "get", "vendors/v1"])
        .assert()
        .failure()
        .stderr(contains("Invalid output specified: everything"));
}

#[test]
fn malformed_config_toml_is_fatal() {
    let env = TestEnv::new();
    std::fs::write(env.home.join(".els/els-cli.toml"), "[profiles.default\n").unwrap();
    env.cmd()
        .args(["do", "get", "vendors/v1"])
        .assert()
        .failure()
        .stderr(contains("Invalid TOML"));
}

#[test]
fn put_without_body_source_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["vendors", "v1", "put"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("No Content Provided"));
}

#[test]
fn put_with_missing_file_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["vendors", "v1", "put", "/no/such/file.json"])
        .assert()
        .failure();
}
