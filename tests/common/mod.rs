use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// An isolated HOME holding a config file with known profiles.
pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(home.join(".els")).expect("create isolated ~/.els");

        fs::write(home.join(".els/els-cli.toml"), CONFIG_FIXTURE).expect("write config fixture");

        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("els-cli").expect("els-cli binary");
        cmd.env("HOME", &self.home)
            .env_remove("ELSCLI_PROFILE")
            .env_remove("ELSCLI_OUTPUT")
            .env_remove("ELSCLI_API_URL")
            .env_remove("ELSCLI_LOG");
        cmd
    }
}

const CONFIG_FIXTURE: &str = r#"
[profiles.default]
output = "wholeResponse"
  [profiles.default.accessKey]
  email = "me@example.com"
  id = "anID"
  secretAccessKey = "aSAC"

[profiles.throttled]
maxAPITries = 3
  [profiles.throttled.accessKey]
  email = "me@example.com"
  id = "anID"
  secretAccessKey = "aSAC"
"#;
