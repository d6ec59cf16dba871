use assert_cmd::Command;

pub fn itemtags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("itemtags").unwrap();
    cmd.env_remove("ITEMTAGS_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd
}
