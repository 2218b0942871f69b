use assert_cmd::Command;

pub fn gentags_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gentags").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
