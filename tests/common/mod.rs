use assert_cmd::Command;

pub fn moodmerge_cmd() -> Command {
    Command::cargo_bin("moodmerge").unwrap()
}
