use assert_cmd::cargo::CommandCargoExt;

pub fn unchecked_run(target: &str, args: &[&str]) -> std::process::ExitStatus {
    std::process::Command::cargo_bin(target)
        .expect("impossible to find binary")
        .args(args)
        .status()
        .expect("impossible to run binary")
}

pub fn run(target: &str, args: &[&str]) {
    let status = unchecked_run(target, args);
    assert!(status.success(), "`{}` failed {}", target, &status);
}
