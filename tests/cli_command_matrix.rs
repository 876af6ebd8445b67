use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

fn run_help(dir: &TempDir, args: &[&str]) {
    let mut cmd = cargo_bin_cmd!("http-rabbits");
    cmd.current_dir(dir.path())
        .env_remove("PEXELS_API_KEY")
        .args(args)
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_cli_command_has_help_path() {
    let dir = TempDir::new().expect("temp dir");

    run_help(&dir, &[]);
    run_help(&dir, &["fetch"]);
    run_help(&dir, &["list"]);
    run_help(&dir, &["show"]);
    run_help(&dir, &["query"]);
    run_help(&dir, &["categories"]);

    // help never runs the batch
    assert!(!dir.path().join("src/data/rabbit-images.json").exists());
}
